use std::fmt;
use crate::{Map, State, ProdId, TableError, EOF};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
  Shift(State),
  Reduce(ProdId),
  Accept,
  /// Explicit error entry. Looked up the same way as a missing entry.
  Error,
}

impl fmt::Display for Action {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Shift(state) => write!(f, "s{}", state),
      Self::Reduce(prod) => write!(f, "r{}", prod),
      Self::Accept => f.write_str("acc"),
      Self::Error => f.write_str("err"),
    }
  }
}

/// What the engine needs to know about a production: how many states to pop
/// and which non-terminal to go to.
///
/// When the right-hand side symbols are kept, `rhs_len` is always their count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
  lhs: String,
  rhs_len: usize,
  /// right-hand side symbols, only kept for display.
  rhs: Option<Vec<String>>,
}

impl Production {
  pub fn new(lhs: impl Into<String>, rhs_len: usize) -> Self {
    Self {
      lhs: lhs.into(),
      rhs_len,
      rhs: None,
    }
  }

  pub fn with_rhs<I, S>(lhs: impl Into<String>, rhs: I) -> Self
    where I: IntoIterator<Item = S>,
          S: Into<String>,
  {
    let rhs = rhs.into_iter().map(Into::into).collect::<Vec<_>>();
    Self {
      lhs: lhs.into(),
      rhs_len: rhs.len(),
      rhs: Some(rhs),
    }
  }

  pub fn lhs(&self) -> &str {
    &self.lhs
  }

  pub fn rhs_len(&self) -> usize {
    self.rhs_len
  }

  pub fn rhs(&self) -> Option<&[String]> {
    self.rhs.as_deref()
  }
}

impl fmt::Display for Production {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{} ->", self.lhs)?;
    match &self.rhs {
      Some(rhs) if rhs.is_empty() => f.write_str(" ()"),
      Some(rhs) => {
        for sym in rhs {
          write!(f, " {}", sym)?;
        }
        Ok(())
      }
      None => write!(f, " <{} symbols>", self.rhs_len),
    }
  }
}

/// state -> terminal -> action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTable {
  rows: Map<State, Map<String, Action>>,
}

impl ActionTable {
  pub fn get(&self, state: State, terminal: &str) -> Option<Action> {
    self.rows.get(&state)?.get(terminal).copied()
  }

  pub fn iter(&self) -> impl Iterator<Item = (State, &str, Action)> + '_ {
    self.rows.iter().flat_map(|(&state, row)| {
      row.iter().map(move |(terminal, &action)| (state, terminal.as_str(), action))
    })
  }

  pub fn len(&self) -> usize {
    self.rows.values().map(|row| row.len()).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  fn insert(
    &mut self,
    state: State,
    terminal: String,
    action: Action,
  ) -> Result<(), TableError> {
    let row = self.rows.entry(state).or_insert_with(Map::default);
    if let Some(&old) = row.get(&terminal) {
      if old != action {
        return Err(TableError::ActionConflict {
          state,
          terminal,
          old,
          new: action,
        });
      }
      return Ok(());
    }

    row.insert(terminal, action);
    Ok(())
  }
}

/// state -> non-terminal -> next state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GotoTable {
  rows: Map<State, Map<String, State>>,
}

impl GotoTable {
  pub fn get(&self, state: State, non_terminal: &str) -> Option<State> {
    self.rows.get(&state)?.get(non_terminal).copied()
  }

  pub fn iter(&self) -> impl Iterator<Item = (State, &str, State)> + '_ {
    self.rows.iter().flat_map(|(&state, row)| {
      row.iter().map(move |(nt, &next)| (state, nt.as_str(), next))
    })
  }

  pub fn len(&self) -> usize {
    self.rows.values().map(|row| row.len()).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  fn insert(
    &mut self,
    state: State,
    non_terminal: String,
    next: State,
  ) -> Result<(), TableError> {
    let row = self.rows.entry(state).or_insert_with(Map::default);
    if let Some(&old) = row.get(&non_terminal) {
      if old != next {
        return Err(TableError::GotoConflict {
          state,
          non_terminal,
          old,
          new: next,
        });
      }
      return Ok(());
    }

    row.insert(non_terminal, next);
    Ok(())
  }
}

/// Frozen ACTION/GOTO tables plus the production metadata the engine needs.
///
/// There are no mutating methods, so a `&Tables` can be shared by any number
/// of parse runs, on any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
  action: ActionTable,
  goto: GotoTable,
  prods: Map<ProdId, Production>,
  eof: String,
}

impl Tables {
  pub fn action(&self, state: State, terminal: &str) -> Option<Action> {
    self.action.get(state, terminal)
  }

  pub fn goto(&self, state: State, non_terminal: &str) -> Option<State> {
    self.goto.get(state, non_terminal)
  }

  pub fn production(&self, prod: ProdId) -> Option<&Production> {
    self.prods.get(&prod)
  }

  pub fn productions(&self) -> impl Iterator<Item = (ProdId, &Production)> + '_ {
    self.prods.iter().map(|(&id, prod)| (id, prod))
  }

  pub fn action_table(&self) -> &ActionTable {
    &self.action
  }

  pub fn goto_table(&self) -> &GotoTable {
    &self.goto
  }

  /// The terminal every input must end with.
  pub fn eof(&self) -> &str {
    &self.eof
  }
}

pub struct TablesBuilder {
  action: ActionTable,
  goto: GotoTable,
  prods: Map<ProdId, Production>,
  eof: String,
}

impl Default for TablesBuilder {
  fn default() -> Self {
    Self::new()
  }
}

impl TablesBuilder {
  pub fn new() -> Self {
    TablesBuilder {
      action: ActionTable::default(),
      goto: GotoTable::default(),
      prods: Map::default(),
      eof: EOF.to_owned(),
    }
  }

  pub fn eof(&mut self, eof: impl Into<String>) -> &mut Self {
    self.eof = eof.into();
    self
  }

  pub fn action(
    &mut self,
    state: State,
    terminal: impl Into<String>,
    action: Action,
  ) -> Result<&mut Self, TableError> {
    self.action.insert(state, terminal.into(), action)?;
    Ok(self)
  }

  pub fn goto(
    &mut self,
    state: State,
    non_terminal: impl Into<String>,
    next: State,
  ) -> Result<&mut Self, TableError> {
    self.goto.insert(state, non_terminal.into(), next)?;
    Ok(self)
  }

  pub fn production(
    &mut self,
    prod: ProdId,
    production: Production,
  ) -> Result<&mut Self, TableError> {
    if self.prods.contains_key(&prod) {
      return Err(TableError::DuplicateProduction { prod });
    }
    self.prods.insert(prod, production);
    Ok(self)
  }

  pub fn build(self) -> Tables {
    Tables {
      action: self.action,
      goto: self.goto,
      prods: self.prods,
      eof: self.eof,
    }
  }
}
