use crate::{Tables, Action, State, ProdId, ParseError, START_STATE};
use crate::reduce::reduce;

/// One decision taken by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
  /// `symbol` was consumed and `state` pushed.
  Shift {
    symbol: String,
    state: State,
  },
  /// `prod` was reduced and the goto state `state` pushed.
  Reduce {
    prod: ProdId,
    state: State,
  },
  Accept,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTrace {
  pub events: Vec<Event>,
  /// the stack at acceptance, bottom first.
  pub stack: Vec<State>,
  /// position of the end-marker that was accepted on.
  pub cursor: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
  Running,
  Accepted,
}

/// Runs `input` through the shift-reduce loop until it is accepted or
/// rejected.
///
/// `input` must end with the end-marker of `tables`. The loop is not bounded;
/// use [`Parser::step`] to put a limit on it.
pub fn parse<S: AsRef<str>>(
  tables: &Tables,
  input: &[S],
) -> Result<ParseTrace, ParseError> {
  Parser::new(tables, input)?.run()
}

/// Step-wise driver. Owns the state stack and the input cursor of a single
/// parse run; the tables are only borrowed.
pub struct Parser<'a, S> {
  tables: &'a Tables,
  input: &'a [S],
  stack: Vec<State>,
  cursor: usize,
  events: Vec<Event>,
  finished: bool,
}

impl<'a, S: AsRef<str>> Parser<'a, S> {
  pub fn new(tables: &'a Tables, input: &'a [S]) -> Result<Self, ParseError> {
    match input.last() {
      Some(last) if last.as_ref() == tables.eof() => {}
      _ => {
        return Err(ParseError::MissingEndMarker {
          eof: tables.eof().to_owned(),
        });
      }
    }

    Ok(Self {
      tables,
      input,
      stack: vec![START_STATE],
      cursor: 0,
      events: vec![],
      finished: false,
    })
  }

  /// Looks up and applies a single action.
  ///
  /// Once a step has returned an error or [`Step::Accepted`], every further
  /// call returns [`ParseError::Finished`].
  pub fn step(&mut self) -> Result<Step, ParseError> {
    if self.finished {
      return Err(ParseError::Finished);
    }

    let result = self.apply();
    if result != Ok(Step::Running) {
      self.finished = true;
    }
    result
  }

  pub fn run(mut self) -> Result<ParseTrace, ParseError> {
    while self.step()? == Step::Running {}
    Ok(self.finish())
  }

  fn apply(&mut self) -> Result<Step, ParseError> {
    let input = self.input;
    let state = self.stack[self.stack.len() - 1];
    let symbol = match input.get(self.cursor) {
      Some(symbol) => symbol.as_ref(),
      None => return Err(ParseError::ShiftPastEnd { state }),
    };

    match self.tables.action(state, symbol) {
      Some(Action::Shift(next)) => {
        self.stack.push(next);
        self.cursor += 1;
        self.events.push(Event::Shift {
          symbol: symbol.to_owned(),
          state: next,
        });
        Ok(Step::Running)
      }
      Some(Action::Reduce(prod)) => {
        let next = reduce(self.tables, &mut self.stack, prod)?;
        self.stack.push(next);
        self.events.push(Event::Reduce {
          prod,
          state: next,
        });
        Ok(Step::Running)
      }
      Some(Action::Accept) => {
        self.events.push(Event::Accept);
        Ok(Step::Accepted)
      }
      Some(Action::Error) | None => {
        Err(ParseError::UnexpectedSymbol {
          state,
          symbol: symbol.to_owned(),
          position: self.cursor,
        })
      }
    }
  }

  pub fn stack(&self) -> &[State] {
    &self.stack
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn events(&self) -> &[Event] {
    &self.events
  }

  pub fn is_finished(&self) -> bool {
    self.finished
  }

  pub fn finish(self) -> ParseTrace {
    ParseTrace {
      events: self.events,
      stack: self.stack,
      cursor: self.cursor,
    }
  }
}
