use itertools::Itertools;
use lr::{Event, ParseError, State, Tables};
use std::fmt::Write;

/// Dumps the ACTION and GOTO tables, then the productions.
pub fn tables(tables: &Tables) -> String {
  let mut buf = String::new();

  writeln!(&mut buf, "ACTION TABLE:").unwrap();
  for (state, terminal, action) in tables.action_table().iter() {
    writeln!(&mut buf,
      "State {}, Symbol '{}' -> {}",
      state,
      terminal,
      action,
    ).unwrap();
  }

  writeln!(&mut buf, "\nGOTO TABLE:").unwrap();
  for (state, nt, next) in tables.goto_table().iter() {
    writeln!(&mut buf,
      "State {}, Non-terminal '{}' -> State {}",
      state,
      nt,
      next,
    ).unwrap();
  }

  writeln!(&mut buf, "\nPRODUCTIONS:").unwrap();
  for (id, prod) in tables.productions() {
    writeln!(&mut buf, "{}: {}", id, prod).unwrap();
  }

  buf
}

pub fn event(tables: &Tables, event: &Event) -> String {
  match event {
    Event::Shift { symbol, state } => {
      format!("Shift: {} -> State {}", symbol, state)
    }
    Event::Reduce { prod, .. } => {
      match tables.production(*prod) {
        Some(production) => format!("Reduced using {}", production),
        None => format!("Reduced using production {}", prod),
      }
    }
    Event::Accept => "Input is accepted.".to_owned(),
  }
}

pub fn trace(tables: &Tables, events: &[Event]) -> String {
  let mut buf = String::new();

  for e in events {
    writeln!(&mut buf, "{}", event(tables, e)).unwrap();
  }

  buf
}

/// `0 3 3 4`, bottom first.
pub fn stack(stack: &[State]) -> String {
  stack.iter().join(" ")
}

pub fn error(err: &ParseError) -> String {
  match err {
    ParseError::UnexpectedSymbol { state, symbol, position } => {
      format!(
        "input error: no action for state {} and symbol `{}` at position {}",
        state,
        symbol,
        position)
    }
    ParseError::MissingEndMarker { .. } | ParseError::Finished => {
      format!("usage error: {}", err)
    }
    ParseError::Reduction(_) | ParseError::ShiftPastEnd { .. } => {
      format!("table error: {}", err)
    }
  }
}
