use thiserror::Error;
use crate::{State, ProdId, Action};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  /// No action for the current state and lookahead: the input is not in the
  /// language.
  #[error("unexpected symbol `{symbol}` at position {position} in state {state}")]
  UnexpectedSymbol {
    state: State,
    symbol: String,
    position: usize,
  },
  #[error(transparent)]
  Reduction(#[from] ReductionError),
  #[error("input does not end with the end-marker `{eof}`")]
  MissingEndMarker {
    eof: String,
  },
  /// The tables shifted the end-marker and asked for more input.
  #[error("state {state} was entered by shifting past the end of the input")]
  ShiftPastEnd {
    state: State,
  },
  #[error("the parse run has already finished")]
  Finished,
}

impl ParseError {
  /// `true` if the input is to blame, `false` if the tables (or the caller)
  /// are.
  pub fn is_input_error(&self) -> bool {
    match self {
      Self::UnexpectedSymbol { .. } => true,
      _ => false,
    }
  }
}

/// Defects of the tables detected while reducing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReductionError {
  #[error("no goto entry for state {exposed_state} and non-terminal `{non_terminal}`")]
  MissingGoto {
    exposed_state: State,
    non_terminal: String,
  },
  #[error("production {prod} pops {rhs_len} states but the stack holds only {depth}")]
  StackUnderflow {
    prod: ProdId,
    rhs_len: usize,
    depth: usize,
  },
  #[error("reduce by unknown production {prod}")]
  UnknownProduction {
    prod: ProdId,
  },
}

/// Determinism violations found while building the tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
  #[error("conflicting actions {old} and {new} for state {state} and terminal `{terminal}`")]
  ActionConflict {
    state: State,
    terminal: String,
    old: Action,
    new: Action,
  },
  #[error("conflicting goto states {old} and {new} for state {state} and non-terminal `{non_terminal}`")]
  GotoConflict {
    state: State,
    non_terminal: String,
    old: State,
    new: State,
  },
  #[error("production {prod} is defined twice")]
  DuplicateProduction {
    prod: ProdId,
  },
}
