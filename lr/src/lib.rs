//! Table-driven SLR parse engine.
//!
//! The tables are built elsewhere (see [`TablesBuilder`]) and are only read
//! here. [`parse`] runs the shift-reduce loop to completion, [`Parser`] runs
//! it one action at a time.

pub mod tables;
pub mod engine;
pub mod reduce;
mod error;

pub use tables::{Action, Production, ActionTable, GotoTable, Tables, TablesBuilder};
pub use engine::{parse, Parser, ParseTrace, Event, Step};
pub use reduce::reduce;
pub use error::{ParseError, ReductionError, TableError};

pub type Map<K, V> = indexmap::IndexMap<K, V, fnv::FnvBuildHasher>;

/// A node of the SLR automaton.
pub type State = u32;

/// Stable production identifier.
pub type ProdId = u32;

/// The state every parse run starts from.
pub const START_STATE: State = 0;

/// The default end-marker terminal.
pub const EOF: &str = "$";
