//! Drives the `lr` engine from table files and plain text input.

pub mod load;
pub mod lex;
pub mod report;

pub use lr;
