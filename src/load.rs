//! Reads a table file.
//!
//! ```text
//! # reference grammar
//! eof $
//! prod 1 S -> A A
//! prod 3 A 1
//! action 0 a s3
//! action 1 $ acc
//! goto 0 A 2
//! ```
//!
//! A field starting with `#` starts a comment, except where a symbol is
//! expected: terminals, non-terminals and the end-marker are read as they
//! are, so `#` can be a terminal. The right-hand side of `prod ID LHS ->`
//! runs to the end of the line. Actions are written `sN`, `rN`, `acc` or
//! `err`, case insensitive.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::SplitWhitespace;
use thiserror::Error;
use lr::{Action, Production, Tables, TablesBuilder, TableError};

#[derive(Debug, Error)]
pub enum LoadError {
  #[error("cannot read {}: {}", .path.display(), .source)]
  Io {
    path: PathBuf,
    source: std::io::Error,
  },
  #[error("line {line}: {kind}")]
  Syntax {
    line: usize,
    kind: LoadErrorKind,
  },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadErrorKind {
  #[error("unknown directive `{0}`")]
  UnknownDirective(String),
  #[error("missing {0}")]
  MissingField(&'static str),
  #[error("invalid number `{0}`")]
  InvalidNumber(String),
  #[error("invalid action `{0}`")]
  InvalidAction(String),
  #[error("unexpected `{0}`")]
  ExtraField(String),
  #[error(transparent)]
  Table(#[from] TableError),
}

pub fn load(path: impl AsRef<Path>) -> Result<Tables, LoadError> {
  let path = path.as_ref();
  let text = dunce::canonicalize(path)
    .and_then(|path| fs::read_to_string(path))
    .map_err(|source| LoadError::Io {
      path: path.to_owned(),
      source,
    })?;

  parse(&text)
}

pub fn parse(text: &str) -> Result<Tables, LoadError> {
  let mut builder = TablesBuilder::new();

  for (i, line) in text.lines().enumerate() {
    parse_line(&mut builder, line)
      .map_err(|kind| LoadError::Syntax { line: i + 1, kind })?;
  }

  let tables = builder.build();
  log::debug!(
    "loaded {} actions, {} gotos, {} productions",
    tables.action_table().len(),
    tables.goto_table().len(),
    tables.productions().count());

  Ok(tables)
}

fn parse_line(
  builder: &mut TablesBuilder,
  line: &str,
) -> Result<(), LoadErrorKind> {
  let mut fields = Fields {
    inner: line.split_whitespace(),
    comment: false,
  };

  let directive = match fields.next() {
    Some(directive) => directive,
    None => return Ok(()),
  };

  match directive {
    "eof" => {
      builder.eof(fields.symbol("end-marker")?);
    }
    "prod" => {
      let id = number(fields.expect("production id")?)?;
      let lhs = fields.symbol("left-hand side")?;
      let prod = match fields.expect("`->` or right-hand side length")? {
        "->" => Production::with_rhs(lhs, fields.rest()),
        len => Production::new(lhs, number(len)? as usize),
      };
      builder.production(id, prod)?;
    }
    "action" => {
      let state = number(fields.expect("state")?)?;
      let terminal = fields.symbol("terminal")?;
      let action = action(fields.expect("action")?)?;
      builder.action(state, terminal, action)?;
    }
    "goto" => {
      let state = number(fields.expect("state")?)?;
      let nt = fields.symbol("non-terminal")?;
      let next = number(fields.expect("goto state")?)?;
      builder.goto(state, nt, next)?;
    }
    _ => return Err(LoadErrorKind::UnknownDirective(directive.to_owned())),
  }

  fields.finish()
}

/// The fields of a line. Iterating stops at the first comment.
struct Fields<'a> {
  inner: SplitWhitespace<'a>,
  comment: bool,
}

impl<'a> Iterator for Fields<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<&'a str> {
    if self.comment {
      return None;
    }

    match self.inner.next() {
      Some(field) if !field.starts_with('#') => Some(field),
      _ => {
        self.comment = true;
        None
      }
    }
  }
}

impl<'a> Fields<'a> {
  fn expect(&mut self, what: &'static str) -> Result<&'a str, LoadErrorKind> {
    self.next().ok_or(LoadErrorKind::MissingField(what))
  }

  /// A field read as a symbol, even if it starts with `#`.
  fn symbol(&mut self, what: &'static str) -> Result<&'a str, LoadErrorKind> {
    if self.comment {
      return Err(LoadErrorKind::MissingField(what));
    }
    self.inner.next().ok_or(LoadErrorKind::MissingField(what))
  }

  /// All remaining fields, read as symbols.
  fn rest(&mut self) -> Vec<&'a str> {
    if self.comment {
      return vec![];
    }
    self.inner.by_ref().collect()
  }

  fn finish(mut self) -> Result<(), LoadErrorKind> {
    match self.next() {
      Some(field) => Err(LoadErrorKind::ExtraField(field.to_owned())),
      None => Ok(()),
    }
  }
}

fn number(field: &str) -> Result<u32, LoadErrorKind> {
  field.parse()
    .map_err(|_| LoadErrorKind::InvalidNumber(field.to_owned()))
}

fn action(field: &str) -> Result<Action, LoadErrorKind> {
  let lower = field.to_ascii_lowercase();
  let invalid = || LoadErrorKind::InvalidAction(field.to_owned());

  match lower.as_str() {
    "acc" | "accept" => Ok(Action::Accept),
    "err" | "error" => Ok(Action::Error),
    _ if lower.starts_with('s') => {
      lower[1..].parse().map(Action::Shift).map_err(|_| invalid())
    }
    _ if lower.starts_with('r') => {
      lower[1..].parse().map(Action::Reduce).map_err(|_| invalid())
    }
    _ => Err(invalid()),
  }
}
