//! SLR tables of the grammar
//!
//! ```text
//! S' = S
//! S  = A A      (1)
//! A  = a A      (2)
//!    | b        (3)
//! ```
#![allow(dead_code)]

use lr::{Action, Production, ProdId, State, Tables, TablesBuilder};

pub static ACTIONS: &[(State, &str, Action)] = &[
  (0, "a", Action::Shift(3)),
  (0, "b", Action::Shift(4)),
  (1, "$", Action::Accept),
  (2, "a", Action::Shift(3)),
  (2, "b", Action::Shift(4)),
  (3, "a", Action::Shift(3)),
  (3, "b", Action::Shift(4)),
  (4, "a", Action::Reduce(3)),
  (4, "b", Action::Reduce(3)),
  (4, "$", Action::Reduce(3)),
  (5, "$", Action::Reduce(1)),
  (6, "a", Action::Reduce(2)),
  (6, "b", Action::Reduce(2)),
  (6, "$", Action::Reduce(2)),
];

pub static GOTOS: &[(State, &str, State)] = &[
  (0, "S", 1),
  (0, "A", 2),
  (2, "A", 5),
  (3, "A", 6),
];

pub fn productions() -> Vec<(ProdId, Production)> {
  vec![
    (1, Production::with_rhs("S", vec!["A", "A"])),
    (2, Production::with_rhs("A", vec!["a", "A"])),
    (3, Production::with_rhs("A", vec!["b"])),
  ]
}

pub fn tables() -> Tables {
  tables_with(ACTIONS, GOTOS, productions())
}

pub fn tables_with(
  actions: &[(State, &str, Action)],
  gotos: &[(State, &str, State)],
  prods: Vec<(ProdId, Production)>,
) -> Tables {
  let mut builder = TablesBuilder::new();
  for &(state, terminal, action) in actions {
    builder.action(state, terminal, action).unwrap();
  }
  for &(state, nt, next) in gotos {
    builder.goto(state, nt, next).unwrap();
  }
  for (id, prod) in prods {
    builder.production(id, prod).unwrap();
  }
  builder.build()
}

/// splits `input` on whitespace.
pub fn input(input: &str) -> Vec<&str> {
  input.split_whitespace().collect()
}
