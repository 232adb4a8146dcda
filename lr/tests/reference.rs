use lr::{parse, Parser, Event, ParseError, Step};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;

mod fixture;

fn shift(symbol: &str, state: u32) -> Event {
  Event::Shift { symbol: symbol.to_owned(), state }
}

fn reduce(prod: u32, state: u32) -> Event {
  Event::Reduce { prod, state }
}

#[test]
fn aabb() {
  let tables = fixture::tables();

  let trace = parse(&tables, &fixture::input("a a b b $")).unwrap();

  assert_eq!(trace.events, vec![
    shift("a", 3),
    shift("a", 3),
    shift("b", 4),
    reduce(3, 6),
    reduce(2, 6),
    reduce(2, 2),
    shift("b", 4),
    reduce(3, 5),
    reduce(1, 1),
    Event::Accept,
  ]);
  assert_eq!(trace.stack, vec![0, 1]);
  assert_eq!(trace.cursor, 4);
}

#[test]
fn unexpected_end_marker() {
  let tables = fixture::tables();

  let result = parse(&tables, &fixture::input("a $"));

  assert_eq!(result, Err(ParseError::UnexpectedSymbol {
    state: 3,
    symbol: "$".to_owned(),
    position: 1,
  }));
}

#[test]
fn unknown_terminal() {
  let tables = fixture::tables();
  let input = fixture::input("c $");
  let mut parser = Parser::new(&tables, &input).unwrap();

  let err = parser.step().unwrap_err();

  assert_eq!(err, ParseError::UnexpectedSymbol {
    state: 0,
    symbol: "c".to_owned(),
    position: 0,
  });
  assert!(err.is_input_error());
  assert!(parser.events().is_empty());
  assert_eq!(parser.stack(), &[0]);
}

/// `a^n b a^m b $`
fn sentence(n: usize, m: usize) -> Vec<&'static str> {
  let mut input = vec!["a"; n];
  input.push("b");
  input.extend(vec!["a"; m]);
  input.push("b");
  input.push("$");
  input
}

#[test]
fn accepts_language() {
  let tables = fixture::tables();

  for n in 0..5 {
    for m in 0..5 {
      let input = sentence(n, m);
      let trace = parse(&tables, &input).unwrap();

      let shifts = trace.events.iter()
        .filter(|e| matches!(e, Event::Shift { .. }))
        .count();
      let reductions = trace.events.iter()
        .filter(|e| matches!(e, Event::Reduce { .. }))
        .count();

      assert_eq!(shifts, n + m + 2, "{:?}", input);
      // one A -> b and one A -> a A per `a` on each side, then S -> A A
      assert_eq!(reductions, n + m + 3, "{:?}", input);
      assert_eq!(trace.events.last(), Some(&Event::Accept));
      assert_eq!(trace.cursor, input.len() - 1);
      assert_eq!(trace.stack, vec![0, 1]);
    }
  }
}

#[test]
fn rejects_non_sentences() {
  let tables = fixture::tables();

  let cases = [
    ("$", 0),
    ("a $", 1),
    ("b $", 1),
    ("a a $", 2),
    ("b b b $", 2),
    ("a b a $", 3),
    ("b a $", 2),
    ("b b a b $", 2),
    ("c $", 0),
  ];

  for &(input, position) in &cases {
    match parse(&tables, &fixture::input(input)) {
      Err(ParseError::UnexpectedSymbol { position: p, .. }) => {
        assert_eq!(p, position, "{}", input);
      }
      other => panic!("{}: expected UnexpectedSymbol, got {:?}", input, other),
    }
  }
}

#[test]
fn stack_discipline() {
  let tables = fixture::tables();
  let input = sentence(3, 2);
  let mut parser = Parser::new(&tables, &input).unwrap();

  loop {
    let depth = parser.stack().len() as isize;
    let step = parser.step().unwrap();
    let new_depth = parser.stack().len() as isize;

    match parser.events().last().unwrap() {
      Event::Shift { .. } => assert_eq!(new_depth - depth, 1),
      Event::Reduce { prod, state } => {
        let rhs_len = tables.production(*prod).unwrap().rhs_len() as isize;
        assert_eq!(new_depth - depth, 1 - rhs_len);
        assert_eq!(parser.stack().last(), Some(state));
      }
      Event::Accept => assert_eq!(new_depth, depth),
    }

    if step == Step::Accepted {
      break;
    }
  }
}

#[test]
fn deterministic() {
  let tables = fixture::tables();
  let input = sentence(2, 3);

  let first = parse(&tables, &input);
  let second = parse(&tables, &input);

  assert_eq!(first, second);
  assert!(first.is_ok());

  let bad = fixture::input("a b a $");
  assert_eq!(parse(&tables, &bad), parse(&tables, &bad));
}

#[test]
fn tables_are_not_mutated() {
  let tables = Arc::new(fixture::tables());
  let before = (*tables).clone();

  let handles = (0..4).map(|i| {
    let tables = Arc::clone(&tables);
    thread::spawn(move || {
      let input = sentence(i, 3 - i);
      parse(&tables, &input).map(|trace| trace.events.len())
    })
  }).collect::<Vec<_>>();

  for handle in handles {
    assert!(handle.join().unwrap().is_ok());
  }
  assert!(parse(&tables, &fixture::input("a $")).is_err());

  assert_eq!(*tables, before);
}
