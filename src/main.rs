use std::env;
use std::process;
use getopts::Options;
use lr::{Parser, Step, Tables};
use slrparse::{lex, load, report};

const ACCEPTED: i32 = 0;
const REJECTED: i32 = 1;
const BAD_TABLES: i32 = 2;
const STEP_LIMIT: i32 = 3;

fn main() {
  env_logger::init();

  let args = env::args().collect::<Vec<_>>();
  let prog = args[0].clone();
  let mut opts = Options::new();
  opts.optflag("c", "chars",
    "Read every non-whitespace character of the input as one symbol");
  opts.optflag("p", "print-tables", "Print the tables before parsing");
  opts.optopt("n", "max-steps",
    "Give up after N actions. Unbounded by default",
    "N");
  opts.optflag("h", "help", "Print this message");

  let matches = match opts.parse(&args[1..]) {
    Ok(m) => m,
    Err(err) => {
      eprintln!("{}", err);
      process::exit(BAD_TABLES);
    }
  };

  if matches.opt_present("h") {
    print_usage(prog, opts);
    return;
  }

  let max_steps = match matches.opt_str("n").map(|n| n.parse::<usize>()).transpose() {
    Ok(n) => n,
    Err(err) => {
      eprintln!("invalid --max-steps: {}", err);
      process::exit(BAD_TABLES);
    }
  };

  let path = if let Some(path) = matches.free.first() {
    path.clone()
  } else {
    print_usage(prog, opts);
    process::exit(BAD_TABLES);
  };

  let tables = match load::load(&path) {
    Ok(tables) => tables,
    Err(err) => {
      eprintln!("{}", err);
      process::exit(BAD_TABLES);
    }
  };

  if matches.opt_present("p") {
    println!("{}", report::tables(&tables));
  }

  let text = matches.free[1..].join(" ");
  let input = if matches.opt_present("c") {
    lex::chars(&text, tables.eof())
  } else {
    lex::symbols(&text, tables.eof())
  };

  process::exit(run(&tables, &input, max_steps));
}

fn run(tables: &Tables, input: &[String], max_steps: Option<usize>) -> i32 {
  log::info!("parsing {} symbols", input.len());

  let mut parser = match Parser::new(tables, input) {
    Ok(parser) => parser,
    Err(err) => {
      eprintln!("{}", report::error(&err));
      return BAD_TABLES;
    }
  };

  let mut steps = 0;
  let result = loop {
    if max_steps.map_or(false, |max| steps >= max) {
      print!("{}", report::trace(tables, parser.events()));
      eprintln!("gave up after {} steps", steps);
      return STEP_LIMIT;
    }

    let result = parser.step();
    steps += 1;
    log::trace!("step {}: stack {}", steps, report::stack(parser.stack()));

    match result {
      Ok(Step::Running) => {}
      Ok(Step::Accepted) => break Ok(()),
      Err(err) => break Err(err),
    }
  };

  print!("{}", report::trace(tables, parser.events()));

  match result {
    Ok(()) => ACCEPTED,
    Err(err) => {
      eprintln!("{}", report::error(&err));
      if err.is_input_error() {
        REJECTED
      } else {
        BAD_TABLES
      }
    }
  }
}

fn print_usage(prog: String, opts: Options) {
  let brief = format!("Usage: {} [options] TABLES [SYMBOL...]", prog);
  print!("{}", opts.usage(&brief));
}
