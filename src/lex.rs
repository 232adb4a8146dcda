//! Turns raw text into the terminal symbols the engine reads.

/// Splits `text` on whitespace.
pub fn symbols(text: &str, eof: &str) -> Vec<String> {
  terminate(text.split_whitespace().map(str::to_owned).collect(), eof)
}

/// Every character other than whitespace is a symbol of its own, so `aabb`
/// reads as `a a b b`.
pub fn chars(text: &str, eof: &str) -> Vec<String> {
  terminate(
    text.chars()
      .filter(|c| !c.is_whitespace())
      .map(String::from)
      .collect(),
    eof)
}

fn terminate(mut symbols: Vec<String>, eof: &str) -> Vec<String> {
  if symbols.last().map(String::as_str) != Some(eof) {
    symbols.push(eof.to_owned());
  }
  symbols
}
