//! The fixed catalog of delimiter pairs.
//!
//! Lookup is by *opening* character only. Quote-like pairs open and close
//! with the same character, so callers must not tell the two ends apart by
//! identity.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unsupported character '{0}'")]
pub struct UnsupportedCharacter(pub char);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
  pub open:  char,
  pub close: char,
}

static PAIRS: &[Pair] = &[
  Pair::new('(', ')'),
  Pair::new('[', ']'),
  Pair::new('{', '}'),
  Pair::new('<', '>'),
  Pair::new('\'', '\''),
  Pair::new('"', '"'),
  Pair::new('`', '`'),
];

impl Pair {
  const fn new(open: char, close: char) -> Self {
    Self { open, close }
  }

  /// Every supported pair, in catalog order.
  pub fn all() -> &'static [Pair] {
    PAIRS
  }

  pub fn lookup(open: char) -> Result<Self, UnsupportedCharacter> {
    PAIRS
      .iter()
      .find(|pair| pair.open == open)
      .copied()
      .ok_or(UnsupportedCharacter(open))
  }
}
