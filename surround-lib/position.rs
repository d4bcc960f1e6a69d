use std::{
  fmt,
  num::NonZeroUsize,
};

/// A row of the buffer.
///
/// Absolute rows are 1-based line numbers, as hosts report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
  /// Whatever row the host considers active when the call is made.
  Current,
  Absolute(NonZeroUsize),
}

impl fmt::Display for Row {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Current => f.write_str("."),
      Self::Absolute(line) => write!(f, "{line}"),
    }
  }
}

/// A char in the buffer: a row and a 0-based char offset into that row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
  pub row: Row,
  pub col: usize,
}

impl Position {
  pub const fn at(line: NonZeroUsize, col: usize) -> Self {
    Self {
      row: Row::Absolute(line),
      col,
    }
  }

  /// The position `n` columns further along the same row.
  #[must_use]
  pub const fn offset(self, n: usize) -> Self {
    Self {
      row: self.row,
      col: self.col + n,
    }
  }
}

impl fmt::Display for Position {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.row, self.col)
  }
}

/// Cursor as reported by the host: 1-based row, 1-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
  pub row: NonZeroUsize,
  pub col: usize,
}

impl Cursor {
  pub const fn new(row: NonZeroUsize, col: usize) -> Self {
    Self { row, col }
  }

  /// The 0-based char offset of the cursor, `None` for column 0.
  pub const fn char_col(&self) -> Option<usize> {
    self.col.checked_sub(1)
  }
}
