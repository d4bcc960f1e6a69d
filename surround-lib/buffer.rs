//! Line-oriented access to the host's text.
//!
//! The engine never touches text directly. Everything goes through
//! [`Buffer`], one call at a time, so a host can back it with whatever it
//! has: an editor RPC channel, a file, or the in-memory [`TextBuffer`].
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use surround_lib::{
//!   buffer::{
//!     Buffer,
//!     TextBuffer,
//!   },
//!   position::{
//!     Cursor,
//!     Row,
//!   },
//! };
//!
//! let mut buffer = TextBuffer::from("fn main() {\n}\n");
//! buffer.set_cursor(Cursor::new(NonZeroUsize::MIN, 11));
//! assert_eq!(buffer.line(Row::Current).unwrap(), "fn main() {");
//! let second = NonZeroUsize::new(2).unwrap();
//! buffer.set_line(Row::Absolute(second), "  }").unwrap();
//! assert_eq!(buffer.text().to_string(), "fn main() {\n  }\n");
//! ```

use std::{
  borrow::Cow,
  num::NonZeroUsize,
};

use ropey::Rope;
use surround_core::chars::{
  char_is_line_ending,
  line_is_blank,
};
use thiserror::Error;

use crate::position::{
  Cursor,
  Row,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
  #[error("row {row} is out of bounds (buffer has {len} lines)")]
  RowOutOfBounds { row: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, BufferError>;

pub trait Buffer {
  /// Full text of `row`, without its line ending.
  fn line(&self, row: Row) -> Result<String>;

  /// Replaces the full text of `row`.
  fn set_line(&mut self, row: Row, text: &str) -> Result<()>;

  fn cursor(&self) -> Result<Cursor>;

  /// The first row at or after `row` holding a non-whitespace char.
  fn next_non_blank(&self, row: NonZeroUsize) -> Result<Option<NonZeroUsize>>;

  /// Pins [`Row::Current`] down to the line number it designates right now.
  fn resolve(&self, row: Row) -> Result<NonZeroUsize> {
    match row {
      Row::Absolute(line) => Ok(line),
      Row::Current => Ok(self.cursor()?.row),
    }
  }
}

impl<B: Buffer + ?Sized> Buffer for &mut B {
  fn line(&self, row: Row) -> Result<String> {
    (**self).line(row)
  }

  fn set_line(&mut self, row: Row, text: &str) -> Result<()> {
    (**self).set_line(row, text)
  }

  fn cursor(&self) -> Result<Cursor> {
    (**self).cursor()
  }

  fn next_non_blank(&self, row: NonZeroUsize) -> Result<Option<NonZeroUsize>> {
    (**self).next_non_blank(row)
  }

  fn resolve(&self, row: Row) -> Result<NonZeroUsize> {
    (**self).resolve(row)
  }
}

/// A [`Buffer`] over a [`Rope`], with its own cursor.
///
/// A line ending at the very end of the text terminates the last line rather
/// than starting a new one, so `"a\n"` has one line.
#[derive(Debug, Clone)]
pub struct TextBuffer {
  text:   Rope,
  cursor: Cursor,
}

impl TextBuffer {
  pub fn new(text: Rope) -> Self {
    Self {
      text,
      cursor: Cursor::new(NonZeroUsize::MIN, 1),
    }
  }

  pub fn text(&self) -> &Rope {
    &self.text
  }

  pub fn set_cursor(&mut self, cursor: Cursor) {
    self.cursor = cursor;
  }

  #[must_use]
  pub fn with_cursor(mut self, cursor: Cursor) -> Self {
    self.set_cursor(cursor);
    self
  }

  pub fn len_lines(&self) -> usize {
    let len_lines = self.text.len_lines();
    let len_chars = self.text.len_chars();
    if len_chars > 0 && char_is_line_ending(self.text.char(len_chars - 1)) {
      len_lines - 1
    } else {
      len_lines
    }
  }

  fn line_idx(&self, row: Row) -> Result<usize> {
    let line = self.resolve(row)?.get();
    let len = self.len_lines();
    if line > len {
      return Err(BufferError::RowOutOfBounds { row: line, len });
    }
    Ok(line - 1)
  }

  /// Char range of the line's content, line ending excluded.
  fn content_range(&self, line_idx: usize) -> (usize, usize) {
    let start = self.text.line_to_char(line_idx);
    let line = self.text.line(line_idx);
    let mut end = start + line.len_chars();

    if end > start && char_is_line_ending(self.text.char(end - 1)) {
      end -= 1;
      if end > start && self.text.char(end) == '\n' && self.text.char(end - 1) == '\r' {
        end -= 1;
      }
    }
    (start, end)
  }
}

impl From<&str> for TextBuffer {
  fn from(text: &str) -> Self {
    Self::new(Rope::from_str(text))
  }
}

impl From<Rope> for TextBuffer {
  fn from(text: Rope) -> Self {
    Self::new(text)
  }
}

impl Buffer for TextBuffer {
  fn line(&self, row: Row) -> Result<String> {
    let (start, end) = self.content_range(self.line_idx(row)?);
    Ok(self.text.slice(start..end).to_string())
  }

  fn set_line(&mut self, row: Row, text: &str) -> Result<()> {
    let line_idx = self.line_idx(row)?;
    let (start, end) = self.content_range(line_idx);
    self.text.remove(start..end);
    self.text.insert(start, text);
    tracing::trace!(line = line_idx + 1, text, "rewrote line");
    Ok(())
  }

  fn cursor(&self) -> Result<Cursor> {
    Ok(self.cursor)
  }

  fn next_non_blank(&self, row: NonZeroUsize) -> Result<Option<NonZeroUsize>> {
    let len = self.len_lines();
    for line in row.get()..=len {
      let (start, end) = self.content_range(line - 1);
      if !line_is_blank(&Cow::from(self.text.slice(start..end))) {
        return Ok(NonZeroUsize::new(line));
      }
    }
    Ok(None)
  }
}
