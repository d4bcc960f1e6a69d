//! A delimiter pair located around the cursor, ready to be edited.
//!
//! A [`Surrounding`] is built by [`Surrounding::initialize`], which reads the
//! char under the cursor, resolves it to a [`Pair`] and finds the delimiter
//! closing it. Both positions are captured once; [`Surrounding::remove`] and
//! [`Surrounding::change`] trust them and consume the session, so every
//! command works on a fresh one.
//!
//! Lookups and matching all happen before the first write. A failed
//! operation leaves the buffer untouched.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use surround_lib::{
//!   buffer::TextBuffer,
//!   position::Cursor,
//!   surrounding::Surrounding,
//! };
//!
//! let mut buffer =
//!   TextBuffer::from("call(a, (b))").with_cursor(Cursor::new(NonZeroUsize::MIN, 5));
//! let surrounding = Surrounding::initialize(&buffer).unwrap();
//! surrounding.change(&mut buffer, '[').unwrap();
//! assert_eq!(buffer.text().to_string(), "call[a, (b)]");
//! ```

use surround_core::line::{
  char_at,
  remove_char,
  replace_char,
};
use thiserror::Error;

use crate::{
  buffer::{
    Buffer,
    BufferError,
  },
  matcher::{
    self,
    find_corresponding,
  },
  pair::{
    Pair,
    UnsupportedCharacter,
  },
  position::Position,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("unsupported character '{0}'")]
  UnsupportedCharacter(char),
  #[error("no character under the cursor")]
  NothingUnderCursor,
  #[error("cursor column 0 does not address a character")]
  InvalidCursorColumn,
  #[error("no corresponding '{close}' found for '{open}'")]
  NoMatchFound { open: char, close: char },
  #[error(transparent)]
  Buffer(#[from] BufferError),
}

impl From<UnsupportedCharacter> for Error {
  fn from(UnsupportedCharacter(ch): UnsupportedCharacter) -> Self {
    Self::UnsupportedCharacter(ch)
  }
}

impl From<matcher::Error> for Error {
  fn from(err: matcher::Error) -> Self {
    match err {
      matcher::Error::NoMatchFound { open, close } => Self::NoMatchFound { open, close },
      matcher::Error::Buffer(err) => Self::Buffer(err),
    }
  }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surrounding {
  pair:          Pair,
  current:       Position,
  corresponding: Position,
}

impl Surrounding {
  /// Locates the pair whose opening delimiter is under the cursor.
  ///
  /// # Errors
  ///
  /// - [`Error::InvalidCursorColumn`] if the host reports column 0.
  /// - [`Error::NothingUnderCursor`] if the cursor is past the end of its row.
  /// - [`Error::UnsupportedCharacter`] if the char under the cursor does not
  ///   open a known pair.
  /// - [`Error::NoMatchFound`] if the buffer ends before the pair is closed.
  pub fn initialize<B: Buffer + ?Sized>(buffer: &B) -> Result<Self> {
    let cursor = buffer.cursor()?;
    let col = cursor.char_col().ok_or(Error::InvalidCursorColumn)?;
    let current = Position::at(cursor.row, col);

    let text = buffer.line(current.row)?;
    let ch = char_at(&text, col).ok_or(Error::NothingUnderCursor)?;
    let pair = Pair::lookup(ch)?;

    let corresponding = find_corresponding(buffer, pair, current.offset(1))?;
    tracing::debug!(%current, %corresponding, open = %pair.open, "surrounding initialized");

    Ok(Self {
      pair,
      current,
      corresponding,
    })
  }

  pub fn pair(&self) -> Pair {
    self.pair
  }

  /// Where the opening delimiter sits.
  pub fn current(&self) -> Position {
    self.current
  }

  /// Where the closing delimiter sits.
  pub fn corresponding(&self) -> Position {
    self.corresponding
  }

  /// Deletes both delimiters.
  ///
  /// The closing one goes first: it is never before the opening one, so on a
  /// shared row the opening column stays valid.
  pub fn remove<B: Buffer + ?Sized>(self, buffer: &mut B) -> Result<()> {
    for point in [self.corresponding, self.current] {
      let text = buffer.line(point.row)?;
      buffer.set_line(point.row, &remove_char(&text, point.col))?;
    }
    tracing::debug!(open = %self.pair.open, "removed surrounding");
    Ok(())
  }

  /// Replaces both delimiters with the pair opened by `open`.
  ///
  /// # Errors
  ///
  /// [`Error::UnsupportedCharacter`] if `open` does not open a known pair, in
  /// which case nothing is written.
  pub fn change<B: Buffer + ?Sized>(self, buffer: &mut B, open: char) -> Result<()> {
    let new = Pair::lookup(open)?;

    for (point, ch) in [(self.current, new.open), (self.corresponding, new.close)] {
      let text = buffer.line(point.row)?;
      buffer.set_line(point.row, &replace_char(&text, point.col, ch))?;
    }
    tracing::debug!(from = %self.pair.open, to = %new.open, "changed surrounding");
    Ok(())
  }
}
