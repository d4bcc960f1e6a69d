//! Insert a fresh pair around the current line or word.
//!
//! Nothing is matched here; both operations only insert, and both resolve the
//! pair before touching the buffer.

use surround_core::{
  chars::char_is_whitespace,
  line::{
    char_len,
    find_from,
    first_non_whitespace,
    insert_char,
    rfind_through,
  },
};

use crate::{
  buffer::Buffer,
  pair::Pair,
  position::Row,
  surrounding::{
    Error,
    Result,
  },
};

/// Wraps the current row's content, leading indentation excluded.
///
/// A blank row gets an empty pair appended.
pub fn wrap_line<B: Buffer + ?Sized>(buffer: &mut B, open: char) -> Result<()> {
  let pair = Pair::lookup(open)?;
  let text = buffer.line(Row::Current)?;

  let len = char_len(&text);
  let start = first_non_whitespace(&text).unwrap_or(len);
  let wrapped = insert_char(&insert_char(&text, len, pair.close), start, pair.open);

  buffer.set_line(Row::Current, &wrapped)?;
  tracing::debug!(open = %pair.open, start, "wrapped line");
  Ok(())
}

/// Wraps the whitespace-delimited word under the cursor.
///
/// The word runs from just past the last whitespace at or before the cursor
/// to the first whitespace after it. Without such whitespace the line start
/// or end is used.
pub fn wrap_word<B: Buffer + ?Sized>(buffer: &mut B, open: char) -> Result<()> {
  let pair = Pair::lookup(open)?;
  let cursor = buffer.cursor()?;
  let col = cursor.char_col().ok_or(Error::InvalidCursorColumn)?;
  let text = buffer.line(Row::Current)?;

  let (start, end) = word_bounds(&text, col);
  let wrapped = insert_char(&insert_char(&text, end, pair.close), start, pair.open);

  buffer.set_line(Row::Current, &wrapped)?;
  tracing::debug!(open = %pair.open, start, end, "wrapped word");
  Ok(())
}

/// Char range `start..end` of the word around `col`.
fn word_bounds(text: &str, col: usize) -> (usize, usize) {
  let end = find_from(text, col + 1, char_is_whitespace).unwrap_or_else(|| char_len(text));
  let start = rfind_through(text, col, char_is_whitespace).map_or(0, |ws| ws + 1);
  (start, end.max(start))
}
