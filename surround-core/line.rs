//! Char-indexed editing of a single line.
//!
//! Columns are `char` offsets, not byte offsets. Rewrites return a new
//! `String`; a column past the end of the line is clamped to the line end,
//! so removing there is a no-op and replacing there appends.

use crate::chars::char_is_whitespace;

/// Number of chars in `line`.
#[inline]
pub fn char_len(line: &str) -> usize {
  line.chars().count()
}

/// Converts a char column into a byte offset, clamped to `line.len()`.
pub fn char_to_byte_idx(line: &str, col: usize) -> usize {
  line
    .char_indices()
    .nth(col)
    .map_or(line.len(), |(idx, _)| idx)
}

#[inline]
pub fn char_at(line: &str, col: usize) -> Option<char> {
  line.chars().nth(col)
}

/// Returns `line` with the char at `col` excised.
pub fn remove_char(line: &str, col: usize) -> String {
  let start = char_to_byte_idx(line, col);
  let end = line[start..]
    .chars()
    .next()
    .map_or(start, |ch| start + ch.len_utf8());

  let mut out = String::with_capacity(line.len());
  out.push_str(&line[..start]);
  out.push_str(&line[end..]);
  out
}

/// Returns `line` with the char at `col` overwritten by `ch`.
pub fn replace_char(line: &str, col: usize, ch: char) -> String {
  let start = char_to_byte_idx(line, col);
  let end = line[start..]
    .chars()
    .next()
    .map_or(start, |old| start + old.len_utf8());

  let mut out = String::with_capacity(line.len() + ch.len_utf8());
  out.push_str(&line[..start]);
  out.push(ch);
  out.push_str(&line[end..]);
  out
}

/// Returns `line` with `ch` inserted before the char at `col`.
pub fn insert_char(line: &str, col: usize, ch: char) -> String {
  let at = char_to_byte_idx(line, col);

  let mut out = String::with_capacity(line.len() + ch.len_utf8());
  out.push_str(&line[..at]);
  out.push(ch);
  out.push_str(&line[at..]);
  out
}

/// First column `>= col` whose char satisfies `pred`.
pub fn find_from(line: &str, col: usize, mut pred: impl FnMut(char) -> bool) -> Option<usize> {
  line
    .chars()
    .enumerate()
    .skip(col)
    .find_map(|(idx, ch)| pred(ch).then_some(idx))
}

/// Last column `<= col` whose char satisfies `pred`.
pub fn rfind_through(line: &str, col: usize, mut pred: impl FnMut(char) -> bool) -> Option<usize> {
  line
    .chars()
    .take(col.saturating_add(1))
    .enumerate()
    .filter_map(|(idx, ch)| pred(ch).then_some(idx))
    .last()
}

pub fn first_non_whitespace(line: &str) -> Option<usize> {
  find_from(line, 0, |ch| !char_is_whitespace(ch))
}
