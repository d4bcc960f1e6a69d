//! Forward search for the delimiter closing a pair.
//!
//! The scan starts at a position just past an opening delimiter and walks
//! forward char by char, row by row, keeping a nesting depth for the pair:
//!
//! - a closing char at depth zero is the match;
//! - a closing char at depth `n > 0` ends a nested pair (depth `n - 1`);
//! - an opening char starts a nested pair (depth `n + 1`).
//!
//! The closing test runs first. Quote-like pairs open and close with the
//! same char, so for them the very next occurrence always matches and they
//! never nest.
//!
//! When a row runs out the scan jumps to the next non-blank row and resumes
//! at column 0 with the depth it had.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use surround_lib::{
//!   buffer::TextBuffer,
//!   matcher::find_corresponding,
//!   pair::Pair,
//!   position::Position,
//! };
//!
//! let buffer = TextBuffer::from("(a(b)c)");
//! let pair = Pair::lookup('(').unwrap();
//! let start = Position::at(NonZeroUsize::MIN, 1);
//! assert_eq!(
//!   find_corresponding(&buffer, pair, start).unwrap(),
//!   Position::at(NonZeroUsize::MIN, 6)
//! );
//! ```

use thiserror::Error;

use crate::{
  buffer::{
    Buffer,
    BufferError,
  },
  pair::Pair,
  position::{
    Position,
    Row,
  },
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("no corresponding '{close}' found for '{open}'")]
  NoMatchFound { open: char, close: char },
  #[error(transparent)]
  Buffer(#[from] BufferError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Finds the delimiter closing `pair`, searching from `start` onwards.
///
/// `start` itself is a candidate, so callers pass the column right after
/// the opening delimiter. The returned position always has an absolute row.
pub fn find_corresponding<B: Buffer + ?Sized>(
  buffer: &B,
  pair: Pair,
  start: Position,
) -> Result<Position> {
  let no_match = Error::NoMatchFound {
    open:  pair.open,
    close: pair.close,
  };

  let mut line = buffer.resolve(start.row)?;
  let mut col = start.col;
  let mut depth: usize = 0;

  loop {
    let text = buffer.line(Row::Absolute(line))?;

    for (idx, ch) in text.chars().enumerate().skip(col) {
      if ch == pair.close {
        if depth == 0 {
          let found = Position::at(line, idx);
          tracing::debug!(%start, %found, open = %pair.open, "found corresponding delimiter");
          return Ok(found);
        }
        depth -= 1;
      } else if ch == pair.open {
        depth += 1;
      }
    }

    let Some(after) = line.checked_add(1) else {
      return Err(no_match);
    };
    match buffer.next_non_blank(after)? {
      Some(next) if next > line => {
        tracing::trace!(from = line, to = next, depth, "continuing on next non-blank row");
        line = next;
        col = 0;
      },
      _ => return Err(no_match),
    }
  }
}

#[cfg(test)]
mod test {
  use std::num::NonZeroUsize;

  use super::*;
  use crate::buffer::TextBuffer;

  fn line(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
  }

  fn find(text: &str, open: char, start: (usize, usize)) -> Result<(usize, usize)> {
    let buffer = TextBuffer::from(text);
    let pair = Pair::lookup(open).unwrap();
    let found = find_corresponding(&buffer, pair, Position::at(line(start.0), start.1))?;
    match found.row {
      Row::Absolute(row) => Ok((row.get(), found.col)),
      Row::Current => panic!("matcher returned a relative row"),
    }
  }

  #[test]
  fn skips_nested_pair() {
    assert_eq!(find("(a(b)c)", '(', (1, 1)), Ok((1, 6)));
  }

  #[test]
  fn skips_deeply_nested_pairs() {
    assert_eq!(find("f(g(h(x)), y(z))", '(', (1, 2)), Ok((1, 15)));
    assert_eq!(find("[[[]][]]", '[', (1, 1)), Ok((1, 7)));
  }

  #[test]
  fn other_pair_types_are_ignored() {
    assert_eq!(find("(a[b)c]", '(', (1, 1)), Ok((1, 4)));
  }

  #[test]
  fn self_pairing_never_nests() {
    assert_eq!(find("'a'b'", '\'', (1, 1)), Ok((1, 2)));
    assert_eq!(find("\"\"", '"', (1, 1)), Ok((1, 1)));
  }

  #[test]
  fn spans_rows_and_skips_blank_ones() {
    assert_eq!(find("foo(\n\n  \nbar)", '(', (1, 4)), Ok((4, 3)));
  }

  #[test]
  fn nesting_carries_across_rows() {
    assert_eq!(find("((\n)\n)", '(', (1, 1)), Ok((3, 0)));
    assert_eq!(find("`a\n`", '`', (1, 1)), Ok((2, 0)));
  }

  #[test]
  fn starts_past_the_end_of_the_row() {
    assert_eq!(find("(\n)", '(', (1, 1)), Ok((2, 0)));
  }

  #[test]
  fn block_spanning_three_rows() {
    let text = "constructor(denops: Denops): void {\n  this.editor = new \
                Editor(denops);\n}";
    assert_eq!(find(text, '{', (1, 35)), Ok((3, 0)));
  }

  #[test]
  fn unmatched_fails() {
    assert_eq!(find("(abc\n\n   \n", '(', (1, 1)), Err(Error::NoMatchFound {
      open:  '(',
      close: ')',
    }));
    assert_eq!(
      find("(a(b)", '(', (1, 1)),
      Err(Error::NoMatchFound {
        open:  '(',
        close: ')',
      })
    );
  }

  #[test]
  fn current_row_is_resolved_through_the_cursor() {
    use crate::position::Cursor;

    let buffer = TextBuffer::from("x\n<a>\n").with_cursor(Cursor::new(line(2), 1));
    let pair = Pair::lookup('<').unwrap();
    let start = Position {
      row: Row::Current,
      col: 1,
    };
    let found = find_corresponding(&buffer, pair, start).unwrap();
    assert_eq!(found, Position::at(line(2), 2));
  }

  // The recursive formulation: find the next opener and closer on the rest
  // of the row; a closer at or before the opener is the match, an opener
  // first means a nested pair to match and then step over.
  fn reference(buffer: &TextBuffer, pair: Pair, row: NonZeroUsize, col: usize) -> Option<Position> {
    let text = buffer.line(Row::Absolute(row)).ok()?;
    let rest: Vec<char> = text.chars().skip(col).collect();
    let left = rest.iter().position(|&ch| ch == pair.open);
    let right = rest.iter().position(|&ch| ch == pair.close);

    match (left, right) {
      (_, Some(right)) if left.is_none_or(|left| right <= left) => {
        Some(Position::at(row, col + right))
      },
      (Some(left), _) => {
        let nested = reference(buffer, pair, row, col + left + 1)?;
        let Row::Absolute(nested_row) = nested.row else {
          return None;
        };
        reference(buffer, pair, nested_row, nested.col + 1)
      },
      _ => {
        let next = buffer.next_non_blank(row.checked_add(1)?).ok()??;
        reference(buffer, pair, next, 0)
      },
    }
  }

  quickcheck::quickcheck! {
      fn agrees_with_recursive_search(seed: Vec<u8>, quote: bool) -> bool {
          const ALPHABET: &[char] = &['(', ')', '\'', 'a', ' ', '\n'];
          let text: String = seed
              .iter()
              .map(|byte| ALPHABET[*byte as usize % ALPHABET.len()])
              .collect();
          let buffer = TextBuffer::from(text.as_str());
          let pair = Pair::lookup(if quote { '\'' } else { '(' }).unwrap();
          let start = Position::at(NonZeroUsize::MIN, 0);

          find_corresponding(&buffer, pair, start).ok() == reference(&buffer, pair, NonZeroUsize::MIN, 0)
      }
  }
}
