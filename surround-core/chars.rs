#[inline]
pub fn char_is_line_ending(ch: char) -> bool {
  matches!(
    ch,
    '\u{000A}' | // LineFeed
    '\u{000B}' | // VerticalTab
    '\u{000C}' | // FormFeed
    '\u{000D}' | // CarriageReturn
    '\u{0085}' | // NextLine
    '\u{2028}' | // Line Separator
    '\u{2029}'   // ParagraphSeparator
  )
}

/// Whitespace as word separators see it.
///
/// Line endings count as whitespace too, so a stray `\r` left at the end of a
/// line still ends a word.
#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  match ch {
      '\u{0009}' | // Character Tabulation
      '\u{0020}' | // Space
      '\u{00A0}' | // No-break Space
      '\u{1680}' | // Ogham Space Mark
      '\u{180E}' | // Mongolian Vowel Separator
      '\u{202F}' | // Narrow No-break Space
      '\u{205F}' | // Medium Mathematical Space
      '\u{3000}' | // Ideographic Space
      '\u{FEFF}'   // Zero Width No-break Space
      => true,

      // En Quad through Hair Space.
      ch if ('\u{2000}' ..= '\u{200A}').contains(&ch) => true,

      ch => char_is_line_ending(ch),
    }
}

/// A line is blank when it has no characters other than whitespace.
#[inline]
pub fn line_is_blank(line: &str) -> bool {
  line.chars().all(char_is_whitespace)
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn line_endings() {
    for ch in ['\n', '\r', '\u{0B}', '\u{0C}', '\u{85}', '\u{2028}', '\u{2029}'] {
      assert!(char_is_line_ending(ch), "{ch:?}");
      assert!(char_is_whitespace(ch), "{ch:?}");
    }
    assert!(!char_is_line_ending(' '));
    assert!(!char_is_whitespace('('));
  }

  #[test]
  fn blank_lines() {
    assert!(line_is_blank(""));
    assert!(line_is_blank("   "));
    assert!(line_is_blank("\t \u{3000}"));
    assert!(!line_is_blank("  }"));
  }

  quickcheck::quickcheck! {
      fn std_whitespace_is_whitespace(ch: char) -> bool {
          // Superset of std's White_Space property.
          !ch.is_whitespace() || char_is_whitespace(ch)
      }
  }
}
