//! Display width of terminal art fragments.
//!
//! The art glyph set is block and box-drawing characters, all single-width,
//! so every Unicode scalar is exactly one column. The only wrinkle is that
//! embedded escape sequences occupy zero columns and must be skipped, and
//! multi-byte encodings must not be counted per byte.

use crate::token::Line;

/// Display column width of a text fragment, ignoring escape sequences.
///
/// Escape sequences are skipped from `ESC` through the terminating `m`.
/// Every remaining Unicode scalar counts one column: `"▄▄"` is 2, not its
/// UTF-8 byte length of 6.
#[must_use]
pub fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for ch in s.chars() {
        if in_escape {
            if ch == 'm' {
                in_escape = false;
            }
        } else if ch == '\u{1b}' {
            in_escape = true;
        } else {
            width += 1;
        }
    }
    width
}

/// Display width of a tokenized line.
///
/// Token text carries no escape bytes, so this is the total scalar count.
#[must_use]
pub fn line_width(line: &Line) -> usize {
    line.iter().map(|t| t.text.chars().count()).sum()
}
