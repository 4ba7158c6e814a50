//! Horizontal mirroring of tokenized art.
//!
//! Mirroring colored art is not `String::reverse`: a color code paints
//! everything after it, so reversing tokens and text independently shifts
//! every color onto the wrong run. Working on tokens sidesteps that — each
//! token already knows its resolved pair, so the mirror keeps each token's
//! own colors and only reverses order and glyphs.
//!
//! Lines of a mirrored artwork also have to stay aligned to its *right*
//! edge: art is ragged on the right, and what was trailing nothing becomes
//! leading space. Each reversed line therefore starts with an uncolored pad
//! token of `max_width - line_width` spaces (empty for the widest line).
//! Every line is reversed independently; there is no vertical flip and no
//! color carry-over between lines.

use crate::token::{AnsiToken, Line};
use crate::width::line_width;

/// Mirror a whole artwork left-right.
///
/// # Example
///
/// ```rust
/// use ansitext::{AnsiToken, reverse_lines, tokenize};
///
/// let lines = tokenize("\x1b[38;5;129mAAA \x1b[48;5;160m XX \x1b[0m");
/// assert_eq!(
///     reverse_lines(&lines)[0],
///     vec![
///         AnsiToken::new("", "", ""),
///         AnsiToken::new("\x1b[38;5;129m", "\x1b[48;5;160m", " XX "),
///         AnsiToken::new("\x1b[38;5;129m", "", " AAA"),
///     ]
/// );
/// ```
#[must_use]
pub fn reverse_lines(lines: &[Line]) -> Vec<Line> {
    let max_width = lines.iter().map(line_width).max().unwrap_or(0);
    lines
        .iter()
        .map(|line| reverse_line(line, max_width - line_width(line)))
        .collect()
}

/// Mirror a single line, prepending `pad` spaces of uncolored lead-in.
///
/// The first output token always carries an empty color pair (the "no color
/// yet" state implied by the original line's start), even when `pad` is 0.
/// After it, tokens appear in reverse order with their text reversed and
/// their own colors kept; adjacent tokens with identical color pairs are
/// merged back into maximal runs.
#[must_use]
pub fn reverse_line(line: &Line, pad: usize) -> Line {
    let mut out: Line = Vec::with_capacity(line.len() + 1);
    out.push(AnsiToken::new("", "", " ".repeat(pad)));

    for token in line.iter().rev() {
        let text: String = token.text.chars().rev().collect();
        // Merge with the previous output token when the pair matches, but
        // never into the leading pad token.
        if out.len() > 1 {
            let last = out.last_mut().unwrap();
            if last.fg == token.fg && last.bg == token.bg {
                last.text.push_str(&text);
                continue;
            }
        }
        out.push(AnsiToken::new(token.fg.clone(), token.bg.clone(), text));
    }
    out
}
