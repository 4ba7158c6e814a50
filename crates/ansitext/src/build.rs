//! Serializing token lines back into escape-coded strings.
//!
//! The builder is the inverse of [`tokenize`](crate::tokenize): it re-emits
//! a color code only when the channel actually changes between tokens, and
//! closes every colored line with an explicit reset so trailing terminal
//! state never leaks into whatever is printed next. Byte identity with the
//! original input is not a goal; identical resolved color per character is.

use crate::token::Line;

const RESET: &str = "\x1b[0m";
const RESET_FG: &str = "\x1b[39m";
const RESET_BG: &str = "\x1b[49m";

/// Serialize one tokenized line.
///
/// For each token: the foreground code if it differs from the previous
/// token's, then likewise the background, then the text. A channel that
/// goes from colored back to empty mid-line is closed with its default
/// code (`ESC[39m` / `ESC[49m`). If any color was set during the line, a
/// trailing `ESC[0m` finishes it.
#[must_use]
pub fn build_line(line: &Line) -> String {
    let mut out = String::new();
    let mut prev_fg = "";
    let mut prev_bg = "";
    let mut colored = false;

    for token in line {
        if token.fg != prev_fg {
            if token.fg.is_empty() {
                out.push_str(RESET_FG);
            } else {
                out.push_str(&token.fg);
                colored = true;
            }
            prev_fg = &token.fg;
        }
        if token.bg != prev_bg {
            if token.bg.is_empty() {
                out.push_str(RESET_BG);
            } else {
                out.push_str(&token.bg);
                colored = true;
            }
            prev_bg = &token.bg;
        }
        out.push_str(&token.text);
    }

    if colored {
        out.push_str(RESET);
    }
    out
}

/// Serialize tokenized lines, joined with newlines.
///
/// Each line is self-contained: colors are re-announced at the start of a
/// line and reset at its end, so lines can be re-split and printed
/// independently by a presentation layer.
#[must_use]
pub fn build(lines: &[Line]) -> String {
    lines
        .iter()
        .map(build_line)
        .collect::<Vec<_>>()
        .join("\n")
}
