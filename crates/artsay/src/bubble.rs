//! Speech bubble rendering and the caption line under the art.
//!
//! The bubble wraps stdin text to a fixed width, frames it in box-drawing
//! characters and hangs a tether of balloon strings off the bottom border,
//! pointing at whatever is printed underneath.

use unicode_width::UnicodeWidthStr;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";

/// Box-drawing character set for the bubble and caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub horizontal_edge: &'static str,
    pub vertical_edge: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub balloon_string: &'static str,
    pub balloon_tether: &'static str,
    pub separator: &'static str,
    pub right_arrow: &'static str,
    pub category_separator: &'static str,
}

impl BoxChars {
    /// Plain-ASCII borders, for terminals without box-drawing glyphs.
    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            horizontal_edge: "-",
            vertical_edge: "|",
            top_left: "/",
            top_right: "\\",
            bottom_left: "\\",
            bottom_right: "/",
            balloon_string: "\\",
            balloon_tether: "\u{a1}",
            separator: "|",
            right_arrow: ">",
            category_separator: "/",
        }
    }

    /// Unicode box-drawing borders, the default look.
    #[must_use]
    pub const fn unicode() -> Self {
        Self {
            horizontal_edge: "\u{2500}",
            vertical_edge: "\u{2502}",
            top_left: "\u{256d}",
            top_right: "\u{256e}",
            bottom_left: "\u{2570}",
            bottom_right: "\u{256f}",
            balloon_string: "\u{2572}",
            balloon_tether: "\u{2572}",
            separator: "\u{2502}",
            right_arrow: "\u{2192}",
            category_separator: "/",
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Builder-style speech bubble configuration.
///
/// ```
/// use artsay::bubble::{BoxChars, Bubble};
///
/// let out = Bubble::new()
///     .width(12)
///     .chars(BoxChars::ascii())
///     .render("hi there");
/// assert!(out.starts_with('/'));
/// ```
#[derive(Debug, Clone)]
pub struct Bubble {
    width: usize,
    wrap: bool,
    tab_spaces: Option<String>,
    draw_box: bool,
    chars: BoxChars,
}

impl Default for Bubble {
    fn default() -> Self {
        Self {
            width: 80,
            wrap: true,
            tab_spaces: Some(" ".repeat(4)),
            draw_box: true,
            chars: BoxChars::unicode(),
        }
    }
}

impl Bubble {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum visible width of the speech text.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Disable word wrapping; overlong lines are emitted unpadded, without
    /// the right-hand edge.
    #[must_use]
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Replace each tab in the input with `n` spaces.
    #[must_use]
    pub fn tab_width(mut self, n: usize) -> Self {
        self.tab_spaces = Some(" ".repeat(n));
        self
    }

    /// Leave tab characters untouched.
    #[must_use]
    pub fn keep_tabs(mut self) -> Self {
        self.tab_spaces = None;
        self
    }

    /// Whether to draw the box itself. The tether and balloon strings are
    /// emitted either way so the text still points at the art.
    #[must_use]
    pub fn draw_box(mut self, draw: bool) -> Self {
        self.draw_box = draw;
        self
    }

    #[must_use]
    pub fn chars(mut self, chars: BoxChars) -> Self {
        self.chars = chars;
        self
    }

    /// Render `text` inside the bubble. The result ends with a newline.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let mut out = String::new();

        if self.draw_box {
            out.push_str(self.chars.top_left);
            out.push_str(&self.chars.horizontal_edge.repeat(self.width + 2));
            out.push_str(self.chars.top_right);
            out.push('\n');
        }

        for raw in text.lines() {
            let line = match &self.tab_spaces {
                Some(spaces) => raw.replace('\t', spaces),
                None => raw.to_string(),
            };
            if self.wrap {
                for wrapped in textwrap::wrap(&line, self.width) {
                    self.push_line(&mut out, &wrapped);
                }
            } else {
                self.push_line(&mut out, &line);
            }
        }

        // The tether sits six cells in from the left edge.
        let tether = format!(
            "{}{}{}",
            self.chars.horizontal_edge.repeat(6),
            self.chars.balloon_tether,
            self.chars
                .horizontal_edge
                .repeat((self.width + 2).saturating_sub(7)),
        );
        if self.draw_box {
            out.push_str(self.chars.bottom_left);
            out.push_str(&tether);
            out.push_str(self.chars.bottom_right);
        } else {
            out.push(' ');
            out.push_str(&tether);
            out.push(' ');
        }
        out.push('\n');

        for i in 0..4 {
            out.push_str(&" ".repeat(i + 8));
            out.push_str(self.chars.balloon_string);
            out.push('\n');
        }

        out
    }

    fn push_line(&self, out: &mut String, line: &str) {
        if !self.draw_box {
            out.push_str(line);
            out.push('\n');
            return;
        }

        let width = visible_width(line);
        if width <= self.width {
            out.push_str(self.chars.vertical_edge);
            out.push(' ');
            out.push_str(line);
            out.push_str(RESET);
            out.push_str(&" ".repeat(self.width - width));
            out.push(' ');
            out.push_str(self.chars.vertical_edge);
        } else {
            // Too long to pad; leave the right edge open.
            out.push_str(self.chars.vertical_edge);
            out.push(' ');
            out.push_str(line);
            out.push_str(RESET);
        }
        out.push('\n');
    }
}

/// Terminal cell width of a line, ignoring any color escape sequences.
fn visible_width(line: &str) -> usize {
    ansitext::tokenize(line)
        .first()
        .map_or(0, |tokens| {
            tokens
                .iter()
                .map(|t| UnicodeWidthStr::width(t.text.as_str()))
                .sum()
        })
}

/// The `-> name | path/to/category` line printed beneath the art.
///
/// The name is rendered bold and the joined category path italic.
#[must_use]
pub fn caption(
    name: &str,
    category_path: &[String],
    chars: &BoxChars,
    show_category: bool,
) -> String {
    if show_category && !category_path.is_empty() {
        format!(
            "{} {BOLD}{name}{RESET} {} {ITALIC}{}{RESET}",
            chars.right_arrow,
            chars.separator,
            category_path.join(chars.category_separator),
        )
    } else {
        format!("{} {BOLD}{name}{RESET}", chars.right_arrow)
    }
}

/// The caption framed in its own box.
#[must_use]
pub fn boxed_caption(
    name: &str,
    category_path: &[String],
    chars: &BoxChars,
    show_category: bool,
) -> String {
    let line = caption(name, category_path, chars, show_category);
    // Edge glyphs plus one space of padding on each side.
    let inner = visible_width(&line) + 2;
    format!(
        "{}{hx}{}\n{v} {line} {v}\n{}{hx}{}",
        chars.top_left,
        chars.top_right,
        chars.bottom_left,
        chars.bottom_right,
        hx = chars.horizontal_edge.repeat(inner),
        v = chars.vertical_edge,
    )
}
