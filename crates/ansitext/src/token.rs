//! Tokenizing colored terminal text.
//!
//! The tokenizer walks a string left to right, maintaining the running
//! `(foreground, background)` color pair. Recognized SGR sequences update
//! that state; everything else accumulates as token text. A new token starts
//! whenever the color pair changes, and additionally at every space/glyph
//! boundary, so a token's text is entirely spaces or entirely glyphs. The
//! space split is what lets the mirroring step treat bare padding runs as
//! alignment units.
//!
//! Supported sequences are the 256-color indexed forms (`ESC[38;5;Nm`,
//! `ESC[48;5;Nm`), the classic 8-color forms (`ESC[3Nm`, `ESC[4Nm`), and
//! the resets `ESC[0m`, `ESC[39m`, `ESC[49m`. A reset clears the affected
//! channel back to empty. Other well-formed SGR sequences are dropped;
//! malformed escapes pass through as inert text.

/// One run of text sharing a single resolved color pair.
///
/// `fg` and `bg` hold the literal escape string that announced the color
/// (e.g. `"\x1b[38;5;129m"`), or are empty when the channel has no explicit
/// color. `text` never contains raw escape bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnsiToken {
    /// Foreground escape code, or empty for the terminal default.
    pub fg: String,
    /// Background escape code, or empty for the terminal default.
    pub bg: String,
    /// The visible text of this run.
    pub text: String,
}

impl AnsiToken {
    /// Create a token from its parts.
    #[must_use]
    pub fn new(
        fg: impl Into<String>,
        bg: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            fg: fg.into(),
            bg: bg.into(),
            text: text.into(),
        }
    }
}

/// One display line: an ordered run of tokens.
///
/// Concatenating the `text` fields in order reconstructs the color-stripped
/// line content.
pub type Line = Vec<AnsiToken>;

/// What a recognized SGR sequence does to the color state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sgr {
    SetFg,
    SetBg,
    ResetFg,
    ResetBg,
    ResetAll,
    /// Well-formed but not a color we model (bold, italic, ...).
    Ignored,
}

/// Classify a complete `ESC[...m` sequence.
fn classify(seq: &str) -> Sgr {
    // Strip the `ESC[` prefix and `m` suffix; the parser guarantees both.
    let body = &seq[2..seq.len() - 1];
    match body {
        "" | "0" => Sgr::ResetAll,
        "39" => Sgr::ResetFg,
        "49" => Sgr::ResetBg,
        _ => {
            if let Some(n) = body.strip_prefix("38;5;") {
                if n.parse::<u8>().is_ok() {
                    return Sgr::SetFg;
                }
            } else if let Some(n) = body.strip_prefix("48;5;") {
                if n.parse::<u8>().is_ok() {
                    return Sgr::SetBg;
                }
            } else if let Ok(n) = body.parse::<u8>() {
                if (30..=37).contains(&n) {
                    return Sgr::SetFg;
                }
                if (40..=47).contains(&n) {
                    return Sgr::SetBg;
                }
            }
            Sgr::Ignored
        }
    }
}

/// Try to parse a complete escape sequence at the start of `rest`.
///
/// Returns the full sequence (including `ESC[` and the terminating `m`) and
/// its byte length. `None` means `rest` does not start with a sequence this
/// crate can classify; the caller treats the bytes as inert text.
fn parse_escape(rest: &str) -> Option<(&str, usize)> {
    let after = rest.strip_prefix('\u{1b}')?.strip_prefix('[')?;
    for (i, b) in after.bytes().enumerate() {
        match b {
            b'0'..=b'9' | b';' => {}
            b'm' => {
                let len = 2 + i + 1;
                return Some((&rest[..len], len));
            }
            _ => return None,
        }
    }
    None
}

/// Split a colored string into tokenized lines.
///
/// Lines are split on literal `\n`. Color state carries across newlines, so
/// a continuation line inherits the running colors of the previous one.
/// Text preceding any escape code gets an empty color pair.
///
/// # Example
///
/// ```rust
/// use ansitext::{AnsiToken, tokenize};
///
/// let lines = tokenize("\x1b[38;5;129mAAA\x1b[48;5;160mXX");
/// assert_eq!(
///     lines[0],
///     vec![
///         AnsiToken::new("\x1b[38;5;129m", "", "AAA"),
///         AnsiToken::new("\x1b[38;5;129m", "\x1b[48;5;160m", "XX"),
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(s: &str) -> Vec<Line> {
    let mut fg = String::new();
    let mut bg = String::new();
    s.split('\n')
        .map(|raw| tokenize_line(raw, &mut fg, &mut bg))
        .collect()
}

fn tokenize_line(raw: &str, fg: &mut String, bg: &mut String) -> Line {
    let mut tokens: Line = Vec::new();
    let mut text = String::new();

    let mut flush = |text: &mut String, fg: &str, bg: &str| {
        if !text.is_empty() {
            tokens.push(AnsiToken::new(fg, bg, std::mem::take(text)));
        }
    };

    let mut i = 0;
    while i < raw.len() {
        let rest = &raw[i..];
        if rest.starts_with('\u{1b}') {
            if let Some((seq, len)) = parse_escape(rest) {
                match classify(seq) {
                    Sgr::SetFg => {
                        if *fg != seq {
                            flush(&mut text, fg, bg);
                            *fg = seq.to_string();
                        }
                    }
                    Sgr::SetBg => {
                        if *bg != seq {
                            flush(&mut text, fg, bg);
                            *bg = seq.to_string();
                        }
                    }
                    Sgr::ResetFg => {
                        if !fg.is_empty() {
                            flush(&mut text, fg, bg);
                            fg.clear();
                        }
                    }
                    Sgr::ResetBg => {
                        if !bg.is_empty() {
                            flush(&mut text, fg, bg);
                            bg.clear();
                        }
                    }
                    Sgr::ResetAll => {
                        if !fg.is_empty() || !bg.is_empty() {
                            flush(&mut text, fg, bg);
                            fg.clear();
                            bg.clear();
                        }
                    }
                    Sgr::Ignored => {}
                }
                i += len;
                continue;
            }
            // Malformed escape: fall through and keep the bytes as text.
        }

        // `rest` is non-empty, so the iterator yields.
        let ch = rest.chars().next().unwrap();
        if !text.is_empty() && (ch == ' ') != text.ends_with(' ') {
            flush(&mut text, fg, bg);
        }
        text.push(ch);
        i += ch.len_utf8();
    }
    flush(&mut text, fg, bg);
    tokens
}
