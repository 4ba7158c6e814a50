#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Ansitext
//!
//! An ANSI-escape-aware text engine for pre-rendered terminal art.
//!
//! Colored terminal art is a stream of text interleaved with SGR escape
//! sequences (`ESC[38;5;129m` and friends). Treating it as plain text gets
//! everything wrong: lengths are inflated by invisible bytes, and naive
//! string reversal scrambles which glyphs the colors apply to, because a
//! color code paints everything *after* it.
//!
//! This crate factors the color state out of the text:
//!
//! - [`tokenize`] splits a colored string into lines of [`AnsiToken`]s,
//!   each a text run with its resolved foreground/background pair
//! - [`build`] serializes token lines back into an escape-coded string
//! - [`reverse_lines`] mirrors tokenized art left-right while every glyph
//!   keeps the color it visually had
//! - [`display_width`] measures true display columns, ignoring escapes
//!
//! ## Quick start
//!
//! ```rust
//! use ansitext::{build, reverse_lines, tokenize};
//!
//! let art = "\x1b[38;5;129mAAA\x1b[48;5;160mXX";
//! let lines = tokenize(art);
//! let mirrored = build(&reverse_lines(&lines));
//! assert!(mirrored.starts_with("\x1b[38;5;129m\x1b[48;5;160mXX"));
//! ```
//!
//! All operations are pure functions over their inputs: no shared state,
//! no I/O, no failure paths. Malformed escape sequences are carried through
//! as inert text rather than aborting the parse.

pub mod build;
pub mod reverse;
pub mod token;
pub mod width;

pub use build::{build, build_line};
pub use reverse::{reverse_line, reverse_lines};
pub use token::{AnsiToken, Line, tokenize};
pub use width::{display_width, line_width};
