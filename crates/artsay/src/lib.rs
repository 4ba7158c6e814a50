#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Artsay
//!
//! Cowsay for colored terminal art: a speech bubble with text from stdin,
//! a piece of ANSI art chosen from a categorized gallery, and a caption
//! naming the pick.
//!
//! The heavy lifting lives in two sibling crates: `ansitext` understands
//! escape-coded text (widths, tokenizing, mirroring) and `menagerie` is the
//! name/category index. This crate adds the presentation layer:
//!
//! - [`Selector`] — seedable random choice over the index
//! - [`Bubble`] / [`BoxChars`] — the speech bubble renderer
//! - [`ArtStore`] — on-disk art blobs addressed by entry index
//! - [`cli::Cli`] / [`app::run`] — the binary's surface

pub mod app;
pub mod bubble;
pub mod cli;
pub mod select;
pub mod store;

pub use bubble::{BoxChars, Bubble, boxed_caption, caption};
pub use select::Selector;
pub use store::{ArtError, ArtStore};
