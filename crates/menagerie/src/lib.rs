#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Menagerie
//!
//! A categorized lookup index for terminal art assets.
//!
//! Every artwork is an [`Entry`] — a stable numeric index plus a display
//! name — filed under a *key path*, an ordered sequence of tag strings such
//! as `["big", "gen1", "regular"]`. The [`Trie`] groups entries by those
//! paths and answers three kinds of questions:
//!
//! - exact-name search across the whole tree ([`Trie::find`])
//! - which recorded paths mention a category segment
//!   ([`Trie::find_key_paths`])
//! - which entries are filed beneath a (possibly partial) path
//!   ([`Trie::find_by_key_path`])
//!
//! The index is built once, offline, by repeated [`Trie::insert`] calls and
//! persisted with serde. At run time it is loaded fully into memory and
//! treated as read-only, so it can be shared freely across threads.
//!
//! ## Quick start
//!
//! ```rust
//! use menagerie::{Entry, Trie};
//!
//! let mut trie = Trie::new();
//! trie.insert(&["big", "gen1"], Entry::new(0, "charizard"));
//! trie.insert(&["small", "gen1"], Entry::new(1, "pikachu"));
//!
//! let matches = trie.find("Pikachu", true).unwrap();
//! assert_eq!(matches[0].entry.index, 1);
//! assert_eq!(trie.list_categories(), ["big", "gen1", "small"]);
//! ```

pub mod entry;
pub mod error;
pub mod trie;

pub use entry::{Entry, NameMatch};
pub use error::{Error, LoadError, Result};
pub use trie::Trie;
