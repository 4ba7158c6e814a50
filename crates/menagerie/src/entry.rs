//! Entries and search results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One addressable art asset: a stable numeric position plus a display name.
///
/// The index is the key into the on-disk art store; the value is what users
/// search for. Entries are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable numeric position of the asset.
    pub index: usize,
    /// Display name.
    pub value: String,
}

impl Entry {
    /// Create a new entry.
    #[must_use]
    pub fn new(index: usize, value: impl Into<String>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{index: {}, value: {}}}", self.index, self.value)
    }
}

/// A search result: an entry paired with the key path it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    /// The matched entry.
    pub entry: Entry,
    /// The category path the entry is filed under.
    pub category_path: Vec<String>,
}
