//! Error types for index lookups and persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for index lookups.
pub type Result<T> = std::result::Result<T, Error>;

/// A lookup that yielded nothing.
///
/// Not-found conditions are surfaced to the caller, never silently
/// defaulted: the binary turns them into a non-zero exit with the message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No stored entry has the requested display name.
    #[error("could not find name: {0}")]
    NameNotFound(String),

    /// No recorded key path contains the requested segment.
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    /// The key path does not exist or has no entries beneath it.
    #[error("could not find category path: {0}")]
    CategoryPathNotFound(String),
}

/// A persisted index that could not be loaded.
///
/// All variants are fatal at startup; there is no mid-operation recovery.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The index file could not be read.
    #[error("cannot read index {path}")]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The index data is not valid serialized form.
    #[error("malformed index data")]
    Parse(#[from] serde_json::Error),

    /// The node arena has a dangling, duplicated or cyclic child reference.
    #[error("corrupt index: bad child reference {child} in node {parent}")]
    Corrupt {
        /// Arena index of the referencing node.
        parent: usize,
        /// The offending child index.
        child: usize,
    },
}
