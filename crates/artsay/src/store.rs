//! On-disk art lookup.
//!
//! Art blobs are plain UTF-8 files of pre-rendered ANSI text, one per entry,
//! named by the entry's index: `<dir>/<index>.ansi`. The index file maps
//! names and categories to these indices.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// An art blob that could not be read.
#[derive(Debug, Error)]
#[error("cannot read art {path}")]
pub struct ArtError {
    /// Path of the blob that failed.
    pub path: PathBuf,
    #[source]
    source: std::io::Error,
}

/// Directory of art blobs addressed by entry index.
#[derive(Debug, Clone)]
pub struct ArtStore {
    dir: PathBuf,
}

impl ArtStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the blob for `index`, whether or not it exists.
    #[must_use]
    pub fn path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{index}.ansi"))
    }

    /// The art text for `index`.
    ///
    /// # Errors
    ///
    /// [`ArtError`] when the file is missing, unreadable or not UTF-8.
    pub fn art(&self, index: usize) -> Result<String, ArtError> {
        let path = self.path(index);
        std::fs::read_to_string(&path).map_err(|source| ArtError { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_indexed_blob() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("3.ansi"), "\u{1b}[38;5;129m@\u{1b}[0m\n").unwrap();

        let store = ArtStore::new(dir.path());
        assert_eq!(store.art(3).unwrap(), "\u{1b}[38;5;129m@\u{1b}[0m\n");
    }

    #[test]
    fn missing_blob_names_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtStore::new(dir.path());

        let err = store.art(9).unwrap_err();
        assert!(err.to_string().contains("9.ansi"));
    }
}
