//! The trie over key paths.
//!
//! Nodes live in an arena (`Vec<Node>`) and address each other by index,
//! with the root at index 0 — no owned back-references, and the whole tree
//! serializes as plain data. Children are an unordered segment map; lookups
//! are by exact key only, so no rebalancing ever happens. Traversals that
//! enumerate (name search, `entries`) visit children in sorted segment
//! order so results are reproducible run to run.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entry::{Entry, NameMatch};
use crate::error::{Error, LoadError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Node {
    children: HashMap<String, usize>,
    data: Vec<Entry>,
}

/// A categorized index of entries, keyed by tag paths.
///
/// Built once via [`insert`](Self::insert), then read-only. `len` counts
/// every insert; `key_paths` records each distinct path in first-insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trie {
    nodes: Vec<Node>,
    len: usize,
    key_paths: Vec<Vec<String>>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            len: 0,
            key_paths: Vec::new(),
        }
    }

    /// Number of inserted entries (not unique paths).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every distinct inserted path, in first-insertion order.
    #[must_use]
    pub fn key_paths(&self) -> &[Vec<String>] {
        &self.key_paths
    }

    /// File `entry` under `path`, creating intermediate nodes as needed.
    pub fn insert<S: AsRef<str>>(&mut self, path: &[S], entry: Entry) {
        let path_vec: Vec<String> =
            path.iter().map(|s| s.as_ref().to_string()).collect();
        if !self.key_paths.contains(&path_vec) {
            self.key_paths.push(path_vec);
        }

        let mut cur = 0;
        for seg in path {
            let seg = seg.as_ref();
            cur = match self.nodes[cur].children.get(seg).copied() {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[cur].children.insert(seg.to_string(), child);
                    child
                }
            };
        }
        self.nodes[cur].data.push(entry);
        self.len += 1;
    }

    /// Case-insensitive exact-name search over every stored entry.
    ///
    /// Scans the whole tree depth-first, pairing each hit with the path it
    /// was found under. With `exhaustive` false the scan stops at the first
    /// hit.
    ///
    /// # Errors
    ///
    /// [`Error::NameNotFound`] when nothing matches.
    pub fn find(&self, name: &str, exhaustive: bool) -> Result<Vec<NameMatch>> {
        let needle = name.to_lowercase();
        let mut matches = Vec::new();
        self.find_in(0, &mut Vec::new(), &needle, exhaustive, &mut matches);
        if matches.is_empty() {
            Err(Error::NameNotFound(name.to_string()))
        } else {
            Ok(matches)
        }
    }

    fn find_in(
        &self,
        node: usize,
        path: &mut Vec<String>,
        needle: &str,
        exhaustive: bool,
        out: &mut Vec<NameMatch>,
    ) -> bool {
        for entry in &self.nodes[node].data {
            if entry.value.to_lowercase() == needle {
                out.push(NameMatch {
                    entry: entry.clone(),
                    category_path: path.clone(),
                });
                if !exhaustive {
                    return true;
                }
            }
        }
        for (seg, child) in self.sorted_children(node) {
            path.push(seg);
            let done = self.find_in(child, path, needle, exhaustive, out);
            path.pop();
            if done {
                return true;
            }
        }
        false
    }

    /// Every recorded key path containing `segment`, in recorded order.
    ///
    /// Segment matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// [`Error::CategoryNotFound`] when no path mentions the segment.
    pub fn find_key_paths(&self, segment: &str) -> Result<Vec<Vec<String>>> {
        let matches: Vec<Vec<String>> = self
            .key_paths
            .iter()
            .filter(|path| path.iter().any(|seg| seg == segment))
            .cloned()
            .collect();
        if matches.is_empty() {
            Err(Error::CategoryNotFound(segment.to_string()))
        } else {
            Ok(matches)
        }
    }

    /// Entries filed beneath `path`.
    ///
    /// Descends the path segment by segment; at every node reached, the
    /// `data` of its immediate children is unioned into the result (one
    /// level of fan-out, never a node's own data). A full recorded path
    /// therefore picks up its leaf's entries while descending, and a
    /// partial path (e.g. `["big"]`) aggregates the entries of every
    /// subcategory directly beneath it.
    ///
    /// # Errors
    ///
    /// [`Error::CategoryPathNotFound`] when the path does not exist or
    /// yields no entries.
    pub fn find_by_key_path<S: AsRef<str>>(&self, path: &[S]) -> Result<Vec<Entry>> {
        let joined = || {
            path.iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join("/")
        };

        let mut cur = 0;
        let mut entries = Vec::new();
        for seg in path {
            match self.nodes[cur].children.get(seg.as_ref()) {
                Some(&child) => cur = child,
                None => return Err(Error::CategoryPathNotFound(joined())),
            }
            for (_, child) in self.sorted_children(cur) {
                entries.extend(self.nodes[child].data.iter().cloned());
            }
        }
        if entries.is_empty() {
            Err(Error::CategoryPathNotFound(joined()))
        } else {
            Ok(entries)
        }
    }

    /// All distinct path segments across `key_paths`, sorted ascending.
    #[must_use]
    pub fn list_categories(&self) -> Vec<String> {
        self.key_paths
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every stored entry with its path, in depth-first order.
    ///
    /// Children are visited in sorted segment order, so the enumeration is
    /// stable for a given index regardless of insertion history.
    pub fn entries(&self) -> impl Iterator<Item = NameMatch> {
        let mut out = Vec::with_capacity(self.len);
        self.collect_entries(0, &mut Vec::new(), &mut out);
        out.into_iter()
    }

    fn collect_entries(
        &self,
        node: usize,
        path: &mut Vec<String>,
        out: &mut Vec<NameMatch>,
    ) {
        for entry in &self.nodes[node].data {
            out.push(NameMatch {
                entry: entry.clone(),
                category_path: path.clone(),
            });
        }
        for (seg, child) in self.sorted_children(node) {
            path.push(seg);
            self.collect_entries(child, path, out);
            path.pop();
        }
    }

    fn sorted_children(&self, node: usize) -> Vec<(String, usize)> {
        let mut children: Vec<(String, usize)> = self.nodes[node]
            .children
            .iter()
            .map(|(seg, &child)| (seg.clone(), child))
            .collect();
        children.sort();
        children
    }

    /// Deserialize an index and verify the node arena is self-consistent.
    ///
    /// # Errors
    ///
    /// [`LoadError::Parse`] for malformed data, [`LoadError::Corrupt`] when
    /// a child reference points outside the arena or the references do not
    /// form a tree.
    pub fn from_reader(reader: impl Read) -> std::result::Result<Self, LoadError> {
        let trie: Self = serde_json::from_reader(reader)?;
        trie.validate()?;
        Ok(trie)
    }

    /// Load an index from a file.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`]; all are fatal at startup.
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Serialize the index.
    ///
    /// # Errors
    ///
    /// Forwards serializer/IO failures.
    pub fn to_writer(&self, writer: impl Write) -> std::result::Result<(), serde_json::Error> {
        serde_json::to_writer(writer, self)
    }

    /// Write the index to a file.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] for file creation failures, [`LoadError::Parse`]
    /// for serializer failures.
    pub fn save(&self, path: impl AsRef<Path>) -> std::result::Result<(), LoadError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.to_writer(BufWriter::new(file))?;
        Ok(())
    }

    // Every child reference must point into the arena, never at the root,
    // and no node may be claimed by two parents (or by itself): with at
    // most one reference per node the graph under the root is a tree, so
    // every traversal terminates.
    fn validate(&self) -> std::result::Result<(), LoadError> {
        if self.nodes.is_empty() {
            return Err(LoadError::Corrupt {
                parent: 0,
                child: 0,
            });
        }
        let mut referenced = vec![false; self.nodes.len()];
        for (parent, node) in self.nodes.iter().enumerate() {
            for &child in node.children.values() {
                if child == 0 || child >= self.nodes.len() || referenced[child] {
                    return Err(LoadError::Corrupt { parent, child });
                }
                referenced[child] = true;
            }
        }
        Ok(())
    }
}
