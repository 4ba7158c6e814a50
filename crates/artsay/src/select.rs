//! Random choice over the index.
//!
//! The selector owns an injected RNG instance rather than touching a global
//! source, so tests seed it and get reproducible picks. `Pcg64` is the
//! default generator; any [`Rng`] works.

use menagerie::{Entry, NameMatch, Result, Trie};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Uniform random selection over trie-derived candidate sets.
#[derive(Debug)]
pub struct Selector<R> {
    rng: R,
}

impl Selector<Pcg64> {
    /// A selector with a deterministic, seeded generator.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg64::seed_from_u64(seed))
    }

    /// A selector seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(Pcg64::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Selector<R> {
    /// Wrap an RNG instance.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform index in `[0, total)`.
    ///
    /// A zero bound returns `0` rather than failing; there is always a
    /// "first" position to fall back to.
    pub fn choose_index(&mut self, total: usize) -> usize {
        if total == 0 {
            0
        } else {
            self.rng.random_range(0..total)
        }
    }

    /// Pick an entry filed under a category segment.
    ///
    /// Uniformly picks one of the key paths containing `segment`, resolves
    /// it, then uniformly picks one of the entries beneath it. Returns the
    /// entry together with the chosen path.
    ///
    /// # Errors
    ///
    /// Forwards the index's not-found errors.
    pub fn choose_by_category(
        &mut self,
        trie: &Trie,
        segment: &str,
    ) -> Result<(Entry, Vec<String>)> {
        let paths = trie.find_key_paths(segment)?;
        let path = paths[self.choose_index(paths.len())].clone();
        let entries = trie.find_by_key_path(&path)?;
        let entry = entries[self.choose_index(entries.len())].clone();
        tracing::debug!(segment, path = path.join("/"), entry = %entry, "category pick");
        Ok((entry, path))
    }

    /// Pick uniformly among all entries whose name matches exactly
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Forwards [`menagerie::Error::NameNotFound`].
    pub fn choose_by_name(&mut self, trie: &Trie, name: &str) -> Result<NameMatch> {
        let mut matches = trie.find(name, true)?;
        let pick = self.choose_index(matches.len());
        Ok(matches.swap_remove(pick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        let mut trie = Trie::new();
        trie.insert(&["big", "g1", "o"], Entry::new(0, "charizard"));
        trie.insert(&["big", "g1", "o"], Entry::new(1, "gyarados"));
        trie.insert(&["small", "g1", "r"], Entry::new(2, "pikachu"));
        trie.insert(&["small", "g2", "r"], Entry::new(3, "pikachu"));
        trie
    }

    #[test]
    fn zero_bound_returns_zero() {
        let mut selector = Selector::seeded(1);
        assert_eq!(selector.choose_index(0), 0);
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut selector = Selector::seeded(42);
        for _ in 0..1000 {
            assert!(selector.choose_index(7) < 7);
        }
    }

    #[test]
    fn seeded_selectors_agree() {
        let mut a = Selector::seeded(99);
        let mut b = Selector::seeded(99);
        for _ in 0..100 {
            assert_eq!(a.choose_index(1000), b.choose_index(1000));
        }
    }

    #[test]
    fn category_pick_comes_from_matching_paths() {
        let trie = sample();
        let mut selector = Selector::seeded(7);
        for _ in 0..50 {
            let (entry, path) = selector.choose_by_category(&trie, "big").unwrap();
            assert_eq!(path, ["big", "g1", "o"]);
            assert!(entry.index <= 1);
        }
    }

    #[test]
    fn name_pick_is_one_of_the_matches() {
        let trie = sample();
        let mut selector = Selector::seeded(3);
        for _ in 0..50 {
            let m = selector.choose_by_name(&trie, "Pikachu").unwrap();
            assert!(m.entry.index == 2 || m.entry.index == 3);
        }
    }

    #[test]
    fn missing_category_is_an_error() {
        let trie = sample();
        let mut selector = Selector::seeded(0);
        assert!(selector.choose_by_category(&trie, "huge").is_err());
        assert!(selector.choose_by_name(&trie, "mew").is_err());
    }
}
