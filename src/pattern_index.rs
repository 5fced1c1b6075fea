//! Wildcard index over words of a single length.
//!
//! Every word of length L is filed under L "blank patterns", one per position,
//! where that position is replaced by [`WILDCARD`]. Two words share a pattern
//! exactly when they differ in that one position, so the substitution
//! neighbors of a word are the union of its L buckets.

use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use crate::MAX_LEN;

/// Marker byte standing in for the blanked-out position.
pub const WILDCARD: u8 = b'*';

/// `word` with position `i` replaced by the wildcard. `word` must be ASCII.
fn blank(word: &str, i: usize) -> Vec<u8> {
    let mut pattern = word.as_bytes().to_vec();
    pattern[i] = WILDCARD;
    pattern
}

#[derive(Debug, Clone, Default)]
pub struct PatternIndex {
    words: Vec<String>,
    buckets: HashMap<Vec<u8>, Vec<u32>>,
}

impl PatternIndex {
    /// Index a set of same-length words. Runs in O(L × |words|).
    pub fn build<'w, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'w String>,
    {
        let words: Vec<String> = words.into_iter().cloned().collect();

        let mut buckets: HashMap<Vec<u8>, Vec<u32>> = HashMap::new();
        for (id, word) in words.iter().enumerate() {
            for i in 0..word.len() {
                buckets.entry(blank(word, i)).or_default().push(id as u32);
            }
        }

        Self { words, buckets }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Indexed words reachable from `word` by changing exactly one letter.
    ///
    /// `word` itself is never part of the result. Non-ASCII input has no
    /// neighbors.
    pub fn neighbors_by_substitution(&self, word: &str) -> BTreeSet<&str> {
        let mut out = BTreeSet::new();
        if !word.is_ascii() {
            return out;
        }
        for i in 0..word.len() {
            let Some(ids) = self.buckets.get(&blank(word, i)) else {
                continue;
            };
            out.extend(
                ids.iter()
                    .map(|&id| self.words[id as usize].as_str())
                    .filter(|&candidate| candidate != word),
            );
        }
        out
    }
}

/// Per-length cache of pattern indexes, each built at most once.
///
/// Slots are `OnceLock`s, so concurrent searches sharing a lexicon race only on
/// who builds an index, never on the result.
#[derive(Debug)]
pub(crate) struct PatternCache {
    slots: Vec<OnceLock<PatternIndex>>,
}

impl PatternCache {
    pub(crate) fn new() -> Self {
        Self {
            slots: (0..=MAX_LEN).map(|_| OnceLock::new()).collect(),
        }
    }

    /// Cached index for `len`, building it from `words` on first request.
    /// `None` for lengths beyond [`MAX_LEN`].
    pub(crate) fn get_or_build<'w, F, I>(&self, len: usize, words: F) -> Option<&PatternIndex>
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = &'w String>,
    {
        let slot = self.slots.get(len)?;
        Some(slot.get_or_init(|| {
            let index = PatternIndex::build(words());
            tracing::debug!(
                len,
                words = index.word_count(),
                patterns = index.pattern_count(),
                "pattern index built"
            );
            index
        }))
    }

    #[cfg(test)]
    fn is_built(&self, len: usize) -> bool {
        self.slots.get(len).is_some_and(|slot| slot.get().is_some())
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_cache_builds_lazily_and_once() {
        let words = owned(&["cat", "cot", "dog"]);
        let cache = PatternCache::new();
        assert!(!cache.is_built(3));

        let first = cache.get_or_build(3, || words.iter()).unwrap() as *const PatternIndex;
        assert!(cache.is_built(3));
        assert!(!cache.is_built(4));

        // A second request must not rebuild, even if handed different words.
        let other = owned(&["zzz"]);
        let second = cache.get_or_build(3, || other.iter()).unwrap() as *const PatternIndex;
        assert_eq!(first, second);
    }

    #[test]
    fn test_cache_rejects_out_of_range_length() {
        let cache = PatternCache::new();
        let none: Vec<String> = Vec::new();
        assert!(cache.get_or_build(MAX_LEN + 1, || none.iter()).is_none());
    }

    #[test]
    fn test_blank_replaces_single_position() {
        assert_eq!(blank("cat", 0), b"*at".to_vec());
        assert_eq!(blank("cat", 2), b"ca*".to_vec());
    }
}
