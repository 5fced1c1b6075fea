//! Dictionary of admissible words, partitioned by length.
//!
//! A lexicon is built once from raw text and never mutated afterwards. To use a
//! different word list, build a new lexicon: the wildcard indexes cached inside
//! the old one are dropped along with it.

use std::collections::{BTreeMap, HashSet};

use crate::error::WordError;
use crate::pattern_index::{PatternCache, PatternIndex};
use crate::{MAX_LEN, MIN_LEN};

/// Normalize a user-supplied token into a word: trimmed, lowercased, letters
/// a-z only and within the admissible length range.
pub fn normalize_word(raw: &str) -> Result<String, WordError> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    if !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(WordError::InvalidCharacters { word });
    }
    let len = word.len();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(WordError::InvalidLength { word, len });
    }
    Ok(word)
}

/// Check whether `word` is already a well-formed word without normalizing it.
pub fn is_word(word: &str) -> bool {
    (MIN_LEN..=MAX_LEN).contains(&word.len()) && word.bytes().all(|b| b.is_ascii_lowercase())
}

#[derive(Debug, Default)]
pub struct Lexicon {
    buckets: BTreeMap<usize, HashSet<String>>,
    patterns: PatternCache,
}

impl Lexicon {
    /// Build a lexicon from whitespace-separated text.
    ///
    /// Tokens that are not valid words are dropped silently. Text without a
    /// single valid word gives an empty lexicon rather than an error.
    pub fn build(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    /// Build a lexicon from already split tokens, with the same filtering as
    /// [`Lexicon::build`].
    pub fn from_words<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buckets: BTreeMap<usize, HashSet<String>> = BTreeMap::new();
        for word in tokens.into_iter().filter_map(|t| normalize_word(t.as_ref()).ok()) {
            buckets.entry(word.len()).or_default().insert(word);
        }

        let lexicon = Self {
            buckets,
            patterns: PatternCache::new(),
        };
        tracing::info!(
            words = lexicon.total_count(),
            lengths = lexicon.buckets.len(),
            "lexicon built"
        );
        lexicon
    }

    /// All words of length `len`, if any.
    pub fn words_of_length(&self, len: usize) -> Option<&HashSet<String>> {
        self.buckets.get(&len)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.buckets
            .get(&word.len())
            .is_some_and(|bucket| bucket.contains(word))
    }

    pub fn total_count(&self) -> usize {
        self.buckets.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Word counts for every admissible length, including empty ones.
    pub fn length_counts(&self) -> Vec<(usize, usize)> {
        (MIN_LEN..=MAX_LEN)
            .map(|len| (len, self.buckets.get(&len).map_or(0, HashSet::len)))
            .collect()
    }

    /// The wildcard index for length `len`, built on first use.
    ///
    /// Returns `None` only for lengths outside the admissible range; a length
    /// with no words yields an empty index.
    pub fn pattern_index(&self, len: usize) -> Option<&PatternIndex> {
        self.patterns
            .get_or_build(len, || self.words_of_length(len).into_iter().flatten())
    }
}
