//! Legal moves from a word under each edit model.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::heuristic::{flex_lower_bound, lower_bound};
use crate::lexicon::{is_word, Lexicon};
use crate::ALPHABET;

/// Which edits count as a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditMode {
    /// Substitution only; word length never changes
    #[default]
    Classic,
    /// Substitution, insertion or deletion of one letter
    Flex,
}

impl EditMode {
    pub fn allows_length_change(self) -> bool {
        self == EditMode::Flex
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditMode::Classic => write!(f, "classic"),
            EditMode::Flex => write!(f, "flex"),
        }
    }
}

impl FromStr for EditMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" | "c" => Ok(EditMode::Classic),
            "flex" | "f" => Ok(EditMode::Flex),
            other => Err(format!("unknown mode: {other} (expected classic or flex)")),
        }
    }
}

/// Anything the bidirectional search can walk: a neighbor relation plus a
/// lower bound on the moves between two words.
///
/// The relation must be symmetric, since the search also expands backwards
/// from the target. Closures `Fn(&str) -> Vec<String>` implement this with the
/// plain [`lower_bound`].
pub trait NeighborSource {
    fn neighbors_of(&self, word: &str) -> Vec<String>;

    fn estimate(&self, from: &str, to: &str) -> usize {
        lower_bound(from, to)
    }
}

impl<F> NeighborSource for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn neighbors_of(&self, word: &str) -> Vec<String> {
        self(word)
    }
}

/// Neighbor generation backed by a lexicon and its wildcard indexes.
#[derive(Debug, Clone, Copy)]
pub struct NeighborGenerator<'a> {
    lexicon: &'a Lexicon,
    mode: EditMode,
}

impl<'a> NeighborGenerator<'a> {
    pub fn new(lexicon: &'a Lexicon, mode: EditMode) -> Self {
        Self { lexicon, mode }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Every listed word one move away from `word`, excluding `word` itself.
    pub fn neighbors(&self, word: &str) -> BTreeSet<&'a str> {
        let mut out = self.substitutions(word);
        if self.mode == EditMode::Flex {
            out.extend(self.insertions(word));
            out.extend(self.deletions(word));
        }
        out
    }

    /// Whether `to` is reachable from `from` in a single move.
    pub fn is_move(&self, from: &str, to: &str) -> bool {
        self.neighbors(from).contains(to)
    }

    fn substitutions(&self, word: &str) -> BTreeSet<&'a str> {
        if !is_word(word) {
            return BTreeSet::new();
        }
        self.lexicon
            .pattern_index(word.len())
            .map(|index| index.neighbors_by_substitution(word))
            .unwrap_or_default()
    }

    fn insertions(&self, word: &str) -> Vec<&'a str> {
        let Some(longer) = self.lexicon.words_of_length(word.len() + 1) else {
            return Vec::new();
        };
        if !word.is_ascii() {
            return Vec::new();
        }

        let mut out = Vec::new();
        let mut candidate = String::with_capacity(word.len() + 1);
        for i in 0..=word.len() {
            for &letter in ALPHABET {
                candidate.clear();
                candidate.push_str(&word[..i]);
                candidate.push(letter as char);
                candidate.push_str(&word[i..]);
                if let Some(found) = longer.get(candidate.as_str()) {
                    out.push(found.as_str());
                }
            }
        }
        out
    }

    fn deletions(&self, word: &str) -> Vec<&'a str> {
        let Some(shorter) = word
            .len()
            .checked_sub(1)
            .and_then(|len| self.lexicon.words_of_length(len))
        else {
            return Vec::new();
        };
        if !word.is_ascii() {
            return Vec::new();
        }

        (0..word.len())
            .filter_map(|i| {
                let candidate = format!("{}{}", &word[..i], &word[i + 1..]);
                shorter.get(candidate.as_str()).map(String::as_str)
            })
            .collect()
    }
}

impl NeighborSource for NeighborGenerator<'_> {
    fn neighbors_of(&self, word: &str) -> Vec<String> {
        self.neighbors(word).into_iter().map(str::to_owned).collect()
    }

    fn estimate(&self, from: &str, to: &str) -> usize {
        match self.mode {
            EditMode::Classic => lower_bound(from, to),
            EditMode::Flex => flex_lower_bound(from, to),
        }
    }
}
