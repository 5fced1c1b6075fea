//! # Word Morph
//!
//! Engine for the word-ladder puzzle: turn a start word into a target word one
//! edit at a time, where every intermediate word must be in the dictionary.
//!
//! The dictionary is indexed by length, same-length neighbors come from a lazily
//! built wildcard index, and hints/answers are computed with a bounded
//! bidirectional search that either returns a shortest path, proves that none
//! exists within the move cap, or gives up once its expansion ceiling is hit.

pub mod error;
pub mod gloss;
pub mod heuristic;
pub mod lexicon;
pub mod neighbors;
pub mod pattern_index;
pub mod search;
pub mod session;
pub mod survey;

pub use error::{GameError, GlossError, SearchError, WordError};
pub use heuristic::{flex_lower_bound, lower_bound};
pub use lexicon::{normalize_word, Lexicon};
pub use neighbors::{EditMode, NeighborGenerator, NeighborSource};
pub use pattern_index::PatternIndex;
pub use search::{search, Path, SearchOutcome};
pub use session::{GameConfig, GameSession, Hint, MoveOutcome};
pub use survey::{survey, SurveyReport};

/// Shortest admissible word length
pub const MIN_LEN: usize = 3;

/// Longest admissible word length
pub const MAX_LEN: usize = 14;

/// Letters a word may be built from
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Build the lexicon from the embedded word list
pub fn load_dictionary() -> Lexicon {
    Lexicon::build(include_str!("../dictionary/wordlist.txt"))
}
