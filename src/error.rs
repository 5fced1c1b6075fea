//! Error types for word validation, search, game play and gloss lookups.

use crate::{MAX_LEN, MIN_LEN};

/// A token that cannot be admitted as a word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("\"{word}\" must contain only the letters a-z")]
    InvalidCharacters { word: String },
    #[error("\"{word}\" has {len} letters, expected {min}-{max}", min = MIN_LEN, max = MAX_LEN)]
    InvalidLength { word: String, len: usize },
}

/// The search gave up before reaching a definitive answer.
///
/// This means "unknown", never "unreachable": narrow the search space
/// (fewer lengths, smaller cap) instead of retrying as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search space too large: more than {ceiling} states expanded")]
    Exceeded { ceiling: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid word: {0}")]
    Word(#[from] WordError),
    #[error("no words available for the allowed lengths")]
    NoWords,
    #[error("length {len} is not among the allowed lengths")]
    LengthNotAllowed { len: usize },
    #[error("\"{word}\" is not in the word list")]
    NotInLexicon { word: String },
    #[error("classic mode needs start and target of equal length ({start} vs {target})")]
    LengthMismatch { start: usize, target: usize },
    #[error("no game in progress")]
    NotStarted,
    #[error("the target has already been reached")]
    AlreadyFinished,
    #[error("illegal move: {from} -> {to} is not a single allowed edit to a listed word")]
    IllegalMove { from: String, to: String },
    #[error("move cap of {cap} reached")]
    CapExceeded { cap: usize },
    #[error("no path found within {cap} moves")]
    NoPath { cap: usize },
    #[error(transparent)]
    Search(#[from] SearchError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlossError {
    #[error("{source_name} unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },
}
