//! Game state for one player: configuration, the active puzzle and its path.

use std::collections::BTreeSet;
use std::sync::Arc;

use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

use crate::error::GameError;
use crate::lexicon::{normalize_word, Lexicon};
use crate::neighbors::{EditMode, NeighborGenerator};
use crate::search::{search, Path, SearchOutcome, DEFAULT_EXPANSION_CEILING};
use crate::{MAX_LEN, MIN_LEN};

/// Attempts at drawing a target different from the start in classic mode
const PAIR_RETRIES: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: EditMode,
    pub allowed_lengths: BTreeSet<usize>,
    pub expansion_ceiling: usize,
    /// Move cap is this many moves per letter of the longer endpoint
    pub cap_factor: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: EditMode::Classic,
            allowed_lengths: BTreeSet::from([3, 4, 5]),
            expansion_ceiling: DEFAULT_EXPANSION_CEILING,
            cap_factor: 3,
        }
    }
}

impl GameConfig {
    pub fn move_cap(&self, start: &str, target: &str) -> usize {
        self.cap_factor * start.len().max(target.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Advanced,
    Reached,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    Next(String),
    AtTarget,
}

#[derive(Debug, Clone)]
struct Game {
    start: String,
    target: String,
    path: Vec<String>,
    cap: usize,
}

impl Game {
    fn current(&self) -> &str {
        self.path.last().map_or(self.start.as_str(), String::as_str)
    }

    fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    fn is_finished(&self) -> bool {
        self.current() == self.target
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    lexicon: Arc<Lexicon>,
    config: GameConfig,
    game: Option<Game>,
    answer: Option<Path>,
}

impl GameSession {
    pub fn new(lexicon: Arc<Lexicon>, config: GameConfig) -> Self {
        Self {
            lexicon,
            config,
            game: None,
            answer: None,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Swap in a new word list. Any game in progress is abandoned.
    pub fn set_lexicon(&mut self, lexicon: Arc<Lexicon>) {
        self.lexicon = lexicon;
        self.restart();
    }

    pub fn mode(&self) -> EditMode {
        self.config.mode
    }

    pub fn set_mode(&mut self, mode: EditMode) {
        self.config.mode = mode;
    }

    pub fn allowed_lengths(&self) -> &BTreeSet<usize> {
        &self.config.allowed_lengths
    }

    /// Allow or disallow words of length `len`. Returns whether it is now allowed.
    pub fn toggle_length(&mut self, len: usize) -> Result<bool, GameError> {
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return Err(GameError::LengthNotAllowed { len });
        }
        let lengths = &mut self.config.allowed_lengths;
        if !lengths.remove(&len) {
            lengths.insert(len);
            return Ok(true);
        }
        Ok(false)
    }

    fn generator(&self) -> NeighborGenerator<'_> {
        NeighborGenerator::new(&self.lexicon, self.config.mode)
    }

    fn admit(&self, raw: &str) -> Result<String, GameError> {
        let word = normalize_word(raw)?;
        if !self.config.allowed_lengths.contains(&word.len()) {
            return Err(GameError::LengthNotAllowed { len: word.len() });
        }
        if !self.lexicon.contains(&word) {
            return Err(GameError::NotInLexicon { word });
        }
        Ok(word)
    }

    /// Normalize and check a start/target pair for the current configuration.
    pub fn validate_endpoints(&self, start: &str, target: &str) -> Result<(String, String), GameError> {
        let start = self.admit(start)?;
        let target = self.admit(target)?;
        if !self.config.mode.allows_length_change() && start.len() != target.len() {
            return Err(GameError::LengthMismatch {
                start: start.len(),
                target: target.len(),
            });
        }
        Ok((start, target))
    }

    /// Draw a random start/target pair from the allowed, non-empty lengths.
    pub fn random_pair<R: Rng>(&self, rng: &mut R) -> Result<(String, String), GameError> {
        let lengths: Vec<usize> = self
            .config
            .allowed_lengths
            .iter()
            .copied()
            .filter(|&len| self.lexicon.words_of_length(len).is_some_and(|b| !b.is_empty()))
            .collect();

        match self.config.mode {
            EditMode::Classic => {
                let len = *lengths.choose(rng).ok_or(GameError::NoWords)?;
                let start = self.random_word(rng, len)?;
                let mut target = self.random_word(rng, len)?;
                for _ in 0..PAIR_RETRIES {
                    if target != start {
                        break;
                    }
                    target = self.random_word(rng, len)?;
                }
                Ok((start, target))
            }
            EditMode::Flex => {
                let start_len = *lengths.choose(rng).ok_or(GameError::NoWords)?;
                let target_len = *lengths.choose(rng).ok_or(GameError::NoWords)?;
                Ok((self.random_word(rng, start_len)?, self.random_word(rng, target_len)?))
            }
        }
    }

    fn random_word<R: Rng>(&self, rng: &mut R, len: usize) -> Result<String, GameError> {
        self.lexicon
            .words_of_length(len)
            .and_then(|bucket| bucket.iter().choose(rng))
            .cloned()
            .ok_or(GameError::NoWords)
    }

    pub fn start_game(&mut self, start: &str, target: &str) -> Result<(), GameError> {
        let (start, target) = self.validate_endpoints(start, target)?;
        let cap = self.config.move_cap(&start, &target);
        tracing::debug!(%start, %target, cap, mode = %self.config.mode, "game started");
        self.game = Some(Game {
            path: vec![start.clone()],
            start,
            target,
            cap,
        });
        self.answer = None;
        Ok(())
    }

    pub fn restart(&mut self) {
        self.game = None;
        self.answer = None;
    }

    pub fn is_active(&self) -> bool {
        self.game.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.game.as_ref().is_some_and(Game::is_finished)
    }

    pub fn start(&self) -> Option<&str> {
        self.game.as_ref().map(|g| g.start.as_str())
    }

    pub fn target(&self) -> Option<&str> {
        self.game.as_ref().map(|g| g.target.as_str())
    }

    pub fn current_word(&self) -> Option<&str> {
        self.game.as_ref().map(Game::current)
    }

    pub fn path(&self) -> &[String] {
        self.game.as_ref().map(|g| g.path.as_slice()).unwrap_or(&[])
    }

    pub fn cap(&self) -> usize {
        self.game.as_ref().map_or(0, |g| g.cap)
    }

    pub fn remaining_moves(&self) -> usize {
        self.game
            .as_ref()
            .map_or(0, |g| g.cap.saturating_sub(g.moves()))
    }

    pub fn last_answer(&self) -> Option<&Path> {
        self.answer.as_ref()
    }

    /// Play `word` as the next step of the path.
    pub fn play(&mut self, word: &str) -> Result<MoveOutcome, GameError> {
        let game = self.game.as_ref().ok_or(GameError::NotStarted)?;
        if game.is_finished() {
            return Err(GameError::AlreadyFinished);
        }

        let next = normalize_word(word)?;
        if !self.config.allowed_lengths.contains(&next.len()) {
            return Err(GameError::LengthNotAllowed { len: next.len() });
        }
        if !self.generator().is_move(game.current(), &next) {
            return Err(GameError::IllegalMove {
                from: game.current().to_owned(),
                to: next,
            });
        }
        if game.moves() + 1 > game.cap {
            return Err(GameError::CapExceeded { cap: game.cap });
        }

        let game = self.game.as_mut().ok_or(GameError::NotStarted)?;
        game.path.push(next);
        if game.is_finished() {
            Ok(MoveOutcome::Reached)
        } else {
            Ok(MoveOutcome::Advanced)
        }
    }

    /// Suggest the next word of a shortest path from the current word, within
    /// the moves left.
    pub fn hint(&self) -> Result<Hint, GameError> {
        let game = self.game.as_ref().ok_or(GameError::NotStarted)?;
        let remaining = game.cap.saturating_sub(game.moves());
        let outcome = search(
            game.current(),
            &game.target,
            &self.generator(),
            remaining,
            self.config.expansion_ceiling,
        )?;

        let path = outcome
            .into_path()
            .ok_or(GameError::NoPath { cap: remaining })?;
        Ok(match path.next_step() {
            Some(next) => Hint::Next(next.to_owned()),
            None => Hint::AtTarget,
        })
    }

    /// Play the hinted word. Returns the word played, or `None` at the target.
    pub fn apply_hint(&mut self) -> Result<Option<(String, MoveOutcome)>, GameError> {
        match self.hint()? {
            Hint::Next(word) => {
                let outcome = self.play(&word)?;
                Ok(Some((word, outcome)))
            }
            Hint::AtTarget => Ok(None),
        }
    }

    /// Compute and remember a shortest path from the start within the full cap.
    pub fn answer(&mut self) -> Result<Path, GameError> {
        let game = self.game.as_ref().ok_or(GameError::NotStarted)?;
        let outcome = search(
            &game.start,
            &game.target,
            &self.generator(),
            game.cap,
            self.config.expansion_ceiling,
        )?;
        match outcome {
            SearchOutcome::Found(path) => {
                self.answer = Some(path.clone());
                Ok(path)
            }
            SearchOutcome::NotFound => Err(GameError::NoPath { cap: game.cap }),
        }
    }
}
