//! Solve many puzzles at once to see how a word list and configuration play.

use rand::Rng;
use rayon::prelude::*;

use crate::error::{GameError, SearchError};
use crate::lexicon::Lexicon;
use crate::neighbors::NeighborGenerator;
use crate::search::{search, SearchOutcome};
use crate::session::{GameConfig, GameSession};

/// Aggregate results of a survey
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyReport {
    pub found: usize,
    pub not_found: usize,
    pub exceeded: usize,
    /// `(moves, count)` for every move count seen among found paths, ascending
    pub distribution: Vec<(usize, usize)>,
}

impl SurveyReport {
    pub fn total(&self) -> usize {
        self.found + self.not_found + self.exceeded
    }

    /// Mean number of moves over found paths.
    pub fn average_moves(&self) -> Option<f64> {
        if self.found == 0 {
            return None;
        }
        let total_moves: usize = self.distribution.iter().map(|(m, c)| m * c).sum();
        Some(total_moves as f64 / self.found as f64)
    }
}

/// Search every pair in parallel with the configuration's mode, cap rule and
/// expansion ceiling. The lexicon's pattern indexes are shared across threads.
pub fn survey(lexicon: &Lexicon, config: &GameConfig, pairs: &[(String, String)]) -> SurveyReport {
    let generator = NeighborGenerator::new(lexicon, config.mode);

    let outcomes: Vec<Result<SearchOutcome, SearchError>> = pairs
        .par_iter()
        .map(|(start, target)| {
            let cap = config.move_cap(start, target);
            search(start, target, &generator, cap, config.expansion_ceiling)
        })
        .collect();

    let mut report = SurveyReport::default();
    let mut move_counts = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(SearchOutcome::Found(path)) => {
                report.found += 1;
                move_counts.push(path.moves());
            }
            Ok(SearchOutcome::NotFound) => report.not_found += 1,
            Err(SearchError::Exceeded { .. }) => report.exceeded += 1,
        }
    }

    let max_moves = move_counts.iter().copied().max().unwrap_or(0);
    let mut distribution = vec![0usize; max_moves + 1];
    for moves in move_counts {
        distribution[moves] += 1;
    }
    report.distribution = distribution
        .into_iter()
        .enumerate()
        .filter(|(_, count)| *count > 0)
        .collect();

    tracing::info!(
        pairs = pairs.len(),
        found = report.found,
        not_found = report.not_found,
        exceeded = report.exceeded,
        "survey finished"
    );
    report
}

/// Draw `n` random start/target pairs the way a new game would.
pub fn random_pairs<R: Rng>(
    session: &GameSession,
    rng: &mut R,
    n: usize,
) -> Result<Vec<(String, String)>, GameError> {
    (0..n).map(|_| session.random_pair(rng)).collect()
}
