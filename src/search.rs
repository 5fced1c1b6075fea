//! Bounded bidirectional shortest-path search.
//!
//! Two breadth-first frontiers grow from the start and from the target. Each
//! round expands whichever frontier is smaller by one full layer, which keeps
//! the work near the meet-in-the-middle O(b^(d/2)) instead of O(b^d).
//!
//! Candidates are cut with a branch-and-bound test against the move cap using
//! the neighbor source's lower bound toward the opposite root. This is not A*:
//! the order of expansion stays breadth-first, the bound only discards words
//! that could not finish within the cap even in the best case.
//!
//! Independently of the cap, every newly discovered word counts toward an
//! expansion ceiling. Crossing it aborts with [`SearchError::Exceeded`], so a
//! call always terminates in bounded time and memory.

use std::collections::HashMap;
use std::fmt;

use crate::error::SearchError;
use crate::neighbors::NeighborSource;

/// Default ceiling on newly discovered words per search
pub const DEFAULT_EXPANSION_CEILING: usize = 200_000;

/// An ordered chain of words from start to target, one move apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<String>);

impl Path {
    pub fn new(words: Vec<String>) -> Self {
        Self(words)
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn into_words(self) -> Vec<String> {
        self.0
    }

    /// Number of edits along the path.
    pub fn moves(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// The word right after the first one, if the path has any moves.
    pub fn next_step(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" → "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Path),
    /// Proven: no path of at most `move_cap` moves exists.
    NotFound,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }
}

/// One side of the search: every word it discovered with its distance from
/// the root and the word it was discovered from.
#[derive(Debug)]
struct Frontier<'r> {
    root: &'r str,
    depth: HashMap<String, usize>,
    prev: HashMap<String, String>,
    layer: Vec<String>,
    level: usize,
}

impl<'r> Frontier<'r> {
    fn new(root: &'r str) -> Self {
        Self {
            root,
            depth: HashMap::from([(root.to_owned(), 0)]),
            prev: HashMap::new(),
            layer: vec![root.to_owned()],
            level: 0,
        }
    }

    fn has_discovered(&self, word: &str) -> bool {
        self.depth.contains_key(word)
    }

    /// Words from `word` back to the root, `word` first.
    fn chain_to_root(&self, word: &str) -> Vec<String> {
        let mut chain = vec![word.to_owned()];
        let mut current = word;
        while let Some(prev) = self.prev.get(current) {
            chain.push(prev.clone());
            current = prev.as_str();
        }
        chain
    }
}

/// Running totals shared by both sides.
#[derive(Debug)]
struct Budget {
    move_cap: usize,
    ceiling: usize,
    expanded: usize,
}

impl Budget {
    /// Prune check: can a word at distance `g` with remaining bound `h` still
    /// finish within the cap?
    fn admits(&self, g: usize, h: usize) -> bool {
        g + h <= self.move_cap
    }

    fn record_discovery(&mut self) -> Result<(), SearchError> {
        self.expanded += 1;
        if self.expanded > self.ceiling {
            return Err(SearchError::Exceeded {
                ceiling: self.ceiling,
            });
        }
        Ok(())
    }
}

/// Expand one full layer of `this`. Returns the meeting word if a newly
/// discovered word was already discovered by `other`.
fn expand_step<N>(
    this: &mut Frontier<'_>,
    other: &Frontier<'_>,
    source: &N,
    budget: &mut Budget,
) -> Result<Option<String>, SearchError>
where
    N: NeighborSource + ?Sized,
{
    let layer = std::mem::take(&mut this.layer);
    let g = this.level + 1;
    let mut next = Vec::new();

    for u in &layer {
        for v in source.neighbors_of(u) {
            if !budget.admits(g, source.estimate(&v, other.root)) {
                continue;
            }
            if this.has_discovered(&v) {
                continue;
            }

            this.depth.insert(v.clone(), g);
            this.prev.insert(v.clone(), u.clone());
            budget.record_discovery()?;

            if other.has_discovered(&v) {
                return Ok(Some(v));
            }
            next.push(v);
        }
    }

    this.layer = next;
    this.level = g;
    Ok(None)
}

/// Join the two half-paths at `meet`.
fn reconstruct(left: &Frontier<'_>, right: &Frontier<'_>, meet: &str) -> Path {
    let mut words = left.chain_to_root(meet);
    words.reverse();
    words.extend(right.chain_to_root(meet).into_iter().skip(1));
    Path::new(words)
}

/// Find a shortest path from `start` to `target` of at most `move_cap` moves.
///
/// Returns [`SearchOutcome::NotFound`] when no such path exists and fails with
/// [`SearchError::Exceeded`] once more than `expansion_ceiling` words have been
/// discovered. Among several shortest paths, which one is returned depends on
/// neighbor enumeration order.
pub fn search<N>(
    start: &str,
    target: &str,
    source: &N,
    move_cap: usize,
    expansion_ceiling: usize,
) -> Result<SearchOutcome, SearchError>
where
    N: NeighborSource + ?Sized,
{
    if start == target {
        return Ok(SearchOutcome::Found(Path::new(vec![start.to_owned()])));
    }
    if source.estimate(start, target) > move_cap {
        return Ok(SearchOutcome::NotFound);
    }

    let mut left = Frontier::new(start);
    let mut right = Frontier::new(target);
    let mut budget = Budget {
        move_cap,
        ceiling: expansion_ceiling,
        expanded: 0,
    };

    while !left.layer.is_empty() && !right.layer.is_empty() {
        let expand_left = left.layer.len() <= right.layer.len();
        let meet = if expand_left {
            expand_step(&mut left, &right, source, &mut budget)?
        } else {
            expand_step(&mut right, &left, source, &mut budget)?
        };

        if let Some(meet) = meet {
            let path = reconstruct(&left, &right, &meet);
            tracing::debug!(
                start,
                target,
                moves = path.moves(),
                expanded = budget.expanded,
                "search met"
            );
            // The first meeting point is a shortest path; past the cap there is
            // no admissible answer at all.
            if path.moves() > move_cap {
                return Ok(SearchOutcome::NotFound);
            }
            return Ok(SearchOutcome::Found(path));
        }

        if left.level + right.level > move_cap {
            break;
        }
    }

    tracing::debug!(
        start,
        target,
        expanded = budget.expanded,
        left_level = left.level,
        right_level = right.level,
        "search exhausted"
    );
    Ok(SearchOutcome::NotFound)
}
