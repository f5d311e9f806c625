//! Ranking of scored candidates.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A candidate domain together with its similarity score.
///
/// The ordering sorts higher scores first and breaks ties by name in
/// ascending code point order, so a sorted list is fully deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredDomain {
    /// Full candidate domain, extension included.
    pub name: String,
    /// Positional similarity to the original domain.
    pub score: usize,
}

impl ScoredDomain {
    /// Create a new scored candidate.
    pub fn new(name: impl Into<String>, score: usize) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl Ord for ScoredDomain {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for ScoredDomain {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort candidates by descending score with the name tie-break, then keep at
/// most `limit` of them.
pub fn rank_and_limit(mut scored: Vec<ScoredDomain>, limit: usize) -> Vec<ScoredDomain> {
    scored.sort();
    scored.truncate(limit);
    scored
}
