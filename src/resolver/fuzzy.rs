//! Last-resort fuzzy ranking of every player against a query.
//!
//! Two independent metrics are computed against each stored name: Jaro
//! similarity (higher is closer) and Damerau-Levenshtein distance (lower is
//! closer). Players that appear in both top lists are strong candidates.

use std::collections::HashSet;
use strsim::{damerau_levenshtein, jaro};
use tracing::debug;

use crate::constants::fuzzy::{
    DISTANCE_THRESHOLD, FALLBACK_PER_METRIC, SIMILARITY_THRESHOLD, TOP_N,
};
use crate::names::sanitize;
use crate::reference::Player;

/// Score of a candidate, tagged with the metric that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    /// Jaro similarity, 0.0 to 1.0
    Similarity(f64),
    /// Damerau-Levenshtein edit distance
    Distance(usize),
}

/// Acceptance thresholds for fuzzy candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// A similarity strictly above this is confident
    pub similarity: f64,
    /// A distance strictly below this is confident
    pub distance: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            similarity: SIMILARITY_THRESHOLD,
            distance: DISTANCE_THRESHOLD,
        }
    }
}

impl Score {
    pub fn is_confident(&self, thresholds: &Thresholds) -> bool {
        match *self {
            Score::Similarity(similarity) => similarity > thresholds.similarity,
            Score::Distance(distance) => distance < thresholds.distance,
        }
    }
}

/// A "did you mean" guess.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub player_id: String,
    pub fullname: String,
    pub score: Score,
}

/// Output of [`rank`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ranking {
    pub candidates: Vec<Candidate>,
    /// True when both metrics agreed on at least one player
    pub agreed: bool,
}

impl Ranking {
    /// First candidate, in ranked order, whose own metric clears its threshold.
    pub fn first_confident(&self, thresholds: &Thresholds) -> Option<&Candidate> {
        self.candidates
            .iter()
            .find(|candidate| candidate.score.is_confident(thresholds))
    }
}

/// Ranks every player against the query.
///
/// Candidates are the similarity top list entries whose player is also in the
/// distance top list, in similarity order. When the two lists share nobody the
/// result interleaves the two best of each metric (similarity first), without
/// duplicates, and `agreed` is false. Ties keep storage order, so the output is
/// deterministic for a fixed table.
pub fn rank(input: &str, players: &[Player]) -> Ranking {
    let query = sanitize(input.trim());

    let mut by_similarity: Vec<(usize, f64)> = players
        .iter()
        .enumerate()
        .map(|(index, player)| (index, jaro(&query, &player.match_name)))
        .collect();
    by_similarity.sort_by(|a, b| b.1.total_cmp(&a.1));
    by_similarity.truncate(TOP_N);

    let mut by_distance: Vec<(usize, usize)> = players
        .iter()
        .enumerate()
        .map(|(index, player)| (index, damerau_levenshtein(&query, &player.match_name)))
        .collect();
    by_distance.sort_by_key(|&(_, distance)| distance);
    by_distance.truncate(TOP_N);

    let in_distance_top: HashSet<usize> = by_distance.iter().map(|&(index, _)| index).collect();
    let agreed: Vec<Candidate> = by_similarity
        .iter()
        .filter(|(index, _)| in_distance_top.contains(index))
        .map(|&(index, similarity)| candidate(&players[index], Score::Similarity(similarity)))
        .collect();

    if !agreed.is_empty() {
        debug!("Fuzzy ranking for '{query}': {} agreed candidates", agreed.len());
        return Ranking {
            candidates: agreed,
            agreed: true,
        };
    }

    let mut seen = HashSet::new();
    let mut fallback = Vec::with_capacity(FALLBACK_PER_METRIC * 2);
    for position in 0..FALLBACK_PER_METRIC {
        if let Some(&(index, similarity)) = by_similarity.get(position)
            && seen.insert(index)
        {
            fallback.push(candidate(&players[index], Score::Similarity(similarity)));
        }
        if let Some(&(index, distance)) = by_distance.get(position)
            && seen.insert(index)
        {
            fallback.push(candidate(&players[index], Score::Distance(distance)));
        }
    }
    debug!("Fuzzy ranking for '{query}': no agreement, {} fallback guesses", fallback.len());

    Ranking {
        candidates: fallback,
        agreed: false,
    }
}

fn candidate(player: &Player, score: Score) -> Candidate {
    Candidate {
        player_id: player.id.clone(),
        fullname: player.fullname.clone(),
        score,
    }
}
