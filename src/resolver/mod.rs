//! Team and player identity resolution.
//!
//! Both resolvers borrow an immutable [`ReferenceStore`](crate::reference::ReferenceStore)
//! and perform only local, synchronous lookups.

mod fuzzy;
mod player;
mod team;

pub use fuzzy::{Candidate, Ranking, Score, Thresholds, rank};
pub use player::{PlayerResolver, Stage};
pub use team::TeamResolver;

/// Outcome of a resolution attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    /// A single confident match
    Resolved(T),
    /// No confident match; ranked guesses for a "did you mean" reply
    Ambiguous(Vec<Candidate>),
    /// Nothing to go on
    NotFound,
}

impl<T> Resolution<T> {
    pub fn resolved(self) -> Option<T> {
        match self {
            Resolution::Resolved(value) => Some(value),
            Resolution::Ambiguous(_) | Resolution::NotFound => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}
