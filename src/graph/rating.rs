//! Rating implementation
//!
//! A rating is a bounded-score association between a user and a concept.
//! Ratings are registered into both participants' rating maps by
//! [`SocialGraph::rate`](super::store::SocialGraph::rate) as soon as they
//! are constructed, replacing any previous rating for the same pair.

use super::store::{GraphError, GraphResult};
use super::types::{ConceptId, UserId};
use serde::{Deserialize, Serialize};

/// A score given by a user to a concept
///
/// All fields are read only once constructed. The score always lies in
/// `MIN_SCORE..=MAX_SCORE`; the constructor rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// The user who created this rating
    pub user: UserId,

    /// The concept being rated
    pub concept: ConceptId,

    score: u8,
}

impl Rating {
    /// Lowest accepted score
    pub const MIN_SCORE: u8 = 0;

    /// Highest accepted score
    pub const MAX_SCORE: u8 = 5;

    /// Create a new rating, validating the score range
    pub fn new(user: UserId, concept: ConceptId, score: u8) -> GraphResult<Self> {
        if !(Self::MIN_SCORE..=Self::MAX_SCORE).contains(&score) {
            return Err(GraphError::InvalidScore(score));
        }

        Ok(Rating {
            user,
            concept,
            score,
        })
    }

    /// The score given to the rated concept
    pub fn score(&self) -> u8 {
        self.score
    }
}
