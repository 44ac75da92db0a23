//! User implementation
//!
//! Users can establish friendships with other users and rate concepts.
//! Both mutations go through the store
//! ([`SocialGraph::befriend`](super::store::SocialGraph::befriend) and
//! [`SocialGraph::rate`](super::store::SocialGraph::rate)) so that both
//! sides of a friendship or rating stay consistent.

use super::rating::Rating;
use super::types::{ConceptId, UserId};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// An end user of the social graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user
    pub id: UserId,

    /// The user's full name, used for display only
    pub name: String,

    /// Friends of this user. Friendship is reciprocal: if A lists B, B
    /// lists A. Insertion order is preserved so traversals are
    /// deterministic.
    pub(crate) friends: IndexSet<UserId>,

    /// Ratings given by this user, indexed by the rated concept
    pub(crate) ratings: IndexMap<ConceptId, Rating>,
}

impl User {
    pub(crate) fn new(id: UserId, name: impl Into<String>) -> Self {
        User {
            id,
            name: name.into(),
            friends: IndexSet::new(),
            ratings: IndexMap::new(),
        }
    }

    /// The set of this user's friends
    pub fn friends(&self) -> &IndexSet<UserId> {
        &self.friends
    }

    /// Check whether another user is a friend of this one
    pub fn is_friend(&self, other: UserId) -> bool {
        self.friends.contains(&other)
    }

    /// Number of friends
    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }

    /// The ratings given by this user, indexed by the rated concept
    pub fn ratings(&self) -> &IndexMap<ConceptId, Rating> {
        &self.ratings
    }

    /// The rating this user gave to a concept, if any
    pub fn rating_for(&self, concept: ConceptId) -> Option<&Rating> {
        self.ratings.get(&concept)
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl std::hash::Hash for User {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
