//! Friend recommendation module
//!
//! The ranking algorithm itself lives in the `afinidad-recommender`
//! crate and operates on a read-only topology view. This module provides
//! the integration/adapter layer between [`SocialGraph`] and that view.

use crate::graph::{ConceptId, GraphError, GraphResult, SocialGraph, UserId};
use afinidad_recommender::{suggest_friends as rank_candidates, SocialView};
use rustc_hash::{FxHashMap, FxHashSet};

// Re-export the algorithm's tuning constants
pub use afinidad_recommender::{MIN_RAW_COUNT, SUGGESTION_LIMIT};

/// A potential friend for a user, produced by
/// [`SocialGraph::suggest_friends`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendSuggestion {
    /// The suggested user
    pub user: UserId,

    /// Affinity rank; higher means more shared connections
    pub rank: u32,

    /// Users who are friends with both the target user and the candidate
    pub mutual_friends: FxHashSet<UserId>,
}

/// A concept a user may be interested in, produced by
/// [`SocialGraph::suggest_concepts`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptSuggestion {
    /// The suggested concept
    pub concept: ConceptId,
}

/// Build a friendship view from the graph for algorithm execution.
///
/// Users are indexed in creation order and friend sets are flattened in
/// insertion order, so the resulting view (and everything ranked on it)
/// is deterministic for a given graph.
pub fn build_view(graph: &SocialGraph) -> SocialView {
    let mut index_to_user = Vec::with_capacity(graph.user_count());
    let mut user_to_index = FxHashMap::default();

    for (idx, user) in graph.users().iter().enumerate() {
        index_to_user.push(user.id.as_u64());
        user_to_index.insert(user.id, idx);
    }

    let friend_sets: Vec<Vec<usize>> = graph
        .users()
        .iter()
        .map(|user| {
            user.friends()
                .iter()
                .map(|friend| user_to_index[friend])
                .collect()
        })
        .collect();

    tracing::debug!(users = index_to_user.len(), "built friendship view");
    SocialView::from_friend_sets(index_to_user, friend_sets)
}

impl SocialGraph {
    /// Suggest potential friends for a user, ordered by decreasing
    /// affinity.
    ///
    /// Candidates are users who are not the target and not already
    /// friends with them, ranked by how many of the target's friends they
    /// share. The operation is total: unknown or isolated users simply
    /// get an empty list.
    pub fn suggest_friends(&self, user: UserId) -> Vec<FriendSuggestion> {
        let view = build_view(self);

        rank_candidates(&view, user.as_u64())
            .into_iter()
            .map(|s| FriendSuggestion {
                user: UserId::new(s.user),
                rank: s.rank,
                mutual_friends: s.mutual_friends.into_iter().map(UserId::new).collect(),
            })
            .collect()
    }

    /// Suggest concepts that a user may be interested in.
    ///
    /// Not implemented yet; always fails with
    /// [`GraphError::Unsupported`]. Callers must treat this as a hard
    /// failure, not an empty result.
    pub fn suggest_concepts(&self, _user: UserId) -> GraphResult<Vec<ConceptSuggestion>> {
        Err(GraphError::Unsupported("concept suggestions"))
    }
}
