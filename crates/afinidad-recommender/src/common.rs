//! Shared utilities for recommendation algorithms
//!
//! Provides a read-only, optimized view of the friendship topology for
//! algorithm execution.

use std::collections::HashMap;

/// User identifier type (u64)
pub type UserId = u64;

/// A dense, integer-indexed view of the friendship topology using Compressed
/// Sparse Row (CSR) format.
///
/// Friendship is symmetric, so a single adjacency structure covers both
/// directions: if index `a` lists index `b`, then `b` lists `a`.
pub struct SocialView {
    /// Number of users
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to UserId
    pub index_to_user: Vec<UserId>,
    /// Mapping from UserId to dense index
    pub user_to_index: HashMap<UserId, usize>,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of friend indices
    pub targets: Vec<usize>,
}

impl SocialView {
    /// Get the number of friends of a user (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get the friends of a user (by index)
    pub fn friends_of(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Build a SocialView from per-user friend lists.
    ///
    /// `friend_sets[i]` holds the dense indices of user `i`'s friends. The
    /// caller is responsible for symmetry; this constructor only flattens.
    pub fn from_friend_sets(index_to_user: Vec<UserId>, friend_sets: Vec<Vec<usize>>) -> Self {
        let node_count = index_to_user.len();

        let mut user_to_index = HashMap::with_capacity(node_count);
        for (idx, &user) in index_to_user.iter().enumerate() {
            user_to_index.insert(user, idx);
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();

        offsets.push(0);
        for friends in friend_sets {
            targets.extend(friends);
            offsets.push(targets.len());
        }

        SocialView {
            node_count,
            index_to_user,
            user_to_index,
            offsets,
            targets,
        }
    }
}
