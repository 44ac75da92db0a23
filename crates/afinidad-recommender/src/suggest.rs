//! Friend suggestion ranking
//!
//! Ranks candidate friends for a user by how often they appear in the
//! user's second-degree network (friends of friends).

use super::common::{SocialView, UserId};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Maximum number of suggestions returned per call
pub const SUGGESTION_LIMIT: usize = 8;

/// Minimum number of network appearances a candidate needs to qualify.
/// The reported rank is the raw appearance count halved, so this floor
/// keeps every returned rank at 2 or above.
pub const MIN_RAW_COUNT: u32 = 4;

/// A single friend suggestion produced by [`suggest_friends`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FriendSuggestion {
    /// The suggested user
    pub user: UserId,
    /// Affinity rank: the candidate's raw appearance count in the
    /// second-degree network, halved (integer division)
    pub rank: u32,
    /// Users who are friends with both the target user and the candidate
    pub mutual_friends: HashSet<UserId>,
}

/// Suggest potential friends for a user.
///
/// Walks the user's second-degree network and tallies how many times each
/// non-friend appears, then returns the most frequent candidates in
/// decreasing affinity order. Ties keep the order in which candidates were
/// first discovered, which makes the output deterministic for a given view.
///
/// The operation is total: an unknown user, a user with no friends, or a
/// network that consists only of existing friends all yield an empty list.
pub fn suggest_friends(view: &SocialView, user: UserId) -> Vec<FriendSuggestion> {
    let Some(&u_idx) = view.user_to_index.get(&user) else {
        return Vec::new();
    };

    let friend_set: HashSet<usize> = view.friends_of(u_idx).iter().copied().collect();

    // 1. Tally the network: one occurrence per (friend, friend-of-friend)
    //    pair. The user and existing friends are excluded here, before any
    //    ranking, so they never occupy a suggestion slot. The tally is a
    //    fresh accumulator local to this call.
    let mut tally: IndexMap<usize, u32> = IndexMap::new();
    for &friend in view.friends_of(u_idx) {
        for &candidate in view.friends_of(friend) {
            if candidate == u_idx || friend_set.contains(&candidate) {
                continue;
            }
            *tally.entry(candidate).or_insert(0) += 1;
        }
    }

    // 2. Keep the most frequent candidates. The sort is stable, so equal
    //    counts stay in discovery order.
    let mut ranked: Vec<(usize, u32)> = tally.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(SUGGESTION_LIMIT);
    ranked.retain(|&(_, count)| count >= MIN_RAW_COUNT);

    // 3. Resolve mutual friends and map indices back to UserIds.
    ranked
        .into_iter()
        .map(|(idx, count)| {
            let mutual_friends = view
                .friends_of(idx)
                .iter()
                .copied()
                .filter(|i| friend_set.contains(i))
                .map(|i| view.index_to_user[i])
                .collect();

            FriendSuggestion {
                user: view.index_to_user[idx],
                rank: count / 2,
                mutual_friends,
            }
        })
        .collect()
}
