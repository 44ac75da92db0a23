pub mod common;
pub mod suggest;

pub use common::{SocialView, UserId};
pub use suggest::{suggest_friends, FriendSuggestion, MIN_RAW_COUNT, SUGGESTION_LIMIT};
