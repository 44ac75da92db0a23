//! Afinidad
//!
//! An in-memory social and interest graph: users establish symmetric
//! friendships and rate concepts, concepts relate to each other through
//! typed, auto-mirrored relations, and a recommendation engine ranks
//! potential friends by shared connections.
//!
//! # Architecture
//!
//! - `graph`: the entity layer (users, concepts, relations, ratings)
//!   behind an arena-backed [`SocialGraph`] store
//! - `recommend`: adapter over the pure ranking algorithm in the
//!   `afinidad-recommender` crate
//! - `sample`: random graph population for demos and benchmarks
//!
//! ## Example Usage
//!
//! ```rust
//! use afinidad::graph::SocialGraph;
//!
//! let mut graph = SocialGraph::new();
//!
//! // Create users and a friendship
//! let alice = graph.create_user("Alice Ballard");
//! let bob = graph.create_user("Bob Windsor");
//! graph.befriend(alice, bob).unwrap();
//!
//! // Rate a concept
//! let jazz = graph.create_concept("Jazz");
//! graph.rate(alice, jazz, 5).unwrap();
//!
//! assert!(graph.user(alice).unwrap().is_friend(bob));
//! assert_eq!(graph.concept(jazz).unwrap().ratings().len(), 1);
//!
//! // Ask for friend suggestions (empty on such a tiny graph)
//! assert!(graph.suggest_friends(alice).is_empty());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod recommend;
pub mod sample;

// Re-export main types for convenience
pub use graph::{
    Concept, ConceptId, GraphError, GraphResult, Rating, Relation, RelationId, RelationType,
    SocialGraph, User, UserId,
};

pub use recommend::{ConceptSuggestion, FriendSuggestion};

/// Crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
