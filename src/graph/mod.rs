//! Core social graph implementation
//!
//! This module implements the entity layer:
//! - Users with symmetric friendships and concept ratings
//! - Concepts related to each other through directed, typed relations,
//!   with complementary types mirrored automatically
//! - Bounded-score ratings registered on both participants
//! - In-memory arena storage with id-based references

pub mod concept;
pub mod rating;
pub mod relation;
pub mod store;
pub mod types;
pub mod user;

// Re-export main types
pub use concept::Concept;
pub use rating::Rating;
pub use relation::Relation;
pub use store::{GraphError, GraphResult, SocialGraph};
pub use types::{ConceptId, RelationId, RelationType, UserId};
pub use user::User;
