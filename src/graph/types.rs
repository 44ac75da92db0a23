//! Core type definitions for the social graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct UserId(pub u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        UserId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id)
    }
}

/// Unique identifier for a concept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ConceptId(pub u64);

impl ConceptId {
    pub fn new(id: u64) -> Self {
        ConceptId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConceptId({})", self.0)
    }
}

impl From<u64> for ConceptId {
    fn from(id: u64) -> Self {
        ConceptId(id)
    }
}

/// Unique identifier for a relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RelationId(pub u64);

impl RelationId {
    pub fn new(id: u64) -> Self {
        RelationId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RelationId({})", self.0)
    }
}

impl From<u64> for RelationId {
    fn from(id: u64) -> Self {
        RelationId(id)
    }
}

/// Complementary relation type pairs. Declaring one end of a relation with
/// a type listed here implicitly declares the reverse relation with its
/// complement.
const COMPLEMENTARY_TYPES: [(&str, &str); 2] = [
    ("created_by", "creator_of"),
    ("contains", "contained_by"),
];

/// Relation type (e.g., "created_by", "contains")
///
/// An arbitrary string classifier describing the nature of the association
/// between two concepts. The well-known values are:
///
/// - `created_by`: who or what is behind the creation of the source
///   concept (a person, a band, an organization).
/// - `creator_of`: complement of `created_by`.
/// - `contained_by`: the source concept is a part, example or
///   specialization of the target, forming topic hierarchies.
/// - `contains`: complement of `contained_by`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RelationType(String);

impl RelationType {
    pub fn new(relation_type: impl Into<String>) -> Self {
        RelationType(relation_type.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Look up the complementary relation type, if this type has one.
    pub fn complement(&self) -> Option<RelationType> {
        COMPLEMENTARY_TYPES.iter().find_map(|&(a, b)| {
            if self.0 == a {
                Some(RelationType::new(b))
            } else if self.0 == b {
                Some(RelationType::new(a))
            } else {
                None
            }
        })
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RelationType {
    fn from(s: String) -> Self {
        RelationType(s)
    }
}

impl From<&str> for RelationType {
    fn from(s: &str) -> Self {
        RelationType(s.to_string())
    }
}
