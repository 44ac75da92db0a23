//! Concept implementation
//!
//! A concept is anything that can be promoted and rated: a restaurant, an
//! album, a film, a topic. Concepts relate to each other through
//! [`Relation`](super::relation::Relation)s, forming a directed graph in
//! which cycles are permitted.

use super::rating::Rating;
use super::types::{ConceptId, RelationId, UserId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A rateable, relatable node in the content graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    /// Unique identifier for this concept
    pub id: ConceptId,

    /// Human readable label
    pub name: String,

    /// Ratings given to this concept, indexed by the rating user
    pub(crate) ratings: IndexMap<UserId, Rating>,

    /// Outgoing relations (this concept is the source)
    pub(crate) relations: Vec<RelationId>,

    /// Incoming relations (this concept is the target)
    pub(crate) referrers: Vec<RelationId>,
}

impl Concept {
    pub(crate) fn new(id: ConceptId, name: impl Into<String>) -> Self {
        Concept {
            id,
            name: name.into(),
            ratings: IndexMap::new(),
            relations: Vec::new(),
            referrers: Vec::new(),
        }
    }

    /// The ratings given to this concept, indexed by user
    pub fn ratings(&self) -> &IndexMap<UserId, Rating> {
        &self.ratings
    }

    /// The rating a user gave to this concept, if any
    pub fn rating_from(&self, user: UserId) -> Option<&Rating> {
        self.ratings.get(&user)
    }

    /// Relations that originate from this concept
    pub fn relations(&self) -> &[RelationId] {
        &self.relations
    }

    /// Relations that point at this concept
    pub fn referrers(&self) -> &[RelationId] {
        &self.referrers
    }
}

impl PartialEq for Concept {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Concept {}

impl std::hash::Hash for Concept {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_concept_is_bare() {
        let concept = Concept::new(ConceptId::new(3), "Jazz");
        assert_eq!(concept.name, "Jazz");
        assert!(concept.ratings().is_empty());
        assert!(concept.relations().is_empty());
        assert!(concept.referrers().is_empty());
    }

    #[test]
    fn test_concept_equality_by_id() {
        let a = Concept::new(ConceptId::new(1), "Jazz");
        let b = Concept::new(ConceptId::new(1), "Rock");
        let c = Concept::new(ConceptId::new(2), "Jazz");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
