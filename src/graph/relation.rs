//! Relation implementation
//!
//! A relation is a directed, typed edge from one concept to another.
//! Certain relation types have a complement
//! ([`RelationType::complement`](super::types::RelationType::complement)):
//! when [`SocialGraph::relate`](super::store::SocialGraph::relate) creates
//! a relation of such a type, it also creates the mirrored relation, so
//!
//! ```text
//! relate(twin_peaks, "created_by", david_lynch)
//! ```
//!
//! produces exactly the same graph as
//!
//! ```text
//! relate(david_lynch, "creator_of", twin_peaks)
//! ```

use super::types::{ConceptId, RelationId, RelationType};
use serde::{Deserialize, Serialize};

/// A directed, typed edge between two concepts
///
/// Relations are immutable once created. They are registered into the
/// source concept's relation list and the target concept's referrer list
/// at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Unique identifier for this relation
    pub id: RelationId,

    /// The concept the relation originates from
    pub source: ConceptId,

    /// Classifier describing the nature of the association
    pub relation_type: RelationType,

    /// The concept the relation points at
    pub target: ConceptId,
}

impl Relation {
    pub(crate) fn new(
        id: RelationId,
        source: ConceptId,
        relation_type: RelationType,
        target: ConceptId,
    ) -> Self {
        Relation {
            id,
            source,
            relation_type,
            target,
        }
    }

    /// Check if this relation connects two concepts, in either direction
    pub fn connects(&self, a: ConceptId, b: ConceptId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_fields() {
        let relation = Relation::new(
            RelationId::new(0),
            ConceptId::new(1),
            RelationType::new("created_by"),
            ConceptId::new(2),
        );

        assert_eq!(relation.source, ConceptId::new(1));
        assert_eq!(relation.target, ConceptId::new(2));
        assert_eq!(relation.relation_type.as_str(), "created_by");
    }

    #[test]
    fn test_connects_ignores_direction() {
        let relation = Relation::new(
            RelationId::new(0),
            ConceptId::new(1),
            RelationType::new("contains"),
            ConceptId::new(2),
        );

        assert!(relation.connects(ConceptId::new(1), ConceptId::new(2)));
        assert!(relation.connects(ConceptId::new(2), ConceptId::new(1)));
        assert!(!relation.connects(ConceptId::new(1), ConceptId::new(3)));
    }
}
