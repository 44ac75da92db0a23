//! In-memory social graph storage
//!
//! Owns every user, concept and relation in arena vectors with O(1) id
//! lookup, and maintains referential integrity between them: friendships
//! are symmetric, complementary relations are mirrored, and ratings are
//! registered on both participants as a single logical unit.

use super::concept::Concept;
use super::rating::Rating;
use super::relation::Relation;
use super::types::{ConceptId, RelationId, RelationType, UserId};
use super::user::User;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error("concept {0} not found")]
    ConceptNotFound(ConceptId),

    #[error(
        "{0} is not a valid score, expected a value between {min} and {max}",
        min = Rating::MIN_SCORE,
        max = Rating::MAX_SCORE
    )]
    InvalidScore(u8),

    #[error("{0} is not implemented")]
    Unsupported(&'static str),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory social graph
///
/// Entities live in arena vectors and reference each other by id, which
/// keeps concept-relation cycles safe and lookups O(1):
/// - users: UserId -> User
/// - concepts: ConceptId -> Concept
/// - relations: RelationId -> Relation
#[derive(Debug, Default, Clone)]
pub struct SocialGraph {
    users: Vec<User>,
    concepts: Vec<Concept>,
    relations: Vec<Relation>,
}

impl SocialGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        SocialGraph {
            users: Vec::new(),
            concepts: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// Create a new user with the given display name
    pub fn create_user(&mut self, name: impl Into<String>) -> UserId {
        let id = UserId::new(self.users.len() as u64);
        self.users.push(User::new(id, name));
        id
    }

    /// Create a new concept with the given label
    pub fn create_concept(&mut self, name: impl Into<String>) -> ConceptId {
        let id = ConceptId::new(self.concepts.len() as u64);
        self.concepts.push(Concept::new(id, name));
        id
    }

    /// Get a user by id
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(id.0 as usize)
    }

    /// Get a concept by id
    pub fn concept(&self, id: ConceptId) -> Option<&Concept> {
        self.concepts.get(id.0 as usize)
    }

    /// Get a relation by id
    pub fn relation(&self, id: RelationId) -> Option<&Relation> {
        self.relations.get(id.0 as usize)
    }

    /// All users, in creation order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All concepts, in creation order
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    /// All relations, in creation order
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Number of users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of concepts
    pub fn concept_count(&self) -> usize {
        self.concepts.len()
    }

    /// Number of relations
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// Establish a friendship between two users.
    ///
    /// Friendship is always reciprocal: both friend sets are updated as
    /// one logical unit. Set semantics make repeated calls idempotent.
    /// Callers are responsible for not befriending a user with themselves.
    pub fn befriend(&mut self, a: UserId, b: UserId) -> GraphResult<()> {
        self.ensure_user(a)?;
        self.ensure_user(b)?;

        self.users[a.0 as usize].friends.insert(b);
        self.users[b.0 as usize].friends.insert(a);
        Ok(())
    }

    /// Rate a concept on behalf of a user.
    ///
    /// The score must lie in
    /// [`Rating::MIN_SCORE`]`..=`[`Rating::MAX_SCORE`]. Exactly one rating
    /// exists per (user, concept) pair: a new rating replaces the previous
    /// one in both the user's and the concept's rating maps. Validation
    /// happens before either map is touched, so a failure leaves no
    /// partial state.
    pub fn rate(&mut self, user: UserId, concept: ConceptId, score: u8) -> GraphResult<()> {
        self.ensure_user(user)?;
        self.ensure_concept(concept)?;
        let rating = Rating::new(user, concept, score)?;

        self.users[user.0 as usize].ratings.insert(concept, rating);
        self.concepts[concept.0 as usize].ratings.insert(user, rating);
        Ok(())
    }

    /// Relate two concepts with a typed, directed edge.
    ///
    /// If the relation type has a complement, the mirrored relation is
    /// created as well, exactly once. Returns the id of the relation that
    /// was explicitly requested.
    pub fn relate(
        &mut self,
        source: ConceptId,
        relation_type: impl Into<RelationType>,
        target: ConceptId,
    ) -> GraphResult<RelationId> {
        self.relate_inner(source, relation_type.into(), target, false)
    }

    /// `is_complement` guards against infinite mutual recursion when the
    /// mirrored relation is created.
    fn relate_inner(
        &mut self,
        source: ConceptId,
        relation_type: RelationType,
        target: ConceptId,
        is_complement: bool,
    ) -> GraphResult<RelationId> {
        self.ensure_concept(source)?;
        self.ensure_concept(target)?;

        let id = RelationId::new(self.relations.len() as u64);
        let complement = if is_complement {
            None
        } else {
            relation_type.complement()
        };

        self.relations
            .push(Relation::new(id, source, relation_type, target));
        self.concepts[source.0 as usize].relations.push(id);
        self.concepts[target.0 as usize].referrers.push(id);

        if let Some(complement) = complement {
            self.relate_inner(target, complement, source, true)?;
        }

        Ok(id)
    }

    fn ensure_user(&self, id: UserId) -> GraphResult<()> {
        if (id.0 as usize) < self.users.len() {
            Ok(())
        } else {
            Err(GraphError::UserNotFound(id))
        }
    }

    fn ensure_concept(&self, id: ConceptId) -> GraphResult<()> {
        if (id.0 as usize) < self.concepts.len() {
            Ok(())
        } else {
            Err(GraphError::ConceptNotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_lookup() {
        let mut graph = SocialGraph::new();
        let julia = graph.create_user("Julia Banks");
        let jazz = graph.create_concept("Jazz");

        assert_eq!(graph.user(julia).unwrap().name, "Julia Banks");
        assert_eq!(graph.concept(jazz).unwrap().name, "Jazz");
        assert_eq!(graph.user_count(), 1);
        assert_eq!(graph.concept_count(), 1);
        assert!(graph.user(UserId::new(99)).is_none());
    }

    #[test]
    fn test_befriend_is_symmetric() {
        let mut graph = SocialGraph::new();
        let a = graph.create_user("A");
        let b = graph.create_user("B");

        graph.befriend(a, b).unwrap();

        assert!(graph.user(a).unwrap().is_friend(b));
        assert!(graph.user(b).unwrap().is_friend(a));
    }

    #[test]
    fn test_befriend_is_idempotent() {
        let mut graph = SocialGraph::new();
        let a = graph.create_user("A");
        let b = graph.create_user("B");

        graph.befriend(a, b).unwrap();
        graph.befriend(a, b).unwrap();
        graph.befriend(b, a).unwrap();

        assert_eq!(graph.user(a).unwrap().friend_count(), 1);
        assert_eq!(graph.user(b).unwrap().friend_count(), 1);
    }

    #[test]
    fn test_befriend_unknown_user_fails() {
        let mut graph = SocialGraph::new();
        let a = graph.create_user("A");
        let ghost = UserId::new(42);

        assert_eq!(
            graph.befriend(a, ghost),
            Err(GraphError::UserNotFound(ghost))
        );
        assert_eq!(graph.user(a).unwrap().friend_count(), 0);
    }

    #[test]
    fn test_rate_registers_on_both_sides() {
        let mut graph = SocialGraph::new();
        let julia = graph.create_user("Julia Banks");
        let jazz = graph.create_concept("Jazz");

        graph.rate(julia, jazz, 4).unwrap();

        let from_user = graph.user(julia).unwrap().rating_for(jazz).unwrap();
        let from_concept = graph.concept(jazz).unwrap().rating_from(julia).unwrap();
        assert_eq!(from_user.score(), 4);
        assert_eq!(from_user, from_concept);
    }

    #[test]
    fn test_rate_overwrites_previous_rating() {
        let mut graph = SocialGraph::new();
        let julia = graph.create_user("Julia Banks");
        let jazz = graph.create_concept("Jazz");

        graph.rate(julia, jazz, 1).unwrap();
        graph.rate(julia, jazz, 5).unwrap();

        assert_eq!(graph.user(julia).unwrap().ratings().len(), 1);
        assert_eq!(graph.concept(jazz).unwrap().ratings().len(), 1);
        assert_eq!(
            graph.user(julia).unwrap().rating_for(jazz).unwrap().score(),
            5
        );
    }

    #[test]
    fn test_rate_rejects_invalid_score_without_partial_state() {
        let mut graph = SocialGraph::new();
        let julia = graph.create_user("Julia Banks");
        let jazz = graph.create_concept("Jazz");

        assert_eq!(graph.rate(julia, jazz, 6), Err(GraphError::InvalidScore(6)));
        assert!(graph.user(julia).unwrap().ratings().is_empty());
        assert!(graph.concept(jazz).unwrap().ratings().is_empty());
    }

    #[test]
    fn test_relate_creates_complement_once() {
        let mut graph = SocialGraph::new();
        let twin_peaks = graph.create_concept("Twin Peaks");
        let david_lynch = graph.create_concept("David Lynch");

        let id = graph.relate(twin_peaks, "created_by", david_lynch).unwrap();

        // Exactly two relations: the requested one and its mirror.
        assert_eq!(graph.relation_count(), 2);

        let forward = graph.relation(id).unwrap();
        assert_eq!(forward.source, twin_peaks);
        assert_eq!(forward.target, david_lynch);
        assert_eq!(forward.relation_type.as_str(), "created_by");

        let mirror_id = graph.concept(david_lynch).unwrap().relations()[0];
        let mirror = graph.relation(mirror_id).unwrap();
        assert_eq!(mirror.source, david_lynch);
        assert_eq!(mirror.target, twin_peaks);
        assert_eq!(mirror.relation_type.as_str(), "creator_of");

        // Both concepts see one outgoing relation and one referrer.
        assert_eq!(graph.concept(twin_peaks).unwrap().relations().len(), 1);
        assert_eq!(graph.concept(twin_peaks).unwrap().referrers().len(), 1);
        assert_eq!(graph.concept(david_lynch).unwrap().relations().len(), 1);
        assert_eq!(graph.concept(david_lynch).unwrap().referrers().len(), 1);
    }

    #[test]
    fn test_relate_contains_mirrors_as_contained_by() {
        let mut graph = SocialGraph::new();
        let music = graph.create_concept("Music");
        let jazz = graph.create_concept("Jazz");

        graph.relate(music, "contains", jazz).unwrap();

        let mirror_id = graph.concept(jazz).unwrap().relations()[0];
        let mirror = graph.relation(mirror_id).unwrap();
        assert_eq!(mirror.relation_type.as_str(), "contained_by");
        assert_eq!(mirror.source, jazz);
        assert_eq!(mirror.target, music);
    }

    #[test]
    fn test_relate_unknown_type_is_one_directional() {
        let mut graph = SocialGraph::new();
        let a = graph.create_concept("A");
        let b = graph.create_concept("B");

        graph.relate(a, "inspired_by", b).unwrap();

        assert_eq!(graph.relation_count(), 1);
        assert_eq!(graph.concept(a).unwrap().relations().len(), 1);
        assert!(graph.concept(a).unwrap().referrers().is_empty());
        assert_eq!(graph.concept(b).unwrap().referrers().len(), 1);
        assert!(graph.concept(b).unwrap().relations().is_empty());
    }

    #[test]
    fn test_relate_unknown_concept_fails() {
        let mut graph = SocialGraph::new();
        let a = graph.create_concept("A");
        let ghost = ConceptId::new(9);

        assert_eq!(
            graph.relate(a, "contains", ghost),
            Err(GraphError::ConceptNotFound(ghost))
        );
        assert_eq!(graph.relation_count(), 0);
    }

    #[test]
    fn test_relation_cycles_are_tolerated() {
        let mut graph = SocialGraph::new();
        let a = graph.create_concept("A");
        let b = graph.create_concept("B");
        let c = graph.create_concept("C");

        graph.relate(a, "contains", b).unwrap();
        graph.relate(b, "contains", c).unwrap();
        graph.relate(c, "contains", a).unwrap();

        // Three requested relations plus three mirrors.
        assert_eq!(graph.relation_count(), 6);
        assert_eq!(graph.concept(a).unwrap().relations().len(), 2);
        assert_eq!(graph.concept(a).unwrap().referrers().len(), 2);
    }
}
