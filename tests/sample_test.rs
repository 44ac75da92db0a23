use afinidad::graph::Rating;
use afinidad::sample::{generate, SampleConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn small_config() -> SampleConfig {
    SampleConfig {
        user_count: 40,
        ratings_per_user: vec![2, 3],
        friends_per_user: vec![2, 3],
    }
}

#[test]
fn test_generate_creates_requested_users_with_unique_names() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = generate(&small_config(), &mut rng).unwrap();

    assert_eq!(graph.user_count(), 40);
    let names: HashSet<&str> = graph.users().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names.len(), 40);
}

#[test]
fn test_generate_friendships_are_symmetric_and_never_self() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = generate(&small_config(), &mut rng).unwrap();

    for user in graph.users() {
        assert!(!user.is_friend(user.id));
        for &friend in user.friends() {
            assert!(graph.user(friend).unwrap().is_friend(user.id));
        }
    }
}

#[test]
fn test_generate_every_user_gets_friends_from_the_distribution() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = generate(&small_config(), &mut rng).unwrap();

    for user in graph.users() {
        // Each user draws at least 2 friendships of their own; incoming
        // friendships from other users' draws only add to that.
        assert!(user.friend_count() >= 2);
    }
}

#[test]
fn test_generate_ratings_follow_the_distribution() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = generate(&small_config(), &mut rng).unwrap();

    for user in graph.users() {
        let count = user.ratings().len();
        assert!(count == 2 || count == 3, "unexpected rating count {}", count);

        for rating in user.ratings().values() {
            assert!(rating.score() <= Rating::MAX_SCORE);
            assert_eq!(rating.user, user.id);

            // Registered on the concept side as well.
            let concept = graph.concept(rating.concept).unwrap();
            assert_eq!(concept.rating_from(user.id), Some(rating));
        }
    }
}

#[test]
fn test_generate_builds_the_concept_taxonomy() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = generate(&small_config(), &mut rng).unwrap();

    for name in ["Restaurants", "Music", "Movies", "Jazz", "Heavy metal"] {
        assert!(
            graph.concepts().iter().any(|c| c.name == name),
            "concept {:?} missing",
            name
        );
    }

    // Every contains/created_by relation has its mirror.
    for relation in graph.relations() {
        if let Some(complement) = relation.relation_type.complement() {
            let mirrored = graph
                .concept(relation.target)
                .unwrap()
                .relations()
                .iter()
                .any(|&id| {
                    let r = graph.relation(id).unwrap();
                    r.relation_type == complement && r.target == relation.source
                });
            assert!(mirrored, "missing mirror for {:?}", relation);
        }
    }
}

#[test]
fn test_generate_is_deterministic_for_a_seed() {
    let mut rng_a = StdRng::seed_from_u64(11);
    let mut rng_b = StdRng::seed_from_u64(11);
    let graph_a = generate(&small_config(), &mut rng_a).unwrap();
    let graph_b = generate(&small_config(), &mut rng_b).unwrap();

    let names_a: Vec<&str> = graph_a.users().iter().map(|u| u.name.as_str()).collect();
    let names_b: Vec<&str> = graph_b.users().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names_a, names_b);

    for (a, b) in graph_a.users().iter().zip(graph_b.users()) {
        assert_eq!(a.friends(), b.friends());
    }
}

#[test]
fn test_generate_handles_tiny_graphs() {
    // Two users cannot satisfy a draw of 3 friends; the generator caps
    // the draw instead of spinning.
    let config = SampleConfig {
        user_count: 2,
        ratings_per_user: vec![1],
        friends_per_user: vec![3],
    };
    let mut rng = StdRng::seed_from_u64(3);
    let graph = generate(&config, &mut rng).unwrap();

    assert_eq!(graph.user_count(), 2);
    for user in graph.users() {
        assert!(user.friend_count() <= 1);
    }
}
