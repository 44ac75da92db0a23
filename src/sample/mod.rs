//! Sample data generation
//!
//! Builds a populated graph (users, a fixed concept taxonomy, random
//! friendships and ratings) for exercising the recommendation engine.
//! Pure graph-population plumbing: everything it produces goes through
//! the ordinary [`SocialGraph`] mutation entry points.

use crate::graph::{ConceptId, GraphResult, Rating, SocialGraph};
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Knobs for [`generate`]
///
/// The per-user counts are discrete distributions sampled uniformly: a
/// value that appears twice is twice as likely to be drawn.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// Number of users to create. Must stay below the number of distinct
    /// names the pools can produce (a few thousand), or name generation
    /// cannot terminate.
    pub user_count: usize,

    /// Distribution of ratings created per user
    pub ratings_per_user: Vec<usize>,

    /// Distribution of friendships established per user
    pub friends_per_user: Vec<usize>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        SampleConfig {
            user_count: 500,
            ratings_per_user: vec![8, 9, 10, 10, 11, 11, 12, 12, 13, 14, 15],
            friends_per_user: vec![5, 6, 7, 8, 8, 9, 9, 9, 10, 12, 15, 25],
        }
    }
}

/// Generate a populated social graph.
///
/// Creates `user_count` uniquely named users and the fixed concept
/// taxonomy, then draws a friend count and a rating count for every user
/// from the configured distributions. Friends and rated concepts are
/// sampled without replacement: no self-friendships, no duplicate
/// friendships, at most one rating per (user, concept) pair.
pub fn generate(config: &SampleConfig, rng: &mut impl Rng) -> GraphResult<SocialGraph> {
    tracing::debug!(users = config.user_count, "generating sample graph");

    let mut graph = SocialGraph::new();

    // Create users with unique names
    let mut taken = FxHashSet::default();
    let mut users = Vec::with_capacity(config.user_count);
    for _ in 0..config.user_count {
        let name = loop {
            let name = random_user_name(rng);
            if taken.insert(name.clone()) {
                break name;
            }
        };
        users.push(graph.create_user(name));
    }

    let concepts = build_taxonomy(&mut graph)?;

    for &user in &users {
        // Establish friendships. The draw is capped by the remaining
        // candidates so the rejection loop terminates on small graphs.
        let drawn = config.friends_per_user.choose(rng).copied().unwrap_or(0);
        let capacity = users
            .len()
            .saturating_sub(1)
            .saturating_sub(graph.user(user).expect("user just created").friend_count());
        for _ in 0..drawn.min(capacity) {
            loop {
                let friend = users[rng.gen_range(0..users.len())];
                let known = graph.user(user).expect("user just created").is_friend(friend);
                if friend != user && !known {
                    graph.befriend(user, friend)?;
                    break;
                }
            }
        }

        // Rate concepts
        let drawn = config.ratings_per_user.choose(rng).copied().unwrap_or(0);
        for _ in 0..drawn.min(concepts.len()) {
            loop {
                let concept = concepts[rng.gen_range(0..concepts.len())];
                let rated = graph
                    .user(user)
                    .expect("user just created")
                    .rating_for(concept)
                    .is_some();
                if !rated {
                    let score = rng.gen_range(Rating::MIN_SCORE..=Rating::MAX_SCORE);
                    graph.rate(user, concept, score)?;
                    break;
                }
            }
        }
    }

    tracing::info!(
        users = graph.user_count(),
        concepts = graph.concept_count(),
        relations = graph.relation_count(),
        "sample graph ready"
    );
    Ok(graph)
}

/// Taxonomy builder: tracks every defined concept so the caller gets the
/// full list back for random sampling.
struct Taxonomy<'a> {
    graph: &'a mut SocialGraph,
    concepts: Vec<ConceptId>,
}

impl Taxonomy<'_> {
    fn define(&mut self, name: &str) -> ConceptId {
        let id = self.graph.create_concept(name);
        self.concepts.push(id);
        id
    }

    fn contains(&mut self, parent: ConceptId, children: &[ConceptId]) -> GraphResult<()> {
        for &child in children {
            self.graph.relate(parent, "contains", child)?;
        }
        Ok(())
    }

    fn created_by(&mut self, work: ConceptId, author: ConceptId) -> GraphResult<()> {
        self.graph.relate(work, "created_by", author)?;
        Ok(())
    }
}

/// Build the fixed concept taxonomy: restaurants, music and movies,
/// nested through `contains` relations, with works tied to their authors
/// through `created_by`.
fn build_taxonomy(graph: &mut SocialGraph) -> GraphResult<Vec<ConceptId>> {
    let mut t = Taxonomy {
        graph,
        concepts: Vec::new(),
    };

    // Restaurants
    let restaurants = t.define("Restaurants");

    let mexican = t.define("Mexican restaurants");
    let mexican_venues =
        ["La vieja cantina", "La Tarántula", "Chihuahua"].map(|name| t.define(name));
    t.contains(mexican, &mexican_venues)?;

    let italian = t.define("Italian restaurants");
    let italian_venues =
        ["Vie Dei Mille", "Pizzeria Il Fuoco", "Pizzeria Roma"].map(|name| t.define(name));
    t.contains(italian, &italian_venues)?;

    let japanese = t.define("Japanese restaurants");
    let japanese_venues = ["Asagaya", "Machiroku", "Shibui"].map(|name| t.define(name));
    t.contains(japanese, &japanese_venues)?;

    t.contains(restaurants, &[mexican, italian, japanese])?;

    // Music
    let miles_davis = t.define("Miles Davis");
    let duke_ellington = t.define("Duke Ellington");
    let john_coltrane = t.define("John Coltrane");
    let eagles = t.define("Eagles");
    let bruce_springsteen = t.define("Bruce Springsteen");
    let rolling_stones = t.define("Rolling Stones");
    let jimi_hendrix = t.define("Jimi Hendrix");
    let iron_maiden = t.define("Iron Maiden");
    let black_sabbath = t.define("Black Sabbath");

    let music = t.define("Music");

    let classical = t.define("Classical");
    let composers = ["Beethoven", "Bach", "Strauss", "Mahler"].map(|name| t.define(name));
    t.contains(classical, &composers)?;

    let jazz = t.define("Jazz");
    let mut jazz_albums = Vec::new();
    for (title, artist) in [
        ("Kind of Blue", miles_davis),
        ("Bitches Brew", miles_davis),
        ("Ellington at Newport", duke_ellington),
        ("A Love Supreme", john_coltrane),
        ("Blue Train", john_coltrane),
    ] {
        let album = t.define(title);
        t.created_by(album, artist)?;
        jazz_albums.push(album);
    }
    t.contains(jazz, &jazz_albums)?;

    let rock = t.define("Rock");
    let mut rock_entries = Vec::new();
    for (title, artist) in [
        ("Hotel California", eagles),
        ("Born to Run", bruce_springsteen),
        ("Born in the U.S.A", bruce_springsteen),
        ("Some Girls", rolling_stones),
        ("Sticky Fingers", rolling_stones),
        ("Let it Bleed", rolling_stones),
        ("Are You Experienced?", jimi_hendrix),
        ("Electric Ladyland", jimi_hendrix),
    ] {
        let album = t.define(title);
        t.created_by(album, artist)?;
        rock_entries.push(album);
    }

    let heavy_metal = t.define("Heavy metal");
    let mut metal_albums = Vec::new();
    for (title, artist) in [
        ("The Number of the Beast", iron_maiden),
        ("Piece of Mind", iron_maiden),
        ("Fear of the Dark", iron_maiden),
        ("Paranoid", black_sabbath),
        ("The Mob Rules", black_sabbath),
    ] {
        let album = t.define(title);
        t.created_by(album, artist)?;
        metal_albums.push(album);
    }
    t.contains(heavy_metal, &metal_albums)?;
    rock_entries.push(heavy_metal);
    t.contains(rock, &rock_entries)?;

    t.contains(music, &[classical, jazz, rock])?;

    // Movies
    let paul_thomas_anderson = t.define("Paul Thomas Anderson");
    let cohen_brothers = t.define("Cohen Brothers");
    let paul_verhoeven = t.define("Paul Verhoeven");
    let stallone = t.define("Sylvester Stallone");
    let clint_eastwood = t.define("Clint Eastwood");
    let sam_mendes = t.define("Sam Mendes");
    let scorsese = t.define("Martin Scorsese");

    let movies = t.define("Movies");
    let mut films = Vec::new();
    for (title, director) in [
        ("Magnolia", paul_thomas_anderson),
        ("Boogie Nights", paul_thomas_anderson),
        ("Fargo", cohen_brothers),
        ("Miller's Crossing", cohen_brothers),
        ("Robocop", paul_verhoeven),
        ("Starship Troopers", paul_verhoeven),
        ("Total Recall", paul_verhoeven),
        ("Rocky", stallone),
        ("Rocky II", stallone),
        ("Rocky III", stallone),
        ("Mystic River", clint_eastwood),
        ("Unforgiven", clint_eastwood),
        ("Million Dollar Baby", clint_eastwood),
        ("Gran Torino", clint_eastwood),
        ("American Beauty", sam_mendes),
        ("Skyfall", sam_mendes),
        ("Taxi Driver", scorsese),
        ("Goodfellas", scorsese),
        ("Cape Fear", scorsese),
    ] {
        let film = t.define(title);
        t.created_by(film, director)?;
        films.push(film);
    }
    t.contains(movies, &films)?;

    Ok(t.concepts)
}

// Random name generation

const USER_NAMES: &[&str] = &[
    "James", "John", "Gerard", "Roger", "Tom", "Charles", "Peter", "Marc",
    "George", "William", "Geoffrey", "Richard", "Nicholas", "David", "Bernard",
    "Martin", "Albert", "Edgar", "Ronald", "Victor", "Sebastian", "Paul",
    "Julia", "Anne", "Martha", "Emily", "Natalia", "Susan", "Hannah", "Lisa",
    "Claire", "Laura", "Elisabeth", "Sylvia", "Abbey", "Rita", "Rochelle",
    "Lucy", "Mandy", "Cristina", "Angela", "Helen", "Rachel", "Lilly",
];

const USER_SURNAMES: &[&str] = &[
    "Abercrombie", "Ackerson", "Ambrose", "Albridge", "Ballard", "Bancroft",
    "Baldwyn", "Banks", "Cage", "Carroll", "Cusick", "Davies", "Degarmo",
    "Dwight", "Durand", "Eckhardt", "Ensley", "Fortner", "Friedberg",
    "Flemming", "Graham", "Gillmore", "Gregson", "Hicks", "Hoffman", "Hook",
    "Irving", "Jacobson", "Jennings", "Judson", "Kilmer", "Kircher",
    "Keisling", "Lesley", "Lundgren", "Lovejoy", "Monaghan", "Miller",
    "Mitchell", "Newbury", "Nolan", "Nugent", "Oats", "Olney", "Oswald",
    "Percy", "Paton", "Parsons", "Quinn", "Reeves", "Romero", "Rose",
    "Samuels", "Sunderland", "Simmons", "Trautner", "Torrence", "Tucker",
    "Ullman", "Urban", "Upton", "Valentine", "Vasquez", "Voss", "Walsh",
    "Windsor", "Wynslowe", "Young", "Zoeller",
];

fn random_user_name(rng: &mut impl Rng) -> String {
    let first = USER_NAMES.choose(rng).expect("name pool is not empty");
    let last = USER_SURNAMES.choose(rng).expect("surname pool is not empty");
    format!("{} {}", first, last)
}
