use afinidad::sample::{generate, SampleConfig};
use afinidad::SocialGraph;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Afinidad v{}", afinidad::version());
    println!("==========================================");
    println!();

    let config = SampleConfig::default();
    let mut rng = rand::thread_rng();
    let graph = generate(&config, &mut rng)?;

    println!("Graph statistics:");
    println!("  users:     {}", graph.user_count());
    println!("  concepts:  {}", graph.concept_count());
    println!("  relations: {}", graph.relation_count());

    for user in graph.users().iter().take(3) {
        println!();
        println!(
            "Friend suggestions for {} ({} friends):",
            user.name,
            user.friend_count()
        );

        let suggestions = graph.suggest_friends(user.id);
        if suggestions.is_empty() {
            println!("  (none)");
        }
        for suggestion in suggestions {
            println!(
                "  {} (rank {}, {} mutual: {})",
                display_name(&graph, suggestion.user),
                suggestion.rank,
                suggestion.mutual_friends.len(),
                suggestion
                    .mutual_friends
                    .iter()
                    .map(|&id| display_name(&graph, id))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }

    if let Some(user) = graph.users().first() {
        println!();
        match graph.suggest_concepts(user.id) {
            Ok(_) => println!("Concept suggestions ready"),
            Err(e) => println!("Concept suggestions unavailable: {}", e),
        }
    }

    Ok(())
}

fn display_name(graph: &SocialGraph, id: afinidad::UserId) -> &str {
    graph.user(id).map(|u| u.name.as_str()).unwrap_or("?")
}
