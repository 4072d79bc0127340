use repertory_core::store::{Collection, Item, Number, RecordStore, Result, StoreValue};

use crate::storage::InMemoryStore;

fn item(attributes: Vec<(&str, StoreValue)>) -> Item {
    attributes
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

fn text(value: &str) -> StoreValue {
    StoreValue::from(value)
}

fn set(values: &[&str]) -> StoreValue {
    StoreValue::StringSet(values.iter().map(|v| v.to_string()).collect())
}

fn users() -> Vec<Item> {
    vec![
        item(vec![
            ("userId", text("user123")),
            ("name", text("John")),
            ("email", text("john@example.com")),
            ("instruments", set(&["Violin", "Piano"])),
            ("skillLevel", text("advanced")),
        ]),
        item(vec![
            ("userId", text("user456")),
            ("name", text("Jane")),
            ("email", text("jane@example.com")),
            ("instruments", set(&["Cello"])),
            ("skillLevel", text("intermediate")),
        ]),
        item(vec![
            ("userId", text("user789")),
            ("name", text("Maria")),
            ("email", text("maria@example.com")),
            ("instruments", set(&["Violin", "Viola"])),
            ("skillLevel", text("beginner")),
        ]),
    ]
}

fn pieces() -> Vec<Item> {
    vec![
        item(vec![
            ("pieceId", text("piece1")),
            ("title", text("Violin Concerto in A minor")),
            ("composer", text("Bach")),
            ("era", text("Baroque")),
            ("difficulty", Number::Integer(6).into()),
        ]),
        item(vec![
            ("pieceId", text("piece2")),
            ("title", text("The Four Seasons")),
            ("composer", text("Vivaldi")),
            ("era", text("Baroque")),
            ("difficulty", Number::Integer(7).into()),
        ]),
        item(vec![
            ("pieceId", text("piece3")),
            ("title", text("Moonlight Sonata")),
            ("composer", text("Beethoven")),
            ("era", text("Classical")),
            ("difficulty", Number::Decimal(5.5).into()),
        ]),
        item(vec![
            ("pieceId", text("piece4")),
            ("title", text("Cello Concerto")),
            ("composer", text("Dvorak")),
            ("era", text("Romantic")),
            ("difficulty", Number::Integer(9).into()),
        ]),
    ]
}

fn repertoire() -> Vec<Item> {
    vec![
        item(vec![
            ("userId", text("user123")),
            ("pieceId", text("piece1")),
            ("title", text("Violin Concerto in A minor")),
            ("composer", text("Bach")),
            ("pieceStatus", text("mastered")),
        ]),
        item(vec![
            ("userId", text("user123")),
            ("pieceId", text("piece2")),
            ("title", text("The Four Seasons")),
            ("composer", text("Vivaldi")),
            ("pieceStatus", text("learning")),
        ]),
        item(vec![
            ("userId", text("user123")),
            ("pieceId", text("piece3")),
            ("title", text("Moonlight Sonata")),
            ("composer", text("Beethoven")),
            ("pieceStatus", text("mastered")),
        ]),
        item(vec![
            ("userId", text("user456")),
            ("pieceId", text("piece2")),
            ("title", text("The Four Seasons")),
            ("composer", text("Vivaldi")),
            ("pieceStatus", text("learning")),
        ]),
    ]
}

fn performances() -> Vec<Item> {
    vec![
        item(vec![
            ("userId", text("user123")),
            ("performanceId", text("perf1")),
            ("performanceDate", text("2025-03-15")),
            ("venue", text("City Music Hall")),
            ("pieces", set(&["piece1", "piece3"])),
        ]),
        item(vec![
            ("userId", text("user123")),
            ("performanceId", text("perf2")),
            ("performanceDate", text("2025-05-02")),
            ("venue", text("Riverside Chapel")),
            ("pieces", set(&["piece2"])),
        ]),
        item(vec![
            ("userId", text("user456")),
            ("performanceId", text("perf3")),
            ("performanceDate", text("2025-03-15")),
            ("venue", text("City Music Hall")),
            ("pieces", set(&["piece2"])),
        ]),
    ]
}

fn achievements() -> Vec<Item> {
    vec![
        item(vec![
            ("achievementId", text("ach1")),
            ("name", text("First Performance")),
            ("description", text("Performed in public for the first time")),
            ("achievementCategory", text("Performance")),
        ]),
        item(vec![
            ("achievementId", text("ach2")),
            ("name", text("Repertoire Builder")),
            ("description", text("Added five pieces to a repertoire")),
            ("achievementCategory", text("Repertoire")),
        ]),
        item(vec![
            ("achievementId", text("ach3")),
            ("name", text("Seasoned Performer")),
            ("description", text("Performed ten times")),
            ("achievementCategory", text("Performance")),
        ]),
    ]
}

fn user_achievements() -> Vec<Item> {
    vec![
        item(vec![
            ("userId", text("user123")),
            ("achievementId", text("ach1")),
            ("earnedAt", text("2025-03-15T20:30:00Z")),
            ("progress", Number::Integer(100).into()),
        ]),
        item(vec![
            ("userId", text("user123")),
            ("achievementId", text("ach3")),
            ("progress", Number::Decimal(0.2).into()),
        ]),
        item(vec![
            ("userId", text("user456")),
            ("achievementId", text("ach1")),
            ("earnedAt", text("2025-03-15T21:00:00Z")),
            ("progress", Number::Integer(100).into()),
        ]),
    ]
}

/// Fill a store with the demo data the script subcommands read.
pub async fn seed(store: &InMemoryStore) -> Result<()> {
    let fixtures = [
        (Collection::Users, users()),
        (Collection::Pieces, pieces()),
        (Collection::UserRepertoire, repertoire()),
        (Collection::Performances, performances()),
        (Collection::Achievements, achievements()),
        (Collection::UserAchievements, user_achievements()),
    ];

    for (collection, items) in fixtures {
        let count = items.len();
        for item in items {
            store.put_item(collection, item).await?;
        }
        tracing::debug!(collection = %collection, count, "Seeded collection");
    }

    Ok(())
}
