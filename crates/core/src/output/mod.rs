//! Output formatting functions.

pub mod json;

pub use json::format_json;

/// Format a titled value for terminal display: a blank line, `title:`, then
/// the value as JSON indented by two spaces.
pub fn pretty_print<T: serde::Serialize>(title: &str, value: &T) -> String {
    format!(
        "\n{}:\n{}",
        title,
        serde_json::to_string_pretty(value).unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::{
        Achievement, EnrichedAchievement, PieceStatus, RepertoireEntry, User, UserProfile,
    };
    use crate::store::{Item, Number, StoreValue};

    #[test]
    fn test_pretty_print_layout() {
        let entries = vec![RepertoireEntry::new(
            "user456",
            "piece4",
            "Cello Concerto",
            "Dvorak",
        )];

        let output = pretty_print("Jane's updated repertoire", &entries);

        assert_eq!(
            output,
            "\nJane's updated repertoire:\n[\n  {\n    \"userId\": \"user456\",\n    \"pieceId\": \"piece4\",\n    \"title\": \"Cello Concerto\",\n    \"composer\": \"Dvorak\",\n    \"pieceStatus\": \"learning\"\n  }\n]"
        );
    }

    #[test]
    fn test_pretty_print_missing_profile_is_null() {
        let profile: Option<UserProfile> = None;
        assert_eq!(pretty_print("Profile", &profile), "\nProfile:\nnull");
    }

    #[test]
    fn test_profile_json_shape() {
        let mut name = Item::new();
        name.insert("name".to_string(), StoreValue::from("John"));

        let profile = UserProfile {
            user_info: User {
                user_id: "user123".to_string(),
                instruments: ["Violin".to_string(), "Piano".to_string()].into(),
                attributes: name,
            },
            repertoire: vec![RepertoireEntry::new("user123", "piece1", "Partita", "Bach")
                .with_status(PieceStatus::Mastered)],
            performances: vec![],
            achievements: vec![EnrichedAchievement {
                achievement_details: Achievement {
                    achievement_id: "ach1".to_string(),
                    achievement_category: Some("Performance".to_string()),
                    attributes: Item::new(),
                },
                earned_at: None,
                progress: Some(StoreValue::Number(Number::Integer(100))),
            }],
        };

        let json: serde_json::Value = serde_json::from_str(&format_json(&profile)).unwrap();

        assert_eq!(json["userInfo"]["userId"], "user123");
        assert_eq!(json["userInfo"]["name"], "John");
        assert_eq!(json["userInfo"]["instruments"].as_array().unwrap().len(), 2);
        assert_eq!(json["repertoire"][0]["pieceStatus"], "mastered");
        assert_eq!(json["performances"], serde_json::json!([]));
        assert_eq!(
            json["achievements"][0]["achievementDetails"]["achievementCategory"],
            "Performance"
        );
        assert!(json["achievements"][0]["earnedAt"].is_null());
        assert_eq!(json["achievements"][0]["progress"], 100);
    }
}
