use repertory_core::music::{PieceStatus, RepertoireEntry};
use serde::Deserialize;

/// Request payload for adding a piece to a user's repertoire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRepertoireEntry {
    pub piece_id: String,
    pub title: String,
    pub composer: String,
    /// Defaults to `learning` when omitted.
    #[serde(default)]
    pub piece_status: Option<String>,
}

impl AddRepertoireEntry {
    /// Build the entry for the given user.
    pub fn into_entry(self, user_id: String) -> RepertoireEntry {
        let status = self
            .piece_status
            .as_deref()
            .map(PieceStatus::from)
            .unwrap_or_default();

        RepertoireEntry::new(user_id, self.piece_id, self.title, self.composer).with_status(status)
    }
}

/// Query parameters for listing a repertoire.
#[derive(Debug, Default, Deserialize)]
pub struct RepertoireQuery {
    /// Only return entries with this status.
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_learning() {
        let payload: AddRepertoireEntry = serde_json::from_str(
            r#"{"pieceId": "piece4", "title": "Cello Concerto", "composer": "Dvorak"}"#,
        )
        .unwrap();

        let entry = payload.into_entry("user456".to_string());

        assert_eq!(entry.user_id, "user456");
        assert_eq!(entry.piece_status, Some(PieceStatus::Learning));
    }

    #[test]
    fn test_explicit_status_is_kept() {
        let payload: AddRepertoireEntry = serde_json::from_str(
            r#"{"pieceId": "piece1", "title": "Partita No. 2", "composer": "Bach", "pieceStatus": "polishing"}"#,
        )
        .unwrap();

        let entry = payload.into_entry("user123".to_string());

        assert_eq!(
            entry.piece_status,
            Some(PieceStatus::Other("polishing".to_string()))
        );
    }
}
