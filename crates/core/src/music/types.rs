use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::store::{Item, StoreValue};

/// A musician.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub instruments: BTreeSet<String>,
    /// Attributes without a dedicated field (name, email, ...).
    #[serde(flatten)]
    pub attributes: Item,
}

/// A piece of music in the shared catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub piece_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,
    #[serde(flatten)]
    pub attributes: Item,
}

/// How far along a user is with a piece.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum PieceStatus {
    #[default]
    Learning,
    Mastered,
    /// Any other status string found in the store.
    Other(String),
}

impl PieceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PieceStatus::Learning => "learning",
            PieceStatus::Mastered => "mastered",
            PieceStatus::Other(status) => status,
        }
    }
}

impl FromStr for PieceStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "learning" => PieceStatus::Learning,
            "mastered" => PieceStatus::Mastered,
            other => PieceStatus::Other(other.to_string()),
        })
    }
}

impl From<&str> for PieceStatus {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for PieceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PieceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A piece in a user's repertoire. One entry per (user, piece) pair.
///
/// Only the key is guaranteed. A stored entry may lack any other field; a
/// value of an unexpected type stays in `attributes` under its own name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepertoireEntry {
    pub user_id: String,
    pub piece_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece_status: Option<PieceStatus>,
    #[serde(flatten)]
    pub attributes: Item,
}

impl RepertoireEntry {
    /// Creates an entry with the default `learning` status.
    pub fn new(
        user_id: impl Into<String>,
        piece_id: impl Into<String>,
        title: impl Into<String>,
        composer: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            piece_id: piece_id.into(),
            title: Some(title.into()),
            composer: Some(composer.into()),
            piece_status: Some(PieceStatus::default()),
            attributes: Item::new(),
        }
    }

    /// Sets the status of this entry.
    pub fn with_status(mut self, status: PieceStatus) -> Self {
        self.piece_status = Some(status);
        self
    }
}

/// A recorded performance by a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_id: Option<String>,
    /// ISO date (`YYYY-MM-DD`), the `date-index` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_date: Option<String>,
    #[serde(flatten)]
    pub attributes: Item,
}

/// An achievement definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub achievement_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievement_category: Option<String>,
    #[serde(flatten)]
    pub attributes: Item,
}

/// A reference from a user to an achievement they earned or are working towards.
///
/// `earnedAt` and `progress` are passed through exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAchievement {
    pub user_id: String,
    pub achievement_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<StoreValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<StoreValue>,
    #[serde(flatten)]
    pub attributes: Item,
}

/// A user achievement joined with its definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedAchievement {
    pub achievement_details: Achievement,
    pub earned_at: Option<StoreValue>,
    pub progress: Option<StoreValue>,
}

impl EnrichedAchievement {
    pub fn new(achievement: Achievement, user_achievement: UserAchievement) -> Self {
        Self {
            achievement_details: achievement,
            earned_at: user_achievement.earned_at,
            progress: user_achievement.progress,
        }
    }
}

/// Denormalized view of one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_info: User,
    pub repertoire: Vec<RepertoireEntry>,
    pub performances: Vec<Performance>,
    pub achievements: Vec<EnrichedAchievement>,
}
