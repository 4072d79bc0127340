//! Item conversion functions.
//!
//! Pure functions turning raw store items into typed records and back.
//! Only key attributes are required. Every other attribute either lands in
//! its typed field or, when missing a field or holding an unexpected type,
//! stays in the record's `attributes` map exactly as stored.

use std::collections::BTreeSet;

use crate::store::{Item, Result, StoreError, StoreValue};

use super::types::{
    Achievement, Performance, Piece, PieceStatus, RepertoireEntry, User, UserAchievement,
};

// ============================================================================
// Item -> record
// ============================================================================

pub fn item_to_user(mut item: Item) -> Result<User> {
    Ok(User {
        user_id: take_key(&mut item, "userId")?,
        instruments: take_string_set(&mut item, "instruments"),
        attributes: item,
    })
}

pub fn item_to_piece(mut item: Item) -> Result<Piece> {
    Ok(Piece {
        piece_id: take_key(&mut item, "pieceId")?,
        era: take_string(&mut item, "era"),
        attributes: item,
    })
}

pub fn item_to_repertoire_entry(mut item: Item) -> Result<RepertoireEntry> {
    Ok(RepertoireEntry {
        user_id: take_key(&mut item, "userId")?,
        piece_id: take_key(&mut item, "pieceId")?,
        title: take_string(&mut item, "title"),
        composer: take_string(&mut item, "composer"),
        piece_status: take_string(&mut item, "pieceStatus")
            .map(|status| PieceStatus::from(status.as_str())),
        attributes: item,
    })
}

pub fn item_to_performance(mut item: Item) -> Result<Performance> {
    Ok(Performance {
        user_id: take_key(&mut item, "userId")?,
        performance_id: take_string(&mut item, "performanceId"),
        performance_date: take_string(&mut item, "performanceDate"),
        attributes: item,
    })
}

pub fn item_to_achievement(mut item: Item) -> Result<Achievement> {
    Ok(Achievement {
        achievement_id: take_key(&mut item, "achievementId")?,
        achievement_category: take_string(&mut item, "achievementCategory"),
        attributes: item,
    })
}

pub fn item_to_user_achievement(mut item: Item) -> Result<UserAchievement> {
    Ok(UserAchievement {
        user_id: take_key(&mut item, "userId")?,
        achievement_id: take_key(&mut item, "achievementId")?,
        earned_at: item.remove("earnedAt"),
        progress: item.remove("progress"),
        attributes: item,
    })
}

// ============================================================================
// Record -> item
// ============================================================================

pub fn repertoire_entry_to_item(entry: &RepertoireEntry) -> Item {
    let mut item = entry.attributes.clone();

    item.insert("userId".to_string(), StoreValue::from(entry.user_id.as_str()));
    item.insert("pieceId".to_string(), StoreValue::from(entry.piece_id.as_str()));
    if let Some(title) = &entry.title {
        item.insert("title".to_string(), StoreValue::from(title.as_str()));
    }
    if let Some(composer) = &entry.composer {
        item.insert("composer".to_string(), StoreValue::from(composer.as_str()));
    }
    if let Some(status) = &entry.piece_status {
        item.insert("pieceStatus".to_string(), StoreValue::from(status.as_str()));
    }

    item
}

/// Converts every item, failing on the first one without its key.
pub fn convert_all<T>(items: Vec<Item>, convert: fn(Item) -> Result<T>) -> Result<Vec<T>> {
    items.into_iter().map(convert).collect()
}

// ============================================================================
// Helper functions
// ============================================================================

/// Remove a key attribute. Stored records always carry their key, so an
/// item without one did not come from the collection.
fn take_key(item: &mut Item, key: &str) -> Result<String> {
    match item.remove(key) {
        Some(StoreValue::String(s)) => Ok(s),
        _ => Err(StoreError::InvalidData(format!(
            "Missing or invalid key attribute: {}",
            key
        ))),
    }
}

/// Remove a string attribute. Any other value is put back.
fn take_string(item: &mut Item, key: &str) -> Option<String> {
    match item.remove(key)? {
        StoreValue::String(s) => Some(s),
        other => {
            item.insert(key.to_string(), other);
            None
        }
    }
}

/// Remove a set of strings, stored either as a string set or as a list of
/// strings. Any other value is put back and the set is empty.
fn take_string_set(item: &mut Item, key: &str) -> BTreeSet<String> {
    match item.remove(key) {
        None => BTreeSet::new(),
        Some(StoreValue::StringSet(set)) => set,
        Some(StoreValue::List(values)) if values.iter().all(|v| v.as_str().is_some()) => values
            .into_iter()
            .filter_map(|value| match value {
                StoreValue::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Some(other) => {
            item.insert(key.to_string(), other);
            BTreeSet::new()
        }
    }
}
