use std::fmt;

use super::{Item, StoreValue};

/// A named collection in the store.
///
/// Collection and index shapes are fixed here; the tables themselves are
/// created and managed outside this codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Users,
    Pieces,
    UserRepertoire,
    Performances,
    Achievements,
    UserAchievements,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Users,
        Collection::Pieces,
        Collection::UserRepertoire,
        Collection::Performances,
        Collection::Achievements,
        Collection::UserAchievements,
    ];

    /// Collection name without the table prefix.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "Users",
            Collection::Pieces => "Pieces",
            Collection::UserRepertoire => "UserRepertoire",
            Collection::Performances => "Performances",
            Collection::Achievements => "Achievements",
            Collection::UserAchievements => "UserAchievements",
        }
    }

    /// Full table name: `<prefix><name>`, e.g. `Repertory-Users`.
    pub fn table_name(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.name())
    }

    /// Partition key attribute of the primary key.
    pub fn partition_key(&self) -> &'static str {
        match self {
            Collection::Users => "userId",
            Collection::Pieces => "pieceId",
            Collection::UserRepertoire => "userId",
            Collection::Performances => "userId",
            Collection::Achievements => "achievementId",
            Collection::UserAchievements => "userId",
        }
    }

    /// Sort key attribute of the primary key, if the collection has one.
    pub fn sort_key(&self) -> Option<&'static str> {
        match self {
            Collection::UserRepertoire => Some("pieceId"),
            Collection::Performances => Some("performanceId"),
            Collection::UserAchievements => Some("achievementId"),
            Collection::Users | Collection::Pieces | Collection::Achievements => None,
        }
    }

    /// Extracts the primary key of an item, or `None` if a key attribute is missing.
    pub fn key_of(&self, item: &Item) -> Option<Key> {
        let partition = item.get(self.partition_key())?.clone();
        let key = Key::partition(self.partition_key(), partition);

        match self.sort_key() {
            Some(sort_key) => {
                let sort = item.get(sort_key)?.clone();
                Some(key.with_sort(sort_key, sort))
            }
            None => Some(key),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A secondary index over one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Index {
    /// `era-index` on Pieces.
    Era,
    /// `date-index` on Performances.
    PerformanceDate,
    /// `category-index` on Achievements.
    AchievementCategory,
    /// `achievementId-index` on UserAchievements (reverse lookup).
    AchievementId,
}

impl Index {
    pub fn name(&self) -> &'static str {
        match self {
            Index::Era => "era-index",
            Index::PerformanceDate => "date-index",
            Index::AchievementCategory => "category-index",
            Index::AchievementId => "achievementId-index",
        }
    }

    pub fn collection(&self) -> Collection {
        match self {
            Index::Era => Collection::Pieces,
            Index::PerformanceDate => Collection::Performances,
            Index::AchievementCategory => Collection::Achievements,
            Index::AchievementId => Collection::UserAchievements,
        }
    }

    pub fn partition_key(&self) -> &'static str {
        match self {
            Index::Era => "era",
            Index::PerformanceDate => "performanceDate",
            Index::AchievementCategory => "achievementCategory",
            Index::AchievementId => "achievementId",
        }
    }
}

/// A primary key: the partition attribute plus an optional sort attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    attributes: Item,
}

impl Key {
    pub fn partition(name: impl Into<String>, value: impl Into<StoreValue>) -> Self {
        let mut attributes = Item::new();
        attributes.insert(name.into(), value.into());
        Self { attributes }
    }

    pub fn with_sort(mut self, name: impl Into<String>, value: impl Into<StoreValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attributes(&self) -> &Item {
        &self.attributes
    }

    /// Returns true if every key attribute is present in `item` with an equal value.
    pub fn matches(&self, item: &Item) -> bool {
        self.attributes
            .iter()
            .all(|(name, value)| item.get(name) == Some(value))
    }
}

/// Partition-key equality condition of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyCondition {
    pub attribute: String,
    pub value: StoreValue,
}

impl KeyCondition {
    pub fn matches(&self, item: &Item) -> bool {
        item.get(&self.attribute) == Some(&self.value)
    }
}

/// A predicate over non-key attributes, applied by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `attribute = value`
    Equals { attribute: String, value: StoreValue },
    /// `contains(attribute, value)`
    Contains { attribute: String, value: StoreValue },
}

impl Filter {
    pub fn eq(attribute: impl Into<String>, value: impl Into<StoreValue>) -> Self {
        Filter::Equals {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn contains(attribute: impl Into<String>, value: impl Into<StoreValue>) -> Self {
        Filter::Contains {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn attribute(&self) -> &str {
        match self {
            Filter::Equals { attribute, .. } | Filter::Contains { attribute, .. } => attribute,
        }
    }

    pub fn value(&self) -> &StoreValue {
        match self {
            Filter::Equals { value, .. } | Filter::Contains { value, .. } => value,
        }
    }

    /// Evaluates the predicate. A missing attribute never matches.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Filter::Equals { attribute, value } => item.get(attribute) == Some(value),
            Filter::Contains { attribute, value } => item
                .get(attribute)
                .is_some_and(|candidate| candidate.contains(value)),
        }
    }
}

/// A partition-key query, optionally against a secondary index and
/// optionally filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: Collection,
    pub index: Option<Index>,
    pub key_condition: KeyCondition,
    pub filter: Option<Filter>,
}

impl Query {
    /// Query the collection's primary partition key.
    pub fn partition(collection: Collection, value: impl Into<StoreValue>) -> Self {
        Self {
            collection,
            index: None,
            key_condition: KeyCondition {
                attribute: collection.partition_key().to_string(),
                value: value.into(),
            },
            filter: None,
        }
    }

    /// Query a secondary index by its partition key.
    pub fn on_index(index: Index, value: impl Into<StoreValue>) -> Self {
        Self {
            collection: index.collection(),
            index: Some(index),
            key_condition: KeyCondition {
                attribute: index.partition_key().to_string(),
                value: value.into(),
            },
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Returns true if the item satisfies both the key condition and the filter.
    pub fn matches(&self, item: &Item) -> bool {
        self.key_condition.matches(item)
            && self.filter.as_ref().is_none_or(|filter| filter.matches(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repertoire_item(user_id: &str, piece_id: &str, status: &str) -> Item {
        let mut item = Item::new();
        item.insert("userId".to_string(), StoreValue::from(user_id));
        item.insert("pieceId".to_string(), StoreValue::from(piece_id));
        item.insert("pieceStatus".to_string(), StoreValue::from(status));
        item
    }

    #[test]
    fn test_table_name_uses_prefix() {
        assert_eq!(
            Collection::UserRepertoire.table_name("Repertory-"),
            "Repertory-UserRepertoire"
        );
        assert_eq!(Collection::Users.table_name(""), "Users");
    }

    #[test]
    fn test_key_of_composite_collection() {
        let item = repertoire_item("user123", "piece1", "mastered");
        let key = Collection::UserRepertoire.key_of(&item).unwrap();

        assert_eq!(key.attributes().len(), 2);
        assert_eq!(key.attributes()["userId"], StoreValue::from("user123"));
        assert_eq!(key.attributes()["pieceId"], StoreValue::from("piece1"));
    }

    #[test]
    fn test_key_of_missing_sort_key() {
        let mut item = Item::new();
        item.insert("userId".to_string(), StoreValue::from("user123"));

        assert!(Collection::UserAchievements.key_of(&item).is_none());
        assert!(Collection::Users.key_of(&item).is_some());
    }

    #[test]
    fn test_index_targets() {
        assert_eq!(Index::Era.collection(), Collection::Pieces);
        assert_eq!(Index::PerformanceDate.name(), "date-index");
        assert_eq!(Index::AchievementId.partition_key(), "achievementId");
    }

    #[test]
    fn test_partition_query_with_status_filter() {
        let query = Query::partition(Collection::UserRepertoire, "user123")
            .with_filter(Filter::eq("pieceStatus", "mastered"));

        assert!(query.matches(&repertoire_item("user123", "piece1", "mastered")));
        assert!(!query.matches(&repertoire_item("user123", "piece2", "learning")));
        assert!(!query.matches(&repertoire_item("user456", "piece1", "mastered")));
    }

    #[test]
    fn test_index_query_skips_items_without_index_key() {
        let query = Query::on_index(Index::Era, "Baroque");

        let mut baroque = Item::new();
        baroque.insert("pieceId".to_string(), StoreValue::from("piece1"));
        baroque.insert("era".to_string(), StoreValue::from("Baroque"));

        let mut untagged = Item::new();
        untagged.insert("pieceId".to_string(), StoreValue::from("piece9"));

        assert_eq!(query.collection, Collection::Pieces);
        assert!(query.matches(&baroque));
        assert!(!query.matches(&untagged));
    }

    #[test]
    fn test_filter_missing_attribute_never_matches() {
        let item = Item::new();

        assert!(!Filter::eq("pieceStatus", "learning").matches(&item));
        assert!(!Filter::contains("instruments", "Violin").matches(&item));
    }
}
