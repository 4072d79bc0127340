//! In-memory record store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use repertory_core::store::{
    Collection, Filter, Item, Key, Query, RecordStore, Result, StoreError,
};

/// In-memory record store.
///
/// Items keep their insertion order. Key conditions, index lookups and
/// filters are evaluated with the same predicates the core exposes, so
/// results match what the DynamoDB backend returns for a single page.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    collections: Arc<RwLock<HashMap<Collection, Vec<Item>>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items held in a collection.
    pub async fn len(&self, collection: Collection) -> usize {
        let collections = self.collections.read().await;
        collections.get(&collection).map_or(0, Vec::len)
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn get_item(&self, collection: Collection, key: Key) -> Result<Option<Item>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|items| items.iter().find(|item| key.matches(item)))
            .cloned())
    }

    async fn query(&self, query: Query) -> Result<Vec<Item>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&query.collection)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| query.matches(item))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn scan(&self, collection: Collection, filter: Filter) -> Result<Vec<Item>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| filter.matches(item))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn put_item(&self, collection: Collection, item: Item) -> Result<()> {
        let key = collection.key_of(&item).ok_or_else(|| {
            StoreError::InvalidData(format!("Item is missing its primary key for {}", collection))
        })?;

        let mut collections = self.collections.write().await;
        let items = collections.entry(collection).or_default();
        match items.iter_mut().find(|existing| key.matches(existing)) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        Ok(())
    }
}
