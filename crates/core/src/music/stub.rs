//! Recording stub store for unit tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::store::{
    Collection, Filter, Item, Key, Query, RecordStore, Result, StoreError, StoreValue,
};

/// A call made against the stub, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    GetItem(Collection),
    Query(Collection),
    Scan(Collection),
    PutItem(Collection),
}

#[derive(Default)]
pub struct StubStore {
    items: Mutex<BTreeMap<Collection, Vec<Item>>>,
    calls: Mutex<Vec<StoreCall>>,
    failure: Option<StoreError>,
}

impl StubStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with `error`.
    pub fn failing(error: StoreError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn with(self, collection: Collection, pairs: &[(&str, StoreValue)]) -> Self {
        let item = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        self.items
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .push(item);
        self
    }

    pub fn remove(&self, collection: Collection, key: &Key) {
        if let Some(items) = self.items.lock().unwrap().get_mut(&collection) {
            items.retain(|item| !key.matches(item));
        }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn matching(&self, collection: Collection, predicate: impl Fn(&Item) -> bool) -> Vec<Item> {
        self.items
            .lock()
            .unwrap()
            .get(&collection)
            .map(|items| items.iter().filter(|i| predicate(i)).cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RecordStore for StubStore {
    async fn get_item(&self, collection: Collection, key: Key) -> Result<Option<Item>> {
        self.record(StoreCall::GetItem(collection))?;
        Ok(self
            .matching(collection, |item| key.matches(item))
            .into_iter()
            .next())
    }

    async fn query(&self, query: Query) -> Result<Vec<Item>> {
        self.record(StoreCall::Query(query.collection))?;
        Ok(self.matching(query.collection, |item| query.matches(item)))
    }

    async fn scan(&self, collection: Collection, filter: Filter) -> Result<Vec<Item>> {
        self.record(StoreCall::Scan(collection))?;
        Ok(self.matching(collection, |item| filter.matches(item)))
    }

    async fn put_item(&self, collection: Collection, item: Item) -> Result<()> {
        self.record(StoreCall::PutItem(collection))?;
        let mut items = self.items.lock().unwrap();
        let stored = items.entry(collection).or_default();
        if let Some(key) = collection.key_of(&item) {
            stored.retain(|existing| !key.matches(existing));
        }
        stored.push(item);
        Ok(())
    }
}
