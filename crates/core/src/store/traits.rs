use async_trait::async_trait;

use super::{Collection, Filter, Item, Key, Query, Result};

/// Access to a managed record store.
///
/// Implementations perform exactly one store round trip per call, return only
/// the first page of results, and propagate every store error unchanged.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Gets a single record by its primary key.
    async fn get_item(&self, collection: Collection, key: Key) -> Result<Option<Item>>;

    /// Gets the records sharing a partition key, on the table or a secondary index.
    async fn query(&self, query: Query) -> Result<Vec<Item>>;

    /// Reads the whole collection and keeps the records matching `filter`.
    async fn scan(&self, collection: Collection, filter: Filter) -> Result<Vec<Item>>;

    /// Writes a record, overwriting any record with the same primary key.
    async fn put_item(&self, collection: Collection, item: Item) -> Result<()>;
}
