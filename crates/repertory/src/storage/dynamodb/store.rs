//! DynamoDB record store.
//!
//! Implements `RecordStore` from `repertory_core::store` using DynamoDB, one
//! table per collection.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use repertory_core::store::{Collection, Filter, Item, Key, Query, RecordStore, Result};

use super::conversions::{attributes_to_item, item_to_attributes, key_to_attributes};
use super::error::{map_get_item_error, map_put_item_error, map_query_error, map_scan_error};
use super::expressions::{filter_expression, key_condition_expression, Expression};
use crate::config::Config;

/// DynamoDB-based record store.
///
/// Reads only the first page of each query or scan. The continuation key is
/// never followed; a truncated result is logged.
pub struct DynamoDbStore {
    client: Client,
    table_prefix: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table prefix.
    pub fn new(client: Client, table_prefix: impl Into<String>) -> Self {
        Self {
            client,
            table_prefix: table_prefix.into(),
        }
    }

    /// Creates a store from configuration.
    ///
    /// Uses the AWS SDK default credential chain, the configured region and,
    /// when set, a custom endpoint (local DynamoDB).
    pub async fn connect(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        tracing::info!(target_store = %config.target_display(), "Connected DynamoDB client");

        Self::new(Client::new(&sdk_config), config.table_prefix.clone())
    }

    fn table(&self, collection: Collection) -> String {
        collection.table_name(&self.table_prefix)
    }
}

/// Convert the items of one result page.
fn convert_items(items: Option<Vec<HashMap<String, AttributeValue>>>) -> Result<Vec<Item>> {
    items
        .unwrap_or_default()
        .into_iter()
        .map(attributes_to_item)
        .collect()
}

#[async_trait]
impl RecordStore for DynamoDbStore {
    async fn get_item(&self, collection: Collection, key: Key) -> Result<Option<Item>> {
        let table = self.table(collection);

        let result = self
            .client
            .get_item()
            .table_name(&table)
            .set_key(Some(key_to_attributes(&key)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, &table))?;

        result.item.map(attributes_to_item).transpose()
    }

    async fn query(&self, query: Query) -> Result<Vec<Item>> {
        let table = self.table(query.collection);

        let Expression {
            text: key_text,
            mut names,
            mut values,
        } = key_condition_expression(&query.key_condition);

        let mut request = self
            .client
            .query()
            .table_name(&table)
            .set_index_name(query.index.map(|index| index.name().to_string()))
            .key_condition_expression(key_text);

        if let Some(filter) = &query.filter {
            let expression = filter_expression(filter);
            names.extend(expression.names);
            values.extend(expression.values);
            request = request.filter_expression(expression.text);
        }

        let result = request
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(values))
            .send()
            .await
            .map_err(|e| map_query_error(e, &table))?;

        if result.last_evaluated_key().is_some() {
            tracing::warn!(
                table = %table,
                index = ?query.index.map(|index| index.name()),
                "Query result has more pages; only the first page is returned"
            );
        }

        convert_items(result.items)
    }

    async fn scan(&self, collection: Collection, filter: Filter) -> Result<Vec<Item>> {
        let table = self.table(collection);
        let expression = filter_expression(&filter);

        let result = self
            .client
            .scan()
            .table_name(&table)
            .filter_expression(expression.text)
            .set_expression_attribute_names(Some(expression.names))
            .set_expression_attribute_values(Some(expression.values))
            .send()
            .await
            .map_err(|e| map_scan_error(e, &table))?;

        if result.last_evaluated_key().is_some() {
            tracing::warn!(
                table = %table,
                "Scan result has more pages; only the first page is returned"
            );
        }

        convert_items(result.items)
    }

    async fn put_item(&self, collection: Collection, item: Item) -> Result<()> {
        let table = self.table(collection);

        self.client
            .put_item()
            .table_name(&table)
            .set_item(Some(item_to_attributes(&item)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &table))?;

        Ok(())
    }
}
