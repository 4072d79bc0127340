//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and store items.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use repertory_core::store::{Item, Key, Number, Result, StoreError, StoreValue};

// ============================================================================
// DynamoDB -> store
// ============================================================================

/// Convert a DynamoDB item to a store item.
pub fn attributes_to_item(attributes: HashMap<String, AttributeValue>) -> Result<Item> {
    attributes
        .into_iter()
        .map(|(name, value)| Ok((name, attribute_to_value(value)?)))
        .collect()
}

/// Convert a single DynamoDB attribute to a store value.
pub fn attribute_to_value(attribute: AttributeValue) -> Result<StoreValue> {
    match attribute {
        AttributeValue::S(s) => Ok(StoreValue::String(s)),
        AttributeValue::N(n) => Ok(StoreValue::Number(n.parse()?)),
        AttributeValue::Bool(b) => Ok(StoreValue::Bool(b)),
        AttributeValue::Null(_) => Ok(StoreValue::Null),
        AttributeValue::Ss(values) => Ok(StoreValue::StringSet(values.into_iter().collect())),
        AttributeValue::Ns(values) => Ok(StoreValue::NumberSet(
            values
                .iter()
                .map(|n| n.parse::<Number>())
                .collect::<Result<_>>()?,
        )),
        AttributeValue::L(values) => Ok(StoreValue::List(
            values
                .into_iter()
                .map(attribute_to_value)
                .collect::<Result<_>>()?,
        )),
        AttributeValue::M(map) => Ok(StoreValue::Map(attributes_to_item(map)?)),
        AttributeValue::B(_) | AttributeValue::Bs(_) => Err(StoreError::InvalidData(
            "Unsupported attribute type: binary".to_string(),
        )),
        other => Err(StoreError::InvalidData(format!(
            "Unsupported attribute type: {:?}",
            other
        ))),
    }
}

// ============================================================================
// store -> DynamoDB
// ============================================================================

/// Convert a store item to a DynamoDB item.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    item.iter()
        .map(|(name, value)| (name.clone(), value_to_attribute(value)))
        .collect()
}

/// Convert a primary key to the DynamoDB key map.
pub fn key_to_attributes(key: &Key) -> HashMap<String, AttributeValue> {
    item_to_attributes(key.attributes())
}

/// Convert a single store value to a DynamoDB attribute.
pub fn value_to_attribute(value: &StoreValue) -> AttributeValue {
    match value {
        StoreValue::String(s) => AttributeValue::S(s.clone()),
        StoreValue::Number(n) => AttributeValue::N(n.to_string()),
        StoreValue::Bool(b) => AttributeValue::Bool(*b),
        StoreValue::Null => AttributeValue::Null(true),
        StoreValue::StringSet(set) => AttributeValue::Ss(set.iter().cloned().collect()),
        StoreValue::NumberSet(set) => {
            AttributeValue::Ns(set.iter().map(|n| n.to_string()).collect())
        }
        StoreValue::List(values) => {
            AttributeValue::L(values.iter().map(value_to_attribute).collect())
        }
        StoreValue::Map(map) => AttributeValue::M(item_to_attributes(map)),
    }
}
