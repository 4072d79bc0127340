//! DynamoDB expression generation functions.
//!
//! Pure functions rendering key conditions and filters into DynamoDB
//! expressions. Attribute names always go through `#` placeholders so that
//! reserved words (`date`, `status`, ...) never reach the expression text.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use repertory_core::store::{Filter, KeyCondition};

use super::conversions::value_to_attribute;

pub const KEY_NAME: &str = "#pk";
pub const KEY_VALUE: &str = ":pk";
pub const FILTER_NAME: &str = "#f";
pub const FILTER_VALUE: &str = ":f";

/// A rendered expression with its placeholder bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub text: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Render a partition key condition.
///
/// Pattern: `#pk = :pk`
pub fn key_condition_expression(condition: &KeyCondition) -> Expression {
    Expression {
        text: format!("{KEY_NAME} = {KEY_VALUE}"),
        names: HashMap::from([(KEY_NAME.to_string(), condition.attribute.clone())]),
        values: HashMap::from([(
            KEY_VALUE.to_string(),
            value_to_attribute(&condition.value),
        )]),
    }
}

/// Render a filter.
///
/// Patterns: `#f = :f` and `contains(#f, :f)`
pub fn filter_expression(filter: &Filter) -> Expression {
    let text = match filter {
        Filter::Equals { .. } => format!("{FILTER_NAME} = {FILTER_VALUE}"),
        Filter::Contains { .. } => format!("contains({FILTER_NAME}, {FILTER_VALUE})"),
    };

    Expression {
        text,
        names: HashMap::from([(FILTER_NAME.to_string(), filter.attribute().to_string())]),
        values: HashMap::from([(FILTER_VALUE.to_string(), value_to_attribute(filter.value()))]),
    }
}

#[cfg(test)]
mod tests {
    use repertory_core::store::{Collection, Index, Query};

    use super::*;

    #[test]
    fn test_partition_key_condition() {
        let query = Query::partition(Collection::UserRepertoire, "user123");

        let expression = key_condition_expression(&query.key_condition);

        assert_eq!(expression.text, "#pk = :pk");
        assert_eq!(expression.names["#pk"], "userId");
        assert_eq!(expression.values[":pk"].as_s().unwrap(), "user123");
    }

    #[test]
    fn test_index_key_condition_uses_placeholder_for_reserved_words() {
        let query = Query::on_index(Index::PerformanceDate, "2025-03-15");

        let expression = key_condition_expression(&query.key_condition);

        assert!(!expression.text.contains("performanceDate"));
        assert_eq!(expression.names["#pk"], "performanceDate");
    }

    #[test]
    fn test_equals_filter() {
        let expression = filter_expression(&Filter::eq("pieceStatus", "mastered"));

        assert_eq!(expression.text, "#f = :f");
        assert_eq!(expression.names["#f"], "pieceStatus");
        assert_eq!(expression.values[":f"].as_s().unwrap(), "mastered");
    }

    #[test]
    fn test_contains_filter() {
        let expression = filter_expression(&Filter::contains("instruments", "Violin"));

        assert_eq!(expression.text, "contains(#f, :f)");
        assert_eq!(expression.names["#f"], "instruments");
        assert_eq!(expression.values[":f"].as_s().unwrap(), "Violin");
    }
}
