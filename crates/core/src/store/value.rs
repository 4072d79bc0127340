use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use super::StoreError;

/// A single record as returned by the store: attribute name to value.
pub type Item = BTreeMap<String, StoreValue>;

/// A numeric attribute.
///
/// The store transmits numbers as decimal strings of up to 38 significant
/// digits. Values with no fractional part are kept as integers so they
/// render as integer literals; every 38-digit integer fits in an `i128`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i128),
    Decimal(f64),
}

impl FromStr for Number {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i128>() {
            return Ok(Number::Integer(n));
        }

        // `12.000` is integral: parse the integer digits exactly.
        if let Some((whole, fraction)) = trimmed.split_once('.') {
            if !fraction.is_empty() && fraction.bytes().all(|b| b == b'0') {
                if let Ok(n) = whole.parse::<i128>() {
                    return Ok(Number::Integer(n));
                }
            }
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| StoreError::InvalidData(format!("Invalid number: {}", s)))?;

        if !value.is_finite() {
            return Err(StoreError::InvalidData(format!("Invalid number: {}", s)));
        }

        Ok(Number::from(value))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Decimal(n) => write!(f, "{}", n),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value.into())
    }
}

impl From<f64> for Number {
    /// Integral values inside the `i128` range become integers. `i128::MAX as
    /// f64` rounds up to 2^127, so the upper bound is exclusive.
    fn from(value: f64) -> Self {
        if value.fract() == 0.0 && value >= i128::MIN as f64 && value < i128::MAX as f64 {
            Number::Integer(value as i128)
        } else {
            Number::Decimal(value)
        }
    }
}

/// An attribute value in the store's wire representation.
///
/// Converted into native types right after each store call, so nothing
/// downstream has to inspect store types at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreValue {
    String(String),
    Number(Number),
    Bool(bool),
    Null,
    StringSet(BTreeSet<String>),
    NumberSet(Vec<Number>),
    List(Vec<StoreValue>),
    Map(Item),
}

impl StoreValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StoreValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// DynamoDB `contains` semantics.
    ///
    /// Sets and lists match on an exact element, strings match on a substring.
    pub fn contains(&self, needle: &StoreValue) -> bool {
        match (self, needle) {
            (StoreValue::StringSet(set), StoreValue::String(s)) => set.contains(s),
            (StoreValue::NumberSet(set), StoreValue::Number(n)) => set.contains(n),
            (StoreValue::List(items), needle) => items.contains(needle),
            (StoreValue::String(haystack), StoreValue::String(s)) => haystack.contains(s.as_str()),
            _ => false,
        }
    }
}

impl From<&str> for StoreValue {
    fn from(value: &str) -> Self {
        StoreValue::String(value.to_string())
    }
}

impl From<String> for StoreValue {
    fn from(value: String) -> Self {
        StoreValue::String(value)
    }
}

impl From<Number> for StoreValue {
    fn from(value: Number) -> Self {
        StoreValue::Number(value)
    }
}

impl From<bool> for StoreValue {
    fn from(value: bool) -> Self {
        StoreValue::Bool(value)
    }
}
