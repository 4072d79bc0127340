//! JSON rendering of store values.
//!
//! Integral numbers render as integer literals and the rest as floats.
//! Sets render as arrays.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::store::{Number, StoreValue};

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Number::Integer(n) => match i64::try_from(*n) {
                Ok(small) => serializer.serialize_i64(small),
                Err(_) => serializer.serialize_i128(*n),
            },
            Number::Decimal(n) => serializer.serialize_f64(*n),
        }
    }
}

impl Serialize for StoreValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StoreValue::String(s) => serializer.serialize_str(s),
            StoreValue::Number(n) => n.serialize(serializer),
            StoreValue::Bool(b) => serializer.serialize_bool(*b),
            StoreValue::Null => serializer.serialize_unit(),
            StoreValue::StringSet(set) => {
                let mut seq = serializer.serialize_seq(Some(set.len()))?;
                for value in set {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            StoreValue::NumberSet(set) => {
                let mut seq = serializer.serialize_seq(Some(set.len()))?;
                for value in set {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            StoreValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for value in items {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            StoreValue::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

/// Format a value as compact JSON.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Item;

    #[test]
    fn test_integral_number_renders_as_integer() {
        let value = StoreValue::Number("5.0".parse().unwrap());
        assert_eq!(format_json(&value), "5");
    }

    #[test]
    fn test_fractional_number_renders_as_float() {
        let value = StoreValue::Number("5.5".parse().unwrap());
        assert_eq!(format_json(&value), "5.5");
    }

    #[test]
    fn test_integers_past_i64_render_exactly() {
        let big = StoreValue::Number("12345678901234567890".parse().unwrap());
        let past_max = StoreValue::Number("9223372036854775808".parse().unwrap());
        let widest =
            StoreValue::Number("-99999999999999999999999999999999999999".parse().unwrap());

        assert_eq!(format_json(&big), "12345678901234567890");
        assert_eq!(format_json(&past_max), "9223372036854775808");
        assert_eq!(
            format_json(&widest),
            "-99999999999999999999999999999999999999"
        );
    }

    #[test]
    fn test_string_set_renders_as_array() {
        let value = StoreValue::StringSet(["Violin".to_string(), "Piano".to_string()].into());

        let json: serde_json::Value = serde_json::from_str(&format_json(&value)).unwrap();
        let array = json.as_array().unwrap();

        assert_eq!(array.len(), 2);
        assert!(array.contains(&serde_json::json!("Violin")));
        assert!(array.contains(&serde_json::json!("Piano")));
    }

    #[test]
    fn test_nested_values() {
        let mut map = Item::new();
        map.insert("done".to_string(), StoreValue::Bool(true));
        map.insert("note".to_string(), StoreValue::Null);
        map.insert(
            "scores".to_string(),
            StoreValue::NumberSet(vec![Number::Integer(7), Number::Decimal(8.5)]),
        );
        let value = StoreValue::List(vec![StoreValue::Map(map), StoreValue::from("x")]);

        assert_eq!(
            format_json(&value),
            r#"[{"done":true,"note":null,"scores":[7,8.5]},"x"]"#
        );
    }
}
