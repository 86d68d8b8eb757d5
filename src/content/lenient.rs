//! Field deserializers that never reject an item.
//!
//! Content APIs disagree on scalar types (`"gpa": 8.5` next to
//! `"gpa": "8.5"`, `"level": "95.00"`). A value of an unusable type becomes
//! the field's empty state, so the item keeps its display default for that
//! field and the rest of it still renders.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use super::items::ItemId;

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_number(value: Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Strings as-is, numbers and booleans as their text.
pub fn text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(d)?))
}

/// Numbers, or strings holding a number.
pub fn number<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_number(Value::deserialize(d)?))
}

/// Non-negative counts, rounded to the nearest whole number.
pub fn count<'de, D>(d: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_number(Value::deserialize(d)?)
        .filter(|n| *n >= 0.0)
        .map(|n| n.round() as u64))
}

pub fn id<'de, D>(d: D) -> Result<Option<ItemId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => ItemId::Number(i),
            None => ItemId::Text(n.to_string()),
        }),
        Value::String(s) => Some(ItemId::Text(s)),
        _ => None,
    })
}

/// A list of labels. A lone string counts as a one-element list; entries
/// that aren't scalars are skipped.
pub fn strings<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(values) => values.into_iter().filter_map(scalar_text).collect(),
        Value::String(s) => vec![s],
        _ => Vec::new(),
    })
}

/// A list of nested records. Entries that aren't objects are skipped.
pub fn objects<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(values) => values
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect(),
        _ => Vec::new(),
    })
}
