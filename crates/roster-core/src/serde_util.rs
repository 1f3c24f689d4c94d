//! Serde helpers for tolerant snapshot decoding
//!
//! Optional member fields never fail a record: a missing, `null` or
//! wrong-typed value decodes to the field's default. Use these together with
//! `#[serde(default)]` so absent fields behave the same way.

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode `T`, falling back to `T::default()` when the value does not fit
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Non-negative integer; fractions are truncated, negatives and
/// non-numeric values become 0. Numeric strings are accepted.
pub(crate) fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_of(&value).map_or(0, |n| n.trunc().min(f64::from(u32::MAX)) as u32))
}

/// Non-negative float; negatives, NaN and non-numeric values become 0.0
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_of(&value).unwrap_or(0.0))
}

/// Set of strings; non-string entries are dropped, anything but an array is empty
pub(crate) fn lenient_string_set<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_items(Value::deserialize(deserializer)?).collect())
}

/// Ordered list of strings with the same rules as [`lenient_string_set`]
pub(crate) fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_items(Value::deserialize(deserializer)?).collect())
}

fn number_of(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (number.is_finite() && number >= 0.0).then_some(number)
}

fn string_items(value: Value) -> impl Iterator<Item = String> {
    let items = match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    };
    items.into_iter().filter_map(|item| match item {
        Value::String(s) => Some(s),
        _ => None,
    })
}
