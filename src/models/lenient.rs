//! Forgiving deserializers for quiz answers.
//!
//! Quiz payloads come straight from the browser and may be half-filled or
//! shaped wrong. A field that does not parse becomes "unset" so the rest of
//! the answers still count.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse an optional field, treating null or a mismatched shape as `None`
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            tracing::debug!("Ignoring malformed answer field: {}", e);
            Ok(None)
        }
    }
}

/// Parse a nested object, treating null or any non-object value as the default
pub fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        if !value.is_null() {
            tracing::debug!("Ignoring non-object answers: {}", value);
        }
        return Ok(T::default());
    }

    match serde_json::from_value(value) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            tracing::debug!("Ignoring malformed answers: {}", e);
            Ok(T::default())
        }
    }
}

/// Parse a list of strings, keeping only the string elements
///
/// A bare string is accepted as a one-element list.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    let list = match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                other => {
                    tracing::debug!("Ignoring non-string list entry: {}", other);
                    None
                }
            })
            .collect(),
        Value::String(s) => vec![s],
        _ => Vec::new(),
    };

    Ok(list)
}
