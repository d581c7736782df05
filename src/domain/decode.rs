use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::utils::error::Result;

/// Decodes a JSON value into an entity, matching object keys
/// case-insensitively. The upstream API is not consistent about key casing
/// (`Time`/`Valid` vs `time`/`valid`), so every key is ASCII-folded to
/// lowercase before the typed decode; entity fields use lowercase wire names.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(fold_keys(value))?)
}

pub fn decode_str<T: DeserializeOwned>(raw: &str) -> Result<T> {
    decode(serde_json::from_str(raw)?)
}

fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_ascii_lowercase(), fold_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}
