use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as JsonValue;

use crate::server::error::Error;

/// Decodes a JSON document column, treating `null` as the type's default.
///
/// Optional maps and lists (section overrides, enabled entities) are written as absent by
/// some clients; an absent value and an empty one are read the same way.
pub fn decode_or_default<T>(value: &JsonValue) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return Ok(T::default());
    }

    Ok(serde_json::from_value(value.clone())?)
}

/// Encodes a value for storage in a JSON document column.
pub fn encode<T: Serialize>(value: &T) -> Result<JsonValue, Error> {
    Ok(serde_json::to_value(value)?)
}
