use serde::{Deserialize, Deserializer};

/// Deserializes an explicit `null` as the type's default.
///
/// Pair with `#[serde(default)]` so a missing key, a `null` and an empty value all read the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
