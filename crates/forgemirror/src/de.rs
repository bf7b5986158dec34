//! Serde helpers shared by the API models.

use serde::{Deserialize, Deserializer};

/// Decode a nullable field, mapping JSON `null` to the type's default.
///
/// Both forges return `"description": null` for repositories without one.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
