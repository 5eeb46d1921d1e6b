//! Shared deserialization helpers.

use serde::{Deserialize, Deserializer};

/// Decode a field that the server may send as `null`, falling back to the
/// type's default value.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
