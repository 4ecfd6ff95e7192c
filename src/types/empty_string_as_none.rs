use serde::de::{Deserializer, IntoDeserializer};
use serde::Deserialize;

/// Treats missing, `null` and blank strings as `None`.
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => T::deserialize(value.into_deserializer()).map(Some),
        None => Ok(None),
    }
}
