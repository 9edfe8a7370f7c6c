//! Serde helpers for quirks of the portal's JSON encoding.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::Serializer;

/// Decode `null` (or a missing key, with `#[serde(default)]`) as `T::default()`.
///
/// The portal sends `null` for empty collections.
///
/// # Errors
/// Fails when the value is neither `null` nor a valid `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Encode `None` as `""` and decode `""` (or `null`) as `None`.
///
/// Used for query fields the portal expects as always-present strings.
pub mod empty_as_none {
    use super::{de, Deserialize, Deserializer, Display, FromStr, Serializer};

    /// # Errors
    /// Propagates serializer errors.
    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Display,
    {
        match value {
            Some(value) => serializer.collect_str(value),
            None => serializer.serialize_str(""),
        }
    }

    /// # Errors
    /// Fails when the string is non-empty and does not parse as `T`.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
        }
    }
}
