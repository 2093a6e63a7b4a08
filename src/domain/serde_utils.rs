//! Serde helpers for the loosely typed admin API payloads.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt;

/// Record identifiers that arrive either as strings (Mongo-style) or integers.
pub mod record_id {
    use super::{Deserializer, Serializer, Visitor, de, fmt};

    /// Serializes the identifier as a plain string.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    /// Deserializes an identifier from a string or integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a string nor an integer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer record id")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Counters (age, coins) that some endpoints send as numeric strings.
pub mod lenient_u64 {
    use super::{Deserialize, Deserializer, de};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        Float(f64),
        Text(String),
    }

    /// Deserializes an optional counter, treating blanks and nulls as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty string is not a valid integer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<NumberOrString>::deserialize(deserializer)? {
            None => Ok(None),
            Some(NumberOrString::Number(n)) => Ok(Some(n)),
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(NumberOrString::Float(f)) if f >= 0.0 => Ok(Some(f as u64)),
            Some(NumberOrString::Float(f)) => Err(de::Error::custom(format!(
                "negative counter: {f}"
            ))),
            Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(NumberOrString::Text(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
        }
    }
}

/// Timestamps that may be missing, null, or malformed; malformed values become `None`.
pub mod lenient_datetime {
    use chrono::{DateTime, Utc};

    use super::{Deserialize, Deserializer};

    /// Deserializes an RFC 3339 timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error only if the value is not a string or null.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| {
            DateTime::parse_from_rfc3339(&s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        }))
    }
}

/// References that are either a plain name or a populated document with a `name` field.
pub mod name_or_object {
    use super::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NameRef {
        Name(String),
        Document {
            #[serde(alias = "fullName", alias = "username")]
            name: String,
        },
        Unknown(serde_json::Value),
    }

    /// Deserializes the display name of a reference.
    ///
    /// # Errors
    ///
    /// Never fails for well-formed JSON; unrecognised shapes become `None`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<NameRef>::deserialize(deserializer)? {
            Some(NameRef::Name(name) | NameRef::Document { name }) => Some(name),
            Some(NameRef::Unknown(_)) | None => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(with = "super::record_id")]
        id: String,
        #[serde(default, deserialize_with = "super::lenient_u64::deserialize")]
        count: Option<u64>,
        #[serde(default, deserialize_with = "super::lenient_datetime::deserialize")]
        at: Option<chrono::DateTime<chrono::Utc>>,
        #[serde(default, deserialize_with = "super::name_or_object::deserialize")]
        owner: Option<String>,
    }

    #[test]
    fn test_id_accepts_string_and_number() {
        let a: Probe = serde_json::from_str(r#"{"id":"64f0c2"}"#).unwrap();
        let b: Probe = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(a.id, "64f0c2");
        assert_eq!(b.id, "42");
    }

    #[test]
    fn test_counter_accepts_numeric_string() {
        let p: Probe = serde_json::from_str(r#"{"id":1,"count":"7"}"#).unwrap();
        assert_eq!(p.count, Some(7));

        let p: Probe = serde_json::from_str(r#"{"id":1,"count":""}"#).unwrap();
        assert_eq!(p.count, None);

        let p: Probe = serde_json::from_str(r#"{"id":1,"count":null}"#).unwrap();
        assert_eq!(p.count, None);
    }

    #[test]
    fn test_malformed_timestamp_is_dropped() {
        let p: Probe = serde_json::from_str(r#"{"id":1,"at":"yesterday"}"#).unwrap();
        assert!(p.at.is_none());

        let p: Probe =
            serde_json::from_str(r#"{"id":1,"at":"2024-03-01T10:00:00.000Z"}"#).unwrap();
        assert!(p.at.is_some());
    }

    #[test]
    fn test_reference_name_from_string_or_document() {
        let p: Probe = serde_json::from_str(r#"{"id":1,"owner":"Ana"}"#).unwrap();
        assert_eq!(p.owner.as_deref(), Some("Ana"));

        let p: Probe =
            serde_json::from_str(r#"{"id":1,"owner":{"_id":"u1","fullName":"Ana Ruiz"}}"#).unwrap();
        assert_eq!(p.owner.as_deref(), Some("Ana Ruiz"));

        let p: Probe = serde_json::from_str(r#"{"id":1,"owner":17}"#).unwrap();
        assert!(p.owner.is_none());
    }
}
