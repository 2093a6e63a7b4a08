//! Record status shared by most admin resources.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-side lifecycle status of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RecordStatus {
    /// Visible to app users.
    #[default]
    Active,
    /// Hidden from app users.
    Inactive,
    /// Report awaiting moderation.
    Pending,
    /// Report handled by a moderator.
    Resolved,
    /// Any value this console does not know about.
    Other(String),
}

impl RecordStatus {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Other(value) => value,
        }
    }

    /// Returns the status a toggle action moves to, if the status is toggleable.
    #[must_use]
    pub const fn toggled(&self) -> Option<Self> {
        match self {
            Self::Active => Some(Self::Inactive),
            Self::Inactive => Some(Self::Active),
            Self::Pending => Some(Self::Resolved),
            Self::Resolved => Some(Self::Pending),
            Self::Other(_) => None,
        }
    }
}

impl From<&str> for RecordStatus {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" | "1" | "true" => Self::Active,
            "inactive" | "0" | "false" => Self::Inactive,
            "pending" => Self::Pending,
            "resolved" => Self::Resolved,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
            Self::Pending => write!(f, "Pending"),
            Self::Resolved => write!(f, "Resolved"),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

impl Serialize for RecordStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Flag(bool),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self::from(s.as_str()),
            Raw::Flag(true) => Self::Active,
            Raw::Flag(false) => Self::Inactive,
            Raw::Number(1) => Self::Active,
            Raw::Number(0) => Self::Inactive,
            Raw::Number(n) => Self::Other(n.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_pairs() {
        assert_eq!(RecordStatus::Active.toggled(), Some(RecordStatus::Inactive));
        assert_eq!(RecordStatus::Inactive.toggled(), Some(RecordStatus::Active));
        assert_eq!(RecordStatus::Pending.toggled(), Some(RecordStatus::Resolved));
        assert_eq!(RecordStatus::Other("banned".into()).toggled(), None);
    }

    #[test]
    fn test_deserialize_variants() {
        let s: RecordStatus = serde_json::from_str(r#""Active""#).unwrap();
        assert_eq!(s, RecordStatus::Active);
        let s: RecordStatus = serde_json::from_str("false").unwrap();
        assert_eq!(s, RecordStatus::Inactive);
        let s: RecordStatus = serde_json::from_str("1").unwrap();
        assert_eq!(s, RecordStatus::Active);
        let s: RecordStatus = serde_json::from_str(r#""blocked""#).unwrap();
        assert_eq!(s, RecordStatus::Other("blocked".into()));
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&RecordStatus::Resolved).unwrap();
        assert_eq!(json, r#""resolved""#);
    }
}
