//! Dog profile entity.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{RecordStatus, format_date};
use crate::domain::serde_utils::{lenient_datetime, lenient_u64, name_or_object, record_id};

/// A dog profile registered in the app.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    /// Record identifier.
    #[serde(alias = "_id", deserialize_with = "record_id::deserialize")]
    pub id: String,
    /// Dog name.
    #[serde(default, alias = "dogName")]
    pub name: String,
    /// Breed name, possibly populated from the breed document.
    #[serde(default, deserialize_with = "name_or_object::deserialize")]
    pub breed: Option<String>,
    /// Owner display name.
    #[serde(
        default,
        alias = "owner",
        alias = "user",
        deserialize_with = "name_or_object::deserialize"
    )]
    pub owner_name: Option<String>,
    /// Age in years.
    #[serde(default, deserialize_with = "lenient_u64::deserialize")]
    pub age: Option<u64>,
    /// Gender as reported by the owner.
    #[serde(default)]
    pub gender: Option<String>,
    /// Visibility status.
    #[serde(default)]
    pub status: RecordStatus,
    /// Creation timestamp.
    #[serde(default, deserialize_with = "lenient_datetime::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Dog {
    /// Returns table cells in column order.
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.breed.clone().unwrap_or_else(|| "-".to_string()),
            self.owner_name.clone().unwrap_or_else(|| "-".to_string()),
            self.age.map_or_else(|| "-".to_string(), |a| a.to_string()),
            self.gender.clone().unwrap_or_else(|| "-".to_string()),
            self.status.to_string(),
            format_date(self.created_at.as_ref()),
        ]
    }
}
