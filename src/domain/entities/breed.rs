//! Dog breed entity.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{RecordStatus, format_date};
use crate::domain::serde_utils::{lenient_datetime, record_id};

/// A breed users can pick for their dog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breed {
    #[serde(alias = "_id", deserialize_with = "record_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "breedName")]
    pub name: String,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "lenient_datetime::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Breed {
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.status.to_string(),
            format_date(self.created_at.as_ref()),
        ]
    }

    #[must_use]
    pub fn form_values(&self) -> Vec<(&'static str, String)> {
        vec![("name", self.name.clone())]
    }
}
