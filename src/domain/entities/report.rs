//! Abuse report entity.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{RecordStatus, format_date};
use crate::domain::serde_utils::{lenient_datetime, name_or_object, record_id};

/// A user report against a dog profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(alias = "_id", deserialize_with = "record_id::deserialize")]
    pub id: String,
    #[serde(
        default,
        alias = "dog",
        alias = "reportedDogId",
        deserialize_with = "name_or_object::deserialize"
    )]
    pub reported_dog: Option<String>,
    #[serde(
        default,
        alias = "reportedById",
        alias = "user",
        deserialize_with = "name_or_object::deserialize"
    )]
    pub reported_by: Option<String>,
    #[serde(default, alias = "description")]
    pub reason: String,
    /// Moderation status; reports start out pending.
    #[serde(default = "pending")]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "lenient_datetime::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

const fn pending() -> RecordStatus {
    RecordStatus::Pending
}

impl Report {
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.reported_dog.clone().unwrap_or_else(|| "-".to_string()),
            self.reported_by.clone().unwrap_or_else(|| "-".to_string()),
            self.reason.clone(),
            self.status.to_string(),
            format_date(self.created_at.as_ref()),
        ]
    }
}
