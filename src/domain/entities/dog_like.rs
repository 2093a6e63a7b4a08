//! Like relation between two dogs.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::format_date;
use crate::domain::serde_utils::{lenient_datetime, name_or_object, record_id};

/// One dog liking another dog's profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogLike {
    #[serde(alias = "_id", deserialize_with = "record_id::deserialize")]
    pub id: String,
    /// Dog whose profile was liked.
    #[serde(
        default,
        alias = "dog",
        alias = "likedDog",
        deserialize_with = "name_or_object::deserialize"
    )]
    pub dog_name: Option<String>,
    /// Dog (or user) that gave the like.
    #[serde(
        default,
        alias = "likedByDog",
        deserialize_with = "name_or_object::deserialize"
    )]
    pub liked_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl DogLike {
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.dog_name.clone().unwrap_or_else(|| "-".to_string()),
            self.liked_by.clone().unwrap_or_else(|| "-".to_string()),
            format_date(self.created_at.as_ref()),
        ]
    }
}
