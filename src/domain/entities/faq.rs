//! Frequently asked question entity.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{RecordStatus, format_date};
use crate::domain::serde_utils::{lenient_datetime, record_id};

/// A FAQ entry shown in the app's help section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    #[serde(alias = "_id", deserialize_with = "record_id::deserialize")]
    pub id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "lenient_datetime::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Faq {
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.question.clone(),
            self.answer.clone(),
            self.status.to_string(),
            format_date(self.created_at.as_ref()),
        ]
    }

    #[must_use]
    pub fn form_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("question", self.question.clone()),
            ("answer", self.answer.clone()),
        ]
    }
}
