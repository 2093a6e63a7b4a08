//! Redeemable coin grant entity (gifting).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::format_date;
use crate::domain::serde_utils::{lenient_datetime, lenient_u64, name_or_object, record_id};

/// Coins gifted to a user by an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinGrant {
    #[serde(alias = "_id", deserialize_with = "record_id::deserialize")]
    pub id: String,
    #[serde(
        default,
        alias = "user",
        alias = "userId",
        deserialize_with = "name_or_object::deserialize"
    )]
    pub user_name: Option<String>,
    #[serde(
        default,
        alias = "amount",
        alias = "redeemableCoins",
        deserialize_with = "lenient_u64::deserialize"
    )]
    pub coins: Option<u64>,
    #[serde(default, alias = "message")]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CoinGrant {
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.user_name.clone().unwrap_or_else(|| "-".to_string()),
            self.coins.unwrap_or(0).to_string(),
            self.note.clone().unwrap_or_default(),
            format_date(self.created_at.as_ref()),
        ]
    }
}
