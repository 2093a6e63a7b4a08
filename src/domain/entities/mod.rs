//! Domain entity definitions.

mod admin;
mod breed;
mod coin_grant;
mod dog;
mod dog_like;
mod faq;
mod hobby;
mod record;
mod report;
mod status;
mod sub_admin;
mod token;

use chrono::{DateTime, Utc};

pub use admin::AdminProfile;
pub use breed::Breed;
pub use coin_grant::CoinGrant;
pub use dog::Dog;
pub use dog_like::DogLike;
pub use faq::Faq;
pub use hobby::Hobby;
pub use record::AdminRecord;
pub use report::Report;
pub use status::RecordStatus;
pub use sub_admin::{PermissionRoutes, SubAdmin};
pub use token::AuthToken;

pub(crate) fn format_date(value: Option<&DateTime<Utc>>) -> String {
    value.map_or_else(|| "-".to_string(), |dt| dt.format("%Y-%m-%d").to_string())
}
