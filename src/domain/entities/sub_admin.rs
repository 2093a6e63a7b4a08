//! Sub-administrator entity and its route permissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::{RecordStatus, format_date};
use crate::domain::serde_utils::{lenient_datetime, record_id};

bitflags::bitflags! {
    /// Console sections a sub-admin may access.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PermissionRoutes: u16 {
        const DOGS = 1 << 0;
        const FAQS = 1 << 1;
        const BREEDS = 1 << 2;
        const HOBBIES = 1 << 3;
        const LIKES = 1 << 4;
        const REPORTS = 1 << 5;
        const GIFTING = 1 << 6;
    }
}

impl PermissionRoutes {
    /// Route names in display order, paired with their flag.
    pub const ROUTES: [(Self, &'static str); 7] = [
        (Self::DOGS, "dogs"),
        (Self::FAQS, "faqs"),
        (Self::BREEDS, "breeds"),
        (Self::HOBBIES, "hobbies"),
        (Self::LIKES, "likes"),
        (Self::REPORTS, "reports"),
        (Self::GIFTING, "gifting"),
    ];

    /// Parses a route name.
    #[must_use]
    pub fn from_route(route: &str) -> Option<Self> {
        let route = route.trim().trim_start_matches('/').to_ascii_lowercase();
        Self::ROUTES
            .iter()
            .find(|(_, name)| *name == route)
            .map(|(flag, _)| *flag)
    }

    /// Returns the selected route names in display order.
    #[must_use]
    pub fn route_names(self) -> Vec<&'static str> {
        Self::ROUTES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

fn deserialize_routes<'de, D>(deserializer: D) -> Result<PermissionRoutes, D::Error>
where
    D: Deserializer<'de>,
{
    let routes = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(routes
        .iter()
        .filter_map(|r| PermissionRoutes::from_route(r))
        .fold(PermissionRoutes::empty(), |acc, flag| acc | flag))
}

/// An administrator with restricted access to selected sections.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAdmin {
    #[serde(alias = "_id", deserialize_with = "record_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "fullName")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "routes", deserialize_with = "deserialize_routes")]
    pub permissions: PermissionRoutes,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "lenient_datetime::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SubAdmin {
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.permissions.route_names().join(", "),
            self.status.to_string(),
            format_date(self.created_at.as_ref()),
        ]
    }
}
