//! Signed-in administrator.

use serde::Deserialize;

use super::PermissionRoutes;
use crate::domain::resource::Resource;

/// Profile of the administrator owning the current session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    #[serde(default, alias = "fullName")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Routes granted to a sub-admin. Absent for full administrators.
    #[serde(default, alias = "routes")]
    pub permissions: Option<Vec<String>>,
}

impl AdminProfile {
    /// Creates a full-administrator profile.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            permissions: None,
        }
    }

    /// Returns the name, falling back to the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Returns whether this admin may open the screen for `resource`.
    ///
    /// Sub-admins see only their granted routes and never the sub-admin screen.
    #[must_use]
    pub fn can_access(&self, resource: Resource) -> bool {
        let Some(routes) = &self.permissions else {
            return true;
        };
        let granted = routes
            .iter()
            .filter_map(|r| PermissionRoutes::from_route(r))
            .fold(PermissionRoutes::empty(), |acc, flag| acc | flag);
        resource
            .permission()
            .is_some_and(|required| granted.contains(required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_admin_sees_everything() {
        let admin = AdminProfile::new("Root", "root@pawboard.io");
        assert!(Resource::ALL.iter().all(|r| admin.can_access(*r)));
    }

    #[test]
    fn test_sub_admin_sees_granted_routes_only() {
        let admin: AdminProfile = serde_json::from_str(
            r#"{"name":"Kim","email":"kim@pawboard.io","permissions":["faqs","/reports"]}"#,
        )
        .unwrap();

        assert!(admin.can_access(Resource::Faqs));
        assert!(admin.can_access(Resource::Reports));
        assert!(!admin.can_access(Resource::Dogs));
        assert!(!admin.can_access(Resource::SubAdmins));
    }
}
