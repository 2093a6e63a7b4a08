//! Catalogue of the REST resources managed by the console.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entities::PermissionRoutes;

/// One admin screen backed by a REST collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Dogs,
    Faqs,
    Breeds,
    Hobbies,
    Likes,
    Reports,
    SubAdmins,
    Gifting,
}

/// Operations a resource screen offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Capabilities {
    pub create: bool,
    pub edit: bool,
    pub toggle_status: bool,
    pub delete: bool,
}

/// A field of a create/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    /// JSON key sent to the API.
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    /// Value must parse as a positive integer.
    pub numeric: bool,
}

impl FormField {
    const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            required: true,
            numeric: false,
        }
    }

    const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    const fn number(mut self) -> Self {
        self.numeric = true;
        self
    }
}

impl Resource {
    /// Every resource in tab order.
    pub const ALL: [Self; 8] = [
        Self::Dogs,
        Self::Faqs,
        Self::Breeds,
        Self::Hobbies,
        Self::Likes,
        Self::Reports,
        Self::SubAdmins,
        Self::Gifting,
    ];

    /// Screen title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dogs => "Dogs",
            Self::Faqs => "FAQs",
            Self::Breeds => "Breeds",
            Self::Hobbies => "Hobbies",
            Self::Likes => "Likes",
            Self::Reports => "Reports",
            Self::SubAdmins => "Sub-admins",
            Self::Gifting => "Gifting",
        }
    }

    /// Singular noun used in notifications.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Dogs => "Dog",
            Self::Faqs => "FAQ",
            Self::Breeds => "Breed",
            Self::Hobbies => "Hobby",
            Self::Likes => "Like",
            Self::Reports => "Report",
            Self::SubAdmins => "Sub-admin",
            Self::Gifting => "Coin grant",
        }
    }

    /// Key used in the `[endpoints]` config table and env var names.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dogs => "dogs",
            Self::Faqs => "faqs",
            Self::Breeds => "breeds",
            Self::Hobbies => "hobbies",
            Self::Likes => "likes",
            Self::Reports => "reports",
            Self::SubAdmins => "sub_admins",
            Self::Gifting => "gifting",
        }
    }

    /// Hard-coded endpoint path used when no override is configured.
    #[must_use]
    pub const fn default_path(self) -> &'static str {
        match self {
            Self::Dogs => "/admin/dogs",
            Self::Faqs => "/admin/faqs",
            Self::Breeds => "/admin/breeds",
            Self::Hobbies => "/admin/hobbies",
            Self::Likes => "/admin/likes",
            Self::Reports => "/admin/reports",
            Self::SubAdmins => "/admin/sub-admins",
            Self::Gifting => "/admin/gifting",
        }
    }

    /// Table column headers.
    #[must_use]
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Dogs => &["Name", "Breed", "Owner", "Age", "Gender", "Status", "Created"],
            Self::Faqs => &["Question", "Answer", "Status", "Created"],
            Self::Breeds | Self::Hobbies => &["Name", "Status", "Created"],
            Self::Likes => &["Dog", "Liked by", "Created"],
            Self::Reports => &["Dog", "Reported by", "Reason", "Status", "Created"],
            Self::SubAdmins => &["Name", "Email", "Routes", "Status", "Created"],
            Self::Gifting => &["User", "Coins", "Note", "Created"],
        }
    }

    /// Fields of the generic create/edit form. Sub-admins use a dedicated form.
    #[must_use]
    pub fn form_fields(self) -> Vec<FormField> {
        match self {
            Self::Faqs => vec![
                FormField::text("question", "Question"),
                FormField::text("answer", "Answer"),
            ],
            Self::Breeds | Self::Hobbies => vec![FormField::text("name", "Name")],
            Self::Gifting => vec![
                FormField::text("userId", "User ID"),
                FormField::text("coins", "Coins").number(),
                FormField::text("note", "Note").optional(),
            ],
            Self::Dogs | Self::Likes | Self::Reports | Self::SubAdmins => Vec::new(),
        }
    }

    /// Operations available on this screen.
    #[must_use]
    pub const fn capabilities(self) -> Capabilities {
        let (create, edit, toggle_status, delete) = match self {
            Self::Dogs | Self::Reports => (false, false, true, true),
            Self::Faqs | Self::Breeds | Self::Hobbies => (true, true, true, true),
            Self::Likes => (false, false, false, true),
            Self::SubAdmins => (true, false, true, true),
            Self::Gifting => (true, false, false, false),
        };
        Capabilities {
            create,
            edit,
            toggle_status,
            delete,
        }
    }

    /// Permission route guarding this screen, if sub-admins can be granted it.
    #[must_use]
    pub const fn permission(self) -> Option<PermissionRoutes> {
        match self {
            Self::Dogs => Some(PermissionRoutes::DOGS),
            Self::Faqs => Some(PermissionRoutes::FAQS),
            Self::Breeds => Some(PermissionRoutes::BREEDS),
            Self::Hobbies => Some(PermissionRoutes::HOBBIES),
            Self::Likes => Some(PermissionRoutes::LIKES),
            Self::Reports => Some(PermissionRoutes::REPORTS),
            Self::Gifting => Some(PermissionRoutes::GIFTING),
            Self::SubAdmins => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_exist_for_creatable_resources() {
        for resource in Resource::ALL {
            let caps = resource.capabilities();
            if (caps.create || caps.edit) && resource != Resource::SubAdmins {
                assert!(!resource.form_fields().is_empty(), "{resource}");
            }
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = Resource::ALL.iter().map(|r| r.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Resource::ALL.len());
    }

    #[test]
    fn test_gifting_coins_is_numeric() {
        let fields = Resource::Gifting.form_fields();
        let coins = fields.iter().find(|f| f.key == "coins").unwrap();
        assert!(coins.numeric);
        assert!(!fields.iter().find(|f| f.key == "note").unwrap().required);
    }
}
