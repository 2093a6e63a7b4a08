//! Sum type over every record the console can display.

use super::{Breed, CoinGrant, Dog, DogLike, Faq, Hobby, RecordStatus, Report, SubAdmin};
use crate::domain::resource::Resource;

/// A row in one of the resource tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminRecord {
    Dog(Dog),
    Faq(Faq),
    Breed(Breed),
    Hobby(Hobby),
    Like(DogLike),
    Report(Report),
    SubAdmin(SubAdmin),
    CoinGrant(CoinGrant),
}

impl AdminRecord {
    /// Returns the record identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Dog(r) => &r.id,
            Self::Faq(r) => &r.id,
            Self::Breed(r) => &r.id,
            Self::Hobby(r) => &r.id,
            Self::Like(r) => &r.id,
            Self::Report(r) => &r.id,
            Self::SubAdmin(r) => &r.id,
            Self::CoinGrant(r) => &r.id,
        }
    }

    /// Returns the resource this record belongs to.
    #[must_use]
    pub const fn resource(&self) -> Resource {
        match self {
            Self::Dog(_) => Resource::Dogs,
            Self::Faq(_) => Resource::Faqs,
            Self::Breed(_) => Resource::Breeds,
            Self::Hobby(_) => Resource::Hobbies,
            Self::Like(_) => Resource::Likes,
            Self::Report(_) => Resource::Reports,
            Self::SubAdmin(_) => Resource::SubAdmins,
            Self::CoinGrant(_) => Resource::Gifting,
        }
    }

    /// Returns the status, for resources that have one.
    #[must_use]
    pub const fn status(&self) -> Option<&RecordStatus> {
        match self {
            Self::Dog(r) => Some(&r.status),
            Self::Faq(r) => Some(&r.status),
            Self::Breed(r) => Some(&r.status),
            Self::Hobby(r) => Some(&r.status),
            Self::Report(r) => Some(&r.status),
            Self::SubAdmin(r) => Some(&r.status),
            Self::Like(_) | Self::CoinGrant(_) => None,
        }
    }

    /// Short human label used in confirmation prompts.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Dog(r) => r.name.clone(),
            Self::Faq(r) => r.question.clone(),
            Self::Breed(r) => r.name.clone(),
            Self::Hobby(r) => r.name.clone(),
            Self::Like(r) => format!(
                "{} liked by {}",
                r.dog_name.as_deref().unwrap_or("?"),
                r.liked_by.as_deref().unwrap_or("?")
            ),
            Self::Report(r) => format!(
                "report on {}",
                r.reported_dog.as_deref().unwrap_or("unknown dog")
            ),
            Self::SubAdmin(r) => r.email.clone(),
            Self::CoinGrant(r) => format!(
                "{} coins for {}",
                r.coins.unwrap_or(0),
                r.user_name.as_deref().unwrap_or("?")
            ),
        }
    }

    /// Returns table cells in the resource's column order.
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        match self {
            Self::Dog(r) => r.cells(),
            Self::Faq(r) => r.cells(),
            Self::Breed(r) => r.cells(),
            Self::Hobby(r) => r.cells(),
            Self::Like(r) => r.cells(),
            Self::Report(r) => r.cells(),
            Self::SubAdmin(r) => r.cells(),
            Self::CoinGrant(r) => r.cells(),
        }
    }

    /// Returns current values for the edit form, keyed by form field.
    #[must_use]
    pub fn form_values(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Faq(r) => r.form_values(),
            Self::Breed(r) => r.form_values(),
            Self::Hobby(r) => r.form_values(),
            _ => Vec::new(),
        }
    }

    /// Decodes one row of a list response for the given resource.
    ///
    /// # Errors
    /// Returns the serde error if the row does not match the resource's shape.
    pub fn from_json(resource: Resource, value: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match resource {
            Resource::Dogs => Self::Dog(serde_json::from_value(value)?),
            Resource::Faqs => Self::Faq(serde_json::from_value(value)?),
            Resource::Breeds => Self::Breed(serde_json::from_value(value)?),
            Resource::Hobbies => Self::Hobby(serde_json::from_value(value)?),
            Resource::Likes => Self::Like(serde_json::from_value(value)?),
            Resource::Reports => Self::Report(serde_json::from_value(value)?),
            Resource::SubAdmins => Self::SubAdmin(serde_json::from_value(value)?),
            Resource::Gifting => Self::CoinGrant(serde_json::from_value(value)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_dispatches_on_resource() {
        let record = AdminRecord::from_json(Resource::Breeds, json!({"_id": "b7", "name": "Akita"}))
            .unwrap();

        assert_eq!(record.resource(), Resource::Breeds);
        assert_eq!(record.id(), "b7");
        assert_eq!(record.label(), "Akita");
        assert_eq!(record.form_values(), vec![("name", "Akita".to_string())]);
    }

    #[test]
    fn test_cells_match_column_count() {
        let samples = [
            (Resource::Dogs, json!({"id": 1, "name": "Rex"})),
            (Resource::Faqs, json!({"id": 2, "question": "Q", "answer": "A"})),
            (Resource::Breeds, json!({"id": 3, "name": "Pug"})),
            (Resource::Hobbies, json!({"id": 4, "name": "Fetch"})),
            (Resource::Likes, json!({"id": 5})),
            (Resource::Reports, json!({"id": 6, "reason": "spam"})),
            (Resource::SubAdmins, json!({"id": 7, "email": "a@b.co"})),
            (Resource::Gifting, json!({"id": 8, "coins": 50})),
        ];

        for (resource, value) in samples {
            let record = AdminRecord::from_json(resource, value).unwrap();
            assert_eq!(record.cells().len(), resource.columns().len(), "{resource:?}");
        }
    }

    #[test]
    fn test_likes_have_no_status() {
        let record = AdminRecord::from_json(Resource::Likes, json!({"id": "l1"})).unwrap();
        assert!(record.status().is_none());
    }
}
