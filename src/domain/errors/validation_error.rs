//! Form validation errors.

use thiserror::Error;

/// A form was submitted with fields that do not pass validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{label}: {message}")]
    Field {
        label: &'static str,
        message: String,
    },

    #[error("form has {0} invalid fields")]
    Multiple(usize),
}

impl ValidationError {
    #[must_use]
    pub fn field(label: &'static str, message: impl Into<String>) -> Self {
        Self::Field {
            label,
            message: message.into(),
        }
    }

    /// Builds an error from `(label, message)` pairs, ignoring empty messages.
    ///
    /// Returns `None` when every message is empty.
    #[must_use]
    pub fn collect<'a>(
        messages: impl IntoIterator<Item = (&'static str, &'a str)>,
    ) -> Option<Self> {
        let failed: Vec<_> = messages
            .into_iter()
            .filter(|(_, message)| !message.is_empty())
            .collect();
        match failed.as_slice() {
            [] => None,
            [(label, message)] => Some(Self::field(label, *message)),
            many => Some(Self::Multiple(many.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect() {
        assert_eq!(ValidationError::collect([("Name", ""), ("Email", "")]), None);
        assert_eq!(
            ValidationError::collect([("Name", "Name is required"), ("Email", "")]),
            Some(ValidationError::field("Name", "Name is required"))
        );
        assert_eq!(
            ValidationError::collect([("Name", "x"), ("Email", "y")]),
            Some(ValidationError::Multiple(2))
        );
    }
}
