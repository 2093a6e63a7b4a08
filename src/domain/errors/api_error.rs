//! Admin API error types.

use thiserror::Error;

/// Failure of a call against the admin REST API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ApiError {
    /// Transport-level failure: DNS, connect, timeout, reset.
    #[error("network error: {message}")]
    Network { message: String },

    /// Envelope came back with a non-success status.
    #[error("{message}")]
    Rejected { message: String },

    /// Session token missing, expired or revoked.
    #[error("session expired: {message}")]
    Unauthorized { message: String },

    #[error("server returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("failed to decode response: {message}")]
    Decode { message: String },

    #[error("secure storage error: {message}")]
    Storage { message: String },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl ApiError {
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the error is transport related and should stay out of the UI.
    #[must_use]
    pub fn is_network_error(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Http { status, .. } => matches!(status, 502..=504),
            Self::Rejected { message } | Self::Unexpected { message } => {
                looks_network_related(message)
            }
            _ => false,
        }
    }

    /// Returns whether the session must be re-established.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

fn looks_network_related(message: &str) -> bool {
    const MARKERS: [&str; 5] = [
        "network",
        "failed to fetch",
        "timed out",
        "connection refused",
        "econnrefused",
    ];
    let lower = message.to_ascii_lowercase();
    MARKERS.iter().any(|m| lower.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_classification() {
        assert!(ApiError::network("connect failed").is_network_error());
        assert!(ApiError::http(503, "unavailable").is_network_error());
        assert!(ApiError::rejected("Network Error").is_network_error());
        assert!(!ApiError::rejected("Breed already exists").is_network_error());
        assert!(!ApiError::http(500, "boom").is_network_error());
    }

    #[test]
    fn test_rejected_displays_server_message() {
        assert_eq!(
            ApiError::rejected("Name is required").to_string(),
            "Name is required"
        );
    }
}
