//! Authentication DTOs.

use zeroize::Zeroizing;

use crate::domain::entities::AdminProfile;

/// Source of the authentication token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Token from `--token` or `PAWBOARD_TOKEN`.
    CommandLine,
    /// Token from system keyring.
    Keyring,
    /// Token issued by an interactive login.
    UserInput,
}

impl TokenSource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::CommandLine => "command line / environment",
            Self::Keyring => "system keyring",
            Self::UserInput => "login form",
        }
    }
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Admin credentials entered on the login screen.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: Zeroizing<String>,
    /// Whether to keep the issued token in the keyring.
    pub persist_token: bool,
}

impl LoginRequest {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
            persist_token: true,
        }
    }

    /// Disables token persistence.
    #[must_use]
    pub fn without_persistence(mut self) -> Self {
        self.persist_token = false;
        self
    }
}

/// Login response data.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub admin: AdminProfile,
    pub token: crate::domain::AuthToken,
    /// Whether token was persisted.
    pub token_persisted: bool,
}
