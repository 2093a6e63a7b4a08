//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{AdminProfile, AuthToken};
use crate::domain::errors::ApiError;

/// Authenticated admin session returned by the login endpoint.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: AuthToken,
    pub admin: AdminProfile,
}

/// Port for admin authentication.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchanges admin credentials for a session.
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError>;
}
