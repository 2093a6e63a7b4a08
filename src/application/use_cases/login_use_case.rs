//! Login use case implementation.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::application::dto::{LoginRequest, LoginResponse};
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthPort, TokenStoragePort};
use crate::domain::validation::{validate_email, validate_required};

/// Handles the admin authentication workflow.
#[derive(Clone)]
pub struct LoginUseCase {
    auth_port: Arc<dyn AuthPort>,
    storage_port: Arc<dyn TokenStoragePort>,
}

impl LoginUseCase {
    #[must_use]
    pub fn new(auth_port: Arc<dyn AuthPort>, storage_port: Arc<dyn TokenStoragePort>) -> Self {
        Self {
            auth_port,
            storage_port,
        }
    }

    /// Exchanges credentials for a session and optionally stores the token.
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidInput`] for malformed credentials, or the
    /// error from the authentication endpoint.
    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let email_error = validate_email(&request.email);
        if !email_error.is_empty() {
            return Err(ApiError::invalid_input(email_error));
        }
        let password_error = validate_required("Password", &request.password);
        if !password_error.is_empty() {
            return Err(ApiError::invalid_input(password_error));
        }

        debug!(email = %request.email, "Attempting login");
        let session = self
            .auth_port
            .login(request.email.trim(), &request.password)
            .await
            .inspect_err(|e| warn!(error = %e, "Login failed"))?;

        info!(admin = %session.admin.display_name(), "Successfully authenticated");

        let token_persisted = if request.persist_token {
            match self.storage_port.store_token(&session.token).await {
                Ok(()) => {
                    info!("Token persisted to secure storage");
                    true
                }
                Err(e) => {
                    error!(error = %e, "Failed to persist token to secure storage");
                    false
                }
            }
        } else {
            debug!("Token persistence disabled, skipping storage");
            false
        };

        Ok(LoginResponse {
            admin: session.admin,
            token: session.token,
            token_persisted,
        })
    }

    /// Deletes the stored token.
    ///
    /// # Errors
    /// Returns error if deletion fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        debug!("Deleting token from secure storage");
        self.storage_port
            .delete_token()
            .await
            .inspect(|_| info!("Token deleted from secure storage"))
            .inspect_err(|e| error!(error = %e, "Failed to delete token from secure storage"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockAuthPort, MockTokenStorage};
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_successful_login() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let storage_port = Arc::new(MockTokenStorage::new());

        let use_case = LoginUseCase::new(auth_port, storage_port.clone());
        let request = LoginRequest::new("ops@pawboard.io", "Secret1!");

        let response = use_case.execute(request).await.unwrap();

        assert_eq!(response.admin.email, "ops@pawboard.io");
        assert!(response.token_persisted);
        assert!(storage_port.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected_locally() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let storage_port = Arc::new(MockTokenStorage::new());

        let use_case = LoginUseCase::new(auth_port, storage_port);
        let result = use_case
            .execute(LoginRequest::new("not-an-email", "Secret1!"))
            .await;

        assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let auth_port = Arc::new(MockAuthPort::new(false));
        let storage_port = Arc::new(MockTokenStorage::new());

        let use_case = LoginUseCase::new(auth_port, storage_port.clone());
        let result = use_case
            .execute(LoginRequest::new("ops@pawboard.io", "wrong"))
            .await;

        assert!(matches!(result, Err(ApiError::Rejected { .. })));
        assert!(!storage_port.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_login_without_persistence() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let storage_port = Arc::new(MockTokenStorage::new());

        let use_case = LoginUseCase::new(auth_port, storage_port.clone());
        let request = LoginRequest::new("ops@pawboard.io", "Secret1!").without_persistence();

        let response = assert_ok!(use_case.execute(request).await);

        assert!(!response.token_persisted);
        assert!(!storage_port.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let storage_port = Arc::new(MockTokenStorage::new());
        let use_case = LoginUseCase::new(auth_port, storage_port.clone());

        use_case
            .execute(LoginRequest::new("ops@pawboard.io", "Secret1!"))
            .await
            .unwrap();
        assert_ok!(use_case.logout().await);

        assert!(!storage_port.has_token().await.unwrap());
    }
}
