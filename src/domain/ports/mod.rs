mod admin_api_port;
mod auth_port;
mod token_storage_port;

pub use admin_api_port::{AdminApiPort, RecordPayload};
pub use auth_port::{AuthPort, Session};
pub use token_storage_port::TokenStoragePort;

#[cfg(test)]
pub mod mocks {
    pub use super::admin_api_port::MockAdminApiPort;
    pub use super::auth_port::mock::MockAuthPort;
    pub use super::token_storage_port::mock::MockTokenStorage;
}
