//! Infrastructure layer with external service adapters.

/// Admin REST API client.
pub mod api;
/// Application configuration.
pub mod config;
/// Token storage adapters.
pub mod storage;

pub use api::ApiClient;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use storage::KeyringTokenStorage;
