//! Domain layer with records, resource catalogue, rules and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Transient user-facing notifications.
pub mod notification;
/// Pagination request and result types.
pub mod pagination;
/// Port definitions.
pub mod ports;
/// Resource catalogue.
pub mod resource;
/// Serde utilities.
pub mod serde_utils;
/// Form validation rules.
pub mod validation;

pub use entities::{AdminRecord, AuthToken, RecordStatus};
pub use errors::{ApiError, ValidationError};
pub use notification::{Notification, NotificationLevel};
pub use pagination::{Page, PageQuery};
pub use ports::{AdminApiPort, AuthPort, TokenStoragePort};
pub use resource::Resource;
