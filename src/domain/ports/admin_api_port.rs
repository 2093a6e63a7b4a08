//! Port for the resource endpoints of the admin API.

use async_trait::async_trait;

use crate::domain::entities::{AdminRecord, AuthToken, RecordStatus};
use crate::domain::errors::ApiError;
use crate::domain::pagination::{Page, PageQuery};
use crate::domain::resource::Resource;

/// JSON body of a create or update request.
pub type RecordPayload = serde_json::Map<String, serde_json::Value>;

/// CRUD operations shared by every admin resource.
///
/// Mutations resolve to the server's message, when it sent one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminApiPort: Send + Sync {
    /// Fetches one page of a resource.
    async fn list(
        &self,
        token: &AuthToken,
        resource: Resource,
        query: &PageQuery,
    ) -> Result<Page<AdminRecord>, ApiError>;

    /// Creates a record.
    async fn create(
        &self,
        token: &AuthToken,
        resource: Resource,
        payload: RecordPayload,
    ) -> Result<Option<String>, ApiError>;

    /// Replaces the editable fields of a record.
    async fn update(
        &self,
        token: &AuthToken,
        resource: Resource,
        id: &str,
        payload: RecordPayload,
    ) -> Result<Option<String>, ApiError>;

    /// Changes the status of a record.
    async fn set_status(
        &self,
        token: &AuthToken,
        resource: Resource,
        id: &str,
        status: RecordStatus,
    ) -> Result<Option<String>, ApiError>;

    /// Deletes a record.
    async fn delete(
        &self,
        token: &AuthToken,
        resource: Resource,
        id: &str,
    ) -> Result<Option<String>, ApiError>;
}
