//! Decoding of the `{ status, data, message, meta }` response envelope.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::entities::{AdminProfile, AuthToken};
use crate::domain::ports::Session;
use crate::domain::serde_utils::lenient_u64;
use crate::domain::{AdminRecord, ApiError, Page, PageQuery, Resource};

const DEFAULT_FAILURE: &str = "Request failed";

/// Keys under which some endpoints nest the row array inside `data`.
const NESTED_ROW_KEYS: [&str; 4] = ["rows", "docs", "items", "list"];

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    #[serde(default, deserialize_with = "lenient_u64::deserialize")]
    pub page: Option<u64>,
    #[serde(default, alias = "pageSize", deserialize_with = "lenient_u64::deserialize")]
    pub limit: Option<u64>,
    #[serde(
        default,
        alias = "totalCount",
        alias = "count",
        alias = "totalDocs",
        deserialize_with = "lenient_u64::deserialize"
    )]
    pub total: Option<u64>,
}

/// Standard response wrapper returned by every admin endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "pagination")]
    pub meta: Option<PageMeta>,
}

#[derive(Deserialize)]
struct LoginData {
    #[serde(alias = "accessToken")]
    token: String,
    #[serde(default, alias = "user")]
    admin: AdminProfile,
}

impl Envelope {
    /// Parses a response body.
    ///
    /// # Errors
    /// Returns [`ApiError::Decode`] if the body is not an envelope.
    pub fn parse(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::decode(e.to_string()))
    }

    /// `status == 1` is the only success indicator.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_i64() == Some(1)
    }

    fn message(&self) -> Option<String> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }

    fn ensure_success(&self) -> Result<(), ApiError> {
        if self.is_success() {
            Ok(())
        } else {
            debug!(status = %self.status, "Envelope reported failure");
            Err(ApiError::rejected(
                self.message().unwrap_or_else(|| DEFAULT_FAILURE.to_string()),
            ))
        }
    }

    /// Returns the server message of a successful mutation.
    ///
    /// # Errors
    /// Returns [`ApiError::Rejected`] on a non-success status.
    pub fn into_message(self) -> Result<Option<String>, ApiError> {
        self.ensure_success()?;
        Ok(self.message())
    }

    /// Decodes a list response for `resource`.
    ///
    /// Counters missing from the response fall back to the request's values,
    /// and the total falls back to the number of rows.
    ///
    /// # Errors
    /// Returns [`ApiError::Rejected`] on a non-success status and
    /// [`ApiError::Decode`] if the rows do not match the resource.
    pub fn into_page(
        self,
        resource: Resource,
        query: &PageQuery,
    ) -> Result<Page<AdminRecord>, ApiError> {
        self.ensure_success()?;

        let (rows, nested_meta) = match self.data {
            Value::Array(rows) => (rows, None),
            Value::Object(mut object) => {
                let rows = NESTED_ROW_KEYS
                    .iter()
                    .find_map(|key| match object.remove(*key) {
                        Some(Value::Array(rows)) => Some(rows),
                        _ => None,
                    })
                    .ok_or_else(|| ApiError::decode("list data has no row array"))?;
                let meta = serde_json::from_value::<PageMeta>(Value::Object(object)).ok();
                (rows, meta)
            }
            Value::Null => (Vec::new(), None),
            other => {
                return Err(ApiError::decode(format!(
                    "expected a row array, got {other}"
                )));
            }
        };

        let rows = rows
            .into_iter()
            .map(|row| AdminRecord::from_json(resource, row))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ApiError::decode(format!("invalid {} row: {e}", resource.key())))?;

        let meta = self.meta.or(nested_meta).unwrap_or_default();
        let to_u32 = |v: Option<u64>, fallback: u32| {
            v.and_then(|n| u32::try_from(n).ok())
                .filter(|n| *n > 0)
                .unwrap_or(fallback)
        };

        Ok(Page {
            total: meta.total.unwrap_or(rows.len() as u64),
            page: to_u32(meta.page, query.page),
            limit: to_u32(meta.limit, query.limit),
            rows,
        })
    }

    /// Decodes the login response.
    ///
    /// # Errors
    /// Returns [`ApiError::Rejected`] on a non-success status and
    /// [`ApiError::Decode`] if the token is missing or malformed.
    pub fn into_session(self) -> Result<Session, ApiError> {
        self.ensure_success()?;
        let data: LoginData =
            serde_json::from_value(self.data).map_err(|e| ApiError::decode(e.to_string()))?;
        let token = AuthToken::new(data.token)
            .ok_or_else(|| ApiError::decode("login response carried a malformed token"))?;
        Ok(Session {
            token,
            admin: data.admin,
        })
    }
}
