//! Admin REST API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, header};
use serde_json::json;
use tracing::{debug, warn};

use super::envelope::Envelope;
use crate::domain::ports::{AdminApiPort, AuthPort, RecordPayload, Session};
use crate::domain::{AdminRecord, ApiError, AuthToken, Page, PageQuery, RecordStatus, Resource};
use crate::infrastructure::config::EndpointConfig;

const USER_AGENT: &str = concat!("pawboard/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-backed implementation of the admin API ports.
pub struct ApiClient {
    client: Client,
    base_url: String,
    endpoints: EndpointConfig,
}

impl ApiClient {
    /// Creates a client for `base_url`.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>, endpoints: EndpointConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            endpoints,
        })
    }

    #[must_use]
    pub fn collection_url(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url, self.endpoints.path(resource))
    }

    #[must_use]
    pub fn record_url(&self, resource: Resource, id: &str) -> String {
        format!("{}/{}", self.collection_url(resource), encode_segment(id))
    }

    fn request(&self, method: Method, url: &str, token: Option<&AuthToken>) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        match token {
            Some(token) => builder.header(header::AUTHORIZATION, token.bearer()),
            None => builder,
        }
    }

    /// Sends the request and decodes the envelope, whatever the HTTP status.
    async fn send(&self, builder: RequestBuilder) -> Result<Envelope, ApiError> {
        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach admin API");
            map_transport_error(&e)
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(format!("failed to read response: {e}")))?;

        debug!(%status, bytes = body.len(), "Admin API responded");

        if status.is_success() {
            return Envelope::parse(&body);
        }
        Err(map_status_error(status, Envelope::parse(&body).ok()))
    }
}

fn map_transport_error(e: &reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::network("request timed out")
    } else if e.is_connect() {
        ApiError::network("failed to connect to the admin API")
    } else {
        ApiError::network(e.to_string())
    }
}

fn map_status_error(status: StatusCode, envelope: Option<Envelope>) -> ApiError {
    let message = envelope
        .and_then(|env| env.message)
        .filter(|m| !m.trim().is_empty());

    match status {
        StatusCode::UNAUTHORIZED => {
            ApiError::unauthorized(message.unwrap_or_else(|| "please sign in again".to_string()))
        }
        s if s.is_server_error() => ApiError::http(
            s.as_u16(),
            message.unwrap_or_else(|| s.canonical_reason().unwrap_or("server error").to_string()),
        ),
        s => match message {
            Some(message) => ApiError::rejected(message),
            None => ApiError::http(s.as_u16(), s.canonical_reason().unwrap_or("request failed")),
        },
    }
}

/// Percent-encodes characters that would break a path segment.
fn encode_segment(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for b in id.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(b));
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

#[async_trait]
impl AdminApiPort for ApiClient {
    async fn list(
        &self,
        token: &AuthToken,
        resource: Resource,
        query: &PageQuery,
    ) -> Result<Page<AdminRecord>, ApiError> {
        let url = self.collection_url(resource);
        debug!(%url, ?query, "Listing records");
        let builder = self
            .request(Method::GET, &url, Some(token))
            .query(&query.to_params());
        self.send(builder).await?.into_page(resource, query)
    }

    async fn create(
        &self,
        token: &AuthToken,
        resource: Resource,
        payload: RecordPayload,
    ) -> Result<Option<String>, ApiError> {
        let url = self.collection_url(resource);
        debug!(%url, "Creating record");
        let builder = self.request(Method::POST, &url, Some(token)).json(&payload);
        self.send(builder).await?.into_message()
    }

    async fn update(
        &self,
        token: &AuthToken,
        resource: Resource,
        id: &str,
        payload: RecordPayload,
    ) -> Result<Option<String>, ApiError> {
        let url = self.record_url(resource, id);
        debug!(%url, "Updating record");
        let builder = self.request(Method::PUT, &url, Some(token)).json(&payload);
        self.send(builder).await?.into_message()
    }

    async fn set_status(
        &self,
        token: &AuthToken,
        resource: Resource,
        id: &str,
        status: RecordStatus,
    ) -> Result<Option<String>, ApiError> {
        let url = format!("{}/status", self.record_url(resource, id));
        debug!(%url, status = status.as_str(), "Changing record status");
        let builder = self
            .request(Method::PATCH, &url, Some(token))
            .json(&json!({ "status": status }));
        self.send(builder).await?.into_message()
    }

    async fn delete(
        &self,
        token: &AuthToken,
        resource: Resource,
        id: &str,
    ) -> Result<Option<String>, ApiError> {
        let url = self.record_url(resource, id);
        debug!(%url, "Deleting record");
        let builder = self.request(Method::DELETE, &url, Some(token));
        self.send(builder).await?.into_message()
    }
}

#[async_trait]
impl AuthPort for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let url = format!("{}{}", self.base_url, self.endpoints.login_path());
        debug!(%url, "Signing in");
        let builder = self
            .request(Method::POST, &url, None)
            .json(&json!({ "email": email, "password": password }));

        // A 401 here means bad credentials, not an expired session.
        match self.send(builder).await {
            Err(ApiError::Unauthorized { message }) => Err(ApiError::rejected(message)),
            other => other?.into_session(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        let endpoints = EndpointConfig {
            reports: Some("moderation/reports/".into()),
            ..EndpointConfig::default()
        };
        ApiClient::new("https://api.pawboard.io/v1/", endpoints).unwrap()
    }

    #[test]
    fn test_urls() {
        let client = client();
        assert_eq!(
            client.collection_url(Resource::Faqs),
            "https://api.pawboard.io/v1/admin/faqs"
        );
        assert_eq!(
            client.collection_url(Resource::Reports),
            "https://api.pawboard.io/v1/moderation/reports"
        );
        assert_eq!(
            client.record_url(Resource::Dogs, "a b/c"),
            "https://api.pawboard.io/v1/admin/dogs/a%20b%2Fc"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert!(map_status_error(StatusCode::UNAUTHORIZED, None).is_unauthorized());

        let rejected = Envelope::parse(r#"{"status":0,"message":"Name taken"}"#).ok();
        assert_eq!(
            map_status_error(StatusCode::BAD_REQUEST, rejected),
            ApiError::rejected("Name taken")
        );

        let gateway = map_status_error(StatusCode::BAD_GATEWAY, None);
        assert!(gateway.is_network_error());

        assert_eq!(
            map_status_error(StatusCode::NOT_FOUND, None),
            ApiError::http(404, "Not Found")
        );
    }
}
