//! HTTP client for the Harmony record endpoints.
//!
//! One POST per record type against a shared base origin, body
//! `{"objectId": "..."}`, response wrapped in the `{success, data, error?}`
//! envelope. No internal retries and no internal timeout: retry is a
//! user-triggered concern owned by the widget controller.

use async_trait::async_trait;
use serde_json::json;
use url::Url;

use crate::types::{ApiEnvelope, CrmRecord, RecordKind};

/// Field name carrying the record identifier in the request body.
const OBJECT_ID_FIELD: &str = "objectId";

/// Fallback when the envelope reports failure without a message.
pub const GENERIC_FAILURE: &str = "API call failed";

/// Errors from a single record fetch, one variant per failure condition.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, TLS, read).
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// Server reachable but returned a non-success status.
    #[error("API call failed: {status}")]
    Http { status: u16 },
    /// Envelope reported failure. Display is the message, verbatim.
    #[error("{0}")]
    Application(String),
    /// Envelope reported success but carried no record.
    #[error("No data in response")]
    Empty,
    /// Response body was not a valid envelope.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of records for a widget. The HTTP client is the production
/// implementation; tests substitute scripted fakes.
#[async_trait]
pub trait RecordSource<R: CrmRecord>: Send + Sync {
    /// Fetch one record by identifier. The identifier must be non-empty;
    /// passing an empty identifier is a caller error and is not validated.
    async fn fetch(&self, object_id: &str) -> Result<R, ApiError>;
}

/// Client for the Harmony record endpoints. One instance is shared across
/// every widget mounted by a registry; it holds a single reqwest pool.
pub struct RecordClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RecordClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Full endpoint URL for a record kind.
    fn endpoint(&self, kind: RecordKind) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), kind.path())
    }

    /// Fetch one record of any shape. Success requires both an HTTP success
    /// status and `success == true` in the envelope.
    pub async fn fetch_record<R: CrmRecord>(&self, object_id: &str) -> Result<R, ApiError> {
        let endpoint = self.endpoint(R::KIND);
        let resp = self
            .http
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .json(&json!({ OBJECT_ID_FIELD: object_id }))
            .send()
            .await
            .map_err(|e| {
                log::warn!("{} request to {} failed: {}", R::KIND.label(), endpoint, e);
                ApiError::Transport(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            log::warn!(
                "{} request to {} returned HTTP {}",
                R::KIND.label(),
                endpoint,
                status
            );
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(ApiError::Transport)?;
        let envelope: ApiEnvelope<R> = serde_json::from_str(&body)?;

        if !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            log::warn!("{} fetch for '{}' rejected: {}", R::KIND.label(), object_id, message);
            return Err(ApiError::Application(message));
        }

        envelope.data.ok_or(ApiError::Empty)
    }
}

#[async_trait]
impl<R: CrmRecord> RecordSource<R> for RecordClient {
    async fn fetch(&self, object_id: &str) -> Result<R, ApiError> {
        self.fetch_record(object_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Contact, Deal};

    fn client_for(server: &mockito::ServerGuard) -> RecordClient {
        RecordClient::new(Url::parse(&server.url()).unwrap())
    }

    #[tokio::test]
    async fn test_fetch_contact_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/contacts")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::JsonString(
                r#"{"objectId": "contact-42"}"#.to_string(),
            ))
            .with_status(200)
            .with_body(
                r#"{"success": true, "data": {"id": "contact-42", "name": "Sarah Chen", "engagementScore": 87}}"#,
            )
            .create_async()
            .await;

        let contact: Contact = client_for(&server).fetch_record("contact-42").await.unwrap();
        assert_eq!(contact.name, "Sarah Chen");
        assert_eq!(contact.engagement_score, 87);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/deals")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch_record::<Deal>("deal-1")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500 }));
    }

    #[tokio::test]
    async fn test_envelope_failure_uses_error_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/contacts")
            .with_status(200)
            .with_body(r#"{"success": false, "error": "not found"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch_record::<Contact>("missing")
            .await
            .unwrap_err();
        match err {
            ApiError::Application(message) => assert_eq!(message, "not found"),
            other => panic!("expected Application, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_envelope_failure_without_message_falls_back() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/contacts")
            .with_status(200)
            .with_body(r#"{"success": false}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch_record::<Contact>("missing")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn test_success_with_null_data_is_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/deals")
            .with_status(200)
            .with_body(r#"{"success": true, "data": null}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch_record::<Deal>("deal-1")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Empty));
    }

    #[tokio::test]
    async fn test_invalid_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/contacts")
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch_record::<Contact>("c1")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Bind an ephemeral port, note the address, then free it so nothing
        // is listening there: connection refused.
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let client = RecordClient::new(Url::parse(&format!("http://{addr}")).unwrap());
        let err = client.fetch_record::<Contact>("c1").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = RecordClient::new(Url::parse("https://api.example.com/hubspot/").unwrap());
        assert_eq!(
            client.endpoint(RecordKind::Company),
            "https://api.example.com/hubspot/companies"
        );
    }
}
