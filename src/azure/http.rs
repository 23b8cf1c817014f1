//! HTTP utilities for ARM REST API calls

use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Request header ARM uses to correlate client calls in service-side logs.
const CLIENT_REQUEST_ID_HEADER: &str = "x-ms-client-request-id";

/// Sanitize response body for logging
/// Truncates long responses and masks potentially sensitive patterns
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        format!(
            "{}... [truncated, {} bytes total]",
            &body[..MAX_LOG_BODY_LENGTH],
            body.len()
        )
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for ARM API calls
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("azrm/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request to an ARM endpoint
    pub async fn get(&self, url: &str, token: &str) -> Result<Value> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .header(CLIENT_REQUEST_ID_HEADER, Uuid::new_v4().to_string())
            .send()
            .await?;

        Self::read_body(response).await
    }

    /// Make a POST request to an ARM endpoint
    pub async fn post(&self, url: &str, token: &str, body: Option<&Value>) -> Result<Value> {
        tracing::debug!("POST {}", url);

        let mut request = self
            .client
            .post(url)
            .bearer_auth(token)
            .header(CLIENT_REQUEST_ID_HEADER, Uuid::new_v4().to_string());

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;

        Self::read_body(response).await
    }

    /// Make a DELETE request to an ARM endpoint
    pub async fn delete(&self, url: &str, token: &str) -> Result<Value> {
        tracing::debug!("DELETE {}", url);

        let response = self
            .client
            .delete(url)
            .bearer_auth(token)
            .header(CLIENT_REQUEST_ID_HEADER, Uuid::new_v4().to_string())
            .send()
            .await?;

        Self::read_body(response).await
    }

    /// Map the response to parsed JSON or a typed error.
    ///
    /// Non-success statuses become the matching [`Error`] variant with the
    /// ARM error envelope's message when one is present. Success with an
    /// empty body (202/204 action responses) maps to `Value::Null`.
    async fn read_body(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(Error::from_response(status, &body));
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(Error::from)
    }
}
