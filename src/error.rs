//! Error types shared by all operation groups.
//!
//! Every failed HTTP exchange is mapped to one variant of [`Error`] carrying
//! the HTTP status and the server-provided message. No retry or recovery
//! happens at this layer.

use reqwest::StatusCode;

use crate::models::CloudError;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure classes surfaced by the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The identifier did not resolve to a resource (HTTP 404).
    #[error("not found: {message}")]
    NotFound { status: u16, message: String },

    /// Malformed parameters rejected by the service (HTTP 400).
    #[error("bad request: {message}")]
    BadRequest { status: u16, message: String },

    /// Missing or expired credentials (HTTP 401).
    #[error("authentication failed: {message}")]
    Unauthorized { status: u16, message: String },

    /// The credentials lack permission for the operation (HTTP 403).
    #[error("permission denied: {message}")]
    Forbidden { status: u16, message: String },

    /// The operation is not valid from the resource's current state (HTTP 409).
    #[error("conflict: {message}")]
    Conflict { status: u16, message: String },

    /// Service-side failure (5xx) or any status with no dedicated variant.
    #[error("service error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// Network-level failure before a status code was received.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected model shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A resource identifier string could not be parsed.
    #[error("invalid resource id: {0}")]
    InvalidResourceId(String),

    /// The configured Resource Manager endpoint is not a usable URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A required configuration value is absent.
    #[error("missing configuration: set {0}")]
    MissingConfig(&'static str),

    /// Local I/O failure (configuration file handling).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Map a non-success HTTP response to the matching variant.
    ///
    /// The body is parsed as the ARM error envelope
    /// `{"error": {"code": ..., "message": ...}}` when possible; otherwise
    /// the raw text is carried as the message.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = extract_message(body);
        let status_code = status.as_u16();

        match status_code {
            400 => Error::BadRequest { status: status_code, message },
            401 => Error::Unauthorized { status: status_code, message },
            403 => Error::Forbidden { status: status_code, message },
            404 => Error::NotFound { status: status_code, message },
            409 => Error::Conflict { status: status_code, message },
            _ => Error::Server { status: status_code, message },
        }
    }

    /// The HTTP status carried by this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::NotFound { status, .. }
            | Error::BadRequest { status, .. }
            | Error::Unauthorized { status, .. }
            | Error::Forbidden { status, .. }
            | Error::Conflict { status, .. }
            | Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Short message suitable for CLI display.
    ///
    /// Raw server messages are not echoed for auth failures to avoid leaking
    /// API details into terminal scrollback.
    pub fn user_message(&self) -> String {
        match self {
            Error::NotFound { .. } => "Resource not found.".to_string(),
            Error::BadRequest { message, .. } => {
                format!("Invalid request: {message}")
            }
            Error::Unauthorized { .. } => {
                "Authentication failed. Set AZURE_ACCESS_TOKEN to a valid bearer token."
                    .to_string()
            }
            Error::Forbidden { .. } => {
                "Permission denied. Check your Azure RBAC role assignments.".to_string()
            }
            Error::Conflict { message, .. } => format!("Conflict: {message}"),
            Error::Server { status, .. } => {
                format!("Azure service error (HTTP {status}). Please try again later.")
            }
            Error::Transport(_) => {
                "Request failed. Check your network connection and try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Pull the human-readable message out of an ARM error body.
fn extract_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<CloudError>(body) {
        if let Some(inner) = envelope.error {
            match (inner.code, inner.message) {
                (Some(code), Some(message)) => return format!("{code}: {message}"),
                (None, Some(message)) => return message,
                (Some(code), None) => return code,
                (None, None) => {}
            }
        }
    }
    if body.is_empty() {
        "(no response body)".to_string()
    } else {
        body.to_string()
    }
}
