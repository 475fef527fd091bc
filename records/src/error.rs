//! Failure taxonomy for backend calls and form input.
//!
//! ERROR HANDLING
//! ==============
//! Authentication (401) and validation (422) failures get fixed messages so
//! the user never sees raw framework output for them. Every other non-2xx
//! response carries the backend's `detail` text through unchanged.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Error returned by any request-issuing operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiFailure {
    /// The backend rejected the bearer token (HTTP 401).
    #[error("Not authenticated")]
    NotAuthenticated,
    /// No token is stored, so no request was sent.
    #[error("Not authenticated")]
    MissingToken,
    /// The backend rejected the request body (HTTP 422).
    #[error("Invalid input")]
    InvalidInput,
    /// Any other non-success status, with the backend's message.
    #[error("{detail}")]
    Server { status: u16, detail: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiFailure {
    /// Classify a non-success response by status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 => Self::NotAuthenticated,
            422 => Self::InvalidInput,
            _ => Self::Server {
                status,
                detail: detail_from_body(body)
                    .unwrap_or_else(|| format!("Request failed with status {status}")),
            },
        }
    }

    /// HTTP status behind the failure, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotAuthenticated => Some(401),
            Self::InvalidInput => Some(422),
            Self::Server { status, .. } => Some(*status),
            Self::MissingToken | Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::NotAuthenticated | Self::MissingToken)
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Extract the `detail` field from an error body.
///
/// String details are returned as-is; structured details (arrays/objects) are
/// returned as compact JSON.
#[must_use]
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Error raised while reading form input, before any request is sent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("invalid record id: {0:?}")]
    InvalidId(String),
}
