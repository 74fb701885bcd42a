//! Error types for the project API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the project does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging. The client never retries or
//! reclassifies these; every variant reaches the caller unchanged.

use thiserror::Error;

/// Errors returned by the request builder, the transport and the project client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested project does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// No HTTP response was received (connection refused, DNS, timeout).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The request could not be built, e.g. an empty name segment.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The client configuration is missing or malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// HTTP status carried by this error, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_body() {
        let err = ApiError::HttpError {
            status: 409,
            body: "already exists".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 409: already exists");
    }

    #[test]
    fn status_is_only_reported_for_server_errors() {
        assert_eq!(ApiError::NotFound.status(), Some(404));
        assert_eq!(
            ApiError::HttpError { status: 500, body: String::new() }.status(),
            Some(500)
        );
        assert_eq!(ApiError::Transport("refused".into()).status(), None);
    }
}
