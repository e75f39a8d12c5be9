//! Error types for the zdesk client.
//!
//! This module defines `ZdeskError`, the unified error type used throughout
//! the crate for consistent error handling and propagation.
//!
//! # Propagation policy
//!
//! Every error surfaces synchronously to the immediate caller of the
//! operation that produced it. The library never swallows, logs, or retries
//! an error on its own; in particular HTTP 4xx/5xx responses are returned
//! as [`ZdeskError::RequestFailed`] with the raw body intact so callers can
//! interpret the service's answer themselves (a 404 "not found" versus a
//! 422 "validation error", say).

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for all zdesk operations.
///
/// Each variant provides specific context about the failure. Variants map
/// one-to-one onto the stages of request dispatch: resolving the operation,
/// binding its path parameters, performing the transport exchange, and
/// interpreting the response.
#[derive(Error, Debug)]
pub enum ZdeskError {
    /// Configuration error - missing or invalid construction values.
    #[error("configuration error: {0}")]
    Config(String),

    /// The requested operation name is not in the endpoint registry.
    #[error("unknown operation: {name}")]
    UnknownOperation {
        /// The operation name that failed to resolve.
        name: String,
    },

    /// A path template placeholder had no matching request parameter.
    #[error("operation {operation} requires path parameter {placeholder}")]
    MissingParameter {
        /// The operation whose template could not be rendered.
        operation: String,
        /// The placeholder left unresolved.
        placeholder: String,
    },

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The transport failed before a response was obtained (DNS, connect,
    /// TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a status other than the operation's
    /// documented success status.
    #[error("request failed with HTTP {status}: {body}")]
    RequestFailed {
        /// The HTTP status code returned.
        status: StatusCode,
        /// The raw response body, unmodified for caller inspection.
        body: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ZdeskError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        ZdeskError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ZdeskError::Config(message.into())
    }

    /// Creates an error for an operation name absent from the registry.
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        ZdeskError::UnknownOperation { name: name.into() }
    }

    /// Creates an error for an unresolved path placeholder.
    pub fn missing_parameter(
        operation: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        ZdeskError::MissingParameter {
            operation: operation.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Returns the HTTP status the service answered with, if this error
    /// carries one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ZdeskError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the service answered 404 for the requested resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = ZdeskError::missing_env("ZENDESK_URL");
        assert!(err.to_string().contains("ZENDESK_URL"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_unknown_operation_error() {
        let err = ZdeskError::unknown_operation("frobnicate_ticket");
        assert_eq!(err.to_string(), "unknown operation: frobnicate_ticket");
    }

    #[test]
    fn test_missing_parameter_error() {
        let err = ZdeskError::missing_parameter("show_ticket", "id");
        let msg = err.to_string();
        assert!(msg.contains("show_ticket"));
        assert!(msg.contains("id"));
    }

    #[test]
    fn test_request_failed_display() {
        let err = ZdeskError::RequestFailed {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: r#"{"error":"RecordInvalid"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("422"));
        assert!(msg.contains("RecordInvalid"));
    }

    #[test]
    fn test_status_accessor() {
        let err = ZdeskError::RequestFailed {
            status: StatusCode::NOT_FOUND,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_status_accessor_none_for_config() {
        let err = ZdeskError::invalid_config("bad base URL");
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }
}
