use std::fmt;
use thiserror::Error;

use crate::ports::outbound::Response;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a request the GitLab API
/// rejected from a local failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the API accepted the request
    Success = 0,
    /// The API answered with a non-success HTTP status
    ApiRejected = 1,
    /// Invalid command-line arguments or project identifier
    InvalidArguments = 2,
    /// Application error (network error, config error, decode error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error chain to the exit code the CLI should terminate with.
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<ApiError>() {
            Some(ApiError::Status { .. }) => ExitCode::ApiRejected,
            Some(ApiError::InvalidProjectId { .. }) => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApiRejected => write!(f, "API Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors returned by GitLab API operations.
///
/// Failures reported by the transport are passed through unchanged. Variants
/// produced after a response arrived keep its metadata so callers can still
/// inspect the status code and headers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The project identifier could not be turned into a path segment.
    /// Detected locally; no request is sent.
    #[error("Invalid project ID {value:?}: {reason}\n\n💡 Hint: Use a numeric project ID or a full path such as \"group/project\"")]
    InvalidProjectId { value: String, reason: String },

    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request never produced a response (connection, timeout, URL).
    #[error("Request to {url} failed: {message}")]
    Transport {
        url: String,
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The API answered with a non-success status.
    #[error("{} {} returned {}: {}", .response.method, .response.url, .response.status, .message)]
    Status {
        response: Box<Response>,
        message: String,
    },

    /// The response body did not match the expected JSON schema.
    #[error("Failed to decode response from {} {}: {}", .response.method, .response.url, .source)]
    Decode {
        response: Box<Response>,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Response metadata, when the failure happened after a response arrived.
    pub fn response(&self) -> Option<&Response> {
        match self {
            ApiError::Status { response, .. } | ApiError::Decode { response, .. } => {
                Some(&**response)
            }
            ApiError::InvalidProjectId { .. }
            | ApiError::Encode(_)
            | ApiError::Transport { .. } => None,
        }
    }
}
