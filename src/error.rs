//! Error types surfaced by the client
//!
//! Every failure is reported to the immediate caller; nothing is recovered
//! internally beyond the bounded retry of transport-level failures in the
//! dispatcher.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Neither a pre-obtained session nor a login/password pair was available
    /// at construction time
    MissingCredentials,
    /// A required URL template placeholder was not supplied by the caller
    ///
    /// This is a programmer error and is never retried.
    MissingPlaceholder(String),
    /// The remote service answered with an unexpected status code
    ///
    /// Carries the raw response body as diagnostic payload. Surfaced
    /// immediately, never retried.
    BadStatus {
        /// Status code returned by the service
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// Transport-level failures persisted beyond the configured retry bound
    ///
    /// Carries the total number of attempts performed. Terminal.
    MaxRetriesExceeded(u32),
    /// Error from the underlying HTTP transport
    Transport(reqwest::Error),
    /// A response body could not be decoded as JSON
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingCredentials => {
                write!(f, "missing credentials: no session and no login/password")
            }
            AppError::MissingPlaceholder(name) => {
                write!(f, "unresolved placeholder: {name}")
            }
            AppError::BadStatus { status, body } => {
                write!(f, "unexpected status {status}: {body}")
            }
            AppError::MaxRetriesExceeded(attempts) => {
                write!(f, "max retries exceeded after {attempts} attempts")
            }
            AppError::Transport(e) => write!(f, "transport error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Transport(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Transport(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}
