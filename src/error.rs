//! Error types for the bookmark client
//!
//! Every fallible operation in this crate returns [`AppError`]. The taxonomy
//! is deliberately small: the two local precondition failures, the remote
//! non-success status case, and pass-through wrappers for transport and
//! deserialization failures.

use reqwest::StatusCode;
use std::fmt;

/// Logical operation a failed request belonged to
///
/// Carried inside [`AppError::RequestFailed`] so callers can distinguish
/// which of the four operations hit a non-success status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Creating a bookmark
    Save,
    /// Listing bookmarks
    Get,
    /// Deleting a bookmark by id
    Delete,
    /// Fetching the bookmark count
    Count,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Operation::Save => "save",
            Operation::Get => "get",
            Operation::Delete => "delete",
            Operation::Count => "count",
        };
        write!(f, "{tag}")
    }
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// No identity is currently signed in; no request was issued
    NotAuthenticated,
    /// The backend base URL is not configured; no request was issued
    ConfigurationMissing,
    /// The backend answered with a non-success HTTP status
    RequestFailed {
        /// Which logical operation the request belonged to
        operation: Operation,
        /// The HTTP status the backend returned
        status: StatusCode,
    },
    /// Transport-level failure from the underlying HTTP client
    Network(reqwest::Error),
    /// The response body could not be deserialized
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotAuthenticated => write!(f, "user not authenticated"),
            AppError::ConfigurationMissing => write!(f, "backend URL not configured"),
            AppError::RequestFailed { operation, status } => {
                write!(
                    f,
                    "{operation} request failed with status {}",
                    status.as_u16()
                )
            }
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "deserialization error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
