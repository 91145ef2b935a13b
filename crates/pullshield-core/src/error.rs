//! Shared error type across pullshield crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request or config.
    BadRequest,
    /// Every candidate source URL failed to fetch.
    AllSourcesFailed,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::AllSourcesFailed => "ALL_SOURCES_FAILED",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PullShieldError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum PullShieldError {
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Carries the per-URL failure reasons, joined with `"; "`.
    #[error("failed to fetch package page (attempts: {0})")]
    AllSourcesFailed(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl PullShieldError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            PullShieldError::BadRequest(_) => ClientCode::BadRequest,
            PullShieldError::AllSourcesFailed(_) => ClientCode::AllSourcesFailed,
            PullShieldError::Internal(_) => ClientCode::Internal,
        }
    }
}
