//! Shared error type across evsifter crates.

use thiserror::Error;

/// Stable error codes (used in logs and by tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed input line or config value.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// A predicate could not determine whether the event matches.
    PredicateFailed,
    /// Internal failure (I/O etc).
    Internal,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::PredicateFailed => "PREDICATE_FAILED",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SiftError>;

/// Unified error type used by core and plugin.
///
/// `Predicate` is not a rejection: it means the event could not be judged at
/// all, and callers must surface it instead of picking accept or reject.
#[derive(Debug, Error)]
pub enum SiftError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("predicate failed: {0}")]
    Predicate(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SiftError {
    /// Map the error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SiftError::BadRequest(_) => ErrorCode::BadRequest,
            SiftError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            SiftError::Predicate(_) => ErrorCode::PredicateFailed,
            SiftError::Internal(_) => ErrorCode::Internal,
        }
    }
}
