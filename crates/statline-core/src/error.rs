//! Shared error type across statline crates.

use thiserror::Error;

/// Stable error codes, suitable for log fields and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Operation has no implementation on the active backend.
    Unimplemented,
    /// Stat name rejected by validation.
    InvalidName,
    /// Tag rejected by validation.
    InvalidTag,
    /// Configuration could not be parsed or failed validation.
    BadConfig,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Unimplemented => "UNIMPLEMENTED",
            ErrorCode::InvalidName => "INVALID_NAME",
            ErrorCode::InvalidTag => "INVALID_TAG",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Unified error type used by core and backends.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("{op} is not implemented by the {backend} backend")]
    Unimplemented {
        backend: &'static str,
        op: &'static str,
    },
    #[error("invalid stat name: {0}")]
    InvalidName(String),
    #[error("invalid tag: {key}={value}")]
    InvalidTag { key: String, value: String },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl StatsError {
    /// Explicit failure for an operation a backend does not provide.
    pub fn unimplemented(backend: &'static str, op: &'static str) -> Self {
        StatsError::Unimplemented { backend, op }
    }

    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            StatsError::Unimplemented { .. } => ErrorCode::Unimplemented,
            StatsError::InvalidName(_) => ErrorCode::InvalidName,
            StatsError::InvalidTag { .. } => ErrorCode::InvalidTag,
            StatsError::BadConfig(_) => ErrorCode::BadConfig,
            StatsError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            StatsError::Internal(_) => ErrorCode::Internal,
        }
    }
}
