//! Shared error type across scorepulse crates.

use thiserror::Error;

use crate::metric::MetricKind;

/// Stable machine-readable error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Re-registration with a different metric kind.
    Conflict,
    /// Update for a name that was never registered.
    UnknownMetric,
    /// Update rejected by kind/value rules (e.g. negative counter delta).
    InvalidValue,
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and test assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::UnknownMetric => "UNKNOWN_METRIC",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ScorePulseError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum ScorePulseError {
    #[error("metric {name} already registered as {existing}, re-registered as {requested}")]
    Conflict {
        name: String,
        existing: MetricKind,
        requested: MetricKind,
    },
    #[error("unknown metric: {0}")]
    UnknownMetric(String),
    #[error("invalid value: {0}")]
    InvalidValue(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ScorePulseError {
    /// Map internal error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ScorePulseError::Conflict { .. } => ErrorCode::Conflict,
            ScorePulseError::UnknownMetric(_) => ErrorCode::UnknownMetric,
            ScorePulseError::InvalidValue(_) => ErrorCode::InvalidValue,
            ScorePulseError::BadRequest(_) => ErrorCode::BadRequest,
            ScorePulseError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            ScorePulseError::Internal(_) => ErrorCode::Internal,
        }
    }
}
