//! Error types.
//!
//! - `EstimateError`: failures of a single estimation (bad input or a
//!   non-physical model result). Both are terminal for the request.
//! - `AppError`: what the `tod` binary reports, carrying its exit code.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Exit code for rejected input (validation, unreadable request files, bad config).
pub const EXIT_INPUT: u8 = 2;

/// Exit code for inputs that pass validation but break the cooling model.
pub const EXIT_MODEL: u8 = 4;

/// Why an estimation failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// Malformed or out-of-domain input, detected before any computation.
    #[error("{0}")]
    Validation(String),

    /// Input is in-domain but the cooling law has no physical solution for it.
    #[error("{0}")]
    Model(String),
}

/// Coarse error category exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    #[serde(rename = "ValidationError")]
    Validation,
    #[serde(rename = "ModelError")]
    Model,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::Model => "ModelError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EstimateError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn model(message: impl Into<String>) -> Self {
        Self::Model(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EstimateError::Validation(_) => ErrorKind::Validation,
            EstimateError::Model(_) => ErrorKind::Model,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            EstimateError::Validation(m) | EstimateError::Model(m) => m,
        }
    }
}

/// Serializable failure shape: `{ "error": "<kind>", "message": "<text>" }`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub error: ErrorKind,
    pub message: String,
}

impl From<&EstimateError> for ErrorReport {
    fn from(err: &EstimateError) -> Self {
        Self {
            error: err.kind(),
            message: err.message().to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
    source: Option<EstimateError>,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
            source: None,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    /// The estimation failure behind this error, if any.
    pub fn estimate_error(&self) -> Option<&EstimateError> {
        self.source.as_ref()
    }
}

impl From<EstimateError> for AppError {
    fn from(err: EstimateError) -> Self {
        let exit_code = match err.kind() {
            ErrorKind::Validation => EXIT_INPUT,
            ErrorKind::Model => EXIT_MODEL,
        };
        Self {
            exit_code,
            message: format!("{}: {}", err.kind(), err.message()),
            source: Some(err),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
