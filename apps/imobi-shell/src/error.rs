//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Imobiliária Wei                        │
//! │                                                                         │
//! │  Surface                      Rust Commands                            │
//! │  ───────                      ─────────────                            │
//! │                                                                         │
//! │  "alugar 1"                                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  CoreError ──┬── notice()? ──► NoticeState (toast queue)         │  │
//! │  │              │                                                   │  │
//! │  │              └── From<CoreError> ──► ApiError { code, message } │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Errors carry a machine-readable `code` and a human-readable `message`
//! so a webview surface could consume them unchanged.

use serde::Serialize;
use thiserror::Error;

use imobi_core::{CoreError, RentBlock, ValidationError};

/// Error returned from commands.
///
/// ```json
/// {
///   "code": "FORBIDDEN",
///   "message": "Rent blocked: owner cannot rent own listing"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Listing id unknown
    NotFound,

    /// Form input rejected
    ValidationError,

    /// Listing id already taken
    Conflict,

    /// The viewer lacks permission (logged out, owns the listing)
    Forbidden,

    /// The control is rendered disabled (rented listing, owner switch)
    ControlDisabled,

    /// Surface input that maps to no command
    InvalidCommand,

    /// Reading input or writing output failed
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    /// Creates an invalid command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::PropertyNotFound(id) => ApiError::not_found("Property", &id),
            CoreError::RentBlocked(RentBlock::LoginRequired | RentBlock::OwnListing) => {
                ApiError::new(ErrorCode::Forbidden, message)
            }
            CoreError::RentBlocked(
                RentBlock::DetailsHidden | RentBlock::AlreadyRented | RentBlock::InvalidDays,
            )
            | CoreError::SessionToggleDisabled => ApiError::new(ErrorCode::ControlDisabled, message),
            CoreError::FormHidden => ApiError::new(ErrorCode::Forbidden, message),
            CoreError::Validation(ValidationError::Duplicate { .. }) => {
                ApiError::new(ErrorCode::Conflict, message)
            }
            CoreError::Validation(_) => ApiError::new(ErrorCode::ValidationError, message),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Terminal I/O failed: {}", err);
        ApiError::internal("Terminal I/O failed")
    }
}
