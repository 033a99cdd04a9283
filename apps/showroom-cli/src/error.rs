//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CoreError ─────┐                                                      │
//! │  StoreError ────┼──► ApiError { code, message } ──► stderr / --json    │
//! │  ConfigError ───┘                                                      │
//! │                                                                         │
//! │  $ showroom quote --option color=chartreuse --json                      │
//! │  {                                                                      │
//! │    "code": "INVALID_SELECTION",                                         │
//! │    "message": "Option 'chartreuse' is not available in color ..."      │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use showroom_core::{CatalogError, CoreError};
use showroom_store::StoreError;

use crate::config::ConfigError;

/// Error returned from CLI commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Saved configuration not found: weekend"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for scripts
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Model or saved configuration does not exist
    NotFound,

    /// Unknown model, category, option or feature in a command
    InvalidSelection,

    /// Malformed command input (bad name, bad `category=id` pair)
    ValidationError,

    /// Share code or saved record does not fit the catalog
    InvalidSnapshot,

    /// Catalog document was rejected at load
    CatalogError,

    /// Config file unreadable or malformed
    ConfigError,

    /// Saved configuration storage failed
    StorageError,

    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCode::NotFound
            | ErrorCode::InvalidSelection
            | ErrorCode::ValidationError
            | ErrorCode::InvalidSnapshot => 1,
            ErrorCode::CatalogError | ErrorCode::ConfigError => 2,
            ErrorCode::StorageError | ErrorCode::Internal => 3,
        }
    }
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
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(id) => ApiError::not_found("Model", &id),
            CoreError::InvalidModel(_)
            | CoreError::InvalidCategory(_)
            | CoreError::InvalidOption { .. }
            | CoreError::InvalidFeature(_) => {
                ApiError::new(ErrorCode::InvalidSelection, err.to_string())
            }
            CoreError::InvalidSnapshot { .. } => {
                ApiError::new(ErrorCode::InvalidSnapshot, err.to_string())
            }
            CoreError::Catalog(e) => e.into(),
        }
    }
}

/// Converts catalog load errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::new(ErrorCode::CatalogError, err.to_string())
    }
}

/// Converts storage errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { name } => ApiError::not_found("Saved configuration", &name),
            StoreError::InvalidName { .. } => ApiError::validation(err.to_string()),
            StoreError::Core(e) => e.into(),
            StoreError::Io(e) => {
                // Log the actual error but keep the message short
                tracing::error!("Storage I/O failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Saved configuration storage failed")
            }
            StoreError::Serialization(e) => {
                tracing::error!("Stored document unreadable: {}", e);
                ApiError::new(ErrorCode::StorageError, "Saved configuration is unreadable")
            }
            StoreError::NoDataDir => ApiError::new(ErrorCode::StorageError, err.to_string()),
        }
    }
}

/// Converts config errors to API errors.
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result alias for command handlers.
pub type ApiResult<T> = Result<T, ApiError>;
