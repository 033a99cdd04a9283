//! # Store Error Types
//!
//! Error types for saved-configuration storage.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  std::io::Error ──────┐                                                │
//! │  serde_json::Error ───┼──► StoreError ──► ApiError (CLI) ──► user      │
//! │  CoreError ───────────┘                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use showroom_core::CoreError;
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No saved configuration under this name.
    #[error("Saved configuration not found: {name}")]
    NotFound { name: String },

    /// The name cannot be used as a storage key.
    ///
    /// ## When This Occurs
    /// - Empty or blank name
    /// - Path separators or other characters unsafe in file names
    #[error("Invalid configuration name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Reading or writing the backing files failed.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document could not be encoded or decoded.
    #[error("Stored document is unreadable: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The stored snapshot no longer fits the catalog.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No platform data directory could be determined.
    #[error("Could not determine a data directory for saved configurations")]
    NoDataDir,
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
