//! # Error Types
//!
//! Domain-specific error types for showroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  showroom-core errors (this file)                                      │
//! │  ├── CoreError        - Rejected configuration operations              │
//! │  ├── CatalogError     - Catalog documents refused at load time         │
//! │  └── ValidationError  - Single field rule violations                   │
//! │                                                                         │
//! │  showroom-store errors (separate crate)                                │
//! │  └── StoreError       - Saved configuration failures                   │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── ApiError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError → CoreError → ApiError           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending id in every message
//! 3. A rejected operation never leaves partial state behind
//! 4. Nothing here is retryable: invalid ids are caller bugs or stale UI

use thiserror::Error;

use crate::types::OptionCategory;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by configuration operations.
///
/// Every variant is a synchronous validation failure. After any of them the
/// configuration state is exactly what it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// `select_model` (or a session constructor) named a model that is not
    /// in the catalog.
    #[error("Unknown model: {0}")]
    InvalidModel(String),

    /// A category key did not parse into a known [`OptionCategory`].
    #[error("Unknown option category: {0}")]
    InvalidCategory(String),

    /// The option id is not offered in this category for the current model.
    ///
    /// ## When This Occurs
    /// - Stale UI: the user switched models and an old swatch fired
    /// - A model-specific option was sent for a different model
    #[error("Option '{option_id}' is not available in {category} for model {model_id}")]
    InvalidOption {
        category: OptionCategory,
        option_id: String,
        model_id: String,
    },

    /// Feature toggle id is not in the feature catalog.
    #[error("Unknown feature: {0}")]
    InvalidFeature(String),

    /// A snapshot (or share code) failed validation; nothing was restored.
    #[error("Invalid snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    /// Catalog lookup for a model id that does not exist.
    #[error("Model not found: {0}")]
    NotFound(String),

    /// Catalog document was rejected.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl CoreError {
    /// Wraps any error as the reason a snapshot was refused.
    pub(crate) fn invalid_snapshot(reason: impl ToString) -> Self {
        CoreError::InvalidSnapshot {
            reason: reason.to_string(),
        }
    }
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Configuration errors found while loading a catalog.
///
/// These are startup failures: a catalog that loads successfully guarantees
/// every invariant the pricing engine relies on (non-negative prices, one
/// zero-priced default per category, every category resolvable per model).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The document is not valid JSON or does not match the schema.
    #[error("Catalog document is malformed: {0}")]
    Malformed(String),

    /// The catalog defines no models.
    #[error("Catalog must define at least one model")]
    NoModels,

    /// Two entries in the same scope share an id.
    #[error("Duplicate id '{id}' in {scope}")]
    DuplicateId { scope: String, id: String },

    /// An options key is not one of the known categories.
    #[error("Unknown option category '{key}' in {scope}")]
    UnknownCategory { scope: String, key: String },

    /// A model has neither its own nor a shared option set for a category.
    #[error("Model {model_id} has no options for {category}")]
    MissingCategory {
        model_id: String,
        category: OptionCategory,
    },

    /// An option list is empty.
    #[error("{scope} has no options")]
    EmptyCategory { scope: String },

    /// No option in the list is marked as default.
    #[error("{scope} has no default option")]
    MissingDefault { scope: String },

    /// More than one option in the list is marked as default.
    #[error("{scope} has more than one default option")]
    MultipleDefaults { scope: String },

    /// The default option carries a non-zero price delta.
    #[error("Default option '{id}' in {scope} must have a zero price delta, found {delta}")]
    PricedDefault {
        scope: String,
        id: String,
        delta: i64,
    },

    /// The most expensive configuration of a model does not fit in
    /// [`Money`](crate::Money).
    #[error("Prices for model {model_id} overflow the maximum total")]
    PriceOverflow { model_id: String },

    /// A field failed its validation rule.
    #[error("{scope}: {source}")]
    Invalid {
        scope: String,
        #[source]
        source: ValidationError,
    },
}

impl CatalogError {
    pub(crate) fn invalid(scope: impl Into<String>, source: ValidationError) -> Self {
        CatalogError::Invalid {
            scope: scope.into(),
            source,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Single-field validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative, found {value}")]
    Negative { field: String, value: i64 },

    /// Invalid format (e.g. bad id characters, bad hex color).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Material factor outside 0.0..=1.0.
    #[error("{field} must be between 0 and 1")]
    OutOfUnitRange { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
