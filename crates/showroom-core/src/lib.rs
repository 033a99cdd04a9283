//! # showroom-core: Configuration & Pricing for the Showroom
//!
//! This crate is the **heart** of the vehicle configurator. It holds the
//! option catalog, the user's selection and the price, as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Showroom Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation Adapter (3D view, CLI, ...)           │   │
//! │  │    Model picker ──► Swatches ──► Add-ons ──► Price display      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ showroom-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │ catalog  │  │  state   │  │ pricing  │  │  appearance  │   │   │
//! │  │   │ Catalog  │  │Configur- │  │ Price-   │  │  materials   │   │   │
//! │  │   │ options  │  │  ator    │  │ Breakdown│  │  for the 3D  │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RENDERING • NO LOGGING • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Snapshot                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              showroom-store (saved configurations)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog entries (Model, CatalogOption, FeatureToggle, OptionCategory)
//! - [`catalog`] - Catalog loading and validation
//! - [`state`] - Configurator session, ConfigurationState, Snapshot
//! - [`pricing`] - Price breakdown and itemized quote
//! - [`appearance`] - Material parameters for the renderer
//! - [`share`] - Share codes for links
//! - [`money`] - Integer money and price formatting
//! - [`validation`] - Field rules applied at catalog load
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use showroom_core::{Catalog, Configurator, OptionCategory};
//!
//! let catalog = Arc::new(Catalog::builtin().unwrap());
//! let mut session = Configurator::new(catalog, "sedan").unwrap();
//!
//! session.select_option(OptionCategory::Color, "red").unwrap();
//! let quote = session.quote();
//!
//! assert_eq!(quote.base_price.units(), 420_000);
//! assert_eq!(quote.options_total.units(), 15_000);
//! assert_eq!(quote.total.to_string(), "R 435 000");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod appearance;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod share;
pub mod state;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use appearance::Appearance;
pub use catalog::{Catalog, CatalogDocument, ModelDocument, ModelOptions};
pub use error::{CatalogError, CoreError, CoreResult, ValidationError};
pub use money::{Money, PriceFormat};
pub use pricing::{PriceBreakdown, PriceLine};
pub use state::{ConfigurationState, Configurator, Snapshot};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest accepted catalog id (models, options, features).
pub const MAX_ID_LEN: usize = 64;

/// Longest accepted display name.
pub const MAX_DISPLAY_NAME_LEN: usize = 120;
