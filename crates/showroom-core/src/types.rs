//! # Domain Types
//!
//! Catalog entry types shared by the catalog, the configuration state and
//! the pricing engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Model       │   │  CatalogOption  │   │  FeatureToggle  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  display_name   │   │  display_name   │   │  display_name   │       │
//! │  │  base_price     │   │  price_delta    │   │  price_delta    │       │
//! │  └─────────────────┘   │  is_default     │   └─────────────────┘       │
//! │                        │  material       │                              │
//! │  ┌─────────────────┐   └─────────────────┘                              │
//! │  │ OptionCategory  │   color, finish, interior, trim,                  │
//! │  │  (closed enum)  │   wheels, calipers, tires                         │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All wire formats use camelCase keys so the browser front end can consume
//! them directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Option Category
// =============================================================================

/// A named axis of configuration.
///
/// The set is closed: catalog keys and UI category keys are parsed into this
/// enum, so an unknown key is rejected at the boundary instead of being
/// looked up dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OptionCategory {
    /// Paint color.
    Color,
    /// Paint finish (gloss, matte, metallic, pearl).
    Finish,
    /// Seat and cabin upholstery.
    Interior,
    /// Dashboard and door trim.
    Trim,
    /// Wheel style.
    Wheels,
    /// Brake caliper color.
    Calipers,
    /// Tire type.
    Tires,
}

impl OptionCategory {
    /// Every category, in display order.
    pub const ALL: [OptionCategory; 7] = [
        OptionCategory::Color,
        OptionCategory::Finish,
        OptionCategory::Interior,
        OptionCategory::Trim,
        OptionCategory::Wheels,
        OptionCategory::Calipers,
        OptionCategory::Tires,
    ];

    /// The key used in catalog documents, snapshots and UI events.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OptionCategory::Color => "color",
            OptionCategory::Finish => "finish",
            OptionCategory::Interior => "interior",
            OptionCategory::Trim => "trim",
            OptionCategory::Wheels => "wheels",
            OptionCategory::Calipers => "calipers",
            OptionCategory::Tires => "tires",
        }
    }
}

impl fmt::Display for OptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionCategory {
    type Err = CoreError;

    /// Parses a category key. Matching is exact; `"colour"` is not a key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptionCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CoreError::InvalidCategory(s.to_string()))
    }
}

// =============================================================================
// Material Hint
// =============================================================================

/// Rendering parameters an option contributes to the 3D model.
///
/// Colors set `color`; finishes set `roughness`/`metalness`. The core only
/// carries these values; the presentation adapter applies them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MaterialHint {
    /// `#rrggbb` color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Surface roughness, 0.0 (mirror) to 1.0 (fully diffuse).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f32>,

    /// Metalness, 0.0 to 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metalness: Option<f32>,
}

// =============================================================================
// Catalog Option
// =============================================================================

/// One selectable value within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOption {
    /// Identifier, unique within its category.
    pub id: String,

    /// Name shown on the swatch or button.
    pub display_name: String,

    /// Cost on top of the model's base price.
    #[serde(default)]
    pub price_delta: Money,

    /// Selected when the model is chosen. Exactly one per category.
    #[serde(default, rename = "default")]
    pub is_default: bool,

    /// Rendering parameters for the presentation adapter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<MaterialHint>,
}

impl CatalogOption {
    /// Creates an option with no material hint.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, price_delta: i64) -> Self {
        CatalogOption {
            id: id.into(),
            display_name: display_name.into(),
            price_delta: Money::from_units(price_delta),
            is_default: false,
            material: None,
        }
    }

    /// Marks this option as the category default.
    pub fn default_choice(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Attaches a material hint.
    pub fn with_material(mut self, material: MaterialHint) -> Self {
        self.material = Some(material);
        self
    }
}

// =============================================================================
// Model
// =============================================================================

/// A vehicle model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub display_name: String,
    /// Price with every category at its default and no features.
    pub base_price: Money,
}

// =============================================================================
// Feature Toggle
// =============================================================================

/// An independently switchable add-on (spoiler, sunroof, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FeatureToggle {
    pub id: String,
    pub display_name: String,
    pub price_delta: Money,
}

impl FeatureToggle {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, price_delta: i64) -> Self {
        FeatureToggle {
            id: id.into(),
            display_name: display_name.into(),
            price_delta: Money::from_units(price_delta),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
