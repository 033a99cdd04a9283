//! # Validation Module
//!
//! Field-level rules applied while a catalog document is loaded.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Shape and types of the document                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Ids, names, prices, material values                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog loader                                               │
//! │  └── Cross-entry rules: unique ids, one zero-priced default,           │
//! │      every category resolvable for every model                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Runtime operations never re-run these checks; a loaded catalog is trusted.

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::MaterialHint;
use crate::{MAX_DISPLAY_NAME_LEN, MAX_ID_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog identifier.
///
/// ## Rules
/// - Must not be empty
/// - At most `MAX_ID_LEN` characters
/// - Lowercase ASCII letters, digits, hyphens and underscores only
///
/// ## Example
/// ```rust
/// use showroom_core::validation::validate_id;
///
/// assert!(validate_id("all-terrain").is_ok());
/// assert!(validate_id("Ruby Red").is_err());
/// assert!(validate_id("").is_err());
/// ```
pub fn validate_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only lowercase letters, digits, hyphens, and underscores"
                .to_string(),
        });
    }

    Ok(())
}

/// Validates a display name.
///
/// ## Rules
/// - Must not be blank
/// - At most `MAX_DISPLAY_NAME_LEN` characters
pub fn validate_display_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "displayName".to_string(),
        });
    }

    if name.chars().count() > MAX_DISPLAY_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "displayName".to_string(),
            max: MAX_DISPLAY_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Price Validators
// =============================================================================

/// Validates a price. Zero is allowed; negative prices are a catalog error.
///
/// ## Example
/// ```rust
/// use showroom_core::money::Money;
/// use showroom_core::validation::validate_price;
///
/// assert!(validate_price("basePrice", Money::from_units(420_000)).is_ok());
/// assert!(validate_price("priceDelta", Money::zero()).is_ok());
/// assert!(validate_price("priceDelta", Money::from_units(-1)).is_err());
/// ```
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value: price.units(),
        });
    }

    Ok(())
}

// =============================================================================
// Material Validators
// =============================================================================

/// Validates a `#rrggbb` hex color.
pub fn validate_hex_color(color: &str) -> ValidationResult<()> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "color".to_string(),
            reason: format!("'{}' is not a #rrggbb hex color", color),
        });
    }

    Ok(())
}

/// Validates a material factor in `0.0..=1.0`. NaN is rejected.
pub fn validate_unit_factor(field: &str, value: f32) -> ValidationResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::OutOfUnitRange {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates every value present in a material hint.
pub fn validate_material(material: &MaterialHint) -> ValidationResult<()> {
    if let Some(color) = &material.color {
        validate_hex_color(color)?;
    }
    if let Some(roughness) = material.roughness {
        validate_unit_factor("roughness", roughness)?;
    }
    if let Some(metalness) = material.metalness {
        validate_unit_factor("metalness", metalness)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
