//! # Money Module
//!
//! Provides the `Money` type for vehicle prices and price deltas.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Vehicle prices are quoted in whole currency units (R 420 000), so     │
//! │  every base price and every option delta is an exact integer.          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Units                                            │
//! │    420000 + 15000 + 4500 = 439500, always                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use showroom_core::money::Money;
//!
//! let base = Money::from_units(420_000);
//! let paint = Money::from_units(15_000);
//!
//! let total = base + paint;
//! assert_eq!(total.units(), 435_000);
//! assert_eq!(total.to_string(), "R 435 000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: the catalog loader is what rejects negative prices
///   and totals that would not fit
/// - **Single field tuple struct**: serializes as a bare JSON number
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Model.base_price ───────────────┐                                      │
/// │                                  ├──► PriceBreakdown.total ──► UI      │
/// │  Option.price_delta ──┐          │                                      │
/// │  Feature.price_delta ─┴──► options_total                               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ```rust
    /// use showroom_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(4500).units(), 4500);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two values, returning `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Renders the value with the given display format.
    ///
    /// ## Example
    /// ```rust
    /// use showroom_core::money::{Money, PriceFormat};
    ///
    /// let format = PriceFormat::new("$", ",");
    /// assert_eq!(Money::from_units(1234567).format(&format), "$ 1,234,567");
    /// ```
    pub fn format(&self, format: &PriceFormat) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&format.group_separator);
            }
            grouped.push(ch);
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{} {}", sign, format.symbol, grouped)
    }
}

// =============================================================================
// Price Format
// =============================================================================

/// How prices are rendered for display.
///
/// The default matches the en-ZA locale used by the showroom: `R 420 000`.
/// Formatting is a display concern only; totals are always computed on
/// [`Money`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceFormat {
    /// Currency symbol placed before the amount.
    pub symbol: String,

    /// Separator inserted between groups of three digits.
    pub group_separator: String,
}

impl PriceFormat {
    pub fn new(symbol: impl Into<String>, group_separator: impl Into<String>) -> Self {
        PriceFormat {
            symbol: symbol.into(),
            group_separator: group_separator.into(),
        }
    }
}

impl Default for PriceFormat {
    fn default() -> Self {
        PriceFormat::new("R", " ")
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the default (Rand) price format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&PriceFormat::default()))
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
