//! # Pricing Engine
//!
//! Pure functions from a configuration session to its price.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  base_price    = selected model's base price                           │
//! │                                                                         │
//! │  options_total = Σ price_delta of the selected option, every category  │
//! │                + Σ price_delta of every enabled feature                │
//! │                                                                         │
//! │  total         = base_price + options_total                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here can fail or go negative: the catalog loader has already
//! rejected negative prices, and the session only holds ids it has checked
//! against the same catalog.

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::state::Configurator;
use crate::types::OptionCategory;

// =============================================================================
// Price Breakdown
// =============================================================================

/// Result of [`compute_total`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_price: Money,
    pub options_total: Money,
    pub total: Money,
}

/// Computes the price of the current configuration.
///
/// The sums cannot overflow: a catalog only loads when every model's most
/// expensive configuration fits in [`Money`].
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use showroom_core::{pricing, Catalog, Configurator, OptionCategory};
///
/// let catalog = Arc::new(Catalog::builtin().unwrap());
/// let mut session = Configurator::new(catalog, "sedan").unwrap();
/// assert_eq!(pricing::compute_total(&session).total.units(), 420_000);
///
/// session.select_option(OptionCategory::Color, "red").unwrap();
/// let quote = pricing::compute_total(&session);
/// assert_eq!(quote.options_total.units(), 15_000);
/// assert_eq!(quote.total.units(), 435_000);
/// ```
pub fn compute_total(session: &Configurator) -> PriceBreakdown {
    let base_price = session.selected_model().base_price;

    let options: Money = OptionCategory::ALL
        .into_iter()
        .filter_map(|category| session.selected_option(category))
        .map(|option| option.price_delta)
        .sum();

    let features: Money = session.enabled_features().map(|f| f.price_delta).sum();

    let options_total = options + features;

    PriceBreakdown {
        base_price,
        options_total,
        total: base_price + options_total,
    }
}

// =============================================================================
// Itemized Quote
// =============================================================================

/// What a quote line is charging for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "category", rename_all = "snake_case")]
pub enum LineKind {
    /// The model's base price.
    Model,
    /// A selected option in a category.
    Option(OptionCategory),
    /// An enabled feature toggle.
    Feature,
}

/// One line of an itemized quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceLine {
    pub kind: LineKind,
    pub id: String,
    pub label: String,
    pub amount: Money,
}

/// Lists what the customer is paying for.
///
/// The model line always comes first; option and feature lines follow, in
/// category and catalog order, and only when they cost something. The
/// amounts always sum to `compute_total(session).total`.
pub fn itemize(session: &Configurator) -> Vec<PriceLine> {
    let model = session.selected_model();
    let mut lines = vec![PriceLine {
        kind: LineKind::Model,
        id: model.id.clone(),
        label: model.display_name.clone(),
        amount: model.base_price,
    }];

    for category in OptionCategory::ALL {
        if let Some(option) = session.selected_option(category) {
            if !option.price_delta.is_zero() {
                lines.push(PriceLine {
                    kind: LineKind::Option(category),
                    id: option.id.clone(),
                    label: option.display_name.clone(),
                    amount: option.price_delta,
                });
            }
        }
    }

    lines.extend(
        session
            .enabled_features()
            .filter(|feature| !feature.price_delta.is_zero())
            .map(|feature| PriceLine {
                kind: LineKind::Feature,
                id: feature.id.clone(),
                label: feature.display_name.clone(),
                amount: feature.price_delta,
            }),
    );

    lines
}

// =============================================================================
// Unit Tests
// =============================================================================
