//! # Option Catalog
//!
//! Loads, validates and serves the static catalog of models, options and
//! feature toggles.
//!
//! ## Document Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CatalogDocument                                                        │
//! │  ├── models[]          { id, displayName, basePrice, options? }        │
//! │  │                       options: per-model override per category      │
//! │  ├── sharedOptions     { color: [...], finish: [...], ... }            │
//! │  └── features[]        { id, displayName, priceDelta }                 │
//! │                                                                         │
//! │  Resolution per model:                                                 │
//! │    category ──► model.options[category]                                │
//! │             └─► sharedOptions[category]                                │
//! │             └─► MissingCategory (load fails)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A [`Catalog`] only exists once the whole document has passed validation,
//! so everything downstream can rely on its invariants.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::error::{CatalogError, CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CatalogOption, FeatureToggle, Model, OptionCategory};
use crate::validation::{validate_display_name, validate_id, validate_material, validate_price};

/// Catalog shipped with the crate: the sedan, SUV and GT sports lineup.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

// =============================================================================
// Catalog Document (wire format)
// =============================================================================

/// Unvalidated catalog as it appears in JSON.
///
/// Category keys stay strings here so that an unknown key produces a
/// [`CatalogError::UnknownCategory`] naming where it was found.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub models: Vec<ModelDocument>,

    #[serde(default)]
    pub shared_options: BTreeMap<String, Vec<CatalogOption>>,

    #[serde(default)]
    pub features: Vec<FeatureToggle>,
}

/// A model entry, optionally overriding some categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDocument {
    #[serde(flatten)]
    pub model: Model,

    #[serde(default)]
    pub options: BTreeMap<String, Vec<CatalogOption>>,
}

// =============================================================================
// Model Options
// =============================================================================

/// The resolved option sets for one model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOptions {
    model: Model,
    categories: BTreeMap<OptionCategory, Vec<CatalogOption>>,
    defaults: BTreeMap<OptionCategory, String>,
}

impl ModelOptions {
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Options offered in a category, in catalog order.
    pub fn options(&self, category: OptionCategory) -> &[CatalogOption] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Looks up one option by id.
    pub fn option(&self, category: OptionCategory, option_id: &str) -> Option<&CatalogOption> {
        self.options(category).iter().find(|o| o.id == option_id)
    }

    /// The default option of a category.
    pub fn default_option(&self, category: OptionCategory) -> Option<&CatalogOption> {
        self.defaults
            .get(&category)
            .and_then(|id| self.option(category, id))
    }

    /// Category → default option id, for every category.
    pub fn default_selections(&self) -> &BTreeMap<OptionCategory, String> {
        &self.defaults
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A validated, read-only option catalog.
///
/// ## Guarantees
/// - At least one model; model ids unique
/// - Every model resolves every [`OptionCategory`] to a non-empty list
/// - Option ids unique within each list; exactly one default, priced at zero
/// - No negative base price or price delta anywhere
/// - Feature ids unique
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    models: Vec<ModelOptions>,
    features: Vec<FeatureToggle>,
}

impl Catalog {
    /// Parses and validates a JSON catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Self::from_document(document)
    }

    /// The catalog embedded in the crate.
    ///
    /// ## Example
    /// ```rust
    /// use showroom_core::Catalog;
    ///
    /// let catalog = Catalog::builtin().unwrap();
    /// assert_eq!(catalog.model("sedan").unwrap().base_price.units(), 420_000);
    /// ```
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Validates a document and resolves per-model option sets.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        if document.models.is_empty() {
            return Err(CatalogError::NoModels);
        }

        let shared = parse_category_keys("sharedOptions", document.shared_options)?;
        for (category, options) in &shared {
            validate_option_set(&format!("sharedOptions/{}", category), options)?;
        }

        let mut seen_features = HashSet::new();
        for feature in &document.features {
            let scope = format!("feature {}", feature.id);
            validate_id(&feature.id).map_err(|e| CatalogError::invalid(&scope, e))?;
            validate_display_name(&feature.display_name)
                .map_err(|e| CatalogError::invalid(&scope, e))?;
            validate_price("priceDelta", feature.price_delta)
                .map_err(|e| CatalogError::invalid(&scope, e))?;

            if !seen_features.insert(feature.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    scope: "features".to_string(),
                    id: feature.id.clone(),
                });
            }
        }

        let mut seen_models = HashSet::new();
        let mut models = Vec::with_capacity(document.models.len());

        for entry in document.models {
            let model = entry.model;
            let scope = format!("model {}", model.id);

            validate_id(&model.id).map_err(|e| CatalogError::invalid(&scope, e))?;
            validate_display_name(&model.display_name)
                .map_err(|e| CatalogError::invalid(&scope, e))?;
            validate_price("basePrice", model.base_price)
                .map_err(|e| CatalogError::invalid(&scope, e))?;

            if !seen_models.insert(model.id.clone()) {
                return Err(CatalogError::DuplicateId {
                    scope: "models".to_string(),
                    id: model.id,
                });
            }

            let mut overrides = parse_category_keys(&scope, entry.options)?;
            let mut categories = BTreeMap::new();
            let mut defaults = BTreeMap::new();

            for category in OptionCategory::ALL {
                let options = overrides
                    .remove(&category)
                    .or_else(|| shared.get(&category).cloned())
                    .ok_or_else(|| CatalogError::MissingCategory {
                        model_id: model.id.clone(),
                        category,
                    })?;

                let scope = format!("{}/{}", model.id, category);
                let default_id = validate_option_set(&scope, &options)?;
                defaults.insert(category, default_id);
                categories.insert(category, options);
            }

            // Most expensive reachable configuration must fit in Money.
            let ceiling = categories
                .values()
                .map(|options| {
                    options
                        .iter()
                        .map(|o| o.price_delta)
                        .max()
                        .unwrap_or_default()
                })
                .chain(document.features.iter().map(|f| f.price_delta))
                .try_fold(model.base_price, Money::checked_add);
            if ceiling.is_none() {
                return Err(CatalogError::PriceOverflow { model_id: model.id });
            }

            models.push(ModelOptions {
                model,
                categories,
                defaults,
            });
        }

        Ok(Catalog {
            models,
            features: document.features,
        })
    }

    /// All models, in catalog order.
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.iter().map(|m| &m.model)
    }

    /// The first model of the catalog, used when nothing else is requested.
    pub fn first_model(&self) -> &Model {
        self.at(0).model()
    }

    /// Looks up a model.
    pub fn model(&self, model_id: &str) -> CoreResult<&Model> {
        self.options_for(model_id).map(ModelOptions::model)
    }

    /// The resolved option sets for a model, or `NotFound`.
    pub fn options_for(&self, model_id: &str) -> CoreResult<&ModelOptions> {
        self.position(model_id)
            .map(|index| self.at(index))
            .ok_or_else(|| CoreError::NotFound(model_id.to_string()))
    }

    /// Catalog position of a model.
    pub(crate) fn position(&self, model_id: &str) -> Option<usize> {
        self.models.iter().position(|m| m.model.id == model_id)
    }

    /// Option sets at a position returned by [`position`](Self::position).
    /// Position 0 always exists: a catalog has at least one model.
    pub(crate) fn at(&self, index: usize) -> &ModelOptions {
        &self.models[index]
    }

    /// All feature toggles, in catalog order.
    pub fn features(&self) -> &[FeatureToggle] {
        &self.features
    }

    /// Looks up a feature toggle.
    pub fn feature(&self, feature_id: &str) -> Option<&FeatureToggle> {
        self.features.iter().find(|f| f.id == feature_id)
    }
}

// =============================================================================
// Loader Helpers
// =============================================================================

fn parse_category_keys(
    scope: &str,
    raw: BTreeMap<String, Vec<CatalogOption>>,
) -> Result<BTreeMap<OptionCategory, Vec<CatalogOption>>, CatalogError> {
    raw.into_iter()
        .map(|(key, options)| {
            key.parse::<OptionCategory>()
                .map(|category| (category, options))
                .map_err(|_| CatalogError::UnknownCategory {
                    scope: scope.to_string(),
                    key,
                })
        })
        .collect()
}

/// Checks one option list and returns the id of its default option.
fn validate_option_set(scope: &str, options: &[CatalogOption]) -> Result<String, CatalogError> {
    if options.is_empty() {
        return Err(CatalogError::EmptyCategory {
            scope: scope.to_string(),
        });
    }

    let mut seen = HashSet::new();
    let mut default: Option<&CatalogOption> = None;

    for option in options {
        let option_scope = format!("{} option {}", scope, option.id);
        validate_id(&option.id).map_err(|e| CatalogError::invalid(&option_scope, e))?;
        validate_display_name(&option.display_name)
            .map_err(|e| CatalogError::invalid(&option_scope, e))?;
        validate_price("priceDelta", option.price_delta)
            .map_err(|e| CatalogError::invalid(&option_scope, e))?;
        if let Some(material) = &option.material {
            validate_material(material).map_err(|e| CatalogError::invalid(&option_scope, e))?;
        }

        if !seen.insert(option.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                scope: scope.to_string(),
                id: option.id.clone(),
            });
        }

        if option.is_default {
            if default.is_some() {
                return Err(CatalogError::MultipleDefaults {
                    scope: scope.to_string(),
                });
            }
            default = Some(option);
        }
    }

    let default = default.ok_or_else(|| CatalogError::MissingDefault {
        scope: scope.to_string(),
    })?;

    if !default.price_delta.is_zero() {
        return Err(CatalogError::PricedDefault {
            scope: scope.to_string(),
            id: default.id.clone(),
            delta: default.price_delta.units(),
        });
    }

    Ok(default.id.clone())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn minimal_document() -> CatalogDocument {
        let shared = OptionCategory::ALL
            .into_iter()
            .map(|category| {
                (
                    category.as_str().to_string(),
                    vec![
                        CatalogOption::new("standard", "Standard", 0).default_choice(),
                        CatalogOption::new("upgrade", "Upgrade", 1000),
                    ],
                )
            })
            .collect();

        CatalogDocument {
            models: vec![ModelDocument {
                model: Model {
                    id: "sedan".to_string(),
                    display_name: "Luxury Sedan".to_string(),
                    base_price: Money::from_units(420_000),
                },
                options: BTreeMap::new(),
            }],
            shared_options: shared,
            features: vec![FeatureToggle::new("spoiler", "Rear Spoiler", 4500)],
        }
    }

    #[test]
    fn test_minimal_document_loads() {
        let catalog = Catalog::from_document(minimal_document()).unwrap();
        let options = catalog.options_for("sedan").unwrap();

        for category in OptionCategory::ALL {
            assert_eq!(options.options(category).len(), 2);
            assert_eq!(options.default_option(category).unwrap().id, "standard");
        }
        assert_eq!(catalog.features().len(), 1);
        assert_eq!(catalog.first_model().id, "sedan");
    }

    #[test]
    fn test_unknown_model_is_not_found() {
        let catalog = Catalog::from_document(minimal_document()).unwrap();
        assert_eq!(
            catalog.options_for("hovercraft").unwrap_err(),
            CoreError::NotFound("hovercraft".to_string())
        );
        assert!(catalog.model("hovercraft").is_err());
    }

    #[test]
    fn test_model_override_replaces_shared_set() {
        let mut doc = minimal_document();
        doc.models[0].options.insert(
            "color".to_string(),
            vec![
                CatalogOption::new("black", "Midnight Black", 0).default_choice(),
                CatalogOption::new("red", "Ruby Red", 15000),
            ],
        );

        let catalog = Catalog::from_document(doc).unwrap();
        let options = catalog.options_for("sedan").unwrap();
        assert!(options.option(OptionCategory::Color, "red").is_some());
        assert!(options.option(OptionCategory::Color, "upgrade").is_none());
        assert!(options.option(OptionCategory::Wheels, "upgrade").is_some());
    }

    #[test]
    fn test_rejects_empty_model_list() {
        let mut doc = minimal_document();
        doc.models.clear();
        assert_eq!(Catalog::from_document(doc), Err(CatalogError::NoModels));
    }

    #[test]
    fn test_rejects_negative_prices() {
        let mut doc = minimal_document();
        doc.models[0].model.base_price = Money::from_units(-1);
        assert!(matches!(
            Catalog::from_document(doc),
            Err(CatalogError::Invalid { .. })
        ));

        let mut doc = minimal_document();
        doc.features[0].price_delta = Money::from_units(-4500);
        assert!(matches!(
            Catalog::from_document(doc),
            Err(CatalogError::Invalid { .. })
        ));

        let mut doc = minimal_document();
        doc.shared_options
            .get_mut("tires")
            .unwrap()
            .push(CatalogOption::new("budget", "Budget", -500));
        assert!(matches!(
            Catalog::from_document(doc),
            Err(CatalogError::Invalid { .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_shared_set_even_when_overridden() {
        let mut doc = minimal_document();
        doc.models[0].options.insert(
            "color".to_string(),
            vec![CatalogOption::new("black", "Midnight Black", 0).default_choice()],
        );
        doc.shared_options.insert(
            "color".to_string(),
            vec![
                CatalogOption::new("standard", "Standard", 0).default_choice(),
                CatalogOption::new("neg", "Negative", -5000),
            ],
        );

        match Catalog::from_document(doc) {
            Err(CatalogError::Invalid { scope, .. }) => {
                assert_eq!(scope, "sharedOptions/color option neg")
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_price_overflow() {
        let mut doc = minimal_document();
        doc.models[0].model.base_price = Money::from_units(i64::MAX);

        assert_eq!(
            Catalog::from_document(doc),
            Err(CatalogError::PriceOverflow {
                model_id: "sedan".to_string()
            })
        );

        // Overflow only through the feature catalog.
        let mut doc = minimal_document();
        doc.models[0].model.base_price = Money::from_units(i64::MAX - 7 * 1000);
        assert!(matches!(
            Catalog::from_document(doc),
            Err(CatalogError::PriceOverflow { .. })
        ));
    }

    #[test]
    fn test_most_expensive_configuration_at_the_limit_prices() {
        use crate::state::Configurator;
        use std::sync::Arc;

        // 7 upgrades at 1000 plus the 4500 spoiler.
        let mut doc = minimal_document();
        doc.models[0].model.base_price = Money::from_units(i64::MAX - 11_500);
        let catalog = Arc::new(Catalog::from_document(doc).unwrap());

        let mut session = Configurator::new(catalog, "sedan").unwrap();
        for category in OptionCategory::ALL {
            session.select_option(category, "upgrade").unwrap();
        }
        session.toggle_feature("spoiler").unwrap();

        let quote = session.quote();
        assert_eq!(quote.total, Money::from_units(i64::MAX));
        assert!(!quote.total.is_negative());
    }

    #[test]
    fn test_rejects_missing_category() {
        let mut doc = minimal_document();
        doc.shared_options.remove("calipers");
        assert_eq!(
            Catalog::from_document(doc),
            Err(CatalogError::MissingCategory {
                model_id: "sedan".to_string(),
                category: OptionCategory::Calipers,
            })
        );
    }

    #[test]
    fn test_rejects_unknown_category_key() {
        let mut doc = minimal_document();
        doc.shared_options.insert("colour".to_string(), Vec::new());
        assert!(matches!(
            Catalog::from_document(doc),
            Err(CatalogError::UnknownCategory { key, .. }) if key == "colour"
        ));
    }

    #[test]
    fn test_rejects_bad_defaults() {
        let mut doc = minimal_document();
        doc.shared_options.insert(
            "trim".to_string(),
            vec![CatalogOption::new("carbon", "Carbon", 0)],
        );
        assert!(matches!(
            Catalog::from_document(doc),
            Err(CatalogError::MissingDefault { .. })
        ));

        let mut doc = minimal_document();
        doc.shared_options.insert(
            "trim".to_string(),
            vec![
                CatalogOption::new("carbon", "Carbon", 0).default_choice(),
                CatalogOption::new("wood", "Wood", 0).default_choice(),
            ],
        );
        assert!(matches!(
            Catalog::from_document(doc),
            Err(CatalogError::MultipleDefaults { .. })
        ));

        let mut doc = minimal_document();
        doc.shared_options.insert(
            "trim".to_string(),
            vec![CatalogOption::new("carbon", "Carbon", 8000).default_choice()],
        );
        assert!(matches!(
            Catalog::from_document(doc),
            Err(CatalogError::PricedDefault { delta: 8000, .. })
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut doc = minimal_document();
        doc.shared_options
            .get_mut("wheels")
            .unwrap()
            .push(CatalogOption::new("upgrade", "Upgrade Again", 10));
        assert!(matches!(
            Catalog::from_document(doc),
            Err(CatalogError::DuplicateId { id, .. }) if id == "upgrade"
        ));

        let mut doc = minimal_document();
        let model = doc.models[0].clone();
        doc.models.push(model);
        assert!(matches!(
            Catalog::from_document(doc),
            Err(CatalogError::DuplicateId { scope, .. }) if scope == "models"
        ));

        let mut doc = minimal_document();
        doc.features.push(FeatureToggle::new("spoiler", "Spoiler", 1));
        assert!(matches!(
            Catalog::from_document(doc),
            Err(CatalogError::DuplicateId { scope, .. }) if scope == "features"
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Malformed(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"{"models": [{"id": "x"}]}"#),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<_> = catalog.models().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["sedan", "suv", "sports"]);

        let sedan = catalog.options_for("sedan").unwrap();
        assert_eq!(sedan.model().base_price, Money::from_units(420_000));
        assert_eq!(
            sedan.option(OptionCategory::Color, "red").unwrap().price_delta,
            Money::from_units(15_000)
        );
        assert_eq!(sedan.default_option(OptionCategory::Color).unwrap().id, "black");

        let sports = catalog.options_for("sports").unwrap();
        assert_eq!(sports.default_option(OptionCategory::Wheels).unwrap().id, "sport");
        assert_eq!(
            sports.option(OptionCategory::Wheels, "carbon").unwrap().price_delta,
            Money::from_units(60_000)
        );

        assert_eq!(
            catalog.feature("spoiler").unwrap().price_delta,
            Money::from_units(4_500)
        );
    }
}
