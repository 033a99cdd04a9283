//! # Configuration State
//!
//! The user's current selection and the commands that change it.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configurator Operations                              │
//! │                                                                         │
//! │  UI Event                  Command                  State Change        │
//! │  ────────                  ───────                  ────────────        │
//! │                                                                         │
//! │  Pick model ─────────────► select_model() ───────► model + defaults    │
//! │                                                                         │
//! │  Click swatch ───────────► select_option() ──────► selections[cat]     │
//! │                                                                         │
//! │  Flip add-on ────────────► toggle_feature() ─────► features ± id       │
//! │                                                                         │
//! │  Save / share ───────────► snapshot() ───────────► (read only)         │
//! │                                                                         │
//! │  Open saved ─────────────► restore() ────────────► whole state         │
//! │                                                                         │
//! │  Every command validates first and writes last: a rejected call        │
//! │  leaves the state exactly as it was.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! A [`Configurator`] is an ordinary value owned by whoever created it. Two
//! sessions (two browser tabs, two CLI invocations) are two values; they
//! share only the read-only [`Catalog`] behind an `Arc`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use ts_rs::TS;

use crate::catalog::{Catalog, ModelOptions};
use crate::error::{CoreError, CoreResult};
use crate::pricing::{self, PriceBreakdown};
use crate::types::{CatalogOption, FeatureToggle, Model, OptionCategory};

// =============================================================================
// Configuration State
// =============================================================================

/// The complete current set of user selections.
///
/// ## Invariants
/// - `selections` holds exactly one option id per [`OptionCategory`], each
///   valid for `selected_model`
/// - every id in `enabled_features` exists in the feature catalog
///
/// Fields are private; the only way to obtain a state is through a
/// [`Configurator`], which checks both invariants against its catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationState {
    selected_model: String,
    selections: BTreeMap<OptionCategory, String>,
    enabled_features: BTreeSet<String>,
}

impl ConfigurationState {
    /// All-default state for a model.
    fn defaults_for(options: &ModelOptions) -> Self {
        ConfigurationState {
            selected_model: options.model().id.clone(),
            selections: options.default_selections().clone(),
            enabled_features: BTreeSet::new(),
        }
    }

    pub fn selected_model(&self) -> &str {
        &self.selected_model
    }

    /// The selected option id in a category.
    pub fn selection(&self, category: OptionCategory) -> Option<&str> {
        self.selections.get(&category).map(String::as_str)
    }

    pub fn selections(&self) -> &BTreeMap<OptionCategory, String> {
        &self.selections
    }

    pub fn enabled_features(&self) -> &BTreeSet<String> {
        &self.enabled_features
    }

    pub fn is_feature_enabled(&self, feature_id: &str) -> bool {
        self.enabled_features.contains(feature_id)
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Plain serializable copy of a configuration, for persistence and sharing.
///
/// Keys are plain strings: a snapshot comes from outside (local storage, a
/// document store, a share link) and is only trusted after
/// [`Configurator::restore`] has checked it.
///
/// ```json
/// {
///   "model": "sedan",
///   "selections": { "color": "red", "wheels": "sport", ... },
///   "enabledFeatures": ["spoiler"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub model: String,
    pub selections: BTreeMap<String, String>,
    #[serde(default)]
    pub enabled_features: BTreeSet<String>,
}

impl From<&ConfigurationState> for Snapshot {
    fn from(state: &ConfigurationState) -> Self {
        Snapshot {
            model: state.selected_model.clone(),
            selections: state
                .selections
                .iter()
                .map(|(category, id)| (category.as_str().to_string(), id.clone()))
                .collect(),
            enabled_features: state.enabled_features.clone(),
        }
    }
}

// =============================================================================
// Configurator
// =============================================================================

/// A configuration session: a catalog plus the state validated against it.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use showroom_core::{Catalog, Configurator, OptionCategory};
///
/// let catalog = Arc::new(Catalog::builtin().unwrap());
/// let mut session = Configurator::new(catalog, "sedan").unwrap();
///
/// session.select_option(OptionCategory::Color, "red").unwrap();
/// session.toggle_feature("spoiler").unwrap();
///
/// assert_eq!(session.quote().total.units(), 439_500);
/// ```
#[derive(Debug, Clone)]
pub struct Configurator {
    catalog: Arc<Catalog>,
    /// Position of the selected model in the catalog.
    model_index: usize,
    state: ConfigurationState,
}

impl Configurator {
    /// Starts a session on a model with every category at its default and
    /// no features enabled.
    pub fn new(catalog: Arc<Catalog>, model_id: &str) -> CoreResult<Self> {
        let model_index = catalog
            .position(model_id)
            .ok_or_else(|| CoreError::InvalidModel(model_id.to_string()))?;
        let state = ConfigurationState::defaults_for(catalog.at(model_index));

        Ok(Configurator {
            catalog,
            model_index,
            state,
        })
    }

    /// Starts a session on the catalog's first model.
    pub fn with_first_model(catalog: Arc<Catalog>) -> Self {
        let state = ConfigurationState::defaults_for(catalog.at(0));

        Configurator {
            catalog,
            model_index: 0,
            state,
        }
    }

    /// Starts a session from a snapshot.
    pub fn from_snapshot(catalog: Arc<Catalog>, snapshot: &Snapshot) -> CoreResult<Self> {
        let (model_index, state) = validate_snapshot(&catalog, snapshot)?;

        Ok(Configurator {
            catalog,
            model_index,
            state,
        })
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ConfigurationState {
        &self.state
    }

    /// The option sets of the selected model.
    pub fn model_options(&self) -> &ModelOptions {
        self.catalog.at(self.model_index)
    }

    pub fn selected_model(&self) -> &Model {
        self.model_options().model()
    }

    /// The selected option record in a category.
    pub fn selected_option(&self, category: OptionCategory) -> Option<&CatalogOption> {
        let id = self.state.selection(category)?;
        self.model_options().option(category, id)
    }

    /// Options the current model offers in a category.
    pub fn available_options(&self, category: OptionCategory) -> &[CatalogOption] {
        self.model_options().options(category)
    }

    /// Feature records that are currently switched on, in catalog order.
    pub fn enabled_features(&self) -> impl Iterator<Item = &FeatureToggle> {
        self.catalog
            .features()
            .iter()
            .filter(|f| self.state.is_feature_enabled(&f.id))
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Switches model and resets every category to that model's default.
    ///
    /// Enabled features are kept: the feature catalog is shared by all
    /// models.
    pub fn select_model(&mut self, model_id: &str) -> CoreResult<()> {
        let model_index = self
            .catalog
            .position(model_id)
            .ok_or_else(|| CoreError::InvalidModel(model_id.to_string()))?;
        let options = self.catalog.at(model_index);

        self.state.selected_model = options.model().id.clone();
        self.state.selections = options.default_selections().clone();
        self.model_index = model_index;
        Ok(())
    }

    /// Selects an option in a category of the current model.
    pub fn select_option(&mut self, category: OptionCategory, option_id: &str) -> CoreResult<()> {
        if self.model_options().option(category, option_id).is_none() {
            return Err(CoreError::InvalidOption {
                category,
                option_id: option_id.to_string(),
                model_id: self.state.selected_model.clone(),
            });
        }

        self.state
            .selections
            .insert(category, option_id.to_string());
        Ok(())
    }

    /// Same as [`select_option`](Self::select_option) with the category given
    /// as its string key, the way UI events carry it.
    pub fn select_option_by_key(&mut self, category_key: &str, option_id: &str) -> CoreResult<()> {
        let category = category_key.parse::<OptionCategory>()?;
        self.select_option(category, option_id)
    }

    /// Flips a feature on or off. Returns whether it is now enabled.
    pub fn toggle_feature(&mut self, feature_id: &str) -> CoreResult<bool> {
        if self.catalog.feature(feature_id).is_none() {
            return Err(CoreError::InvalidFeature(feature_id.to_string()));
        }

        if self.state.enabled_features.remove(feature_id) {
            Ok(false)
        } else {
            self.state.enabled_features.insert(feature_id.to_string());
            Ok(true)
        }
    }

    /// Sets a feature to an explicit state. Returns whether anything changed.
    pub fn set_feature(&mut self, feature_id: &str, enabled: bool) -> CoreResult<bool> {
        if self.catalog.feature(feature_id).is_none() {
            return Err(CoreError::InvalidFeature(feature_id.to_string()));
        }
        if self.state.is_feature_enabled(feature_id) == enabled {
            return Ok(false);
        }

        self.toggle_feature(feature_id).map(|_| true)
    }

    /// Immutable copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    /// Replaces the whole state with a snapshot.
    ///
    /// Every field is checked first; if any is invalid the call fails with
    /// `InvalidSnapshot` and the current state is untouched.
    pub fn restore(&mut self, snapshot: &Snapshot) -> CoreResult<()> {
        let (model_index, state) = validate_snapshot(&self.catalog, snapshot)?;
        self.model_index = model_index;
        self.state = state;
        Ok(())
    }

    /// Current price breakdown.
    pub fn quote(&self) -> PriceBreakdown {
        pricing::compute_total(self)
    }
}

// =============================================================================
// Snapshot Validation
// =============================================================================

/// Builds a state (and its model position) from a snapshot, or explains why
/// it cannot.
fn validate_snapshot(
    catalog: &Catalog,
    snapshot: &Snapshot,
) -> CoreResult<(usize, ConfigurationState)> {
    let model_index = catalog.position(&snapshot.model).ok_or_else(|| {
        CoreError::invalid_snapshot(CoreError::InvalidModel(snapshot.model.clone()))
    })?;
    let options = catalog.at(model_index);

    let mut selections = BTreeMap::new();
    for (key, option_id) in &snapshot.selections {
        let category = key
            .parse::<OptionCategory>()
            .map_err(CoreError::invalid_snapshot)?;

        if options.option(category, option_id).is_none() {
            return Err(CoreError::invalid_snapshot(CoreError::InvalidOption {
                category,
                option_id: option_id.clone(),
                model_id: snapshot.model.clone(),
            }));
        }
        selections.insert(category, option_id.clone());
    }

    if let Some(missing) = OptionCategory::ALL
        .into_iter()
        .find(|category| !selections.contains_key(category))
    {
        return Err(CoreError::invalid_snapshot(format!(
            "no selection for {}",
            missing
        )));
    }

    if let Some(unknown) = snapshot
        .enabled_features
        .iter()
        .find(|id| catalog.feature(id).is_none())
    {
        return Err(CoreError::invalid_snapshot(CoreError::InvalidFeature(
            unknown.clone(),
        )));
    }

    Ok((
        model_index,
        ConfigurationState {
            selected_model: options.model().id.clone(),
            selections,
            enabled_features: snapshot.enabled_features.clone(),
        },
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================
