//! # Appearance
//!
//! Derives the material parameters the 3D view needs from the current
//! selection, so the presentation adapter never has to interpret option ids.
//!
//! ```text
//! selections ──► color.material.color ─────────────► body_color
//!            ──► finish.material.roughness/metalness ► body_roughness/metalness
//!            ──► calipers.material.color ──────────► caliper_color
//!            ──► wheels / interior / trim / tires ─► ids of assets to show
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::state::Configurator;
use crate::types::{MaterialHint, OptionCategory};

/// Body roughness when the selected finish carries no value (gloss).
pub const DEFAULT_ROUGHNESS: f32 = 0.1;

/// Body metalness when the selected finish carries no value (gloss).
pub const DEFAULT_METALNESS: f32 = 0.9;

/// Fallback color for body and calipers.
pub const DEFAULT_COLOR: &str = "#2c3e50";

/// Everything the renderer applies after a selection changes.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub model: String,
    pub body_color: String,
    pub body_roughness: f32,
    pub body_metalness: f32,
    pub caliper_color: String,
    pub wheels: String,
    pub interior: String,
    pub trim: String,
    pub tires: String,
    /// Enabled feature ids; each maps to an optional mesh in the scene.
    pub features: Vec<String>,
}

impl Appearance {
    /// Reads the current selection. Pure; called after every command.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use showroom_core::{Appearance, Catalog, Configurator, OptionCategory};
    ///
    /// let catalog = Arc::new(Catalog::builtin().unwrap());
    /// let mut session = Configurator::new(catalog, "sedan").unwrap();
    /// session.select_option(OptionCategory::Finish, "matte").unwrap();
    ///
    /// let look = Appearance::from_session(&session);
    /// assert_eq!(look.body_roughness, 0.8);
    /// assert_eq!(look.body_metalness, 0.1);
    /// ```
    pub fn from_session(session: &Configurator) -> Self {
        let material = |category| {
            session
                .selected_option(category)
                .and_then(|option| option.material.as_ref())
        };
        let color_of = |category| {
            material(category)
                .and_then(|m: &MaterialHint| m.color.clone())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string())
        };
        let id_of = |category| {
            session
                .state()
                .selection(category)
                .unwrap_or_default()
                .to_string()
        };

        let finish = material(OptionCategory::Finish);

        Appearance {
            model: session.state().selected_model().to_string(),
            body_color: color_of(OptionCategory::Color),
            body_roughness: finish
                .and_then(|m| m.roughness)
                .unwrap_or(DEFAULT_ROUGHNESS),
            body_metalness: finish
                .and_then(|m| m.metalness)
                .unwrap_or(DEFAULT_METALNESS),
            caliper_color: color_of(OptionCategory::Calipers),
            wheels: id_of(OptionCategory::Wheels),
            interior: id_of(OptionCategory::Interior),
            trim: id_of(OptionCategory::Trim),
            tires: id_of(OptionCategory::Tires),
            features: session.enabled_features().map(|f| f.id.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::sync::Arc;

    fn session(model: &str) -> Configurator {
        Configurator::new(Arc::new(Catalog::builtin().unwrap()), model).unwrap()
    }

    #[test]
    fn test_default_look() {
        let look = Appearance::from_session(&session("sports"));
        assert_eq!(look.model, "sports");
        assert_eq!(look.body_color, "#e74c3c");
        assert_eq!(look.body_roughness, 0.1);
        assert_eq!(look.body_metalness, 0.9);
        assert_eq!(look.caliper_color, "#2c3e50");
        assert_eq!(look.wheels, "sport");
        assert!(look.features.is_empty());
    }

    #[test]
    fn test_finish_table() {
        let mut session = session("sedan");
        for (finish, roughness, metalness) in [
            ("gloss", 0.1, 0.9),
            ("matte", 0.8, 0.1),
            ("metallic", 0.3, 0.8),
            ("pearl", 0.2, 0.6),
        ] {
            session.select_option(OptionCategory::Finish, finish).unwrap();
            let look = Appearance::from_session(&session);
            assert_eq!(look.body_roughness, roughness, "{finish}");
            assert_eq!(look.body_metalness, metalness, "{finish}");
        }
    }

    #[test]
    fn test_follows_selection_changes() {
        let mut session = session("sedan");
        session.select_option(OptionCategory::Color, "blue").unwrap();
        session.select_option(OptionCategory::Calipers, "yellow").unwrap();
        session.select_option(OptionCategory::Wheels, "premium").unwrap();
        session.toggle_feature("spoiler").unwrap();

        let look = Appearance::from_session(&session);
        assert_eq!(look.body_color, "#3498db");
        assert_eq!(look.caliper_color, "#f1c40f");
        assert_eq!(look.wheels, "premium");
        assert_eq!(look.features, ["spoiler"]);
    }
}
