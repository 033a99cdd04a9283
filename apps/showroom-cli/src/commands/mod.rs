//! # Commands
//!
//! One handler per subcommand. Handlers take the [`Context`] (and a store
//! where needed), call into `showroom-core`/`showroom-store`, and return a
//! serializable response that also knows how to render itself as text.
//!
//! ## Command Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  models            ──► catalog::models      ──► Catalog::models         │
//! │  options <model>   ──► catalog::options     ──► Catalog::options_for    │
//! │  quote  [session]  ──► quote::quote         ──► Configurator + pricing  │
//! │  share  [session]  ──► quote::share         ──► share::encode           │
//! │  save <name> [..]  ──► saved::save          ──► SnapshotStore::save     │
//! │  load <name>       ──► saved::load          ──► SnapshotStore::load     │
//! │  list              ──► saved::list          ──► SnapshotStore::list     │
//! │  delete <name>     ──► saved::delete        ──► SnapshotStore::delete   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod quote;
pub mod saved;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use showroom_core::{Catalog, Configurator, PriceFormat};
use tracing::debug;

use crate::cli::SessionArgs;
use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult, ErrorCode};

/// Text rendering of a command response.
pub trait Render {
    fn render(&self, format: &PriceFormat) -> String;
}

/// Everything a command needs besides the store.
#[derive(Debug, Clone)]
pub struct Context {
    catalog: Arc<Catalog>,
    default_model: Option<String>,
    format: PriceFormat,
}

impl Context {
    pub fn new(catalog: Arc<Catalog>, config: &AppConfig) -> Self {
        Context {
            catalog,
            default_model: config.catalog.default_model.clone(),
            format: config.price_format(),
        }
    }

    /// Loads the configured catalog, or the built-in one.
    pub fn from_config(config: &AppConfig) -> ApiResult<Self> {
        let catalog = match &config.catalog.path {
            Some(path) => load_catalog(path)?,
            None => Catalog::builtin()?,
        };
        Ok(Context::new(Arc::new(catalog), config))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn shared_catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    pub fn format(&self) -> &PriceFormat {
        &self.format
    }

    /// Builds the session described by `args`.
    ///
    /// The first invalid selection aborts the command; there is no partial
    /// result.
    pub fn session(&self, args: &SessionArgs) -> ApiResult<Configurator> {
        let mut session = match (&args.code, &args.model, &self.default_model) {
            (Some(code), _, _) => {
                let snapshot = showroom_core::share::decode(code)?;
                Configurator::from_snapshot(self.shared_catalog(), &snapshot)?
            }
            (None, Some(model), _) | (None, None, Some(model)) => {
                Configurator::new(self.shared_catalog(), model)?
            }
            (None, None, None) => Configurator::with_first_model(self.shared_catalog()),
        };

        for (category, option) in &args.options {
            session.select_option_by_key(category, option)?;
        }
        for feature in &args.features {
            session.set_feature(feature, true)?;
        }

        debug!(
            model = %session.state().selected_model(),
            options = args.options.len(),
            features = args.features.len(),
            "Session built"
        );
        Ok(session)
    }
}

fn load_catalog(path: &Path) -> ApiResult<Catalog> {
    let json = fs::read_to_string(path).map_err(|e| {
        ApiError::new(
            ErrorCode::CatalogError,
            format!("Cannot read catalog {}: {}", path.display(), e),
        )
    })?;

    let catalog = Catalog::from_json(&json)?;
    debug!(path = %path.display(), "Loaded catalog");
    Ok(catalog)
}

/// Left label, right-aligned amount.
pub(crate) fn line(label: &str, amount: &str) -> String {
    format!("  {:<36}{:>16}\n", label, amount)
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use showroom_core::{CoreError, OptionCategory};

    #[test]
    fn test_session_uses_configured_default_model() {
        let mut config = AppConfig::default();
        config.catalog.default_model = Some("suv".to_string());
        let ctx = Context::new(Arc::new(Catalog::builtin().unwrap()), &config);

        let session = ctx.session(&SessionArgs::default()).unwrap();
        assert_eq!(session.state().selected_model(), "suv");
    }

    #[test]
    fn test_session_falls_back_to_first_model() {
        let session = context().session(&SessionArgs::default()).unwrap();
        assert_eq!(session.state().selected_model(), "sedan");
    }

    #[test]
    fn test_session_applies_options_and_features() {
        let mut args = args("sedan");
        args.options.push(("color".to_string(), "blue".to_string()));
        args.features.push("spoiler".to_string());
        args.features.push("spoiler".to_string());

        let session = context().session(&args).unwrap();
        assert_eq!(session.state().selection(OptionCategory::Color), Some("blue"));
        assert!(session.state().is_feature_enabled("spoiler"));
        assert_eq!(session.quote().total.units(), 420_000 + 15_000 + 4_500);
    }

    #[test]
    fn test_session_from_code_with_overrides() {
        let ctx = context();
        let mut original = ctx.session(&args("sports")).unwrap();
        original.select_option(OptionCategory::Wheels, "track").unwrap();
        let code = showroom_core::share::encode(&original.snapshot()).unwrap();

        let args = SessionArgs {
            code: Some(code),
            options: vec![("calipers".to_string(), "yellow".to_string())],
            ..SessionArgs::default()
        };
        let session = ctx.session(&args).unwrap();
        assert_eq!(session.state().selection(OptionCategory::Wheels), Some("track"));
        assert_eq!(session.state().selection(OptionCategory::Calipers), Some("yellow"));
    }

    #[test]
    fn test_session_rejects_bad_input() {
        let ctx = context();

        let err = ctx.session(&args("tank")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSelection);

        let mut bad = args("sedan");
        bad.options.push(("paint".to_string(), "red".to_string()));
        assert_eq!(
            ApiError::from(CoreError::InvalidCategory("paint".to_string())).code,
            ctx.session(&bad).unwrap_err().code
        );

        let garbage = SessionArgs {
            code: Some("not a share code".to_string()),
            ..SessionArgs::default()
        };
        assert_eq!(ctx.session(&garbage).unwrap_err().code, ErrorCode::InvalidSnapshot);
    }

    #[test]
    fn test_context_from_config_with_missing_catalog_file() {
        let mut config = AppConfig::default();
        config.catalog.path = Some("/definitely/not/here/catalog.json".into());

        let err = Context::from_config(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogError);
    }
}
