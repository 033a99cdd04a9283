//! # Application Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOWROOM_*`)
//! 2. Config file (`--config <path>`, or `showroom.toml` in the platform
//!    config directory)
//! 3. Defaults (this file)
//!
//! ## Example `showroom.toml`
//! ```toml
//! [catalog]
//! path = "/etc/showroom/catalog.json"
//! default_model = "suv"
//!
//! [store]
//! dir = "/var/lib/showroom/saved"
//!
//! [display]
//! currency_symbol = "R"
//! group_separator = " "
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use showroom_core::PriceFormat;
use thiserror::Error;
use tracing::{debug, warn};

/// Config file name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "showroom.toml";

pub const ENV_CATALOG: &str = "SHOWROOM_CATALOG";
pub const ENV_STORE_DIR: &str = "SHOWROOM_STORE_DIR";
pub const ENV_CURRENCY_SYMBOL: &str = "SHOWROOM_CURRENCY_SYMBOL";
pub const ENV_DEFAULT_MODEL: &str = "SHOWROOM_DEFAULT_MODEL";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub store: StoreConfig,
    pub display: DisplayConfig,
}

/// Where the catalog comes from and which model a new session starts on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog JSON document. Built-in catalog when absent.
    pub path: Option<PathBuf>,

    /// Model for sessions that do not name one. First catalog model when
    /// absent.
    pub default_model: Option<String>,
}

/// Saved configuration storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory of saved configurations. Platform data directory when
    /// absent.
    pub dir: Option<PathBuf>,
}

/// Price display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub group_separator: String,
}

impl Default for DisplayConfig {
    /// South African Rand, space-grouped: `R 420 000`.
    fn default() -> Self {
        let format = PriceFormat::default();
        DisplayConfig {
            currency_symbol: format.symbol,
            group_separator: format.group_separator,
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl AppConfig {
    /// Loads configuration from file and environment.
    ///
    /// An explicit `path` must exist. Without one, the platform config file
    /// is used if present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => AppConfig::default(),
            },
        };

        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    /// Like [`AppConfig::load`], but falls back to defaults (plus
    /// environment overrides) when the file is unreadable.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Using default configuration");
                let mut config = AppConfig::default();
                config.apply_env(|key| env::var(key).ok());
                config
            }
        }
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Applies `SHOWROOM_*` overrides. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = var(ENV_CATALOG) {
            self.catalog.path = Some(PathBuf::from(path));
        }
        if let Some(model) = var(ENV_DEFAULT_MODEL) {
            self.catalog.default_model = Some(model);
        }
        if let Some(dir) = var(ENV_STORE_DIR) {
            self.store.dir = Some(PathBuf::from(dir));
        }
        if let Some(symbol) = var(ENV_CURRENCY_SYMBOL) {
            self.display.currency_symbol = symbol;
        }
    }

    /// Price renderer for the configured display settings.
    pub fn price_format(&self) -> PriceFormat {
        PriceFormat::new(
            self.display.currency_symbol.clone(),
            self.display.group_separator.clone(),
        )
    }
}

/// `showroom.toml` in the platform config directory.
///
/// Linux: `~/.config/configurator/showroom.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "showroom", "configurator")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
