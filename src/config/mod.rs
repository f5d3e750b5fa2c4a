//! Configuration module for tagsieve
//!
//! Manages named catalog locations and display defaults. Configuration is
//! stored as TOML in the user's config directory and may be overridden per
//! invocation with `TAGSIEVE_*` environment variables (for example
//! `TAGSIEVE_PAGE_SIZE=50`).

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of games per `games` page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Default number of type-ahead lookup results
pub const DEFAULT_LOOKUP_LIMIT: usize = 20;

/// Keys accepted by `config get` / `config set`
pub const SETTABLE_KEYS: &[&str] = &["default_catalog", "quiet", "page_size", "lookup_limit", "color"];

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

const fn default_lookup_limit() -> usize {
    DEFAULT_LOOKUP_LIMIT
}

const fn default_color() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TagsieveConfig {
    /// Map of catalog names to their sled directories
    #[serde(default)]
    pub catalogs: BTreeMap<String, PathBuf>,

    /// The catalog to use when none is specified
    #[serde(default)]
    pub default_catalog: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Games per page for `games`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Maximum results for `lookup`
    #[serde(default = "default_lookup_limit")]
    pub lookup_limit: usize,

    /// Color tags by their category
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for TagsieveConfig {
    fn default() -> Self {
        Self {
            catalogs: BTreeMap::new(),
            default_catalog: None,
            quiet: false,
            page_size: DEFAULT_PAGE_SIZE,
            lookup_limit: DEFAULT_LOOKUP_LIMIT,
            color: true,
        }
    }
}

impl TagsieveConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("tagsieve").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, applying `TAGSIEVE_*` overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(
                Environment::with_prefix("TAGSIEVE")
                    .try_parsing(true)
                    .ignore_empty(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Same conditions as [`TagsieveConfig::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        if Self::config_path()?.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }

    /// Register a catalog location; the first one becomes the default
    pub fn add_catalog(&mut self, name: String, path: PathBuf) {
        if self.default_catalog.is_none() {
            self.default_catalog = Some(name.clone());
        }
        self.catalogs.insert(name, path);
    }

    /// Forget a catalog location, clearing the default if it pointed there
    pub fn remove_catalog(&mut self, name: &str) -> Option<PathBuf> {
        let removed = self.catalogs.remove(name);
        if self.default_catalog.as_deref() == Some(name) {
            self.default_catalog = None;
        }
        removed
    }

    #[must_use]
    pub fn get_catalog(&self, name: &str) -> Option<&PathBuf> {
        self.catalogs.get(name)
    }

    /// Set the default catalog
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no catalog has this name.
    pub fn set_default_catalog(&mut self, name: &str) -> Result<(), ConfigError> {
        if !self.catalogs.contains_key(name) {
            return Err(ConfigError::Message(format!(
                "Catalog '{name}' does not exist in configuration"
            )));
        }
        self.default_catalog = Some(name.to_string());
        Ok(())
    }

    /// Pick the catalog to open: an explicit name, else the default
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the name is unknown or no default is set.
    pub fn resolve_catalog(&self, name: Option<&str>) -> Result<(String, PathBuf), ConfigError> {
        let name = name
            .or(self.default_catalog.as_deref())
            .ok_or_else(|| ConfigError::Message("No catalog specified and no default catalog set".to_string()))?;

        self.catalogs
            .get(name)
            .map(|path| (name.to_string(), path.clone()))
            .ok_or_else(|| ConfigError::Message(format!("Catalog '{name}' not found in configuration")))
    }

    /// Read a scalar setting as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        Ok(match key {
            "default_catalog" => self.default_catalog.clone().unwrap_or_default(),
            "quiet" => self.quiet.to_string(),
            "page_size" => self.page_size.to_string(),
            "lookup_limit" => self.lookup_limit.to_string(),
            "color" => self.color.to_string(),
            other => return Err(ConfigError::NotFound(other.to_string())),
        })
    }

    /// Update a scalar setting from text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key, or
    /// `ConfigError::Message` if the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "default_catalog" => self.set_default_catalog(value)?,
            "quiet" => self.quiet = parse_value(key, value)?,
            "page_size" => self.page_size = parse_positive(key, value)?,
            "lookup_limit" => self.lookup_limit = parse_positive(key, value)?,
            "color" => self.color = parse_value(key, value)?,
            other => return Err(ConfigError::NotFound(other.to_string())),
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Message(format!("Invalid value '{value}' for {key}")))
}

fn parse_positive(key: &str, value: &str) -> Result<usize, ConfigError> {
    match parse_value::<usize>(key, value)? {
        0 => Err(ConfigError::Message(format!("{key} must be greater than zero"))),
        n => Ok(n),
    }
}
