//! Application Configuration (coastal.toml)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::{Parameter, Site};
use crate::domain::services::LayerResolver;
use crate::domain::value_objects::YearSequence;

const CONFIG_FILE: &str = "coastal.toml";

/// Configuration loaded from coastal.toml
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Temporal playback settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Delay between year advances
    #[serde(default = "default_tick_period_ms")]
    pub tick_period_ms: u64,

    /// Years to play when the filtered set has none
    #[serde(default = "default_years")]
    pub default_years: Vec<i32>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: default_tick_period_ms(),
            default_years: default_years(),
        }
    }
}

fn default_tick_period_ms() -> u64 {
    1500
}

fn default_years() -> Vec<i32> {
    vec![2011, 2019]
}

/// Fallback naming defaults
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_site")]
    pub default_site: String,

    #[serde(default = "default_parameter")]
    pub default_parameter: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_site: default_site(),
            default_parameter: default_parameter(),
        }
    }
}

fn default_site() -> String {
    "A".to_string()
}

fn default_parameter() -> String {
    "HTL".to_string()
}

/// Catalogue source
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Metadata JSON file; the bundled catalogue is used when unset
    #[serde(default)]
    pub metadata_path: Option<PathBuf>,
}

/// Log file settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log file; defaults to a file next to the executable
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Find coastal.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("coastal").join(CONFIG_FILE)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE))),
            Some(PathBuf::from(CONFIG_FILE)),
        ];

        candidates.into_iter().flatten().find(|c| c.exists())
    }

    /// Load configuration from file, returning defaults if not found or invalid
    pub fn load() -> Self {
        match Self::find_config_path() {
            Some(path) => Self::load_from_path(&path).unwrap_or_else(|e| {
                crate::log!("Ignoring {:?}: {}", path, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value can be turned into its domain type
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.default_years()?;
        self.resolver()?;
        if self.playback.tick_period_ms == 0 {
            return Err(ConfigError::Invalid(
                "playback.tick_period_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.playback.tick_period_ms)
    }

    pub fn default_years(&self) -> Result<YearSequence, ConfigError> {
        YearSequence::new(self.playback.default_years.clone())
            .map_err(|e| ConfigError::Invalid(format!("playback.default_years: {}", e)))
    }

    pub fn resolver(&self) -> Result<LayerResolver, ConfigError> {
        let site = self
            .resolver
            .default_site
            .parse::<Site>()
            .map_err(|e| ConfigError::Invalid(format!("resolver.default_site: {}", e)))?;
        let parameter = self
            .resolver
            .default_parameter
            .parse::<Parameter>()
            .map_err(|e| ConfigError::Invalid(format!("resolver.default_parameter: {}", e)))?;
        Ok(LayerResolver::new(site, parameter))
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid value: {0}")]
    Invalid(String),
}
