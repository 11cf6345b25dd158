//! Configuration and settings management for PotterPlan
//!
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into sections:
//! - Placement rules (grid snap, kiln clearance, door swing and policy)
//! - Display (drawing scale)
//! - Storage (plan file location, autosave)

use potterplan_core::constants::PIXELS_PER_FOOT;
use potterplan_core::UnitScale;
use potterplan_designer::PlacementRules;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Application directory name under the platform config dir.
pub const APP_DIR_NAME: &str = "potterplan";

/// Config file name inside [`default_config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Plan file name inside [`default_config_dir`].
pub const PLAN_FILE_NAME: &str = "plan.json";

/// Drawing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Screen pixels per foot
    pub pixels_per_foot: f64,
    /// Print lengths as feet and inches (`2' 6"`) instead of decimal feet
    pub feet_and_inches: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            pixels_per_foot: PIXELS_PER_FOOT,
            feet_and_inches: true,
        }
    }
}

impl DisplaySettings {
    pub fn scale(&self) -> UnitScale {
        UnitScale::new(self.pixels_per_foot)
    }
}

/// Plan storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Plan file; the platform config dir is used when unset
    pub plan_file: Option<PathBuf>,
    /// Save the plan after every committed change
    pub autosave: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            plan_file: None,
            autosave: true,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub placement: PlacementRules,
    pub display: DisplaySettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        self.placement.validate().map_err(ConfigError::InvalidRules)?;

        let ppf = self.display.pixels_per_foot;
        if !(ppf.is_finite() && ppf > 0.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "display.pixels_per_foot".to_string(),
                value: ppf.to_string(),
            });
        }

        Ok(())
    }

    /// Where the plan lives: the configured file, or the platform default
    pub fn plan_path(&self) -> SettingsResult<PathBuf> {
        match &self.storage.plan_file {
            Some(path) => Ok(path.clone()),
            None => default_plan_path(),
        }
    }
}

/// Platform config directory for PotterPlan
pub fn default_config_dir() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| {
            SettingsError::Config(ConfigError::UnsupportedPlatform(
                std::env::consts::OS.to_string(),
            ))
        })
}

/// Default config file path
pub fn default_config_path() -> SettingsResult<PathBuf> {
    Ok(default_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Default plan file path
pub fn default_plan_path() -> SettingsResult<PathBuf> {
    Ok(default_config_dir()?.join(PLAN_FILE_NAME))
}
