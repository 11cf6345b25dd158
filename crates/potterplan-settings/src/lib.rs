//! PotterPlan Settings Crate
//!
//! Application configuration (JSON or TOML) and storage of the floor plan
//! in platform-specific directories.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{
    default_config_dir, default_config_path, default_plan_path, Config, DisplaySettings,
    StorageSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use persistence::PlanStore;
