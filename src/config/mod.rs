//! Configuration module for the gateway
//!
//! Handles loading settings from YAML files and environment variables, and
//! the secrets the silos authenticate with.

mod secrets;
mod settings;

pub use secrets::{Secrets, SECRET_KEYS};
pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Load settings from an explicit path, the usual locations, or defaults
pub fn load_settings(explicit: Option<PathBuf>) -> Result<Settings> {
    let mut candidates = Vec::new();
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("settings file not found: {}", path.display());
        }
        candidates.push(path);
    }
    if let Ok(path) = std::env::var("SEARCHGATE_SETTINGS_PATH") {
        candidates.push(PathBuf::from(path));
    }
    candidates.push(PathBuf::from("settings.yml"));
    candidates.push(PathBuf::from("config/settings.yml"));
    candidates.push(PathBuf::from("/etc/searchgate/settings.yml"));
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("searchgate/settings.yml"));
    }

    for path in candidates {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            settings.validate()?;
            return Ok(settings);
        }
    }

    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}
