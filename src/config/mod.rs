//! Configuration module for websearch-mcp
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// First existing settings file, if any.
///
/// `WEBSEARCH_SETTINGS_PATH` takes precedence over the default locations.
pub fn find_settings_file() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = std::env::var("WEBSEARCH_SETTINGS_PATH") {
        candidates.push(PathBuf::from(path));
    }
    candidates.push(PathBuf::from("settings.yml"));
    candidates.push(PathBuf::from("config/settings.yml"));
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("websearch-mcp/settings.yml"));
    }

    candidates.into_iter().find(|p| p.exists())
}

/// Load settings from `path` (or defaults), apply environment overrides and validate
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}
