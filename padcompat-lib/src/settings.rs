//! User settings shared by every frontend.
//!
//! Stored at `~/.config/padcompat/settings.toml`. Data files default to
//! `~/.local/share/padcompat/`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

const APP_DIR: &str = "padcompat";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Compatibility database location; defaults under the data directory
    pub database_path: Option<PathBuf>,
    /// Manual override sidecar location; defaults under the data directory
    pub overrides_path: Option<PathBuf>,
    /// Classify unknown games on lookup
    pub auto_detect: bool,
    /// Entry ids or names never auto-detected
    pub ignored_games: Vec<String>,
    /// Concurrent classifications during batch detection
    pub workers: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: None,
            overrides_path: None,
            auto_detect: true,
            ignored_games: Vec::new(),
            workers: 4,
        }
    }
}

impl Settings {
    /// Human-readable problems with these settings. Empty when valid.
    pub fn verify(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !(1..=64).contains(&self.workers) {
            problems.push(format!("workers must be between 1 and 64 (got {})", self.workers));
        }
        for (i, game) in self.ignored_games.iter().enumerate() {
            if game.trim().is_empty() {
                problems.push(format!("ignored_games[{}] is blank", i));
            }
        }
        problems
    }

    pub fn database_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(|| data_dir().join("compatibility.json"))
    }

    pub fn overrides_path(&self) -> PathBuf {
        self.overrides_path
            .clone()
            .unwrap_or_else(|| data_dir().join("overrides.txt"))
    }
}

/// Canonical path to the settings file: `~/.config/padcompat/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join(APP_DIR).join("settings.toml")
}

/// Directory holding the database and override sidecar.
pub fn data_dir() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join(APP_DIR)
}

/// Read settings from `path`. A missing file yields defaults.
pub fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(e) => Err(e.into()),
    }
}

/// Load settings from `path`, falling back to defaults on any error.
pub fn load_settings(path: &Path) -> Settings {
    match read_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings from {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Write settings to `path` atomically.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(settings)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
