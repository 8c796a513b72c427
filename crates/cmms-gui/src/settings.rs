//! Persisted application settings.
//!
//! Stored as TOML in the platform config directory. Missing or unreadable
//! files fall back to defaults; saving is best effort and only logged.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use cmms_model::Language;

use crate::theme::ThemeMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme_mode: ThemeMode,
    pub language: Language,
    /// Default rows per page for every management screen.
    pub page_size: usize,
    /// Account whose roles gate the screens; fixtures ship "admin",
    /// "m.keller" and "s.novak".
    pub username: String,
    /// Optional JSON dataset store; sample data when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            language: Language::default(),
            page_size: 25,
            username: "admin".to_string(),
            data_path: None,
        }
    }
}

impl Settings {
    fn file_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "acme", "cmms-console")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
    }

    /// Load settings from disk, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(settings) => {
                    debug!(path = %path.display(), "loaded settings");
                    settings
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "invalid settings file, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist settings; failures are logged, never fatal.
    pub fn save(&self) {
        let Some(path) = Self::file_path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(error) = fs::create_dir_all(parent) {
                warn!(%error, "could not create settings directory");
                return;
            }
        }
        match toml::to_string_pretty(self) {
            Ok(contents) => {
                if let Err(error) = fs::write(&path, contents) {
                    warn!(path = %path.display(), %error, "could not write settings");
                }
            }
            Err(error) => warn!(%error, "could not serialize settings"),
        }
    }
}
