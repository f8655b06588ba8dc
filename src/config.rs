/// Application settings
///
/// The only external configuration is the Pixabay API key. It is never
/// baked into the source; it comes from, in order:
/// 1. The `PIXGRID_API_KEY` environment variable
/// 2. A JSON settings file in the user's config directory:
///    - Linux: ~/.config/pixgrid/settings.json
///    - macOS: ~/Library/Application Support/pixgrid/settings.json
///    - Windows: %APPDATA%\pixgrid\settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable checked before the settings file
pub const API_KEY_ENV: &str = "PIXGRID_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Pixabay API credential
    pub api_key: String,
}

impl Settings {
    /// Load settings from the environment or the settings file.
    /// Returns a human-readable error when no credential can be found.
    pub fn load() -> Result<Self, String> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(Settings {
                    api_key: key.trim().to_string(),
                });
            }
        }

        let path = Self::settings_path();
        let json = std::fs::read_to_string(&path).map_err(|_| {
            format!(
                "No API key configured. Set {} or create {} with {{\"api_key\": \"...\"}}",
                API_KEY_ENV,
                path.display()
            )
        })?;

        let settings = Self::from_json(&json)
            .map_err(|err| format!("Failed to parse {}: {}", path.display(), err))?;

        if settings.api_key.trim().is_empty() {
            return Err(format!("Empty api_key in {}", path.display()));
        }

        Ok(settings)
    }

    /// Get the path where the settings file is expected
    pub fn settings_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        path.push("pixgrid");
        path.push("settings.json");
        path
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
