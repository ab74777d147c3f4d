//! User settings for motorlot
//!
//! Manages seller preferences: the listings backend URL, currency symbol,
//! default city, and the durable draft key.

use serde::{Deserialize, Serialize};

use super::paths::MotorlotPaths;
use crate::error::MotorlotError;

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "AED".to_string()
}

fn default_draft_key() -> String {
    "sell-wizard".to_string()
}

/// User settings for motorlot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the listings backend (e.g., "https://api.example.com")
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Currency symbol or code shown next to prices
    #[serde(default = "default_currency")]
    pub currency: String,

    /// City pre-filled in the wizard's location step
    #[serde(default)]
    pub default_city: String,

    /// Key under which the draft record is stored
    #[serde(default = "default_draft_key")]
    pub draft_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: None,
            currency: default_currency(),
            default_city: String::new(),
            draft_key: default_draft_key(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &MotorlotPaths) -> Result<Self, MotorlotError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| MotorlotError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MotorlotError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MotorlotPaths) -> Result<(), MotorlotError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MotorlotError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| MotorlotError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
