//! Path management for motorlot
//!
//! Provides platform-appropriate path resolution for configuration, draft
//! data, uploads, and preview artifacts.
//!
//! ## Path Resolution Order
//!
//! 1. `MOTORLOT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (e.g., `~/.config/motorlot` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::MotorlotError;

/// Manages all paths used by motorlot
#[derive(Debug, Clone)]
pub struct MotorlotPaths {
    /// Base directory for all motorlot data
    base_dir: PathBuf,
}

impl MotorlotPaths {
    /// Create a new MotorlotPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn new() -> Result<Self, MotorlotError> {
        let base_dir = if let Ok(custom) = std::env::var("MOTORLOT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "motorlot").ok_or_else(|| {
                MotorlotError::Config("Could not determine config directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create MotorlotPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (draft records)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the uploads directory (staged media copies)
    pub fn uploads_dir(&self) -> PathBuf {
        self.base_dir.join("uploads")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the draft record for a given draft key
    pub fn draft_file(&self, draft_key: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", draft_key))
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), MotorlotError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MotorlotError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MotorlotError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.uploads_dir())
            .map_err(|e| MotorlotError::Io(format!("Failed to create uploads directory: {}", e)))?;

        Ok(())
    }

    /// Check if motorlot has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
