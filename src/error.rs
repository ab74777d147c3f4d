//! Custom error types for motorlot
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for motorlot operations
#[derive(Error, Debug)]
pub enum MotorlotError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Media upload errors
    #[error("Upload error: {0}")]
    Upload(String),

    /// Listings backend errors
    #[error("Listings API error: {0}")]
    Api(String),

    /// Publish preconditions not met
    #[error("Publish error: {0}")]
    Publish(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl MotorlotError {
    /// Create a "not found" error for listings
    pub fn listing_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Listing",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for media items
    pub fn media_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Media item",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for MotorlotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MotorlotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for MotorlotError {
    fn from(err: reqwest::Error) -> Self {
        Self::Api(err.to_string())
    }
}

/// Result type alias for motorlot operations
pub type MotorlotResult<T> = Result<T, MotorlotError>;
