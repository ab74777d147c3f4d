//! Listing location model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the car is offered for sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// City name (e.g., "Dubai")
    pub city: String,

    /// Neighborhood or district within the city
    #[serde(default)]
    pub neighborhood: String,
}

impl Location {
    /// Create a new location
    pub fn new(city: impl Into<String>, neighborhood: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            neighborhood: neighborhood.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.neighborhood.is_empty() {
            write!(f, "{}", self.city)
        } else {
            write!(f, "{}, {}", self.neighborhood, self.city)
        }
    }
}
