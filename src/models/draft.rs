//! Draft record model
//!
//! The durable projection of the wizard state. Media items and uploaded
//! media URLs are deliberately excluded: source file paths and preview
//! handles do not survive a process restart, so they always start empty
//! on a fresh load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::car::{CarDetails, CarDetailsPatch};
use super::contact::{ContactInfo, ContactPatch};
use super::ids::ListingId;
use super::location::Location;

/// Current draft record schema version
pub const DRAFT_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    DRAFT_SCHEMA_VERSION
}

/// The persisted portion of a listing draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_details: Option<CarDetails>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,

    /// Present when editing a pre-existing listing rather than creating one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_listing_id: Option<ListingId>,

    /// Set once publish succeeds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_listing_id: Option<ListingId>,

    /// When the draft was last written
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for DraftRecord {
    fn default() -> Self {
        Self {
            schema_version: DRAFT_SCHEMA_VERSION,
            location: None,
            car_details: None,
            contact: None,
            edit_listing_id: None,
            published_listing_id: None,
            updated_at: Utc::now(),
        }
    }
}

/// Data for an existing listing fetched from the backend, fed into the
/// wizard when editing.
///
/// `images` carries the listing's remote image URLs. They are accepted but
/// never turned back into media items: no source files exist locally for
/// remote images, so replacing a listing's photos goes through a fresh
/// add/upload pass instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExistingListing {
    #[serde(default)]
    pub location: Option<Location>,

    #[serde(default)]
    pub car_details: Option<CarDetailsPatch>,

    #[serde(default)]
    pub contact: Option<ContactPatch>,

    #[serde(default)]
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_all_absent() {
        let record = DraftRecord::default();
        assert!(record.location.is_none());
        assert!(record.car_details.is_none());
        assert!(record.contact.is_none());
        assert!(record.edit_listing_id.is_none());
        assert!(record.published_listing_id.is_none());
    }

    #[test]
    fn test_absent_fields_not_serialized() {
        let record = DraftRecord::default();
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("location"));
        assert!(!json.contains("car_details"));
    }

    #[test]
    fn test_unknown_fields_ignored_on_load() {
        // Old records that still carry a media array must load cleanly;
        // the media field is simply dropped.
        let json = r#"{"schema_version":1,"media":[{"id":"x"}],"updated_at":"2025-01-01T00:00:00Z"}"#;
        let record: DraftRecord = serde_json::from_str(json).unwrap();
        assert!(record.location.is_none());
    }

    #[test]
    fn test_roundtrip() {
        let record = DraftRecord {
            location: Some(Location::new("Dubai", "Marina")),
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: DraftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
