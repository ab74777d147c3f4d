//! Wire types for the listings backend

use serde::{Deserialize, Serialize};

use crate::models::{CarDetails, ContactInfo, ListingId, Location};

/// The create/update request body for a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPayload {
    pub location: Location,
    pub car: CarDetails,
    pub contact: ContactInfo,

    /// Uploaded media URLs, in display order
    pub media_urls: Vec<String>,

    /// Index into `media_urls` of the cover image
    pub cover_index: usize,
}

/// Response returned by the backend on create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    pub id: ListingId,

    /// Moderation status reported by the backend (e.g., "pending")
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_roundtrip() {
        let payload = ListingPayload {
            location: Location::new("Dubai", "Marina"),
            car: CarDetails {
                make: "Toyota".into(),
                model: "Corolla".into(),
                year: 2019,
                ..Default::default()
            },
            contact: ContactInfo::default(),
            media_urls: vec!["https://cdn.example.com/1.jpg".into()],
            cover_index: 0,
        };

        let json = serde_json::to_string(&payload).unwrap();
        let back: ListingPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(payload, back);
    }

    #[test]
    fn test_response_missing_status_defaults() {
        let id = ListingId::new();
        let json = format!(r#"{{"id":"{}"}}"#, id.as_uuid());
        let response: ListingResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.id, id);
        assert_eq!(response.status, "");
    }
}
