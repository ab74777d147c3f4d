//! HTTP client for the listings backend

use std::time::Duration;

use crate::error::{MotorlotError, MotorlotResult};
use crate::models::{ExistingListing, ListingId};

use super::types::{ListingPayload, ListingResponse};

/// Client for the marketplace listings API
pub struct ListingsClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ListingsClient {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> MotorlotResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| MotorlotError::Api(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { base_url, http })
    }

    /// The base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn listing_url(&self, id: ListingId) -> String {
        format!("{}/listings/{}", self.base_url, id.as_uuid())
    }

    /// Create a new listing, returning its ID
    pub fn create_listing(&self, payload: &ListingPayload) -> MotorlotResult<ListingId> {
        let response = self
            .http
            .post(format!("{}/listings", self.base_url))
            .json(payload)
            .send()?;

        let response = check_status(response)?;
        let body: ListingResponse = response.json()?;
        Ok(body.id)
    }

    /// Update an existing listing
    pub fn update_listing(
        &self,
        id: ListingId,
        payload: &ListingPayload,
    ) -> MotorlotResult<ListingId> {
        let response = self.http.put(self.listing_url(id)).json(payload).send()?;

        let response = check_status(response)?;
        let body: ListingResponse = response.json()?;
        Ok(body.id)
    }

    /// Fetch an existing listing, for editing
    pub fn get_listing(&self, id: ListingId) -> MotorlotResult<ExistingListing> {
        let response = self.http.get(self.listing_url(id)).send()?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MotorlotError::listing_not_found(id.to_string()));
        }

        let response = check_status(response)?;
        Ok(response.json()?)
    }
}

fn check_status(
    response: reqwest::blocking::Response,
) -> MotorlotResult<reqwest::blocking::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().unwrap_or_default();
        Err(MotorlotError::Api(format!(
            "Backend returned {}: {}",
            status, body
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ListingsClient::new("https://api.example.com/").unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_listing_url() {
        let client = ListingsClient::new("https://api.example.com").unwrap();
        let id = ListingId::new();
        assert_eq!(
            client.listing_url(id),
            format!("https://api.example.com/listings/{}", id.as_uuid())
        );
    }
}
