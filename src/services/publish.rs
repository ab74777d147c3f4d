//! The publish step
//!
//! Turns the wizard state into a create/update request against the listings
//! backend. On success the published listing ID is recorded and the draft is
//! cleared.

use crate::api::{ListingPayload, ListingsClient};
use crate::error::{MotorlotError, MotorlotResult};
use crate::models::ListingId;
use crate::storage::DraftStore;

use super::draft::{DraftManager, WizardState};
use super::preview::PreviewProvider;

/// Build the request payload from the current wizard state
///
/// Location, car details, and contact info must all be present. A mismatch
/// between the media count and the uploaded URL count is logged but not
/// rejected; correct sequencing of upload and publish is the caller's
/// responsibility.
pub fn build_payload(state: &WizardState) -> MotorlotResult<ListingPayload> {
    let location = state
        .location
        .clone()
        .ok_or_else(|| MotorlotError::Publish("location is not set".into()))?;
    let car = state
        .car_details
        .clone()
        .ok_or_else(|| MotorlotError::Publish("car details are not set".into()))?;
    let contact = state
        .contact
        .clone()
        .ok_or_else(|| MotorlotError::Publish("contact info is not set".into()))?;

    if state.uploaded_media_urls.len() != state.media.len() {
        log::warn!(
            "publishing with {} uploaded URLs for {} media items",
            state.uploaded_media_urls.len(),
            state.media.len()
        );
    }

    let cover_index = state
        .media
        .iter()
        .position(|item| item.is_cover)
        .unwrap_or(0);

    Ok(ListingPayload {
        location,
        car,
        contact,
        media_urls: state.uploaded_media_urls.clone(),
        cover_index,
    })
}

/// Submits drafts to the listings backend
pub struct PublishService<'a> {
    client: &'a ListingsClient,
}

impl<'a> PublishService<'a> {
    pub fn new(client: &'a ListingsClient) -> Self {
        Self { client }
    }

    /// Publish the draft: create a new listing, or update the one being
    /// edited. On success, records the published ID and clears the draft.
    pub fn publish<S, P>(&self, manager: &mut DraftManager<S, P>) -> MotorlotResult<ListingId>
    where
        S: DraftStore,
        P: PreviewProvider,
    {
        let payload = build_payload(manager.state())?;

        let id = match manager.state().edit_listing_id {
            Some(existing) => self.client.update_listing(existing, &payload)?,
            None => self.client.create_listing(&payload)?,
        };

        manager.set_published_listing_id(Some(id));
        manager.clear_draft();

        Ok(id)
    }
}
