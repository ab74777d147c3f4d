//! The listing draft manager
//!
//! Owns the wizard state for one "sell your car" draft: location, media
//! items, structured car details, and contact info. Every operation replaces
//! the state and then commits the durable portion through the injected
//! `DraftStore`. Persistence is best-effort: a failed write is logged and
//! never surfaced to the caller, since a form draft must not crash the
//! session.
//!
//! Operations sanitize their inputs defensively. Unknown IDs and
//! out-of-range indices are no-ops, unrecognized files are silently
//! dropped, and partial updates are merged onto defaults-then-existing
//! values. No operation returns an error.

use std::collections::HashSet;

use crate::models::{
    CarDetails, CarDetailsPatch, ContactInfo, ContactPatch, DraftRecord, ExistingListing,
    ListingId, Location, MediaId, MediaItem, NewMediaFile, MAX_MEDIA_ITEMS,
};
use crate::storage::DraftStore;

use super::preview::PreviewProvider;

/// The in-memory state of the sell wizard
///
/// `media` and `uploaded_media_urls` are session-scoped: source file paths
/// and preview handles cannot be durably serialized, so neither field is
/// ever written to or restored from the draft store.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    pub location: Option<Location>,
    pub media: Vec<MediaItem>,
    pub uploaded_media_urls: Vec<String>,
    pub car_details: Option<CarDetails>,
    pub contact: Option<ContactInfo>,
    pub edit_listing_id: Option<ListingId>,
    pub published_listing_id: Option<ListingId>,
}

impl WizardState {
    fn from_record(record: DraftRecord) -> Self {
        Self {
            location: record.location,
            media: Vec::new(),
            uploaded_media_urls: Vec::new(),
            car_details: record.car_details,
            contact: record.contact,
            edit_listing_id: record.edit_listing_id,
            published_listing_id: record.published_listing_id,
        }
    }

    fn to_record(&self) -> DraftRecord {
        DraftRecord {
            location: self.location.clone(),
            car_details: self.car_details.clone(),
            contact: self.contact.clone(),
            edit_listing_id: self.edit_listing_id,
            published_listing_id: self.published_listing_id,
            ..Default::default()
        }
    }

    /// The media item currently marked as cover
    pub fn cover(&self) -> Option<&MediaItem> {
        self.media.iter().find(|item| item.is_cover)
    }
}

/// Maintains `WizardState` and persists its durable portion after every
/// transition
pub struct DraftManager<S: DraftStore, P: PreviewProvider> {
    state: WizardState,
    store: S,
    previews: P,
}

impl<S: DraftStore, P: PreviewProvider> DraftManager<S, P> {
    /// Create a manager, restoring the durable portion of a previous draft
    /// if one exists. A missing or corrupt record falls back to the
    /// all-absent default; media always starts empty.
    pub fn open(store: S, previews: P) -> Self {
        let state = match store.read() {
            Ok(Some(record)) => WizardState::from_record(record),
            Ok(None) => WizardState::default(),
            Err(e) => {
                log::warn!("failed to read draft record, starting fresh: {}", e);
                WizardState::default()
            }
        };

        Self {
            state,
            store,
            previews,
        }
    }

    /// The current wizard state
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// The preview provider this manager revokes handles through
    pub fn previews(&self) -> &P {
        &self.previews
    }

    /// The durable projection of the current state
    pub fn record(&self) -> DraftRecord {
        self.state.to_record()
    }

    /// Replace the listing location
    pub fn set_location(&mut self, location: Option<Location>) {
        self.state.location = location;
        self.commit();
    }

    /// Replace the media sequence wholesale
    ///
    /// Previews of items that do not survive the replacement are revoked.
    /// The new sequence is normalized: orders are reassigned densely and
    /// exactly one cover is kept (the first item in order, if the caller
    /// supplied zero or several covers).
    pub fn set_media(&mut self, items: Vec<MediaItem>) {
        let surviving: HashSet<MediaId> = items.iter().map(|item| item.id).collect();
        for old in &self.state.media {
            if !surviving.contains(&old.id) {
                self.previews.revoke(&old.preview);
            }
        }

        self.state.media = items;
        self.reindex_orders();
        self.normalize_cover();
        self.invalidate_uploads();
        self.commit();
    }

    /// Record the URLs produced by uploading the current media sequence
    ///
    /// Only valid after a successful upload of the exact current `media`.
    /// A count mismatch is not rejected, only logged: sequencing is the
    /// caller's responsibility.
    pub fn set_uploaded_media_urls(&mut self, urls: Vec<String>) {
        if urls.len() != self.state.media.len() {
            log::warn!(
                "uploaded {} URLs for {} media items; caller may have uploaded a stale set",
                urls.len(),
                self.state.media.len()
            );
        }
        self.state.uploaded_media_urls = urls;
        self.commit();
    }

    /// Add candidate files to the media sequence
    ///
    /// Files of unrecognized type and files beyond the 10-item cap are
    /// silently dropped. The first accepted file becomes cover if no item
    /// is cover yet.
    pub fn add_media(&mut self, files: Vec<NewMediaFile>) {
        let mut changed = false;

        for file in files {
            if self.state.media.len() >= MAX_MEDIA_ITEMS {
                log::debug!("media cap reached, dropping {}", file.path.display());
                break;
            }

            let Some(kind) = crate::models::MediaKind::detect(file.content_type.as_deref(), &file.path)
            else {
                log::debug!("unrecognized media type, dropping {}", file.path.display());
                continue;
            };

            let preview = self.previews.create(&file.path, kind);
            let is_cover = !self.state.media.iter().any(|item| item.is_cover);
            let order = self.state.media.len() as u32;

            self.state.media.push(MediaItem {
                id: MediaId::new(),
                source: file.path,
                preview,
                is_video: kind.is_video(),
                is_cover,
                order,
            });
            changed = true;
        }

        if changed {
            self.invalidate_uploads();
            self.commit();
        }
    }

    /// Remove one media item; unknown IDs are a no-op
    ///
    /// If the removed item was the cover, the new first item in order is
    /// promoted.
    pub fn remove_media(&mut self, id: MediaId) {
        let Some(index) = self.state.media.iter().position(|item| item.id == id) else {
            return;
        };

        let removed = self.state.media.remove(index);
        self.previews.revoke(&removed.preview);
        self.reindex_orders();

        if removed.is_cover {
            if let Some(first) = self.state.media.first_mut() {
                first.is_cover = true;
            }
        }

        self.invalidate_uploads();
        self.commit();
    }

    /// Mark exactly one item as cover; unknown IDs are a no-op
    pub fn set_cover(&mut self, id: MediaId) {
        if !self.state.media.iter().any(|item| item.id == id) {
            return;
        }

        for item in &mut self.state.media {
            item.is_cover = item.id == id;
        }

        self.invalidate_uploads();
        self.commit();
    }

    /// Move the item at `from` to position `to` (zero-based)
    ///
    /// An out-of-range `from` is a no-op; `to` is clamped to the sequence.
    pub fn reorder_media(&mut self, from: usize, to: usize) {
        if from >= self.state.media.len() {
            return;
        }

        let to = to.min(self.state.media.len() - 1);
        let item = self.state.media.remove(from);
        self.state.media.insert(to, item);
        self.reindex_orders();

        self.invalidate_uploads();
        self.commit();
    }

    /// Merge a partial car-details update, or clear the field entirely
    ///
    /// A patch is applied onto defaults-then-existing values: existing
    /// values win over defaults, patch values win over existing ones.
    pub fn set_car_details(&mut self, patch: Option<CarDetailsPatch>) {
        match patch {
            None => self.state.car_details = None,
            Some(patch) => {
                let mut details = self.state.car_details.take().unwrap_or_default();
                details.apply(patch);
                self.state.car_details = Some(details);
            }
        }
        self.commit();
    }

    /// Merge a partial contact update, or clear the field entirely
    pub fn set_contact(&mut self, patch: Option<ContactPatch>) {
        match patch {
            None => self.state.contact = None,
            Some(patch) => {
                let mut contact = self.state.contact.take().unwrap_or_default();
                contact.apply(patch);
                self.state.contact = Some(contact);
            }
        }
        self.commit();
    }

    /// Replace the ID of the listing being edited
    pub fn set_edit_listing_id(&mut self, id: Option<ListingId>) {
        self.state.edit_listing_id = id;
        self.commit();
    }

    /// Replace the ID of the published listing
    pub fn set_published_listing_id(&mut self, id: Option<ListingId>) {
        self.state.published_listing_id = id;
        self.commit();
    }

    /// Reset the draft to defaults and erase the durable record
    pub fn clear_draft(&mut self) {
        for item in &self.state.media {
            self.previews.revoke(&item.preview);
        }
        self.state = WizardState::default();

        if let Err(e) = self.store.clear() {
            log::warn!("failed to erase draft record: {}", e);
        }
    }

    /// Merge data from an existing listing into the draft, for editing
    ///
    /// Remote image URLs are accepted but never turned back into media
    /// items: no source files exist locally, so replacing a listing's
    /// photos requires a fresh add/upload pass.
    pub fn load_for_edit(&mut self, listing: ExistingListing) {
        if listing.location.is_some() {
            self.state.location = listing.location;
        }

        if let Some(patch) = listing.car_details {
            let mut details = self.state.car_details.take().unwrap_or_default();
            details.apply(patch);
            self.state.car_details = Some(details);
        }

        if let Some(patch) = listing.contact {
            let mut contact = self.state.contact.take().unwrap_or_default();
            contact.apply(patch);
            self.state.contact = Some(contact);
        }

        if !listing.images.is_empty() {
            log::debug!(
                "ignoring {} remote images; existing photos need re-upload",
                listing.images.len()
            );
        }

        self.commit();
    }

    /// Persist the durable portion of the current state. Best-effort: a
    /// failed write is logged and swallowed.
    fn commit(&self) {
        if let Err(e) = self.store.write(&self.state.to_record()) {
            log::warn!("failed to persist draft record: {}", e);
        }
    }

    /// Reassign `order` densely (0..n-1) by current position
    fn reindex_orders(&mut self) {
        for (index, item) in self.state.media.iter_mut().enumerate() {
            item.order = index as u32;
        }
    }

    /// Keep exactly one cover when media is non-empty, preferring the first
    /// item already marked as cover, else the first item in order
    fn normalize_cover(&mut self) {
        let cover_index = self
            .state
            .media
            .iter()
            .position(|item| item.is_cover)
            .unwrap_or(0);

        for (index, item) in self.state.media.iter_mut().enumerate() {
            item.is_cover = index == cover_index;
        }
    }

    /// Any mutation of `media` invalidates previously uploaded URLs
    fn invalidate_uploads(&mut self) {
        self.state.uploaded_media_urls.clear();
    }
}
