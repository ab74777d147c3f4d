//! Core data models for motorlot
//!
//! Models are plain serde-serializable data with validation and partial-update
//! helpers; business rules live in the service layer.

pub mod car;
pub mod contact;
pub mod draft;
pub mod ids;
pub mod location;
pub mod media;

pub use car::{BodyType, CarDetails, CarDetailsPatch, Condition, FuelType, Transmission};
pub use contact::{
    CallTime, ContactInfo, ContactPatch, PreferredContact, MAX_DESCRIPTION_CHARS,
};
pub use draft::{DraftRecord, ExistingListing, DRAFT_SCHEMA_VERSION};
pub use ids::{ListingId, MediaId};
pub use location::Location;
pub use media::{MediaItem, MediaKind, NewMediaFile, PreviewHandle, MAX_MEDIA_ITEMS};
