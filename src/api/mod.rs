//! Listings backend API client and wire types

pub mod client;
pub mod types;

pub use client::ListingsClient;
pub use types::{ListingPayload, ListingResponse};
