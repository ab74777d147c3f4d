//! motorlot - Terminal-based car listing wizard
//!
//! This library provides the core functionality for motorlot, a terminal
//! tool for drafting and publishing a "sell your car" marketplace listing.
//! The heart of the crate is the draft manager: a durable, defensively
//! sanitized state machine behind the multi-step sell wizard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (location, media, car details, contact)
//! - `storage`: JSON file storage layer and draft-slot backends
//! - `services`: The draft manager and its collaborators
//! - `api`: Listings backend client
//! - `wizard`: The interactive multi-step sell wizard
//! - `cli`: Non-interactive command handlers
//! - `display`: Terminal output formatting
//! - `export`: Draft export to JSON/YAML
//!
//! # Example
//!
//! ```rust,ignore
//! use motorlot::services::{DraftManager, LocalPreviewProvider};
//! use motorlot::storage::FileDraftStore;
//!
//! let store = FileDraftStore::new(paths.draft_file("sell-wizard"));
//! let mut manager = DraftManager::open(store, LocalPreviewProvider::new());
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod wizard;

pub use error::MotorlotError;
