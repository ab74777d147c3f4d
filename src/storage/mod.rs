//! Storage layer for motorlot
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the pluggable draft-slot backends.

pub mod draft_store;
pub mod file_io;

pub use draft_store::{DraftStore, FileDraftStore, MemoryDraftStore};
pub use file_io::{read_json, read_json_opt, write_json_atomic};
