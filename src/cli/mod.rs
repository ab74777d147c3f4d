//! CLI command handlers for motorlot
//!
//! Every subcommand drives the same draft manager the interactive wizard
//! uses; the manager is opened from the configured draft key and file-backed
//! storage.

pub mod contact;
pub mod details;
pub mod draft;
pub mod location;
pub mod media;
pub mod publish;

pub use contact::{handle_contact_command, ContactCommands};
pub use details::{handle_details_command, DetailsCommands};
pub use draft::{handle_draft_command, DraftCommands};
pub use location::{handle_location_command, LocationCommands};
pub use media::{handle_media_command, MediaCommands};
pub use publish::{handle_edit_command, handle_publish_command};

use crate::config::{MotorlotPaths, Settings};
use crate::error::MotorlotResult;
use crate::services::{DraftManager, LocalMediaUploader, LocalPreviewProvider};
use crate::storage::FileDraftStore;

/// The draft manager as wired up by the CLI
pub type CliDraftManager = DraftManager<FileDraftStore, LocalPreviewProvider>;

/// Open the draft manager backed by the configured draft file
pub fn open_manager(paths: &MotorlotPaths, settings: &Settings) -> MotorlotResult<CliDraftManager> {
    paths.ensure_directories()?;
    let store = FileDraftStore::new(paths.draft_file(&settings.draft_key));
    Ok(DraftManager::open(store, LocalPreviewProvider::new()))
}

/// The media uploader as wired up by the CLI
pub fn open_uploader(paths: &MotorlotPaths) -> LocalMediaUploader {
    LocalMediaUploader::new(paths.uploads_dir())
}
