//! Media CLI commands
//!
//! Implements CLI commands for managing the draft's media sequence. Items
//! are addressed by their position (the `#` column of `media list`).
//!
//! Media is session-scoped: source paths and preview handles are never
//! written to the draft record, so attached media only lives for the
//! current invocation. The interactive wizard attaches, orders, and
//! uploads media within one session; these commands exist for driving the
//! same operations in scripts and tests.

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::format_media_list;
use crate::error::{MotorlotError, MotorlotResult};
use crate::models::NewMediaFile;
use crate::services::MediaUploader;

use super::CliDraftManager;

/// Media subcommands
#[derive(Subcommand)]
pub enum MediaCommands {
    /// Attach photo or video files to the draft
    Add {
        /// Files to attach (jpeg/png/webp images, mp4/mov/avi videos)
        files: Vec<PathBuf>,
    },
    /// List attached media
    List,
    /// Remove an item by position
    Remove {
        /// Item position (see 'media list')
        index: usize,
    },
    /// Make an item the cover by position
    Cover {
        /// Item position (see 'media list')
        index: usize,
    },
    /// Move an item to a new position
    Move {
        /// Current position
        from: usize,
        /// Target position
        to: usize,
    },
    /// Upload the attached media and record the resulting URLs
    Upload,
}

/// Handle a media command
pub fn handle_media_command(
    manager: &mut CliDraftManager,
    uploader: &dyn MediaUploader,
    cmd: MediaCommands,
) -> MotorlotResult<()> {
    match cmd {
        MediaCommands::Add { files } => {
            let before = manager.state().media.len();
            manager.add_media(files.into_iter().map(NewMediaFile::from_path).collect());
            let added = manager.state().media.len() - before;

            println!("Attached {} file(s).", added);
            print!("{}", format_media_list(&manager.state().media));
        }

        MediaCommands::List => {
            print!("{}", format_media_list(&manager.state().media));
        }

        MediaCommands::Remove { index } => {
            let id = item_at(manager, index)?;
            manager.remove_media(id);
            println!("Removed item {}.", index);
            print!("{}", format_media_list(&manager.state().media));
        }

        MediaCommands::Cover { index } => {
            let id = item_at(manager, index)?;
            manager.set_cover(id);
            println!("Item {} is now the cover.", index);
        }

        MediaCommands::Move { from, to } => {
            if from >= manager.state().media.len() {
                return Err(MotorlotError::Validation(format!(
                    "No media item at position {}",
                    from
                )));
            }
            manager.reorder_media(from, to);
            print!("{}", format_media_list(&manager.state().media));
        }

        MediaCommands::Upload => {
            if manager.state().media.is_empty() {
                println!("No media to upload.");
                return Ok(());
            }

            let urls = uploader.upload(&manager.state().media)?;
            println!("Uploaded {} file(s).", urls.len());
            manager.set_uploaded_media_urls(urls);
        }
    }

    Ok(())
}

fn item_at(manager: &CliDraftManager, index: usize) -> MotorlotResult<crate::models::MediaId> {
    manager
        .state()
        .media
        .get(index)
        .map(|item| item.id)
        .ok_or_else(|| MotorlotError::media_not_found(format!("position {}", index)))
}
