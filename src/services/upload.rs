//! Media upload
//!
//! The draft manager never uploads anything itself: the media step uploads
//! the current sequence through a `MediaUploader` and then hands the
//! resulting URLs back via `set_uploaded_media_urls`, in the same order as
//! the media items.

use std::path::PathBuf;

use crate::error::{MotorlotError, MotorlotResult};
use crate::models::MediaItem;

/// Uploads a media sequence to the object store backing the marketplace
pub trait MediaUploader {
    /// Upload every item, returning one URL per item in media order
    fn upload(&self, items: &[MediaItem]) -> MotorlotResult<Vec<String>>;
}

/// Uploader that stages media into a local directory
///
/// Stands in for the marketplace object store during drafting and in tests;
/// the returned URLs are `file://` paths to the staged copies.
pub struct LocalMediaUploader {
    upload_dir: PathBuf,
}

impl LocalMediaUploader {
    pub fn new(upload_dir: PathBuf) -> Self {
        Self { upload_dir }
    }
}

impl MediaUploader for LocalMediaUploader {
    fn upload(&self, items: &[MediaItem]) -> MotorlotResult<Vec<String>> {
        std::fs::create_dir_all(&self.upload_dir).map_err(|e| {
            MotorlotError::Upload(format!(
                "Failed to create upload directory {}: {}",
                self.upload_dir.display(),
                e
            ))
        })?;

        let mut urls = Vec::with_capacity(items.len());
        for item in items {
            let extension = item
                .source
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .unwrap_or_default();
            let target = self
                .upload_dir
                .join(format!("{}{}", item.id.as_uuid(), extension));

            std::fs::copy(&item.source, &target).map_err(|e| {
                MotorlotError::Upload(format!(
                    "Failed to stage {}: {}",
                    item.source.display(),
                    e
                ))
            })?;

            urls.push(format!("file://{}", target.display()));
        }

        Ok(urls)
    }
}
