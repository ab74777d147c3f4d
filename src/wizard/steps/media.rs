//! Media step
//!
//! Collects the photo and video files to attach to the listing.

use std::path::PathBuf;

use crate::error::MotorlotResult;
use crate::models::{NewMediaFile, MAX_MEDIA_ITEMS};

use super::super::prompt_string;

/// Media step
pub struct MediaStep;

impl MediaStep {
    /// Run the media step, collecting candidate files one per line
    pub fn run() -> MotorlotResult<Vec<NewMediaFile>> {
        println!();
        println!("Step 2: Photos & Videos");
        println!("=======================");
        println!();
        println!("Add up to {} photos (jpeg/png/webp) or videos (mp4/mov/avi).", MAX_MEDIA_ITEMS);
        println!("Enter one file path per line; an empty line finishes the step.");
        println!("Unsupported files are skipped.");
        println!();

        let mut files = Vec::new();
        loop {
            let line = prompt_string("File path: ")?;
            if line.is_empty() {
                break;
            }
            files.push(NewMediaFile::from_path(PathBuf::from(line)));
        }

        Ok(files)
    }
}
