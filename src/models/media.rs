//! Media item model
//!
//! A media item is one image or video attached to a listing draft, carrying
//! cover/order metadata and an owned preview handle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::ids::MediaId;

/// Maximum number of media items a draft may hold
pub const MAX_MEDIA_ITEMS: usize = 10;

/// Kind of media attached to a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a candidate file by its declared content type, falling back to
    /// the filename extension. Returns `None` for anything that is not an
    /// accepted image (jpeg/png/webp) or video (mp4/quicktime/avi).
    pub fn detect(content_type: Option<&str>, path: &Path) -> Option<Self> {
        if let Some(mime) = content_type {
            match mime.to_ascii_lowercase().as_str() {
                "image/jpeg" | "image/png" | "image/webp" => return Some(Self::Image),
                "video/mp4" | "video/quicktime" | "video/avi" | "video/x-msvideo" => {
                    return Some(Self::Video)
                }
                _ => {}
            }
        }

        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "webp" => Some(Self::Image),
            "mp4" | "mov" | "avi" => Some(Self::Video),
            _ => None,
        }
    }

    /// Whether this kind is a video
    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "Image"),
            Self::Video => write!(f, "Video"),
        }
    }
}

/// An opaque handle to a generated preview. The draft manager owns the handle
/// and must revoke it through the preview provider on every removal path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate file handed to `add_media`, before type filtering
#[derive(Debug, Clone)]
pub struct NewMediaFile {
    /// Path to the source file on the seller's machine
    pub path: PathBuf,
    /// Declared content type, if known (e.g., "image/jpeg")
    pub content_type: Option<String>,
}

impl NewMediaFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(path: impl Into<PathBuf>, content_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content_type: Some(content_type.into()),
        }
    }
}

/// One image or video attached to a listing draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Unique identifier
    pub id: MediaId,

    /// Path to the source file on the seller's machine
    pub source: PathBuf,

    /// Preview handle owned by this item
    pub preview: PreviewHandle,

    /// Whether this item is a video
    pub is_video: bool,

    /// Whether this item is the listing's cover image
    pub is_cover: bool,

    /// Zero-based display position; dense and contiguous across the draft
    pub order: u32,
}

impl MediaItem {
    /// The media kind of this item
    pub fn kind(&self) -> MediaKind {
        if self.is_video {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    /// Source file name, for display
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}
