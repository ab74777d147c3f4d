//! Terminal output formatting

pub mod draft;
pub mod media;

pub use draft::format_draft_summary;
pub use media::format_media_list;
