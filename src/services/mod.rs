//! Service layer for motorlot
//!
//! The service layer holds the draft state machine and its collaborators:
//! preview handle management, media upload, and the publish hand-off.

pub mod draft;
pub mod preview;
pub mod publish;
pub mod upload;

pub use draft::{DraftManager, WizardState};
pub use preview::{LocalPreviewProvider, PreviewProvider};
pub use publish::PublishService;
pub use upload::{LocalMediaUploader, MediaUploader};
