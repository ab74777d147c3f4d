//! Preview handle management
//!
//! Every media item owns a preview handle issued by a `PreviewProvider`.
//! The draft manager must revoke a handle whenever the owning item leaves
//! the draft (single removal, bulk replacement, or draft clear), so the
//! provider tracks the set of live handles and leaks are observable.

use std::collections::HashSet;
use std::path::Path;
use std::sync::RwLock;

use uuid::Uuid;

use crate::models::{MediaKind, PreviewHandle};

/// Issues and revokes preview handles for media items
pub trait PreviewProvider {
    /// Create a preview for the given source file
    fn create(&self, source: &Path, kind: MediaKind) -> PreviewHandle;

    /// Release a preview handle. Revoking an unknown handle is a no-op.
    fn revoke(&self, handle: &PreviewHandle);
}

/// Preview provider issuing opaque `preview://` tokens
#[derive(Default)]
pub struct LocalPreviewProvider {
    active: RwLock<HashSet<String>>,
}

impl LocalPreviewProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handles that have been created but not revoked
    pub fn active_count(&self) -> usize {
        self.active.read().map(|set| set.len()).unwrap_or(0)
    }

    /// Whether a handle is still live
    pub fn is_active(&self, handle: &PreviewHandle) -> bool {
        self.active
            .read()
            .map(|set| set.contains(handle.as_str()))
            .unwrap_or(false)
    }
}

impl PreviewProvider for LocalPreviewProvider {
    fn create(&self, source: &Path, kind: MediaKind) -> PreviewHandle {
        let token = format!("preview://{}/{}", kind, Uuid::new_v4());
        log::debug!("creating {} preview for {}", kind, source.display());

        if let Ok(mut set) = self.active.write() {
            set.insert(token.clone());
        }
        PreviewHandle::new(token)
    }

    fn revoke(&self, handle: &PreviewHandle) {
        let known = self
            .active
            .write()
            .map(|mut set| set.remove(handle.as_str()))
            .unwrap_or(false);

        if !known {
            log::debug!("revoked unknown preview handle {}", handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_revoke() {
        let provider = LocalPreviewProvider::new();
        let handle = provider.create(Path::new("front.jpg"), MediaKind::Image);

        assert_eq!(provider.active_count(), 1);
        assert!(provider.is_active(&handle));

        provider.revoke(&handle);
        assert_eq!(provider.active_count(), 0);
        assert!(!provider.is_active(&handle));
    }

    #[test]
    fn test_revoke_unknown_is_noop() {
        let provider = LocalPreviewProvider::new();
        provider.revoke(&PreviewHandle::new("preview://image/bogus"));
        assert_eq!(provider.active_count(), 0);
    }

    #[test]
    fn test_handles_are_unique() {
        let provider = LocalPreviewProvider::new();
        let a = provider.create(Path::new("a.jpg"), MediaKind::Image);
        let b = provider.create(Path::new("a.jpg"), MediaKind::Image);
        assert_ne!(a, b);
        assert_eq!(provider.active_count(), 2);
    }
}
