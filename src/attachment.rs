//! Attachment registry.
//!
//! Binary payloads are not inlined into call arguments. They are handed to the
//! active session, which stores them for the next outgoing message and returns
//! a short handle string the remote side resolves back into the payload.
//!
//! The registry holds the session's add-attachment function. It is installed
//! by [`SessionController::connect`](crate::SessionController::connect) each
//! time a session comes up, and read by the argument decorator.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::RwLock;

use crate::error::{Result, SyncwireError};

/// Session capability that registers a payload and returns its handle.
pub type AddAttachment = Arc<dyn Fn(Bytes) -> String + Send + Sync>;

/// Shared holder for the active session's [`AddAttachment`] function.
#[derive(Default)]
pub struct AttachmentRegistry {
    hook: RwLock<Option<AddAttachment>>,
}

impl AttachmentRegistry {
    /// Create a registry with no hook installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the add-attachment function, replacing any previous one.
    pub fn set_add_attachment(&self, add: AddAttachment) {
        *self.hook.write() = Some(add);
    }

    /// Remove the installed hook.
    pub fn clear(&self) {
        *self.hook.write() = None;
    }

    /// Whether a hook is installed.
    pub fn is_installed(&self) -> bool {
        self.hook.read().is_some()
    }

    /// Register a payload with the active session.
    ///
    /// # Errors
    ///
    /// Returns [`SyncwireError::AttachmentsUnavailable`] if no session has
    /// installed its hook yet.
    pub fn add(&self, payload: Bytes) -> Result<String> {
        // Clone out so the lock is not held across the session call.
        let add = self
            .hook
            .read()
            .clone()
            .ok_or(SyncwireError::AttachmentsUnavailable)?;
        Ok(add(payload))
    }
}

impl fmt::Debug for AttachmentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachmentRegistry")
            .field("installed", &self.is_installed())
            .finish()
    }
}
