//! Shared state binding.
//!
//! A [`SharedState`] mirrors the remote process's state object over one
//! transport. The controller creates exactly one per connect sequence and
//! releases it with [`SharedState::delete`] before replacing the transport.

use std::sync::Arc;

use crate::error::Result;
use crate::transport::{BoxFuture, Transport};

/// State object synchronized with the remote process.
pub trait SharedState: Send + Sync {
    /// Fetch the initial state snapshot.
    fn load_state(&mut self) -> BoxFuture<'_, Result<()>>;

    /// Release every subscription held on the bound transport.
    fn delete(&mut self);
}

/// Creates state bindings for a connected transport.
pub trait StateFactory: Send + Sync {
    /// Bind a new state object to `client`.
    fn create(&self, client: Arc<dyn Transport>) -> Box<dyn SharedState>;
}

impl<F> StateFactory for F
where
    F: Fn(Arc<dyn Transport>) -> Box<dyn SharedState> + Send + Sync,
{
    fn create(&self, client: Arc<dyn Transport>) -> Box<dyn SharedState> {
        self(client)
    }
}
