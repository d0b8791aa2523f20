//! Connect listeners.
//!
//! Listeners are zero-argument callbacks fired each time a connect sequence
//! completes. They are kept in registration order, duplicates allowed, and
//! removed by identity (the same [`ConnectListener`] handle, or any clone of
//! it).

use std::fmt;
use std::sync::Arc;

use crate::error::Result;

type ListenerFn = dyn Fn() -> Result<()> + Send + Sync;

/// Handle to a connect callback.
///
/// Cloning the handle keeps its identity, so a clone can be used to remove
/// the handle it was cloned from.
#[derive(Clone)]
pub struct ConnectListener(Arc<ListenerFn>);

impl ConnectListener {
    /// Wrap a callback.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Result<()> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the callback.
    #[inline]
    pub fn call(&self) -> Result<()> {
        (self.0)()
    }

    /// Whether both handles refer to the same callback.
    #[inline]
    pub fn same_as(&self, other: &ConnectListener) -> bool {
        // Compare data pointers only; vtable addresses are not unique.
        Arc::as_ptr(&self.0) as *const () == Arc::as_ptr(&other.0) as *const ()
    }
}

impl fmt::Debug for ConnectListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConnectListener({:p})", Arc::as_ptr(&self.0))
    }
}

/// Ordered list of connect listeners.
#[derive(Debug, Default)]
pub struct ListenerList {
    listeners: Vec<ConnectListener>,
}

impl ListenerList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener.
    pub fn push(&mut self, listener: ConnectListener) {
        self.listeners.push(listener);
    }

    /// Remove every occurrence of `listener`. Returns how many were removed.
    pub fn remove(&mut self, listener: &ConnectListener) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|l| !l.same_as(listener));
        before - self.listeners.len()
    }

    /// Invoke all listeners in registration order.
    ///
    /// Stops at the first failing listener and returns its error; listeners
    /// after it are not called.
    pub fn notify(&self) -> Result<()> {
        for listener in &self.listeners {
            listener.call()?;
        }
        Ok(())
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
