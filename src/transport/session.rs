//! Connection session traits.
//!
//! The controller never touches sockets. It drives a [`Transport`] created by a
//! [`TransportFactory`], one instance per connect sequence, and reaches the
//! remote action namespace through [`Transport::remote`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::attachment::AddAttachment;
use crate::control::{ConnectConfig, RemoteConfig};
use crate::error::Result;

/// Boxed future returned by session operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Remote action namespace exposed by a connected session.
pub trait Remote: Send + Sync {
    /// Invoke the named action with decorated positional and keyword arguments.
    fn trigger<'a>(
        &'a self,
        name: &'a str,
        args: Vec<Value>,
        kwargs: Map<String, Value>,
    ) -> BoxFuture<'a, Result<Value>>;

    /// Deliver an error message to the remote error entry point.
    fn send_error(&self, message: String) -> BoxFuture<'_, Result<()>>;
}

/// A single client connection to the remote process.
///
/// Implementations own their I/O and use interior mutability; the controller
/// shares the instance with the state binding it creates.
pub trait Transport: Send + Sync {
    /// Perform the connection handshake.
    fn connect<'a>(&'a self, config: &'a ConnectConfig) -> BoxFuture<'a, Result<()>>;

    /// Whether the underlying session is currently up.
    ///
    /// This may flip to `false` at any time when the network drops.
    fn is_connected(&self) -> bool;

    /// The session's add-attachment capability.
    fn attachment_sink(&self) -> AddAttachment;

    /// The remote action namespace.
    fn remote(&self) -> &dyn Remote;

    /// Configuration snapshot negotiated during the handshake.
    fn config(&self) -> RemoteConfig;
}

/// Creates fresh, unconnected transports.
pub trait TransportFactory: Send + Sync {
    /// Create a new transport instance.
    fn create(&self) -> Arc<dyn Transport>;
}

impl<F> TransportFactory for F
where
    F: Fn() -> Arc<dyn Transport> + Send + Sync,
{
    fn create(&self) -> Arc<dyn Transport> {
        self()
    }
}
