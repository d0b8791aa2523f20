//! Session builder and controller.
//!
//! The [`SessionBuilder`] wires the collaborators. The [`SessionController`]
//! owns the live connection and drives the connect sequence:
//! 1. Create (or, on reconnect, release state and replace) the transport
//! 2. Perform the handshake if the transport is not already connected
//! 3. Install the session's attachment hook
//! 4. Bind and load shared state
//! 5. Capture the remote config, mark initialized, notify listeners
//!
//! # Example
//!
//! ```ignore
//! use syncwire_client::{ConnectConfig, ConnectListener, SessionController};
//!
//! let mut session = SessionController::builder()
//!     .transport(|| -> Arc<dyn Transport> { Arc::new(WsTransport::new()) })
//!     .state(|client| -> Box<dyn SharedState> { Box::new(StateSync::new(client)) })
//!     .build()?;
//!
//! session.add_connect_listener(ConnectListener::new(|| {
//!     tracing::info!("connected");
//!     Ok(())
//! }))?;
//!
//! let config = session.connect(&ConnectConfig::new("ws://localhost:1234/ws")).await?;
//! let result = session.trigger("reset_camera", vec![], Kwargs::new()).await?;
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::attachment::AttachmentRegistry;
use crate::control::{ConnectConfig, ErrorReport, RemoteConfig};
use crate::decorate::{decorate_args, decorate_kwargs, Arg, AttachmentDecorator, Decorate, Kwargs};
use crate::error::{Result, SyncwireError};
use crate::listener::{ConnectListener, ListenerList};
use crate::state::{SharedState, StateFactory};
use crate::transport::{Transport, TransportFactory};

/// Builder for configuring and creating a [`SessionController`].
///
/// A transport factory and a state factory are required. The attachment
/// registry and decorator default to a fresh registry and an
/// [`AttachmentDecorator`] over it.
#[derive(Default)]
pub struct SessionBuilder {
    transports: Option<Box<dyn TransportFactory>>,
    states: Option<Box<dyn StateFactory>>,
    attachments: Option<Arc<AttachmentRegistry>>,
    decorator: Option<Arc<dyn Decorate>>,
}

impl SessionBuilder {
    /// Create a new session builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the factory producing transports on connect and reconnect.
    pub fn transport<F>(mut self, factory: F) -> Self
    where
        F: TransportFactory + 'static,
    {
        self.transports = Some(Box::new(factory));
        self
    }

    /// Set the factory binding shared state to a transport.
    pub fn state<F>(mut self, factory: F) -> Self
    where
        F: StateFactory + 'static,
    {
        self.states = Some(Box::new(factory));
        self
    }

    /// Use an existing attachment registry.
    ///
    /// Pass the same registry to a custom decorator so both see the hook
    /// installed on connect.
    pub fn attachments(mut self, registry: Arc<AttachmentRegistry>) -> Self {
        self.attachments = Some(registry);
        self
    }

    /// Replace the default argument decorator.
    pub fn decorator<D>(mut self, decorator: D) -> Self
    where
        D: Decorate + 'static,
    {
        self.decorator = Some(Arc::new(decorator));
        self
    }

    /// Build the controller.
    ///
    /// # Errors
    ///
    /// Returns [`SyncwireError::Config`] if a required factory is missing.
    pub fn build(self) -> Result<SessionController> {
        let transports = self
            .transports
            .ok_or_else(|| SyncwireError::Config("transport factory not set".into()))?;
        let states = self
            .states
            .ok_or_else(|| SyncwireError::Config("state factory not set".into()))?;
        let attachments = self.attachments.unwrap_or_default();
        let decorator = match self.decorator {
            Some(decorator) => decorator,
            None => Arc::new(AttachmentDecorator::new(attachments.clone())),
        };

        Ok(SessionController {
            transports,
            states,
            attachments,
            decorator,
            client: None,
            state: None,
            config: None,
            initialized: false,
            listeners: ListenerList::new(),
        })
    }
}

/// Owner of the single live session.
///
/// Create one per application and pass it to whatever needs to talk to the
/// remote process. Mutating operations (`connect`, listener registration)
/// take `&mut self`; calls and error reporting take `&self`.
pub struct SessionController {
    transports: Box<dyn TransportFactory>,
    states: Box<dyn StateFactory>,
    attachments: Arc<AttachmentRegistry>,
    decorator: Arc<dyn Decorate>,
    client: Option<Arc<dyn Transport>>,
    state: Option<Box<dyn SharedState>>,
    config: Option<RemoteConfig>,
    initialized: bool,
    listeners: ListenerList,
}

impl SessionController {
    /// Create a new session builder.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Connect (or reconnect) and return the session's config snapshot.
    ///
    /// Every call runs the full sequence. When a state binding already exists
    /// it is released and a brand new transport is created before connecting
    /// with `config`; calling this twice is a reconnect, not a no-op, and
    /// notifies listeners again.
    ///
    /// # Errors
    ///
    /// Handshake, state-load and listener errors are returned unchanged.
    /// Releasing the previous state also clears the initialized flag, the
    /// config snapshot and the attachment hook, so a reconnect that fails
    /// part way leaves the controller not connected rather than pointing at
    /// the released session. A failed load keeps the new transport and state
    /// in place; the next call releases them.
    pub async fn connect(&mut self, config: &ConnectConfig) -> Result<RemoteConfig> {
        let client = match (self.client.take(), self.state.take()) {
            (_, Some(mut state)) => {
                tracing::debug!("Releasing shared state before reconnect");
                state.delete();
                // Nothing below may refer to the released session.
                self.initialized = false;
                self.config = None;
                self.attachments.clear();
                self.transports.create()
            }
            (Some(client), None) => client,
            (None, None) => self.transports.create(),
        };
        self.client = Some(client.clone());

        if !client.is_connected() {
            tracing::debug!(url = ?config.session_url, "Connecting session");
            client.connect(config).await?;
        }

        self.attachments.set_add_attachment(client.attachment_sink());

        let state = self.state.insert(self.states.create(client.clone()));
        state.load_state().await?;

        let remote_config = client.config();
        self.config = Some(remote_config.clone());
        self.initialized = true;
        tracing::info!("Session ready");

        if !self.listeners.is_empty() {
            tracing::debug!(count = self.listeners.len(), "Notifying connect listeners");
            self.listeners.notify()?;
        }
        Ok(remote_config)
    }

    /// Whether a connect sequence completed and the session is still up.
    pub fn is_connected(&self) -> bool {
        self.initialized && self.client.as_ref().is_some_and(|c| c.is_connected())
    }

    /// Register a listener fired after every successful connect.
    ///
    /// If the session is already connected the listener is also called once
    /// right away, and its error is returned.
    pub fn add_connect_listener(&mut self, listener: ConnectListener) -> Result<()> {
        self.listeners.push(listener.clone());
        if self.is_connected() {
            listener.call()?;
        }
        Ok(())
    }

    /// Remove every registration of `listener`.
    pub fn remove_connect_listener(&mut self, listener: &ConnectListener) {
        let removed = self.listeners.remove(listener);
        tracing::trace!(removed, "Removed connect listener");
    }

    /// Invoke a named remote action.
    ///
    /// All positional and keyword arguments are decorated concurrently; the
    /// call is sent only once every one of them resolved.
    ///
    /// # Errors
    ///
    /// Returns [`SyncwireError::NotConnected`] when no transport exists yet.
    /// A transport whose handshake failed still exists, so the call is handed
    /// to it and whatever error it reports is returned. Decoration and remote
    /// errors are returned unchanged.
    pub async fn trigger(&self, name: &str, args: Vec<Arg>, kwargs: Kwargs) -> Result<Value> {
        let client = self.client.as_ref().ok_or(SyncwireError::NotConnected)?;
        tracing::trace!(
            action = name,
            args = args.len(),
            kwargs = kwargs.len(),
            "Triggering remote action"
        );

        let decorator = &*self.decorator;
        let (args, kwargs) = futures::try_join!(
            decorate_args(decorator, args),
            decorate_kwargs(decorator, kwargs),
        )?;

        client.remote().trigger(name, args, kwargs).await
    }

    /// Forward an uncaught error to the remote process.
    ///
    /// Delivery is best-effort: the report is dropped when the session is not
    /// connected.
    pub async fn on_error(&self, report: impl Into<ErrorReport>) {
        let Some(client) = self.client.as_ref().filter(|c| c.is_connected()) else {
            return;
        };

        let report = report.into();
        tracing::trace!(remote = report.is_remote(), "Forwarding error report");
        if let Err(e) = client.remote().send_error(report.message()).await {
            tracing::warn!("Failed to forward error report: {}", e);
        }
    }

    /// The current transport.
    pub fn client(&self) -> Option<&Arc<dyn Transport>> {
        self.client.as_ref()
    }

    /// The current shared state binding.
    pub fn state(&self) -> Option<&dyn SharedState> {
        self.state.as_deref()
    }

    /// Mutable access to the current shared state binding.
    pub fn state_mut(&mut self) -> Option<&mut (dyn SharedState + 'static)> {
        self.state.as_deref_mut()
    }

    /// Config snapshot captured by the last successful connect.
    pub fn config(&self) -> Option<&RemoteConfig> {
        self.config.as_ref()
    }

    /// Registry holding the active session's attachment hook.
    pub fn attachments(&self) -> &Arc<AttachmentRegistry> {
        &self.attachments
    }

    /// Number of registered connect listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("has_client", &self.client.is_some())
            .field("has_state", &self.state.is_some())
            .field("config", &self.config)
            .field("initialized", &self.initialized)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
