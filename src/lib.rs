//! # syncwire-client
//!
//! Client-side session controller for shared-state RPC connections.
//!
//! This crate keeps one live connection to a remote process, binds a shared
//! state object to it, and exposes a decorated `trigger` for invoking named
//! remote actions with JSON and binary arguments.
//!
//! ## Architecture
//!
//! - **Transport** (pluggable): handshake, connectedness, remote namespace
//! - **Shared state** (pluggable): state object bound to one transport
//! - **Decorator**: resolves arguments, turning binary payloads into attachment handles
//! - **Controller**: connect/reconnect sequence, connect listeners, error forwarding
//!
//! ## Example
//!
//! ```ignore
//! use syncwire_client::{ConnectConfig, SessionController};
//! use syncwire_client::decorate::{Arg, Kwargs};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = SessionController::builder()
//!         .transport(ws_transport)
//!         .state(state_sync)
//!         .build()?;
//!
//!     session.connect(&ConnectConfig::new("ws://localhost:1234/ws")).await?;
//!
//!     let mut kwargs = Kwargs::new();
//!     kwargs.insert("resolution".into(), Arg::from(12));
//!     let result = session
//!         .trigger("update_mesh", vec![Arg::bytes(std::fs::read("mesh.vtp")?)], kwargs)
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod attachment;
pub mod control;
pub mod decorate;
pub mod error;
pub mod listener;
pub mod state;
pub mod transport;

mod client;

pub use client::{SessionBuilder, SessionController};
pub use control::{ConnectConfig, ErrorReport, RemoteConfig};
pub use error::{RemoteErrorData, SyncwireError};
pub use listener::ConnectListener;
