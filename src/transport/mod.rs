//! Transport module - the connection session seam.
//!
//! Network I/O and message framing live behind these traits:
//! - [`Transport`] - one client connection
//! - [`Remote`] - the remote action namespace of that connection
//! - [`TransportFactory`] - creates transports on connect and reconnect

mod session;

pub use session::{BoxFuture, Remote, Transport, TransportFactory};
