//! Control module - connection configuration and error reporting.
//!
//! Provides:
//! - [`ConnectConfig`] - parameters passed to `connect`
//! - [`RemoteConfig`] - snapshot reported by the connected session
//! - [`ErrorReport`] - classified error forwarded to the remote process

mod config;
mod report;

pub use config::{ConnectConfig, RemoteConfig};
pub use report::ErrorReport;
