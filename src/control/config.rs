//! Connection configuration.
//!
//! [`ConnectConfig`] is what the caller hands to
//! [`SessionController::connect`](crate::SessionController::connect).
//! [`RemoteConfig`] is the snapshot the session reports back once connected.
//!
//! # Example
//!
//! ```
//! use syncwire_client::control::ConnectConfig;
//!
//! let config = ConnectConfig::new("ws://localhost:8080/ws")
//!     .with_application("viewer")
//!     .with_secret("wslink-secret");
//!
//! let json = serde_json::to_value(&config).unwrap();
//! assert_eq!(json["sessionURL"], "ws://localhost:8080/ws");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Configuration snapshot reported by a connected session.
pub type RemoteConfig = Value;

/// Parameters for establishing a session.
///
/// Field names follow the camelCase keys used by session launchers, so a
/// launcher response can be deserialized directly. Unknown keys are kept in
/// [`extra`](Self::extra) and forwarded to the transport untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectConfig {
    /// Endpoint of an already running session.
    #[serde(
        rename = "sessionURL",
        alias = "url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub session_url: Option<String>,
    /// Launcher endpoint used to start a session on demand.
    #[serde(
        rename = "sessionManagerURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub session_manager_url: Option<String>,
    /// Application name requested from the launcher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    /// Shared secret presented during the handshake.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Any additional keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConnectConfig {
    /// Create a config pointing at a running session.
    pub fn new(session_url: impl Into<String>) -> Self {
        Self {
            session_url: Some(session_url.into()),
            ..Self::default()
        }
    }

    /// Parse a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the launcher endpoint.
    pub fn with_session_manager_url(mut self, url: impl Into<String>) -> Self {
        self.session_manager_url = Some(url.into());
        self
    }

    /// Set the application name.
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = Some(application.into());
        self
    }

    /// Set the handshake secret.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Add an extra key passed through to the transport.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
