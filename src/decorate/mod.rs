//! Decorate module - turning call arguments into wire-safe JSON.
//!
//! This module provides:
//!
//! - [`Arg`] - a call argument (JSON, binary, nested, or deferred)
//! - [`Decorate`] - the decoration seam
//! - [`AttachmentDecorator`] - default rules: binary payloads become attachment handles
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use syncwire_client::attachment::AttachmentRegistry;
//! use syncwire_client::decorate::{decorate_args, Arg, AttachmentDecorator};
//!
//! let registry = Arc::new(AttachmentRegistry::new());
//! let decorator = AttachmentDecorator::new(registry);
//!
//! let values = decorate_args(&decorator, vec![Arg::from(1), Arg::from("a")]).await?;
//! ```

mod arg;
mod decorator;

pub use arg::{Arg, Kwargs};
pub use decorator::{decorate_args, decorate_kwargs, AttachmentDecorator, Decorate, ATTACHMENT_KEY};
