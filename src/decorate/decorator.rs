//! Argument decoration.
//!
//! Decoration turns an [`Arg`] into the JSON that is actually sent. Binary
//! payloads are registered with the active session and replaced by their
//! handle; plain JSON passes through.
//!
//! Batches are resolved concurrently: every element is started at once and
//! the results are collected back in input order (or under the input key).
//! The first failure fails the whole batch.

use std::sync::Arc;

use bytes::Bytes;
use futures::future::try_join_all;
use serde_json::{Map, Value};

use super::arg::{Arg, Kwargs};
use crate::attachment::AttachmentRegistry;
use crate::error::{Result, SyncwireError};
use crate::transport::BoxFuture;

/// JSON key marking an inline binary payload: `{"__attachment__": [bytes...]}`.
pub const ATTACHMENT_KEY: &str = "__attachment__";

/// Turns call arguments into wire-safe JSON.
pub trait Decorate: Send + Sync {
    /// Resolve and decorate one argument.
    fn decorate(&self, arg: Arg) -> BoxFuture<'_, Result<Value>>;
}

/// Decorate positional arguments concurrently, preserving order.
pub async fn decorate_args<D>(decorator: &D, args: Vec<Arg>) -> Result<Vec<Value>>
where
    D: Decorate + ?Sized,
{
    try_join_all(args.into_iter().map(|arg| decorator.decorate(arg))).await
}

/// Decorate keyword arguments concurrently, preserving key association.
pub async fn decorate_kwargs<D>(decorator: &D, kwargs: Kwargs) -> Result<Map<String, Value>>
where
    D: Decorate + ?Sized,
{
    let (keys, pending): (Vec<String>, Vec<_>) = kwargs
        .into_iter()
        .map(|(key, arg)| (key, decorator.decorate(arg)))
        .unzip();

    let values = try_join_all(pending).await?;
    Ok(keys.into_iter().zip(values).collect())
}

/// Default decorator backed by the session attachment registry.
#[derive(Debug, Clone)]
pub struct AttachmentDecorator {
    attachments: Arc<AttachmentRegistry>,
}

impl AttachmentDecorator {
    /// Create a decorator registering payloads through `attachments`.
    pub fn new(attachments: Arc<AttachmentRegistry>) -> Self {
        Self { attachments }
    }

    fn attach(&self, payload: Bytes) -> Result<Value> {
        tracing::trace!(len = payload.len(), "registering attachment");
        Ok(Value::String(self.attachments.add(payload)?))
    }

    /// Walk plain JSON and replace attachment markers.
    fn decorate_value(&self, value: Value) -> Result<Value> {
        match value {
            Value::Object(map) => {
                if let Some(payload) = attachment_marker(&map)? {
                    return self.attach(payload);
                }
                map.into_iter()
                    .map(|(key, v)| Ok((key, self.decorate_value(v)?)))
                    .collect::<Result<Map<_, _>>>()
                    .map(Value::Object)
            }
            Value::Array(items) => items
                .into_iter()
                .map(|v| self.decorate_value(v))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            other => Ok(other),
        }
    }
}

impl Decorate for AttachmentDecorator {
    fn decorate(&self, arg: Arg) -> BoxFuture<'_, Result<Value>> {
        Box::pin(async move {
            match arg {
                Arg::Value(value) => self.decorate_value(value),
                Arg::Bytes(payload) => self.attach(payload),
                Arg::List(items) => Ok(Value::Array(decorate_args(self, items).await?)),
                Arg::Map(map) => Ok(Value::Object(decorate_kwargs(self, map).await?)),
                Arg::Deferred(pending) => {
                    let resolved = pending.await?;
                    self.decorate(resolved).await
                }
            }
        })
    }
}

/// Extract the payload of a `{"__attachment__": [...]}` object.
///
/// Returns `None` for any other object shape.
fn attachment_marker(map: &Map<String, Value>) -> Result<Option<Bytes>> {
    let raw = match map.get(ATTACHMENT_KEY) {
        Some(raw) if map.len() == 1 => raw,
        _ => return Ok(None),
    };

    let items = raw.as_array().ok_or_else(|| {
        SyncwireError::Decorate(format!("{} must be a byte array", ATTACHMENT_KEY))
    })?;

    let payload = items
        .iter()
        .map(|item| {
            item.as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| {
                    SyncwireError::Decorate(format!("{} holds a non-byte value: {}", ATTACHMENT_KEY, item))
                })
        })
        .collect::<Result<Vec<u8>>>()?;

    Ok(Some(Bytes::from(payload)))
}
