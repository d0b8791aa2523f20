//! Remote call arguments.
//!
//! An [`Arg`] is what callers pass to `trigger`. It is a JSON value extended
//! with the shapes JSON cannot carry: raw binary payloads and values that are
//! still being produced.
//!
//! # Example
//!
//! ```
//! use syncwire_client::decorate::Arg;
//! use serde_json::json;
//!
//! let args = vec![
//!     Arg::from(1),
//!     Arg::bytes(vec![0u8, 1, 2]),
//!     Arg::from(json!({"mode": "fast"})),
//! ];
//! assert!(args[1].is_binary());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::transport::BoxFuture;

/// Keyword arguments of a remote call.
pub type Kwargs = HashMap<String, Arg>;

/// A remote call argument before decoration.
pub enum Arg {
    /// Plain JSON.
    Value(Value),
    /// Binary payload, sent as an attachment.
    Bytes(Bytes),
    /// Ordered list of arguments.
    List(Vec<Arg>),
    /// Keyed arguments.
    Map(Kwargs),
    /// Value resolved asynchronously before the call is sent.
    Deferred(BoxFuture<'static, Result<Arg>>),
}

impl Arg {
    /// Serialize any value into a plain JSON argument.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Arg::Value(serde_json::to_value(value)?))
    }

    /// Wrap a binary payload.
    pub fn bytes(payload: impl Into<Bytes>) -> Self {
        Arg::Bytes(payload.into())
    }

    /// Wrap a future producing the argument.
    pub fn deferred<F>(fut: F) -> Self
    where
        F: Future<Output = Result<Arg>> + Send + 'static,
    {
        Arg::Deferred(Box::pin(fut))
    }

    /// Whether this is a binary payload.
    #[inline]
    pub fn is_binary(&self) -> bool {
        matches!(self, Arg::Bytes(_))
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Arg::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            Arg::List(items) => f.debug_tuple("List").field(items).finish(),
            Arg::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Arg::Deferred(_) => f.write_str("Deferred"),
        }
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

impl From<Bytes> for Arg {
    fn from(payload: Bytes) -> Self {
        Arg::Bytes(payload)
    }
}

impl From<Vec<Arg>> for Arg {
    fn from(items: Vec<Arg>) -> Self {
        Arg::List(items)
    }
}

impl From<Kwargs> for Arg {
    fn from(map: Kwargs) -> Self {
        Arg::Map(map)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i32, i64, u32, u64, f64, String, &str);
