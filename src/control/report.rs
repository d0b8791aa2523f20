//! Error reports forwarded to the remote process.
//!
//! Errors are classified once, where they are first observed: failures that
//! came back from the remote process keep their structured traceback, anything
//! raised locally is rendered with its source chain.

use std::error::Error as StdError;
use std::fmt::Write as _;

use crate::error::{RemoteErrorData, SyncwireError};

/// An error ready to be sent to the remote error entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorReport {
    /// Error raised inside the remote process.
    Remote {
        /// Remote traceback.
        trace: String,
        /// Remote exception name and message.
        exception: String,
    },
    /// Error raised in this process.
    Local {
        /// Rendered error with its causes.
        stack_trace: String,
    },
}

impl ErrorReport {
    /// Build a remote report.
    pub fn remote(trace: impl Into<String>, exception: impl Into<String>) -> Self {
        ErrorReport::Remote {
            trace: trace.into(),
            exception: exception.into(),
        }
    }

    /// Build a local report from any error, walking its `source()` chain.
    pub fn local(err: &(dyn StdError + 'static)) -> Self {
        let mut stack_trace = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let _ = write!(stack_trace, "\nCaused by: {}", cause);
            source = cause.source();
        }
        ErrorReport::Local { stack_trace }
    }

    /// Message sent over the wire.
    pub fn message(&self) -> String {
        match self {
            ErrorReport::Remote { trace, exception } => format!("{}\n{}", trace, exception),
            ErrorReport::Local { stack_trace } => stack_trace.clone(),
        }
    }

    /// Whether the report originated in the remote process.
    pub fn is_remote(&self) -> bool {
        matches!(self, ErrorReport::Remote { .. })
    }
}

impl From<RemoteErrorData> for ErrorReport {
    fn from(data: RemoteErrorData) -> Self {
        ErrorReport::Remote {
            trace: data.trace,
            exception: data.exception,
        }
    }
}

impl From<&SyncwireError> for ErrorReport {
    fn from(err: &SyncwireError) -> Self {
        match err.remote_data() {
            Some(data) => data.clone().into(),
            None => ErrorReport::local(err),
        }
    }
}

impl From<SyncwireError> for ErrorReport {
    fn from(err: SyncwireError) -> Self {
        ErrorReport::from(&err)
    }
}
