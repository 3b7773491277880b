//! Error types shared across the workspace.
//!
//! The `ServiceError` enum unifies the failure cases the service can hit on
//! its own side of the collaborator boundary: I/O, JSON encoding, HTTP client
//! construction, and lock poisoning. Provider-side failures (unreachable
//! host, malformed payload, missing data) never appear here — the adapter
//! collapses all of them into an `unavailable` outcome before they can
//! propagate.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type used by the service binary and shared library code.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// I/O error originating from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// HTTP client construction or transport failure, with context.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl<T> From<PoisonError<T>> for ServiceError {
    fn from(err: PoisonError<T>) -> Self {
        ServiceError::MutexLock(err.to_string())
    }
}
