//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, CryptocteonError>`](CryptocteonError).

use thiserror::Error;

/// The error type for session management and request dispatch.
///
/// Creation and free errors are returned directly. Request errors are the
/// request's completion status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptocteonError {
    /// The caller supplied something this layer cannot act on.
    ///
    /// Used for:
    /// - a missing descriptor chain or buffer
    /// - an unsupported or malformed algorithm combination
    /// - a chain longer than two descriptors
    /// - descriptors that do not match the bound session
    /// - keys, IVs or regions of the wrong size
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The session table could not grow.
    ///
    /// The table is left exactly as it was before the failed allocation.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// The handle is unknown, out of range, stale or already freed.
    ///
    /// The contained value is the raw handle the caller passed.
    #[error("Session not found: {0}")]
    NotFound(u64),

    /// The ICV stored in the buffer does not match the computed one.
    #[error("Integrity check failed")]
    VerificationFailed,
}

impl From<&'static str> for CryptocteonError {
    fn from(msg: &'static str) -> Self {
        CryptocteonError::InvalidArgument(msg.to_string())
    }
}
