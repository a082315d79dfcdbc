//! Error types for the Galaxy3D scene registry
//!
//! This module defines the error types used by the registry, the directory
//! and the persistence boundary. Lookup misses are not errors: they are
//! reported as `None`.

use std::fmt;

/// Result type for scene registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Scene registry errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Null or unknown scene identity (caller skips the operation)
    InvalidScene(String),

    /// Parallel sequences of a serialized form differ in length
    SerializedFormLengthMismatch {
        /// Number of handles in the form
        keys: usize,
        /// Number of paths in the form
        values: usize,
    },

    /// No registry could be resolved for a scene
    RegistryUnavailable(String),

    /// A registry lock was poisoned by a panicking holder
    LockPoisoned(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidScene(msg) => write!(f, "Invalid scene: {}", msg),
            Error::SerializedFormLengthMismatch { keys, values } => write!(
                f,
                "Serialized form length mismatch: {} keys, {} values",
                keys, values
            ),
            Error::RegistryUnavailable(msg) => write!(f, "Registry unavailable: {}", msg),
            Error::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
