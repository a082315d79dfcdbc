/// Persisted shape of a path mapping.
///
/// Two parallel sequences: `keys[i]` is an asset handle and `values[i]` the
/// canonical path stored for it. This is the only representation that
/// crosses the save/load boundary, serialized as `{ "keys": [...], "values": [...] }`.
/// Either field may be absent in persisted data and defaults to empty.

use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::handle::AssetHandle;

/// Two parallel sequences describing a path mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedForm {
    /// Asset handles, positionally aligned with `values`
    #[serde(default)]
    pub keys: Vec<AssetHandle>,
    /// Canonical paths, positionally aligned with `keys`
    #[serde(default)]
    pub values: Vec<String>,
}

impl SerializedForm {
    /// Create an empty serialized form
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a serialized form with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Append one aligned entry
    pub fn push(&mut self, key: AssetHandle, value: String) {
        self.keys.push(key);
        self.values.push(value);
    }

    /// Number of usable entries (the common prefix of both sequences)
    pub fn len(&self) -> usize {
        self.keys.len().min(self.values.len())
    }

    /// True when no usable entry exists
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that both sequences have the same length
    ///
    /// # Errors
    ///
    /// Returns `Error::SerializedFormLengthMismatch` when they differ. The
    /// condition is recoverable: only the common prefix can be restored.
    pub fn check_integrity(&self) -> Result<()> {
        if self.keys.len() != self.values.len() {
            return Err(Error::SerializedFormLengthMismatch {
                keys: self.keys.len(),
                values: self.values.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "serialized_form_tests.rs"]
mod tests;
