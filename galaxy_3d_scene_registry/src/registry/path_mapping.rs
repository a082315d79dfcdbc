/// Handle to path association.
///
/// A PathMapping stores one canonical ScenePath per AssetHandle. Keys are
/// unique and iteration order carries no meaning. It converts to and from
/// a SerializedForm, and serde goes through that form, so any serde scene
/// format persists exactly the two parallel sequences.

use std::collections::hash_map::Entry;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use crate::handle::AssetHandle;
use crate::path::{canonicalize, ScenePath};
use super::serialized_form::SerializedForm;

/// Association from asset handles to canonical scene paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SerializedForm", into = "SerializedForm")]
pub struct PathMapping {
    paths: FxHashMap<AssetHandle, ScenePath>,
}

impl PathMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self {
            paths: FxHashMap::default(),
        }
    }

    /// Canonicalize `raw` and store it against `handle`
    ///
    /// Overwrites any prior value. Returns the stored path.
    pub fn set_path(&mut self, handle: AssetHandle, raw: &str, root_prefix: &str) -> &ScenePath {
        let path = canonicalize(raw, root_prefix);
        match self.paths.entry(handle) {
            Entry::Occupied(mut entry) => {
                entry.insert(path);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(path),
        }
    }

    /// Get the path stored for `handle`, or None if there is none
    pub fn path(&self, handle: AssetHandle) -> Option<&ScenePath> {
        self.paths.get(&handle)
    }

    /// Remove the path stored for `handle`
    ///
    /// Returns the removed path, or None if there was none.
    pub fn remove_path(&mut self, handle: AssetHandle) -> Option<ScenePath> {
        self.paths.remove(&handle)
    }

    /// Whether a path is stored for `handle`
    pub fn contains(&self, handle: AssetHandle) -> bool {
        self.paths.contains_key(&handle)
    }

    /// All handles whose stored path equals `path`
    ///
    /// Duplicate paths across handles are allowed, so this may return
    /// several handles. Linear in the size of the mapping.
    pub fn handles_for_path(&self, path: &str) -> Vec<AssetHandle> {
        self.paths
            .iter()
            .filter(|(_, stored)| stored.as_str() == path)
            .map(|(handle, _)| *handle)
            .collect()
    }

    /// Iterate over all (handle, path) pairs
    pub fn iter(&self) -> impl Iterator<Item = (AssetHandle, &ScenePath)> + '_ {
        self.paths.iter().map(|(handle, path)| (*handle, path))
    }

    /// Number of stored paths
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no path is stored
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Remove every stored path
    pub fn clear(&mut self) {
        self.paths.clear();
    }

    /// Flatten into two positionally aligned sequences
    ///
    /// Keys come out in the mapping's iteration order.
    pub fn to_serialized_form(&self) -> SerializedForm {
        let mut form = SerializedForm::with_capacity(self.paths.len());
        for (handle, path) in &self.paths {
            form.push(*handle, path.as_str().to_string());
        }
        form
    }

    /// Rebuild a mapping from two parallel sequences
    ///
    /// Later duplicate keys overwrite earlier ones. If the sequences differ
    /// in length, only their common prefix is restored and a warning is
    /// logged; this never fails.
    pub fn from_serialized_form(form: SerializedForm) -> Self {
        if let Err(error) = form.check_integrity() {
            crate::engine_warn!("galaxy3d::PathMapping",
                "{}; restoring the first {} entries", error, form.len());
        }

        let mut paths = FxHashMap::default();
        for (handle, value) in form.keys.into_iter().zip(form.values) {
            paths.insert(handle, ScenePath::from_persisted(value));
        }
        Self { paths }
    }
}

impl From<SerializedForm> for PathMapping {
    fn from(form: SerializedForm) -> Self {
        PathMapping::from_serialized_form(form)
    }
}

impl From<PathMapping> for SerializedForm {
    fn from(mapping: PathMapping) -> Self {
        let mut form = SerializedForm::with_capacity(mapping.paths.len());
        for (handle, path) in mapping.paths {
            form.push(handle, path.into_string());
        }
        form
    }
}

#[cfg(test)]
#[path = "path_mapping_tests.rs"]
mod tests;
