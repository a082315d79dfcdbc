/// Per-scene resource path registry.
///
/// Wraps a PathMapping for one scene. Writes canonicalize the path and
/// raise a dirty signal for the editor and persistence collaborators;
/// the registry itself never saves anything.

use std::sync::{Arc, Mutex, MutexGuard};
use crate::error::{Error, Result};
use crate::handle::{AssetHandle, SceneKey};
use crate::path::ScenePath;
use super::config::RegistryConfig;
use super::path_mapping::PathMapping;
use super::serialized_form::SerializedForm;

/// Registry shared between the directory and the host scene graph
pub type SharedRegistry = Arc<Mutex<SceneRegistry>>;

/// Resource path registry for a single scene
#[derive(Debug)]
pub struct SceneRegistry {
    /// Scene this registry was created for (null for detached registries)
    scene: SceneKey,
    /// Handle to path association
    paths: PathMapping,
    /// Root prefix and container naming
    config: RegistryConfig,
    /// Set by every write, cleared by the persistence collaborator
    dirty: bool,
}

impl SceneRegistry {
    /// Create an empty registry for `scene` with the default configuration
    pub fn new(scene: SceneKey) -> Self {
        Self::with_config(scene, RegistryConfig::default())
    }

    /// Create an empty registry for `scene`
    pub fn with_config(scene: SceneKey, config: RegistryConfig) -> Self {
        Self {
            scene,
            paths: PathMapping::new(),
            config,
            dirty: false,
        }
    }

    /// Wrap this registry for sharing with a directory and a host
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(Mutex::new(self))
    }

    /// Scene this registry was created for
    pub fn scene(&self) -> SceneKey {
        self.scene
    }

    /// Configuration used by this registry
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Underlying handle to path mapping
    pub fn mapping(&self) -> &PathMapping {
        &self.paths
    }

    /// Associate `handle` with the canonical form of `path`
    ///
    /// Overwrites any prior association and marks the registry dirty.
    pub fn set_resource_path(&mut self, handle: AssetHandle, path: &str) {
        let stored = self.paths.set_path(handle, path, &self.config.root_prefix);
        crate::engine_trace!("galaxy3d::SceneRegistry",
            "{:?} -> '{}'", handle, stored);
        self.dirty = true;
    }

    /// Get the path for `handle`, or an empty string if there is none
    ///
    /// Callers at this level do not distinguish a missing entry from an
    /// empty path. Use `try_resource_path` when the difference matters.
    pub fn resource_path(&self, handle: AssetHandle) -> String {
        self.paths
            .path(handle)
            .map(|path| path.as_str().to_string())
            .unwrap_or_default()
    }

    /// Get the path for `handle`, or None if there is none
    pub fn try_resource_path(&self, handle: AssetHandle) -> Option<&ScenePath> {
        self.paths.path(handle)
    }

    /// Forget the path for `handle`
    ///
    /// Returns true (and marks the registry dirty) if a path was removed.
    pub fn remove_resource_path(&mut self, handle: AssetHandle) -> bool {
        let removed = self.paths.remove_path(handle).is_some();
        if removed {
            self.dirty = true;
        }
        removed
    }

    /// All handles associated with the canonical form of `path`
    pub fn find_handles(&self, path: &str) -> Vec<AssetHandle> {
        let canonical = crate::path::canonicalize(path, &self.config.root_prefix);
        self.paths.handles_for_path(canonical.as_str())
    }

    /// Empty the mapping in place
    ///
    /// The registry stays registered in its directory.
    pub fn clear(&mut self) {
        if !self.paths.is_empty() {
            self.paths.clear();
            self.dirty = true;
        }
    }

    /// Number of stored paths
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no path is stored
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Whether the registry changed since it was last saved or loaded
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Acknowledge the dirty signal (called after a save)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Flatten the mapping for saving
    pub fn to_serialized_form(&self) -> SerializedForm {
        self.paths.to_serialized_form()
    }

    /// Replace the mapping with one restored from persisted data
    ///
    /// Tolerates mismatched sequence lengths (see
    /// `PathMapping::from_serialized_form`). Leaves the registry clean.
    pub fn load_serialized_form(&mut self, form: SerializedForm) {
        self.paths = PathMapping::from_serialized_form(form);
        self.dirty = false;
        crate::engine_debug!("galaxy3d::SceneRegistry",
            "Restored {} paths for {:?}", self.paths.len(), self.scene);
    }
}

/// Lock a shared registry
///
/// # Errors
///
/// Returns `Error::LockPoisoned` if a previous holder panicked.
pub fn lock_registry(registry: &SharedRegistry) -> Result<MutexGuard<'_, SceneRegistry>> {
    registry
        .lock()
        .map_err(|_| Error::LockPoisoned("SceneRegistry lock poisoned".to_string()))
}

#[cfg(test)]
#[path = "scene_registry_tests.rs"]
mod tests;
