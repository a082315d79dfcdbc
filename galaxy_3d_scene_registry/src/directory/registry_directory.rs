/// Scene-keyed directory of registries.
///
/// The directory is an explicit context object owned by the host session.
/// It memoizes one registry per scene: the first lookup for a scene runs
/// the resolution strategy and caches the result, every later lookup
/// returns the same shared instance until the entry is removed.

use rustc_hash::FxHashMap;
use slotmap::Key;
use crate::error::{Error, Result};
use crate::handle::{AssetHandle, SceneKey};
use crate::registry::{lock_registry, RegistryConfig, SharedRegistry};
use crate::engine_bail;
use super::host::RegistryHost;
use super::resolution::ResolutionStrategy;

/// Directory of per-scene registries
///
/// Cached entries are never evicted automatically. The scene lifecycle
/// collaborator calls `remove_registry` when a scene is unloaded.
pub struct RegistryDirectory {
    registries: FxHashMap<SceneKey, SharedRegistry>,
    strategy: ResolutionStrategy,
    config: RegistryConfig,
}

impl RegistryDirectory {
    /// Create an empty directory with the default strategy and configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty directory whose new registries use `config`
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            registries: FxHashMap::default(),
            strategy: ResolutionStrategy::default(),
            config,
        }
    }

    /// Replace the resolution strategy (builder style)
    pub fn with_strategy(mut self, strategy: ResolutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Configuration given to registries this directory creates
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Resolution strategy used for uncached scenes
    pub fn strategy(&self) -> &ResolutionStrategy {
        &self.strategy
    }

    /// Get the registry for `scene`, resolving and caching it on first use
    ///
    /// # Errors
    ///
    /// - `Error::InvalidScene` if `scene` is null or not live in `host`;
    ///   the caller should skip the operation
    /// - `Error::RegistryUnavailable` if no strategy step produced a registry
    /// - any error returned by a strategy step
    pub fn registry(
        &mut self,
        host: &mut dyn RegistryHost,
        scene: SceneKey,
    ) -> Result<SharedRegistry> {
        if scene.is_null() {
            engine_bail!("galaxy3d::RegistryDirectory",
                Error::InvalidScene("null scene key".to_string()));
        }
        if !host.is_scene_valid(scene) {
            engine_bail!("galaxy3d::RegistryDirectory",
                Error::InvalidScene(format!("{:?} is not a live scene", scene)));
        }

        if let Some(registry) = self.registries.get(&scene) {
            return Ok(registry.clone());
        }

        match self.strategy.resolve(host, scene, &self.config)? {
            Some((registry, step)) => {
                crate::engine_debug!("galaxy3d::RegistryDirectory",
                    "Resolved registry for {:?} via '{}'", scene, step);
                self.registries.insert(scene, registry.clone());
                Ok(registry)
            }
            None => {
                engine_bail!("galaxy3d::RegistryDirectory",
                    Error::RegistryUnavailable(format!("no lookup step resolved {:?}", scene)));
            }
        }
    }

    /// Get the cached registry for `scene` without resolving
    pub fn cached(&self, scene: SceneKey) -> Option<SharedRegistry> {
        self.registries.get(&scene).cloned()
    }

    /// Whether a registry is cached for `scene`
    pub fn contains(&self, scene: SceneKey) -> bool {
        self.registries.contains_key(&scene)
    }

    /// Forget the cached registry for `scene`
    ///
    /// Returns the removed registry, or None if not cached. The registry
    /// itself is untouched and may still be reachable through the host.
    pub fn remove_registry(&mut self, scene: SceneKey) -> Option<SharedRegistry> {
        self.registries.remove(&scene)
    }

    /// Number of cached registries
    pub fn registry_count(&self) -> usize {
        self.registries.len()
    }

    /// All scenes with a cached registry
    pub fn scenes(&self) -> Vec<SceneKey> {
        self.registries.keys().copied().collect()
    }

    /// Forget every cached registry
    pub fn clear(&mut self) {
        self.registries.clear();
    }

    /// Empty every cached registry in place
    ///
    /// Entries stay cached.
    ///
    /// # Errors
    ///
    /// Returns `Error::LockPoisoned` at the first poisoned registry.
    pub fn clear_all(&self) -> Result<()> {
        for registry in self.registries.values() {
            lock_registry(registry)?.clear();
        }
        crate::engine_debug!("galaxy3d::RegistryDirectory",
            "Cleared {} registries", self.registries.len());
        Ok(())
    }

    /// Scenes whose cached registry has unsaved changes
    ///
    /// # Errors
    ///
    /// Returns `Error::LockPoisoned` at the first poisoned registry.
    pub fn dirty_scenes(&self) -> Result<Vec<SceneKey>> {
        let mut scenes = Vec::new();
        for (scene, registry) in &self.registries {
            if lock_registry(registry)?.is_dirty() {
                scenes.push(*scene);
            }
        }
        Ok(scenes)
    }

    /// Associate `handle` with `path` in the registry of `scene`
    ///
    /// Resolves the registry first (see `registry`).
    pub fn set_resource_path(
        &mut self,
        host: &mut dyn RegistryHost,
        scene: SceneKey,
        handle: AssetHandle,
        path: &str,
    ) -> Result<()> {
        let registry = self.registry(host, scene)?;
        lock_registry(&registry)?.set_resource_path(handle, path);
        Ok(())
    }

    /// Get the path of `handle` in the registry of `scene`
    ///
    /// Returns an empty string if the registry has no path for `handle`.
    pub fn resource_path(
        &mut self,
        host: &mut dyn RegistryHost,
        scene: SceneKey,
        handle: AssetHandle,
    ) -> Result<String> {
        let registry = self.registry(host, scene)?;
        let path = lock_registry(&registry)?.resource_path(handle);
        Ok(path)
    }
}

impl Default for RegistryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_directory_tests.rs"]
mod tests;
