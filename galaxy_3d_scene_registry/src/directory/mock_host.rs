/// In-memory RegistryHost
///
/// A minimal scene graph: scenes hold named objects, and an object may
/// carry a registry. Registries can also live outside any scene (detached),
/// the way editor tooling may create them. Used by tests and by hosts
/// without a scene graph of their own.

use slotmap::SlotMap;
use crate::error::{Error, Result};
use crate::handle::SceneKey;
use crate::registry::SharedRegistry;
use super::host::RegistryHost;

/// Object in a mock scene
pub struct MockObject {
    /// Object name
    pub name: String,
    /// Registry attached to this object, if any
    pub registry: Option<SharedRegistry>,
}

/// Scene in the mock host
pub struct MockScene {
    /// Scene name
    pub name: String,
    /// Objects of the scene graph, flattened
    pub objects: Vec<MockObject>,
}

/// In-memory scene graph implementing RegistryHost
pub struct MockRegistryHost {
    scenes: SlotMap<SceneKey, MockScene>,
    detached: Vec<SharedRegistry>,
}

impl MockRegistryHost {
    /// Create an empty host
    pub fn new() -> Self {
        Self {
            scenes: SlotMap::with_key(),
            detached: Vec::new(),
        }
    }

    /// Create an empty scene
    pub fn create_scene(&mut self, name: &str) -> SceneKey {
        self.scenes.insert(MockScene {
            name: name.to_string(),
            objects: Vec::new(),
        })
    }

    /// Unload a scene and everything attached to it
    ///
    /// Returns false if the scene did not exist. The key becomes invalid.
    pub fn unload_scene(&mut self, scene: SceneKey) -> bool {
        self.scenes.remove(scene).is_some()
    }

    /// Get a scene
    pub fn scene(&self, scene: SceneKey) -> Option<&MockScene> {
        self.scenes.get(scene)
    }

    /// Number of live scenes
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Add an object to a scene, optionally carrying a registry
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidScene` if the scene does not exist.
    pub fn add_object(
        &mut self,
        scene: SceneKey,
        name: &str,
        registry: Option<SharedRegistry>,
    ) -> Result<()> {
        let target = self.scenes.get_mut(scene)
            .ok_or_else(|| Error::InvalidScene(format!("{:?} is not a live scene", scene)))?;
        target.objects.push(MockObject {
            name: name.to_string(),
            registry,
        });
        Ok(())
    }

    /// Register a registry that belongs to no scene
    pub fn add_detached_registry(&mut self, registry: SharedRegistry) {
        self.detached.push(registry);
    }

    /// Names of the objects in a scene (empty if the scene does not exist)
    pub fn object_names(&self, scene: SceneKey) -> Vec<&str> {
        self.scenes
            .get(scene)
            .map(|s| s.objects.iter().map(|o| o.name.as_str()).collect())
            .unwrap_or_default()
    }
}

impl Default for MockRegistryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryHost for MockRegistryHost {
    fn is_scene_valid(&self, scene: SceneKey) -> bool {
        self.scenes.contains_key(scene)
    }

    fn find_registry_in_scene(&self, scene: SceneKey) -> Option<SharedRegistry> {
        self.scenes
            .get(scene)?
            .objects
            .iter()
            .find_map(|object| object.registry.clone())
    }

    fn registries_in_process(&self) -> Vec<SharedRegistry> {
        let attached = self.scenes
            .values()
            .flat_map(|scene| scene.objects.iter())
            .filter_map(|object| object.registry.clone());
        self.detached.iter().cloned().chain(attached).collect()
    }

    fn attach_registry(
        &mut self,
        scene: SceneKey,
        container_name: &str,
        registry: SharedRegistry,
    ) -> Result<()> {
        self.add_object(scene, container_name, Some(registry))
    }
}

#[cfg(test)]
#[path = "mock_host_tests.rs"]
mod tests;
