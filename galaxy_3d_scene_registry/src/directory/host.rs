/// Host scene graph seen by the directory.
///
/// The directory does not know how scenes and objects are created, loaded
/// or destroyed. It only asks the host these four questions, in the order
/// defined by its resolution strategy.

use crate::error::Result;
use crate::handle::SceneKey;
use crate::registry::SharedRegistry;

/// Scene graph queries needed to resolve a registry
pub trait RegistryHost {
    /// Whether `scene` designates a live scene
    fn is_scene_valid(&self, scene: SceneKey) -> bool;

    /// A registry attached to an object of `scene`'s graph, if any
    fn find_registry_in_scene(&self, scene: SceneKey) -> Option<SharedRegistry>;

    /// Every registry known to the host process, in search order
    ///
    /// Covers registries created outside the expected scene graph (editor
    /// tooling, a previous session). May include registries that belong to
    /// other scenes; `ProcessLookup` filters those out.
    fn registries_in_process(&self) -> Vec<SharedRegistry>;

    /// Create a container object named `container_name` in `scene` and
    /// attach `registry` to it
    ///
    /// # Errors
    ///
    /// Returns an error if the scene cannot hold new objects.
    fn attach_registry(
        &mut self,
        scene: SceneKey,
        container_name: &str,
        registry: SharedRegistry,
    ) -> Result<()>;
}
