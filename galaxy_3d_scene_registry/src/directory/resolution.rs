/// Registry resolution strategy.
///
/// Resolving a registry for a scene that the directory has not cached yet
/// runs an ordered list of lookup steps; the first step returning a
/// registry wins. The default order is:
///
/// 1. `SceneGraphLookup`: a registry attached to the scene's object graph
/// 2. `ProcessLookup`: a registry elsewhere in the host process that belongs
///    to no scene or to this scene
/// 3. `CreateInScene`: a new registry on a new container object in the scene

use slotmap::Key;
use crate::error::Result;
use crate::handle::SceneKey;
use crate::registry::{lock_registry, RegistryConfig, SceneRegistry, SharedRegistry};
use super::host::RegistryHost;

/// One step of a resolution strategy
pub trait RegistryLookup: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Try to produce a registry for `scene`
    ///
    /// Returns `Ok(None)` to let the next step try.
    fn lookup(
        &self,
        host: &mut dyn RegistryHost,
        scene: SceneKey,
        config: &RegistryConfig,
    ) -> Result<Option<SharedRegistry>>;
}

/// Adopt a registry already attached to the scene's object graph
pub struct SceneGraphLookup;

impl RegistryLookup for SceneGraphLookup {
    fn name(&self) -> &'static str {
        "scene_graph"
    }

    fn lookup(
        &self,
        host: &mut dyn RegistryHost,
        scene: SceneKey,
        _config: &RegistryConfig,
    ) -> Result<Option<SharedRegistry>> {
        Ok(host.find_registry_in_scene(scene))
    }
}

/// Adopt a registry found elsewhere in the host process
///
/// Only registries bound to no scene (null key) or to the requested scene
/// are adopted. A registry owned by another scene is never shared.
pub struct ProcessLookup;

impl RegistryLookup for ProcessLookup {
    fn name(&self) -> &'static str {
        "process"
    }

    fn lookup(
        &self,
        host: &mut dyn RegistryHost,
        scene: SceneKey,
        _config: &RegistryConfig,
    ) -> Result<Option<SharedRegistry>> {
        for registry in host.registries_in_process() {
            let owner = lock_registry(&registry)?.scene();
            if owner.is_null() || owner == scene {
                return Ok(Some(registry));
            }
        }
        Ok(None)
    }
}

/// Create a new registry and attach it to a new container object in the scene
pub struct CreateInScene;

impl RegistryLookup for CreateInScene {
    fn name(&self) -> &'static str {
        "create_in_scene"
    }

    fn lookup(
        &self,
        host: &mut dyn RegistryHost,
        scene: SceneKey,
        config: &RegistryConfig,
    ) -> Result<Option<SharedRegistry>> {
        let registry = SceneRegistry::with_config(scene, config.clone()).into_shared();
        host.attach_registry(scene, &config.container_name, registry.clone())?;

        crate::engine_info!("galaxy3d::CreateInScene",
            "Created registry '{}' for {:?}", config.container_name, scene);

        Ok(Some(registry))
    }
}

/// Ordered list of lookup steps
pub struct ResolutionStrategy {
    steps: Vec<Box<dyn RegistryLookup>>,
}

impl ResolutionStrategy {
    /// Create a strategy with no steps (resolves nothing)
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step (builder style)
    pub fn with_step<L: RegistryLookup + 'static>(mut self, step: L) -> Self {
        self.push(step);
        self
    }

    /// Append a step
    pub fn push<L: RegistryLookup + 'static>(&mut self, step: L) {
        self.steps.push(Box::new(step));
    }

    /// Names of the steps, in order
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the strategy has no step
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run the steps in order until one produces a registry
    ///
    /// Returns the registry and the name of the step that produced it, or
    /// None if every step declined.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first step error.
    pub fn resolve(
        &self,
        host: &mut dyn RegistryHost,
        scene: SceneKey,
        config: &RegistryConfig,
    ) -> Result<Option<(SharedRegistry, &'static str)>> {
        for step in &self.steps {
            if let Some(registry) = step.lookup(host, scene, config)? {
                return Ok(Some((registry, step.name())));
            }
        }
        Ok(None)
    }
}

impl Default for ResolutionStrategy {
    fn default() -> Self {
        Self::new()
            .with_step(SceneGraphLookup)
            .with_step(ProcessLookup)
            .with_step(CreateInScene)
    }
}

#[cfg(test)]
#[path = "resolution_tests.rs"]
mod tests;
