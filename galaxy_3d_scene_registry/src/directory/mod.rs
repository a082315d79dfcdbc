//! Registry directory module
//!
//! Provides the scene-keyed directory of registries, the ordered resolution
//! strategy it runs for uncached scenes, and the host interface that
//! strategy consults.

mod host;
mod mock_host;
mod registry_directory;
mod resolution;

pub use host::RegistryHost;
pub use mock_host::{MockRegistryHost, MockScene, MockObject};
pub use registry_directory::RegistryDirectory;
pub use resolution::{
    RegistryLookup, ResolutionStrategy,
    SceneGraphLookup, ProcessLookup, CreateInScene,
};
