//! Registry module
//!
//! Provides the handle to path mapping, its persisted form, and the
//! per-scene registry wrapping them.

mod config;
mod path_mapping;
mod serialized_form;
mod scene_registry;

pub use config::{RegistryConfig, DEFAULT_CONTAINER_NAME};
pub use path_mapping::PathMapping;
pub use serialized_form::SerializedForm;
pub use scene_registry::{SceneRegistry, SharedRegistry, lock_registry};
