/// Registry configuration
///
/// Shared by every registry a directory creates.

/// Name given to the container object created to hold a new registry
pub const DEFAULT_CONTAINER_NAME: &str = "SceneRegistry";

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Root prefix removed from every path stored through `set_resource_path`.
    /// Empty by default (nothing is removed).
    pub root_prefix: String,
    /// Name of the container object created in a scene for a new registry
    pub container_name: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            root_prefix: String::new(),
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
        }
    }
}
