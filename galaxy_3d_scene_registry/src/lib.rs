/*!
# Galaxy3D Scene Registry

Scene-scoped resource path registry for the Galaxy3D engine.

Each scene owns a registry associating opaque asset handles with canonical
scene paths. The association survives a save/reload cycle by round-tripping
through a flat serialized form made of two parallel sequences.

## Architecture

- **canonicalize**: Pure path canonicalization (spaces, backslashes, root prefix)
- **PathMapping**: Handle to path association and its serialized form
- **SceneRegistry**: Per-scene wrapper exposing get/set and a dirty signal
- **RegistryDirectory**: Scene-keyed lookup/creation of registries
- **RegistryHost**: Trait implemented by the host scene graph

The directory is an explicit context object owned by the host session.
*/

// Internal modules
mod error;
mod handle;
pub mod log;
pub mod path;
pub mod registry;
pub mod directory;

#[cfg(test)]
mod test_utils;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Opaque identities
    pub use crate::handle::{AssetHandle, SceneKey};

    // Logging sub-module (types and logger control, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, log, log_detailed,
        };
    }

    // Path canonicalization
    pub mod path {
        pub use crate::path::*;
    }

    // Registry sub-module
    pub mod registry {
        pub use crate::registry::*;
    }

    // Directory sub-module
    pub mod directory {
        pub use crate::directory::*;
    }
}

// Re-export key trait so callers can use SceneKey::null() / is_null()
pub use slotmap::Key;
