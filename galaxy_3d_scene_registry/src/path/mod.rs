//! Scene path module
//!
//! Provides the canonical string identifier for resources and the pure
//! canonicalization function that produces it.

mod scene_path;

pub use scene_path::{
    ScenePath, canonicalize, canonicalize_prefix_first, SPACE_SENTINEL,
};
