/// Canonical scene paths.
///
/// A ScenePath is the stable string identifier a registry stores for an
/// asset handle. It can only be built through [`canonicalize`] (or restored
/// from a persisted form that was built that way), so every stored value
/// has spaces replaced, forward slashes only, and the root prefix removed.

use std::fmt;
use std::ops::Deref;
use serde::{Deserialize, Serialize};

/// Character substituted for every space in a canonical path
pub const SPACE_SENTINEL: char = '%';

/// Canonical string identifier for a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenePath(String);

impl ScenePath {
    /// Borrow the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the path and return the underlying string
    pub fn into_string(self) -> String {
        self.0
    }

    /// Rebuild a path from a persisted value, stored verbatim.
    pub(crate) fn from_persisted(value: String) -> Self {
        Self(value)
    }
}

impl Deref for ScenePath {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ScenePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScenePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ScenePath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ScenePath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<ScenePath> for String {
    fn from(path: ScenePath) -> Self {
        path.0
    }
}

/// Canonicalize a raw path string
///
/// Applied in order:
/// 1. every space becomes [`SPACE_SENTINEL`]
/// 2. every backslash becomes a forward slash
/// 3. if `root_prefix` is non-empty, every occurrence of it is removed
///
/// The root prefix is matched after steps 1 and 2, so it must be given in
/// canonical form. The function is total: an empty input gives an empty path.
/// With an empty root prefix it is idempotent.
///
/// # Example
///
/// ```
/// use galaxy_3d_scene_registry::galaxy3d::path::canonicalize;
///
/// assert_eq!(canonicalize("C:\\assets\\My Model.obj", ""), "C:/assets/My%Model.obj");
/// assert_eq!(canonicalize("C:/project/assets/tex.png", "C:/project/"), "assets/tex.png");
/// ```
pub fn canonicalize(raw: &str, root_prefix: &str) -> ScenePath {
    let mut path = normalize_separators(raw);
    if !root_prefix.is_empty() {
        path = path.replace(root_prefix, "");
    }
    ScenePath(path)
}

/// Canonicalize a raw path string, removing only the first root prefix match
///
/// Same as [`canonicalize`] except for step 3, which removes the first
/// occurrence of `root_prefix` only.
pub fn canonicalize_prefix_first(raw: &str, root_prefix: &str) -> ScenePath {
    let mut path = normalize_separators(raw);
    if !root_prefix.is_empty() {
        path = path.replacen(root_prefix, "", 1);
    }
    ScenePath(path)
}

fn normalize_separators(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            ' ' => SPACE_SENTINEL,
            '\\' => '/',
            other => other,
        })
        .collect()
}

#[cfg(test)]
#[path = "scene_path_tests.rs"]
mod tests;
