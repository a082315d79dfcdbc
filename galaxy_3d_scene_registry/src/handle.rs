/// Opaque identities consumed by the registry.
///
/// Both types are slot map keys owned by the host: the registry only stores
/// and compares them. Equality and hashing are by identity (slot index and
/// version), never by the content of the asset or scene.

use slotmap::new_key_type;

new_key_type! {
    /// Identity of a host asset (mesh, texture, material, ...).
    ///
    /// A handle whose slot was freed, or reused under a newer version, no
    /// longer compares equal to any live asset. The registry never checks
    /// liveness.
    pub struct AssetHandle;

    /// Identity of a logical scene.
    ///
    /// `SceneKey::null()` is the null scene identity; the directory rejects it.
    pub struct SceneKey;
}
