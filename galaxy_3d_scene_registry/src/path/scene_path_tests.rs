/// Tests for path canonicalization
///
/// These tests validate space and separator replacement, root prefix
/// removal (both interpretations) and idempotence.

use super::*;
use proptest::prelude::*;

// ============================================================================
// Tests: Separators and Spaces
// ============================================================================

#[test]
fn test_canonicalize_spaces_and_backslashes() {
    let path = canonicalize("C:\\assets\\My Model.obj", "");
    assert_eq!(path, "C:/assets/My%Model.obj");
}

#[test]
fn test_canonicalize_every_space_replaced() {
    let path = canonicalize("a b  c ", "");
    assert_eq!(path.as_str(), "a%b%%c%");
}

#[test]
fn test_canonicalize_mixed_separators() {
    let path = canonicalize("textures\\ui/icons\\close.png", "");
    assert_eq!(path, "textures/ui/icons/close.png");
}

#[test]
fn test_canonicalize_empty_input() {
    assert_eq!(canonicalize("", ""), "");
    assert_eq!(canonicalize("", "C:/project/"), "");
}

#[test]
fn test_canonicalize_no_case_folding_or_extension_stripping() {
    let path = canonicalize("Meshes/Hero.FBX", "");
    assert_eq!(path, "Meshes/Hero.FBX");
}

// ============================================================================
// Tests: Root Prefix
// ============================================================================

#[test]
fn test_canonicalize_strips_root_prefix() {
    let path = canonicalize("C:/project/assets/tex.png", "C:/project/");
    assert_eq!(path, "assets/tex.png");
}

#[test]
fn test_canonicalize_root_prefix_matched_after_separator_normalization() {
    let path = canonicalize("C:\\project\\assets\\tex.png", "C:/project/");
    assert_eq!(path, "assets/tex.png");
}

#[test]
fn test_canonicalize_root_prefix_removed_anywhere() {
    let path = canonicalize("mods/C:/project/tex.png", "C:/project/");
    assert_eq!(path, "mods/tex.png");
}

#[test]
fn test_canonicalize_root_prefix_absent() {
    let path = canonicalize("D:/other/tex.png", "C:/project/");
    assert_eq!(path, "D:/other/tex.png");
}

#[test]
fn test_root_prefix_repeated_replace_all() {
    let path = canonicalize("lib/a/lib/b", "lib/");
    assert_eq!(path, "a/b");
}

#[test]
fn test_root_prefix_repeated_replace_first() {
    let path = canonicalize_prefix_first("lib/a/lib/b", "lib/");
    assert_eq!(path, "a/lib/b");
}

#[test]
fn test_root_prefix_interpretations_agree_on_single_match() {
    let raw = "C:/project/assets/tex.png";
    assert_eq!(
        canonicalize(raw, "C:/project/"),
        canonicalize_prefix_first(raw, "C:/project/")
    );
}

// ============================================================================
// Tests: ScenePath
// ============================================================================

#[test]
fn test_scene_path_display_and_deref() {
    let path = canonicalize("a b\\c", "");
    assert_eq!(format!("{}", path), "a%b/c");
    assert_eq!(path.len(), 5);
    assert!(path.starts_with("a%"));
    assert_eq!(String::from(path.clone()), "a%b/c");
    assert_eq!(path.into_string(), "a%b/c");
}

#[test]
fn test_scene_path_serializes_as_plain_string() {
    let path = canonicalize("My Folder\\tex.png", "");
    let json = serde_json::to_string(&path).unwrap();
    assert_eq!(json, "\"My%Folder/tex.png\"");

    let restored: ScenePath = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, path);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Canonicalizing twice with an empty root prefix changes nothing.
    #[test]
    fn prop_canonicalize_idempotent(raw in ".*") {
        let once = canonicalize(&raw, "");
        let twice = canonicalize(once.as_str(), "");
        prop_assert_eq!(once, twice);
    }

    /// Canonical paths never contain spaces or backslashes.
    #[test]
    fn prop_canonical_form_invariants(raw in ".*", prefix in "[a-z/]{0,4}") {
        let path = canonicalize(&raw, &prefix);
        prop_assert!(!path.contains(' '));
        prop_assert!(!path.contains('\\'));
    }

    /// Separator normalization preserves character count.
    #[test]
    fn prop_normalization_preserves_length(raw in "[a-zA-Z \\\\/.]{0,32}") {
        let path = canonicalize(&raw, "");
        prop_assert_eq!(path.chars().count(), raw.chars().count());
    }
}
