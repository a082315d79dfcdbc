/// Tests for PathMapping
///
/// These tests validate set/get semantics, the serialized form round trip,
/// corrupted form recovery, and serde through the two-sequence shape.

use super::*;
use crate::log::{self, LogSeverity};
use crate::test_utils::{asset_handles, capture_logs, count_severity, entries_from};
use proptest::prelude::*;
use serial_test::serial;

// ============================================================================
// Tests: Set / Get
// ============================================================================

#[test]
fn test_path_mapping_new_is_empty() {
    let mapping = PathMapping::new();
    assert!(mapping.is_empty());
    assert_eq!(mapping.len(), 0);
}

#[test]
fn test_set_path_canonicalizes() {
    let handles = asset_handles(1);
    let mut mapping = PathMapping::new();

    let stored = mapping.set_path(handles[0], "My Assets\\hero.obj", "");
    assert_eq!(stored, "My%Assets/hero.obj");
    assert_eq!(mapping.path(handles[0]).unwrap(), "My%Assets/hero.obj");
}

#[test]
fn test_set_path_applies_root_prefix() {
    let handles = asset_handles(1);
    let mut mapping = PathMapping::new();

    mapping.set_path(handles[0], "C:/project/assets/tex.png", "C:/project/");
    assert_eq!(mapping.path(handles[0]).unwrap(), "assets/tex.png");
}

#[test]
fn test_set_path_overwrites() {
    let handles = asset_handles(1);
    let mut mapping = PathMapping::new();

    mapping.set_path(handles[0], "first.png", "");
    mapping.set_path(handles[0], "second png", "");
    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping.path(handles[0]).unwrap(), "second%png");
}

#[test]
fn test_path_missing_is_none() {
    let handles = asset_handles(2);
    let mut mapping = PathMapping::new();
    mapping.set_path(handles[0], "a", "");

    assert!(mapping.path(handles[1]).is_none());
}

#[test]
fn test_empty_path_is_distinct_from_missing() {
    let handles = asset_handles(2);
    let mut mapping = PathMapping::new();
    mapping.set_path(handles[0], "", "");

    assert_eq!(mapping.path(handles[0]).unwrap(), "");
    assert!(mapping.contains(handles[0]));
    assert!(mapping.path(handles[1]).is_none());
}

#[test]
fn test_remove_path() {
    let handles = asset_handles(1);
    let mut mapping = PathMapping::new();
    mapping.set_path(handles[0], "a", "");

    assert_eq!(mapping.remove_path(handles[0]).unwrap(), "a");
    assert!(mapping.remove_path(handles[0]).is_none());
    assert!(mapping.is_empty());
}

#[test]
fn test_handles_for_path_returns_duplicates() {
    let handles = asset_handles(3);
    let mut mapping = PathMapping::new();
    mapping.set_path(handles[0], "shared.png", "");
    mapping.set_path(handles[1], "shared.png", "");
    mapping.set_path(handles[2], "other.png", "");

    let mut found = mapping.handles_for_path("shared.png");
    found.sort();
    let mut expected = vec![handles[0], handles[1]];
    expected.sort();
    assert_eq!(found, expected);
    assert!(mapping.handles_for_path("missing.png").is_empty());
}

#[test]
fn test_iter_and_clear() {
    let handles = asset_handles(3);
    let mut mapping = PathMapping::new();
    for (i, handle) in handles.iter().enumerate() {
        mapping.set_path(*handle, &format!("asset_{}", i), "");
    }

    assert_eq!(mapping.iter().count(), 3);
    mapping.clear();
    assert!(mapping.is_empty());
    assert_eq!(mapping.iter().count(), 0);
}

// ============================================================================
// Tests: Serialized Form
// ============================================================================

#[test]
fn test_to_serialized_form_is_aligned() {
    let handles = asset_handles(3);
    let mut mapping = PathMapping::new();
    for (i, handle) in handles.iter().enumerate() {
        mapping.set_path(*handle, &format!("asset {}", i), "");
    }

    let form = mapping.to_serialized_form();
    assert_eq!(form.keys.len(), 3);
    assert_eq!(form.values.len(), 3);
    for (key, value) in form.keys.iter().zip(&form.values) {
        assert_eq!(mapping.path(*key).unwrap().as_str(), value);
    }
}

#[test]
fn test_round_trip_preserves_mapping() {
    let handles = asset_handles(4);
    let mut mapping = PathMapping::new();
    for (i, handle) in handles.iter().enumerate() {
        mapping.set_path(*handle, &format!("dir\\asset {}.png", i), "");
    }

    let restored = PathMapping::from_serialized_form(mapping.to_serialized_form());
    assert_eq!(restored, mapping);
}

#[test]
fn test_from_empty_form_is_empty() {
    let mapping = PathMapping::from_serialized_form(SerializedForm::new());
    assert!(mapping.is_empty());
}

#[test]
fn test_from_form_last_duplicate_wins() {
    let handles = asset_handles(1);
    let form = SerializedForm {
        keys: vec![handles[0], handles[0]],
        values: vec!["first".to_string(), "second".to_string()],
    };

    let mapping = PathMapping::from_serialized_form(form);
    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping.path(handles[0]).unwrap(), "second");
}

#[test]
fn test_from_form_keeps_values_verbatim() {
    let handles = asset_handles(1);
    let form = SerializedForm {
        keys: vec![handles[0]],
        values: vec!["assets/tex.png".to_string()],
    };

    let mapping = PathMapping::from_serialized_form(form);
    assert_eq!(mapping.path(handles[0]).unwrap(), "assets/tex.png");
}

#[test]
#[serial]
fn test_from_corrupted_form_restores_common_prefix() {
    let entries = capture_logs();
    let handles = asset_handles(3);
    let form = SerializedForm {
        keys: handles.clone(),
        values: vec!["x".to_string(), "y".to_string()],
    };

    let mapping = PathMapping::from_serialized_form(form);

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.path(handles[0]).unwrap(), "x");
    assert_eq!(mapping.path(handles[1]).unwrap(), "y");
    assert!(mapping.path(handles[2]).is_none());
    assert_eq!(count_severity(&entries, LogSeverity::Warn), 1);
    let captured = entries_from(&entries, "galaxy3d::PathMapping");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Warn);
    assert!(captured[0].message.contains("3 keys, 2 values"));

    log::reset_logger();
}

#[test]
#[serial]
fn test_from_consistent_form_logs_nothing() {
    let entries = capture_logs();
    let handles = asset_handles(2);
    let form = SerializedForm {
        keys: handles,
        values: vec!["a".to_string(), "b".to_string()],
    };

    PathMapping::from_serialized_form(form);
    assert_eq!(count_severity(&entries, LogSeverity::Warn), 0);

    log::reset_logger();
}

// ============================================================================
// Tests: Serde
// ============================================================================

#[test]
fn test_serde_uses_two_sequence_shape() {
    let handles = asset_handles(2);
    let mut mapping = PathMapping::new();
    mapping.set_path(handles[0], "a b", "");
    mapping.set_path(handles[1], "c\\d", "");

    let value = serde_json::to_value(&mapping).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["keys"].as_array().unwrap().len(), 2);
    assert_eq!(object["values"].as_array().unwrap().len(), 2);

    let restored: PathMapping = serde_json::from_value(value).unwrap();
    assert_eq!(restored, mapping);
}

#[test]
#[serial]
fn test_serde_tolerates_corrupted_input() {
    let entries = capture_logs();
    let handles = asset_handles(2);
    let mut mapping = PathMapping::new();
    mapping.set_path(handles[0], "a", "");
    mapping.set_path(handles[1], "b", "");

    let mut value = serde_json::to_value(&mapping).unwrap();
    value["values"].as_array_mut().unwrap().pop();

    let restored: PathMapping = serde_json::from_value(value).unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(count_severity(&entries, LogSeverity::Warn), 1);

    log::reset_logger();
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Rebuilding from the serialized form reproduces the same key set and values.
    #[test]
    fn prop_round_trip_law(paths in proptest::collection::vec(".*", 0..16)) {
        let handles = asset_handles(paths.len());
        let mut mapping = PathMapping::new();
        for (handle, raw) in handles.iter().zip(&paths) {
            mapping.set_path(*handle, raw, "");
        }

        let restored = PathMapping::from_serialized_form(mapping.to_serialized_form());
        prop_assert_eq!(restored.len(), mapping.len());
        for (handle, path) in mapping.iter() {
            prop_assert_eq!(restored.path(handle), Some(path));
        }
    }
}
