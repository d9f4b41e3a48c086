//! Integration tests for dimensions and the legacy width migration.

use pagestyle_css::values::{
    BlockAlignment, DimensionConstraint, DimensionUnit, DimensionsMode,
};
use pagestyle_css::{
    DimensionsValue, LegacyWidthValue, WidthInput, dimensions_value_to_css, is_legacy_width_value,
    migrate_width_value, width_value_to_css,
};
use serde_json::json;

#[test]
fn test_default_is_centered_container() {
    let style = dimensions_value_to_css(&DimensionsValue::default()).unwrap();
    assert_eq!(
        style.to_string(),
        "width: 100%; max-width: 1200px; margin-left: auto; margin-right: auto;"
    );
}

#[test]
fn test_full_mode_ignores_width_constraints() {
    let value = DimensionsValue {
        mode: DimensionsMode::Full,
        min_width: Some(DimensionConstraint::new(300.0, DimensionUnit::Px)),
        ..DimensionsValue::default()
    };
    let style = dimensions_value_to_css(&value).unwrap();
    assert_eq!(style.to_string(), "width: 100%;");
}

#[test]
fn test_disabled_constraints_are_inert() {
    let value = DimensionsValue {
        mode: DimensionsMode::Custom,
        alignment: BlockAlignment::Left,
        max_width: DimensionConstraint::disabled(800.0, DimensionUnit::Px),
        min_width: Some(DimensionConstraint::disabled(200.0, DimensionUnit::Px)),
        min_height: Some(DimensionConstraint::disabled(50.0, DimensionUnit::Vh)),
        max_height: Some(DimensionConstraint::disabled(90.0, DimensionUnit::Vh)),
        advanced_mode: Some(true),
    };
    let style = dimensions_value_to_css(&value).unwrap();
    assert!(!style.contains("max-width"));
    assert!(!style.contains("min-width"));
    assert!(!style.contains("min-height"));
    assert!(!style.contains("max-height"));
    assert_eq!(style.get("margin-left"), Some("0"));
    assert_eq!(style.get("margin-right"), Some("auto"));
}

#[test]
fn test_height_constraints_apply_in_full_mode() {
    let value = DimensionsValue {
        mode: DimensionsMode::Full,
        min_height: Some(DimensionConstraint::new(50.0, DimensionUnit::Vh)),
        ..DimensionsValue::default()
    };
    let style = dimensions_value_to_css(&value).unwrap();
    assert_eq!(style.get("min-height"), Some("50vh"));
    assert!(!style.contains("max-width"));
}

#[test]
fn test_right_alignment_and_percent_unit() {
    let value = DimensionsValue {
        alignment: BlockAlignment::Right,
        max_width: DimensionConstraint::new(80.0, DimensionUnit::Percent),
        ..DimensionsValue::default()
    };
    let style = dimensions_value_to_css(&value).unwrap();
    assert_eq!(style.get("max-width"), Some("80%"));
    assert_eq!(style.get("margin-left"), Some("auto"));
    assert_eq!(style.get("margin-right"), Some("0"));
}

#[test]
fn test_legacy_shape_is_detected() {
    let legacy = json!({ "mode": "contained", "maxWidth": 960, "unit": "px", "alignment": "left" });
    assert!(is_legacy_width_value(&legacy));
    assert!(!is_legacy_width_value(
        &serde_json::to_value(DimensionsValue::default()).unwrap()
    ));
}

#[test]
fn test_migration_preserves_output() {
    let legacy = LegacyWidthValue {
        mode: DimensionsMode::Contained,
        max_width: 960.0,
        unit: DimensionUnit::Px,
        alignment: BlockAlignment::Left,
    };
    let migrated = migrate_width_value(&legacy);
    assert_eq!(migrated.advanced_mode, Some(false));
    assert!(migrated.max_width.enabled);
    assert_eq!(
        width_value_to_css(&WidthInput::Legacy(legacy)),
        dimensions_value_to_css(&migrated)
    );
    assert_eq!(
        width_value_to_css(&WidthInput::Legacy(legacy)).unwrap().to_string(),
        "width: 100%; max-width: 960px; margin-left: 0; margin-right: auto;"
    );
}

#[test]
fn test_width_input_decodes_both_generations() {
    let legacy: WidthInput =
        serde_json::from_value(json!({ "mode": "full", "maxWidth": 100, "unit": "%" })).unwrap();
    assert!(matches!(legacy, WidthInput::Legacy(_)));
    assert_eq!(legacy.to_dimensions().mode, DimensionsMode::Full);

    let current: WidthInput = serde_json::from_value(json!({
        "mode": "contained",
        "alignment": "center",
        "maxWidth": { "value": 720, "unit": "px", "enabled": true }
    }))
    .unwrap();
    assert!(matches!(current, WidthInput::Dimensions(_)));
    assert_eq!(
        width_value_to_css(&current).unwrap().get("max-width"),
        Some("720px")
    );
}
