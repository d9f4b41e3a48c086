//! Migration from the single-constraint width value to [`DimensionsValue`].
//!
//! Older documents stored width as `{ mode, maxWidth: number, unit,
//! alignment }`. The shape is recognized structurally, so a document can mix
//! both generations of values and every consumer still sees a
//! [`DimensionsValue`].

use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::style::StyleProperties;
use crate::values::{
    BlockAlignment, DimensionConstraint, DimensionUnit, DimensionsMode, DimensionsValue,
    dimensions_value_to_css,
};

/// The pre-dimensions width value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyWidthValue {
    /// Sizing mode.
    pub mode: DimensionsMode,
    /// Width cap as a bare number.
    pub max_width: f64,
    /// Unit for `max_width`.
    pub unit: DimensionUnit,
    /// Placement when the width is capped.
    #[serde(default)]
    pub alignment: BlockAlignment,
}

/// True iff `value` is an object with a numeric `maxWidth`, a string `unit`,
/// a string `mode`, and none of the `minWidth`, `minHeight` or `maxHeight`
/// keys that only the newer shape carries.
#[must_use]
pub fn is_legacy_width_value(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    object.get("maxWidth").is_some_and(Value::is_number)
        && object.get("unit").is_some_and(Value::is_string)
        && object.get("mode").is_some_and(Value::is_string)
        && !["minWidth", "minHeight", "maxHeight"]
            .iter()
            .any(|key| object.contains_key(*key))
}

/// Wrap the legacy scalar into an enabled constraint.
#[must_use]
pub const fn migrate_width_value(legacy: &LegacyWidthValue) -> DimensionsValue {
    DimensionsValue {
        mode: legacy.mode,
        alignment: legacy.alignment,
        max_width: DimensionConstraint::new(legacy.max_width, legacy.unit),
        min_width: None,
        min_height: None,
        max_height: None,
        advanced_mode: Some(false),
    }
}

/// A width field as found in a stored document: either generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WidthInput {
    /// Current shape.
    Dimensions(DimensionsValue),
    /// Pre-dimensions shape.
    Legacy(LegacyWidthValue),
}

impl WidthInput {
    /// The value in the current shape, migrating if needed.
    #[must_use]
    pub const fn to_dimensions(self) -> DimensionsValue {
        match self {
            Self::Dimensions(value) => value,
            Self::Legacy(legacy) => migrate_width_value(&legacy),
        }
    }
}

impl From<DimensionsValue> for WidthInput {
    fn from(value: DimensionsValue) -> Self {
        Self::Dimensions(value)
    }
}

impl From<LegacyWidthValue> for WidthInput {
    fn from(value: LegacyWidthValue) -> Self {
        Self::Legacy(value)
    }
}

impl<'de> Deserialize<'de> for WidthInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        if is_legacy_width_value(&raw) {
            LegacyWidthValue::deserialize(raw)
                .map(Self::Legacy)
                .map_err(D::Error::custom)
        } else {
            DimensionsValue::deserialize(raw)
                .map(Self::Dimensions)
                .map_err(D::Error::custom)
        }
    }
}

/// The dimensions converter for stored width fields: legacy values are
/// migrated before conversion, so callers never migrate explicitly.
#[must_use]
pub fn width_value_to_css(value: &WidthInput) -> Option<StyleProperties> {
    dimensions_value_to_css(&value.to_dimensions())
}
