//! Width and height constraints
//!
//! [CSS Box Sizing Level 3](https://www.w3.org/TR/css-sizing-3/)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::keyword::lenient_keyword;
use crate::style::{StyleProperties, format_length};

/// Units a dimension constraint may use.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum DimensionUnit {
    /// Pixels.
    #[default]
    Px,
    /// Root font size multiples.
    Rem,
    /// Percentage of the containing block.
    #[strum(serialize = "%")]
    Percent,
    /// Percentage of the viewport width.
    Vw,
    /// Percentage of the viewport height.
    Vh,
}

lenient_keyword!(DimensionUnit, "dimension unit");

/// How the element sizes itself horizontally.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum DimensionsMode {
    /// Always 100% wide; constraints on width and alignment are ignored.
    Full,
    /// Capped by `maxWidth` and aligned inside the parent.
    #[default]
    Contained,
    /// Like `contained`, with the advanced constraints exposed in the editor.
    Custom,
}

lenient_keyword!(DimensionsMode, "dimensions mode");

/// Horizontal placement of a width-capped block.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum BlockAlignment {
    /// `margin-left: 0; margin-right: auto`
    Left,
    /// `margin-left: auto; margin-right: auto`
    #[default]
    Center,
    /// `margin-left: auto; margin-right: 0`
    Right,
}

lenient_keyword!(BlockAlignment, "alignment");

/// A single optional size limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionConstraint {
    /// Magnitude.
    pub value: f64,
    /// Unit for `value`.
    #[serde(default)]
    pub unit: DimensionUnit,
    /// A disabled constraint never reaches the output.
    #[serde(default)]
    pub enabled: bool,
}

impl DimensionConstraint {
    /// An enabled constraint.
    #[must_use]
    pub const fn new(value: f64, unit: DimensionUnit) -> Self {
        Self {
            value,
            unit,
            enabled: true,
        }
    }

    /// A disabled constraint that keeps its value for the editor.
    #[must_use]
    pub const fn disabled(value: f64, unit: DimensionUnit) -> Self {
        Self {
            value,
            unit,
            enabled: false,
        }
    }

    /// The CSS length, or `None` when disabled.
    #[must_use]
    pub fn to_css(self) -> Option<String> {
        self.enabled
            .then(|| format_length(self.value, &self.unit.to_string()))
    }
}

/// Width mode, alignment and optional min/max constraints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionsValue {
    /// Sizing mode.
    #[serde(default)]
    pub mode: DimensionsMode,
    /// Placement when the width is capped.
    #[serde(default)]
    pub alignment: BlockAlignment,
    /// Upper width limit.
    pub max_width: DimensionConstraint,
    /// Lower width limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<DimensionConstraint>,
    /// Lower height limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<DimensionConstraint>,
    /// Upper height limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<DimensionConstraint>,
    /// Whether the editor shows the min/max height controls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_mode: Option<bool>,
}

impl Default for DimensionsValue {
    fn default() -> Self {
        Self {
            mode: DimensionsMode::Contained,
            alignment: BlockAlignment::Center,
            max_width: DimensionConstraint::new(1200.0, DimensionUnit::Px),
            min_width: None,
            min_height: None,
            max_height: None,
            advanced_mode: None,
        }
    }
}

/// [§ 5.2 Min and max sizes](https://www.w3.org/TR/css-sizing-3/#min-size-properties)
///
/// `full` emits `width: 100%` only. `contained` and `custom` also emit the
/// enabled width constraints and the alignment margins. Enabled height
/// constraints apply in every mode.
#[must_use]
pub fn dimensions_value_to_css(value: &DimensionsValue) -> Option<StyleProperties> {
    let mut style = StyleProperties::new().with("width", "100%");

    if value.mode != DimensionsMode::Full {
        if let Some(max) = value.max_width.to_css() {
            style.set("max-width", max);
        }
        if let Some(min) = value.min_width.and_then(DimensionConstraint::to_css) {
            style.set("min-width", min);
        }
        let (left, right) = match value.alignment {
            BlockAlignment::Left => ("0", "auto"),
            BlockAlignment::Center => ("auto", "auto"),
            BlockAlignment::Right => ("auto", "0"),
        };
        style.set("margin-left", left);
        style.set("margin-right", right);
    }

    if let Some(min) = value.min_height.and_then(DimensionConstraint::to_css) {
        style.set("min-height", min);
    }
    if let Some(max) = value.max_height.and_then(DimensionConstraint::to_css) {
        style.set("max-height", max);
    }

    style.non_empty()
}
