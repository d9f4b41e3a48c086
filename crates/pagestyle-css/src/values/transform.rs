//! Transform values
//!
//! [CSS Transforms Level 1](https://www.w3.org/TR/css-transforms-1/)
//! [CSS Transforms Level 2](https://www.w3.org/TR/css-transforms-2/)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::keyword::lenient_keyword;
use super::position::AnchorPosition;
use crate::style::{StyleProperties, format_length, format_number};

/// Units for the translate offsets.
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
pub enum TranslateUnit {
    /// Pixels.
    #[default]
    Px,
    /// Percentage of the element's own box.
    #[strum(serialize = "%")]
    Percent,
    /// Root font size multiples.
    Rem,
}

lenient_keyword!(TranslateUnit, "translate unit");

/// A transform as the editor stores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_field_names)]
pub struct TransformValue {
    /// 2-D rotation in degrees.
    pub rotate: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Whether the editor keeps both scale factors equal.
    pub scale_locked: bool,
    /// Horizontal skew in degrees.
    pub skew_x: f64,
    /// Vertical skew in degrees.
    pub skew_y: f64,
    /// Horizontal offset.
    pub translate_x: f64,
    /// Vertical offset.
    pub translate_y: f64,
    /// Unit of both offsets.
    pub translate_unit: TranslateUnit,
    /// `transform-origin`
    pub origin: AnchorPosition,
    /// Enables the perspective and 3-D rotation fields.
    #[serde(rename = "enable3D")]
    pub enable_3d: bool,
    /// Perspective distance in pixels.
    pub perspective: f64,
    /// Rotation about the X axis in degrees.
    pub rotate_x: f64,
    /// Rotation about the Y axis in degrees.
    pub rotate_y: f64,
}

impl Default for TransformValue {
    fn default() -> Self {
        Self {
            rotate: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            scale_locked: true,
            skew_x: 0.0,
            skew_y: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
            translate_unit: TranslateUnit::Px,
            origin: AnchorPosition::Center,
            enable_3d: false,
            perspective: 1000.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
        }
    }
}

impl TransformValue {
    /// [§ 7 The Transform Functions](https://www.w3.org/TR/css-transforms-1/#transform-functions)
    ///
    /// Transform functions do not commute, so the list is always built in
    /// the same order: translate, rotate, the 3-D rotations (X then Y, behind
    /// a `perspective()` prefix), scale, skew. Identity components are
    /// omitted.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn functions(&self) -> Vec<String> {
        let mut functions = Vec::new();
        let has_3d_rotation = self.enable_3d && (self.rotate_x != 0.0 || self.rotate_y != 0.0);

        if has_3d_rotation && self.perspective > 0.0 {
            functions.push(format!("perspective({})", format_length(self.perspective, "px")));
        }
        if self.translate_x != 0.0 || self.translate_y != 0.0 {
            let unit = self.translate_unit.to_string();
            functions.push(format!(
                "translate({}, {})",
                format_length(self.translate_x, &unit),
                format_length(self.translate_y, &unit)
            ));
        }
        if self.rotate != 0.0 {
            functions.push(format!("rotate({})", format_length(self.rotate, "deg")));
        }
        if has_3d_rotation {
            if self.rotate_x != 0.0 {
                functions.push(format!("rotateX({})", format_length(self.rotate_x, "deg")));
            }
            if self.rotate_y != 0.0 {
                functions.push(format!("rotateY({})", format_length(self.rotate_y, "deg")));
            }
        }
        if self.scale_x == self.scale_y {
            if self.scale_x != 1.0 {
                functions.push(format!("scale({})", format_number(self.scale_x)));
            }
        } else {
            functions.push(format!(
                "scale({}, {})",
                format_number(self.scale_x),
                format_number(self.scale_y)
            ));
        }
        if self.skew_x != 0.0 || self.skew_y != 0.0 {
            functions.push(format!(
                "skew({}, {})",
                format_length(self.skew_x, "deg"),
                format_length(self.skew_y, "deg")
            ));
        }
        functions
    }
}

/// `transform` plus a non-default `transform-origin`; `None` for the
/// identity transform.
#[must_use]
pub fn transform_value_to_css(value: &TransformValue) -> Option<StyleProperties> {
    let functions = value.functions();
    if functions.is_empty() {
        return None;
    }
    let mut style = StyleProperties::new().with("transform", functions.join(" "));
    if value.origin != AnchorPosition::Center {
        style.set("transform-origin", value.origin.to_css());
    }
    Some(style)
}
