//! Border values
//!
//! [CSS Backgrounds and Borders Level 3 § 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::color::ColorValue;
use super::keyword::lenient_keyword;
use crate::style::{StyleProperties, format_length};

/// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
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
pub enum BorderStyle {
    /// "No border. Color and width are ignored."
    #[default]
    None,
    /// "A single line segment."
    Solid,
    /// "A series of square-ended dashes."
    Dashed,
    /// "A series of round dots."
    Dotted,
    /// "Two parallel solid lines with some space between them."
    Double,
}

lenient_keyword!(BorderStyle, "border style");

/// Which sides receive the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct BorderSides {
    /// Top edge.
    pub top: bool,
    /// Right edge.
    pub right: bool,
    /// Bottom edge.
    pub bottom: bool,
    /// Left edge.
    pub left: bool,
}

impl BorderSides {
    /// Every side.
    pub const ALL: Self = Self {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    /// No side.
    pub const NONE: Self = Self {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };

    /// Returns `true` if every side is flagged.
    #[must_use]
    pub const fn all(self) -> bool {
        self.top && self.right && self.bottom && self.left
    }
}

impl Default for BorderSides {
    fn default() -> Self {
        Self::ALL
    }
}

/// A border as the editor stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderValue {
    /// Line style; `none` suppresses every border declaration.
    #[serde(default)]
    pub style: BorderStyle,
    /// Line width in pixels.
    #[serde(default)]
    pub width: f64,
    /// Line color.
    pub color: ColorValue,
    /// Corner radius in pixels.
    #[serde(default)]
    pub radius: f64,
    /// Sides that receive the line.
    #[serde(default)]
    pub sides: BorderSides,
}

/// [§ 4.4 Border shorthand properties](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
///
/// Four flagged sides collapse to `border`; otherwise each flagged side gets
/// its own `border-<side>` shorthand. `border-radius` is emitted for a
/// positive radius.
#[must_use]
pub fn border_value_to_css(value: &BorderValue) -> Option<StyleProperties> {
    if value.style == BorderStyle::None {
        return None;
    }
    let line = format!(
        "{} {} {}",
        format_length(value.width, "px"),
        value.style,
        value.color.to_css()
    );

    let mut style = StyleProperties::new();
    if value.sides.all() {
        style.set("border", line);
    } else {
        let sides = [
            ("border-top", value.sides.top),
            ("border-right", value.sides.right),
            ("border-bottom", value.sides.bottom),
            ("border-left", value.sides.left),
        ];
        for (property, _) in sides.iter().filter(|(_, flagged)| *flagged) {
            style.set(property, line.clone());
        }
    }
    if value.radius > 0.0 {
        style.set("border-radius", format_length(value.radius, "px"));
    }
    style.non_empty()
}
