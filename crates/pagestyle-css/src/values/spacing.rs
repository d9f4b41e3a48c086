//! Padding and margin values
//!
//! [CSS Box Model Level 3 § 4 Padding](https://www.w3.org/TR/css-box-3/#paddings)
//! [CSS Box Model Level 3 § 3 Margins](https://www.w3.org/TR/css-box-3/#margins)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::keyword::lenient_keyword;
use crate::style::{StyleProperties, format_number};

/// Units the spacing editor offers.
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
pub enum SpacingUnit {
    /// Pixels.
    #[default]
    Px,
    /// Root font size multiples.
    Rem,
    /// Element font size multiples.
    Em,
    /// Percentage of the containing block's width.
    #[strum(serialize = "%")]
    Percent,
}

lenient_keyword!(SpacingUnit, "spacing unit");

/// Four-sided spacing with a shared unit.
///
/// When `linked` is set, every side equals `top`: both [`SpacingValue::linked`]
/// and deserialization derive the other three sides so that a stale editor
/// field can never disagree with the flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSpacing")]
pub struct SpacingValue {
    /// Top side.
    pub top: f64,
    /// Right side.
    pub right: f64,
    /// Bottom side.
    pub bottom: f64,
    /// Left side.
    pub left: f64,
    /// Unit shared by all sides.
    pub unit: SpacingUnit,
    /// Whether the editor keeps all sides equal.
    pub linked: bool,
}

/// Wire shape before the linked invariant is applied.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSpacing {
    #[serde(default)]
    top: f64,
    #[serde(default)]
    right: f64,
    #[serde(default)]
    bottom: f64,
    #[serde(default)]
    left: f64,
    #[serde(default)]
    unit: SpacingUnit,
    #[serde(default)]
    linked: bool,
}

impl From<RawSpacing> for SpacingValue {
    fn from(raw: RawSpacing) -> Self {
        if raw.linked {
            Self::linked(raw.top, raw.unit)
        } else {
            Self::new(raw.top, raw.right, raw.bottom, raw.left, raw.unit)
        }
    }
}

impl SpacingValue {
    /// Independent sides.
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64, unit: SpacingUnit) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            unit,
            linked: false,
        }
    }

    /// All four sides equal to `value`.
    #[must_use]
    pub const fn linked(value: f64, unit: SpacingUnit) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
            unit,
            linked: true,
        }
    }

    /// [§ 4.2 'padding' shorthand](https://www.w3.org/TR/css-box-3/#padding-shorthand)
    ///
    /// "If there is only one component value, it applies to all sides. If
    /// there are two values, the top and bottom are set to the first value and
    /// the right and left are set to the second. If there are three values,
    /// the top is set to the first value, the left and right are set to the
    /// second, and the bottom is set to the third."
    ///
    /// Produces the shortest form that parses back to the same four sides.
    /// Sides are compared as printed, so values that round to the same
    /// number collapse.
    #[must_use]
    pub fn to_shorthand(&self) -> String {
        let unit = self.unit.to_string();
        let [t, r, b, l] = [self.top, self.right, self.bottom, self.left]
            .map(|v| format!("{}{unit}", format_number(v)));

        if t == r && r == b && b == l {
            t
        } else if t == b && l == r {
            format!("{t} {r}")
        } else if l == r {
            format!("{t} {r} {b}")
        } else {
            format!("{t} {r} {b} {l}")
        }
    }

    /// Parse a 1-4 component shorthand whose components share one unit.
    ///
    /// Returns `None` for mixed or unknown units. Unitless zero is accepted
    /// and takes the unit of the other components.
    #[must_use]
    pub fn from_shorthand(text: &str) -> Option<Self> {
        let mut unit = None;
        let mut values = Vec::with_capacity(4);
        for component in text.split_whitespace() {
            let split = component
                .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
                .unwrap_or(component.len());
            let (number, suffix) = component.split_at(split);
            values.push(number.parse::<f64>().ok()?);
            if !suffix.is_empty() {
                let parsed = suffix.parse::<SpacingUnit>().ok()?;
                if unit.is_some_and(|u| u != parsed) {
                    return None;
                }
                unit = Some(parsed);
            }
        }
        let unit = unit.unwrap_or_default();
        match values[..] {
            [all] => Some(Self::new(all, all, all, all, unit)),
            [v, h] => Some(Self::new(v, h, v, h, unit)),
            [t, h, b] => Some(Self::new(t, h, b, h, unit)),
            [t, r, b, l] => Some(Self::new(t, r, b, l, unit)),
            _ => None,
        }
    }
}

/// `padding: <shorthand>`
#[must_use]
pub fn padding_value_to_css(value: &SpacingValue) -> Option<StyleProperties> {
    Some(StyleProperties::new().with("padding", value.to_shorthand()))
}

/// `margin: <shorthand>`
#[must_use]
pub fn margin_value_to_css(value: &SpacingValue) -> Option<StyleProperties> {
    Some(StyleProperties::new().with("margin", value.to_shorthand()))
}
