//! Color values
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use serde::{Deserialize, Serialize};

use pagestyle_common::warning::warn_once;

use crate::style::format_number;

/// A color as the editor stores it: a hex string plus an opacity percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorValue {
    /// `#rrggbb` once normalized. Values that bypassed the editor may hold
    /// anything; see [`ColorValue::to_css`].
    pub hex: String,
    /// 0-100, defaults to 100 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl ColorValue {
    /// An opaque color. The hex is normalized when possible and kept verbatim
    /// otherwise.
    #[must_use]
    pub fn new(hex: &str) -> Self {
        Self {
            hex: normalize_hex(hex).unwrap_or_else(|| hex.to_string()),
            opacity: None,
        }
    }

    /// A color with an explicit opacity percentage.
    #[must_use]
    pub fn with_opacity(hex: &str, opacity: f64) -> Self {
        Self {
            opacity: Some(opacity),
            ..Self::new(hex)
        }
    }

    /// The opacity percentage, defaulting to 100.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity.unwrap_or(100.0)
    }

    /// The red, green and blue channels, if the hex is well-formed.
    #[must_use]
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = normalize_hex(&self.hex)?;
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some((channel(1..3)?, channel(3..5)?, channel(5..7)?))
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// [§ 4.1 The RGB functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
    ///
    /// Fully opaque colors serialize as `#rrggbb`, anything else as
    /// `rgba(r, g, b, a)`. A hex that cannot be normalized is emitted as given
    /// and reported once through the warning channel.
    #[must_use]
    pub fn to_css(&self) -> String {
        let Some((r, g, b)) = self.rgb() else {
            warn_once(
                "color",
                &format!("cannot normalize hex '{}', emitting as given", self.hex),
            );
            return self.hex.clone();
        };
        let opacity = self.opacity();
        if opacity >= 100.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            rgba(r, g, b, opacity / 100.0)
        }
    }
}

/// `rgba(r, g, b, a)` with `a` in 0-1.
#[must_use]
pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> String {
    format!("rgba({r}, {g}, {b}, {})", format_number(alpha))
}

/// [§ 4.2.1](https://www.w3.org/TR/css-color-4/#hex-notation)
///
/// "The three-digit RGB notation (#RGB) is converted into six-digit form
/// (#RRGGBB) by replicating digits, not by adding zeros."
///
/// Accepts 3 or 6 hex digits with or without a leading `#` and returns the
/// lowercase `#rrggbb` form, or `None` when the input is not a hex color.
#[must_use]
pub fn normalize_hex(input: &str) -> Option<String> {
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digits = digits.to_ascii_lowercase();
    match digits.len() {
        3 => Some(digits.chars().fold(String::from("#"), |mut out, c| {
            out.push(c);
            out.push(c);
            out
        })),
        6 => Some(format!("#{digits}")),
        _ => None,
    }
}

/// Convert a hex string plus opacity percentage to `rgba()`.
#[must_use]
pub fn hex_to_rgba(hex: &str, opacity: f64) -> Option<String> {
    let (r, g, b) = ColorValue::new(hex).rgb()?;
    Some(rgba(r, g, b, opacity / 100.0))
}

/// Nullable entry point used by the other converters.
#[must_use]
pub fn color_value_to_css(color: Option<&ColorValue>) -> Option<String> {
    color.map(ColorValue::to_css)
}
