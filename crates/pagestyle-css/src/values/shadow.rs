//! Box shadow presets
//!
//! [CSS Backgrounds and Borders Level 3 § 6.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::color::{ColorValue, rgba};
use super::keyword::lenient_keyword;
use crate::style::{StyleProperties, format_length};

/// Named shadow depths offered by the editor.
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
pub enum ShadowPreset {
    /// No shadow.
    #[default]
    None,
    /// Hairline lift.
    Sm,
    /// Card.
    Md,
    /// Dropdown.
    Lg,
    /// Modal.
    Xl,
    /// Pressed-in.
    Inner,
}

lenient_keyword!(ShadowPreset, "shadow preset");

/// "`<shadow> = inset? && <length>{2,4} && <color>?`"
#[derive(Debug, Clone, Copy, PartialEq)]
struct ShadowLayer {
    inset: bool,
    offset_y: f64,
    blur: f64,
    spread: f64,
    alpha: f64,
}

const fn layer(offset_y: f64, blur: f64, spread: f64, alpha: f64) -> ShadowLayer {
    ShadowLayer {
        inset: false,
        offset_y,
        blur,
        spread,
        alpha,
    }
}

impl ShadowPreset {
    fn layers(self) -> &'static [ShadowLayer] {
        const SM: [ShadowLayer; 1] = [layer(1.0, 2.0, 0.0, 0.05)];
        const MD: [ShadowLayer; 2] = [layer(4.0, 6.0, -1.0, 0.1), layer(2.0, 4.0, -2.0, 0.1)];
        const LG: [ShadowLayer; 2] = [layer(10.0, 15.0, -3.0, 0.1), layer(4.0, 6.0, -4.0, 0.1)];
        const XL: [ShadowLayer; 2] = [layer(20.0, 25.0, -5.0, 0.1), layer(8.0, 10.0, -6.0, 0.1)];
        const INNER: [ShadowLayer; 1] = [ShadowLayer {
            inset: true,
            offset_y: 2.0,
            blur: 4.0,
            spread: 0.0,
            alpha: 0.05,
        }];
        match self {
            Self::None => &[],
            Self::Sm => &SM,
            Self::Md => &MD,
            Self::Lg => &LG,
            Self::Xl => &XL,
            Self::Inner => &INNER,
        }
    }
}

/// A shadow preset with an optional tint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowValue {
    /// Depth preset.
    #[serde(default)]
    pub preset: ShadowPreset,
    /// Tint; black when absent. The color's opacity scales each layer's alpha.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorValue>,
}

/// `box-shadow` for the preset, `None` for `none`.
#[must_use]
pub fn shadow_value_to_css(value: &ShadowValue) -> Option<StyleProperties> {
    let layers = value.preset.layers();
    if layers.is_empty() {
        return None;
    }
    let (r, g, b) = value
        .color
        .as_ref()
        .and_then(ColorValue::rgb)
        .unwrap_or((0, 0, 0));
    let tint = value.color.as_ref().map_or(1.0, |c| c.opacity() / 100.0);

    let shadow = layers
        .iter()
        .map(|layer| {
            format!(
                "{}0 {} {} {} {}",
                if layer.inset { "inset " } else { "" },
                format_length(layer.offset_y, "px"),
                format_length(layer.blur, "px"),
                format_length(layer.spread, "px"),
                rgba(r, g, b, layer.alpha * tint)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    Some(StyleProperties::new().with("box-shadow", shadow))
}
