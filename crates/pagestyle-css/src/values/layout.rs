//! Aspect ratio, content alignment and divider lookups.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::color::ColorValue;
use super::keyword::lenient_keyword;
use crate::style::{StyleProperties, format_length};

/// [CSS Box Sizing Level 4 § 5.1 'aspect-ratio'](https://www.w3.org/TR/css-sizing-4/#aspect-ratio)
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
pub enum AspectRatio {
    /// Intrinsic ratio.
    #[default]
    #[strum(serialize = "auto")]
    Auto,
    /// Square.
    #[strum(serialize = "1:1")]
    Square,
    /// Classic photo.
    #[strum(serialize = "4:3")]
    Standard,
    /// 35mm photo.
    #[strum(serialize = "3:2")]
    Photo,
    /// Widescreen video.
    #[strum(serialize = "16:9")]
    Widescreen,
    /// Cinema.
    #[strum(serialize = "21:9")]
    Ultrawide,
    /// Portrait classic.
    #[strum(serialize = "3:4")]
    Portrait,
    /// Portrait photo.
    #[strum(serialize = "2:3")]
    PortraitPhoto,
    /// Vertical video.
    #[strum(serialize = "9:16")]
    Vertical,
}

lenient_keyword!(AspectRatio, "aspect ratio");

impl AspectRatio {
    /// `<ratio>` as `w / h`, `None` for `auto`.
    #[must_use]
    pub const fn to_css(self) -> Option<&'static str> {
        match self {
            Self::Auto => None,
            Self::Square => Some("1 / 1"),
            Self::Standard => Some("4 / 3"),
            Self::Photo => Some("3 / 2"),
            Self::Widescreen => Some("16 / 9"),
            Self::Ultrawide => Some("21 / 9"),
            Self::Portrait => Some("3 / 4"),
            Self::PortraitPhoto => Some("2 / 3"),
            Self::Vertical => Some("9 / 16"),
        }
    }
}

/// `aspect-ratio` with `object-fit: cover` so media fills the box.
#[must_use]
pub fn aspect_ratio_to_css(ratio: AspectRatio) -> Option<StyleProperties> {
    ratio.to_css().map(|css| {
        StyleProperties::new()
            .with("aspect-ratio", css)
            .with("object-fit", "cover")
    })
}

/// Horizontal alignment of content inside a component.
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
pub enum ContentAlignment {
    /// Start edge.
    #[default]
    Left,
    /// Centered.
    Center,
    /// End edge.
    Right,
}

lenient_keyword!(ContentAlignment, "content alignment");

impl ContentAlignment {
    /// `justify-content` for a row flex container.
    #[must_use]
    pub const fn justify_content(self) -> &'static str {
        match self {
            Self::Left => "flex-start",
            Self::Center => "center",
            Self::Right => "flex-end",
        }
    }

    /// `align-items` for a column flex container.
    #[must_use]
    pub const fn align_items(self) -> &'static str {
        self.justify_content()
    }
}

/// `text-align` plus the matching flex alignment, so the value works for
/// text blocks and flex containers alike.
#[must_use]
pub fn content_alignment_to_css(alignment: ContentAlignment) -> Option<StyleProperties> {
    Some(
        StyleProperties::new()
            .with("text-align", alignment.to_string())
            .with("justify-content", alignment.justify_content())
            .with("align-items", alignment.align_items()),
    )
}

/// Line style of a divider; unknown styles behave as `solid`.
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
pub enum DividerStyle {
    /// Solid line.
    #[default]
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
    /// Double line.
    Double,
}

lenient_keyword!(DividerStyle, "divider style");

/// A horizontal rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerValue {
    /// Line style.
    #[serde(default)]
    pub style: DividerStyle,
    /// Line thickness in pixels.
    pub thickness: f64,
    /// Line color.
    pub color: ColorValue,
    /// Width as a percentage of the container.
    pub width: f64,
    /// Placement when narrower than the container.
    #[serde(default)]
    pub alignment: ContentAlignment,
}

/// Divider rule drawn with `border-top` on an otherwise borderless element.
#[must_use]
pub fn divider_value_to_css(value: &DividerValue) -> Option<StyleProperties> {
    let (left, right) = match value.alignment {
        ContentAlignment::Left => ("0", "auto"),
        ContentAlignment::Center => ("auto", "auto"),
        ContentAlignment::Right => ("auto", "0"),
    };
    Some(
        StyleProperties::new()
            .with("border", "none")
            .with(
                "border-top",
                format!(
                    "{} {} {}",
                    format_length(value.thickness, "px"),
                    value.style,
                    value.color.to_css()
                ),
            )
            .with("width", format_length(value.width, "%"))
            .with("margin-left", left)
            .with("margin-right", right),
    )
}
