//! Nine-point anchor positions
//!
//! [CSS Values Level 4 § 9 Position](https://www.w3.org/TR/css-values-4/#position)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::keyword::lenient_keyword;

/// One of the nine anchor points of a box, shared by gradient centers,
/// background positions and transform origins.
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
#[strum(serialize_all = "kebab-case")]
pub enum AnchorPosition {
    /// `center`
    #[default]
    Center,
    /// `top`
    Top,
    /// `bottom`
    Bottom,
    /// `left`
    Left,
    /// `right`
    Right,
    /// `top left`
    TopLeft,
    /// `top right`
    TopRight,
    /// `bottom left`
    BottomLeft,
    /// `bottom right`
    BottomRight,
}

lenient_keyword!(AnchorPosition, "position");

impl AnchorPosition {
    /// "`<position> = [ left | center | right | top | bottom ]`" and the
    /// two-keyword combinations.
    #[must_use]
    pub const fn to_css(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top left",
            Self::TopRight => "top right",
            Self::BottomLeft => "bottom left",
            Self::BottomRight => "bottom right",
        }
    }
}
