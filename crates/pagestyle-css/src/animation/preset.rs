//! Entrance presets.
//!
//! Every preset maps to a fixed `(initial, animate)` pair of motion states.
//! The pair is a lookup table keyed by [`EntrancePreset`]; the intensity
//! knobs of the value (distance, starting scale, angle, blur) only fill in
//! the numbers.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::Easing;
use crate::style::{StyleProperties, format_length, format_number};
use crate::values::keyword::lenient_keyword;

/// Named entrance animations.
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
pub enum EntrancePreset {
    /// No entrance animation.
    #[default]
    None,
    /// Opacity only.
    Fade,
    /// Fade while rising by `distance`.
    FadeUp,
    /// Fade while dropping by `distance`.
    FadeDown,
    /// Fade while moving left by `distance`.
    FadeLeft,
    /// Fade while moving right by `distance`.
    FadeRight,
    /// Slide up by the element's own height, no fade.
    SlideUp,
    /// Slide down by the element's own height, no fade.
    SlideDown,
    /// Slide left by the element's own width, no fade.
    SlideLeft,
    /// Slide right by the element's own width, no fade.
    SlideRight,
    /// Fade while growing from `scaleFrom`.
    ScaleUp,
    /// Fade while shrinking to rest from the mirror of `scaleFrom`.
    ScaleDown,
    /// Fade while growing from half of `scaleFrom`.
    ZoomIn,
    /// Fade while shrinking from an enlarged state.
    ZoomOut,
    /// Zoom in while rising.
    ZoomInUp,
    /// Zoom in while dropping.
    ZoomInDown,
    /// Flip around the horizontal axis.
    FlipX,
    /// Flip around the vertical axis.
    FlipY,
    /// Fade while rotating into place.
    RotateIn,
    /// Rotate in from the left.
    RotateInLeft,
    /// Rotate in from the right.
    RotateInRight,
    /// Fade while unblurring.
    BlurIn,
    /// Unblur while rising.
    BlurUp,
    /// Unblur while dropping.
    BlurDown,
    /// Grow with an overshooting bounce.
    BounceIn,
    /// Grow with a springy overshoot.
    Pop,
    /// Swing down from the top edge.
    SwingIn,
    /// Clip reveal from the bottom edge upward.
    RevealUp,
    /// Clip reveal from the top edge downward.
    RevealDown,
    /// Clip reveal from the right edge leftward.
    RevealLeft,
    /// Clip reveal from the left edge rightward.
    RevealRight,
}

lenient_keyword!(EntrancePreset, "entrance");

/// A translate offset in one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// Pixels.
    Px(f64),
    /// Percentage of the element's own box.
    Percent(f64),
}

impl Offset {
    const fn at_rest(self) -> Self {
        match self {
            Self::Px(_) => Self::Px(0.0),
            Self::Percent(_) => Self::Percent(0.0),
        }
    }

    fn to_css(self) -> String {
        match self {
            Self::Px(v) => format_length(v, "px"),
            Self::Percent(v) => format_length(v, "%"),
        }
    }
}

/// One end of an entrance transition.
///
/// A field that is `None` does not take part in the animation; a `Some`
/// field appears in both states so the browser interpolates matching
/// transform lists.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionState {
    /// Opacity in 0-1.
    pub opacity: Option<f64>,
    /// Horizontal offset.
    pub translate_x: Option<Offset>,
    /// Vertical offset.
    pub translate_y: Option<Offset>,
    /// Uniform scale factor.
    pub scale: Option<f64>,
    /// 2-D rotation in degrees.
    pub rotate: Option<f64>,
    /// Rotation about the X axis in degrees.
    pub rotate_x: Option<f64>,
    /// Rotation about the Y axis in degrees.
    pub rotate_y: Option<f64>,
    /// Perspective distance in pixels, for 3-D presets.
    pub perspective: Option<f64>,
    /// Blur radius in pixels.
    pub blur: Option<f64>,
    /// `inset()` clip in percent: top, right, bottom, left.
    pub clip_inset: Option<[f64; 4]>,
}

impl MotionState {
    /// The resting state with the same participating fields.
    #[must_use]
    pub fn at_rest(&self) -> Self {
        Self {
            opacity: self.opacity.map(|_| 1.0),
            translate_x: self.translate_x.map(Offset::at_rest),
            translate_y: self.translate_y.map(Offset::at_rest),
            scale: self.scale.map(|_| 1.0),
            rotate: self.rotate.map(|_| 0.0),
            rotate_x: self.rotate_x.map(|_| 0.0),
            rotate_y: self.rotate_y.map(|_| 0.0),
            perspective: self.perspective,
            blur: self.blur.map(|_| 0.0),
            clip_inset: self.clip_inset.map(|_| [0.0; 4]),
        }
    }

    const fn has_transform(&self) -> bool {
        self.translate_x.is_some()
            || self.translate_y.is_some()
            || self.scale.is_some()
            || self.rotate.is_some()
            || self.rotate_x.is_some()
            || self.rotate_y.is_some()
    }

    /// CSS properties this state touches, in transition order.
    #[must_use]
    pub fn animated_properties(&self) -> Vec<&'static str> {
        let mut properties = Vec::with_capacity(4);
        if self.opacity.is_some() {
            properties.push("opacity");
        }
        if self.has_transform() {
            properties.push("transform");
        }
        if self.blur.is_some() {
            properties.push("filter");
        }
        if self.clip_inset.is_some() {
            properties.push("clip-path");
        }
        properties
    }

    /// The state as style declarations.
    #[must_use]
    pub fn to_style(self) -> StyleProperties {
        let mut style = StyleProperties::new();
        if let Some(opacity) = self.opacity {
            style.set("opacity", format_number(opacity));
        }
        if self.has_transform() {
            let mut functions = Vec::new();
            if let Some(perspective) = self.perspective {
                functions.push(format!("perspective({})", format_length(perspective, "px")));
            }
            if let Some(x) = self.translate_x {
                functions.push(format!("translateX({})", x.to_css()));
            }
            if let Some(y) = self.translate_y {
                functions.push(format!("translateY({})", y.to_css()));
            }
            if let Some(rotate) = self.rotate {
                functions.push(format!("rotate({})", format_length(rotate, "deg")));
            }
            if let Some(rotate_x) = self.rotate_x {
                functions.push(format!("rotateX({})", format_length(rotate_x, "deg")));
            }
            if let Some(rotate_y) = self.rotate_y {
                functions.push(format!("rotateY({})", format_length(rotate_y, "deg")));
            }
            if let Some(scale) = self.scale {
                functions.push(format!("scale({})", format_number(scale)));
            }
            style.set("transform", functions.join(" "));
        }
        if let Some(blur) = self.blur {
            style.set("filter", format!("blur({})", format_length(blur, "px")));
        }
        if let Some([top, right, bottom, left]) = self.clip_inset {
            style.set(
                "clip-path",
                format!(
                    "inset({} {} {} {})",
                    format_length(top, "%"),
                    format_length(right, "%"),
                    format_length(bottom, "%"),
                    format_length(left, "%")
                ),
            );
        }
        style
    }
}

/// Intensity knobs read by the preset table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intensity {
    /// Travel in pixels.
    pub distance: f64,
    /// Starting scale factor.
    pub scale_from: f64,
    /// Starting angle in degrees.
    pub rotate_angle: f64,
    /// Starting blur in pixels.
    pub blur_amount: f64,
}

impl Default for Intensity {
    fn default() -> Self {
        Self {
            distance: 24.0,
            scale_from: 0.9,
            rotate_angle: 15.0,
            blur_amount: 8.0,
        }
    }
}

/// Perspective used by the flip and swing presets.
const PRESET_PERSPECTIVE: f64 = 1000.0;

impl EntrancePreset {
    /// The starting state, or `None` for [`EntrancePreset::None`].
    #[must_use]
    pub fn initial_state(self, intensity: &Intensity) -> Option<MotionState> {
        let Intensity {
            distance: d,
            scale_from: s,
            rotate_angle: a,
            blur_amount: b,
        } = *intensity;
        let hidden = MotionState {
            opacity: Some(0.0),
            ..MotionState::default()
        };
        let state = match self {
            Self::None => return None,
            Self::Fade => hidden,
            Self::FadeUp => MotionState {
                translate_y: Some(Offset::Px(d)),
                ..hidden
            },
            Self::FadeDown => MotionState {
                translate_y: Some(Offset::Px(-d)),
                ..hidden
            },
            Self::FadeLeft => MotionState {
                translate_x: Some(Offset::Px(d)),
                ..hidden
            },
            Self::FadeRight => MotionState {
                translate_x: Some(Offset::Px(-d)),
                ..hidden
            },
            Self::SlideUp => MotionState {
                translate_y: Some(Offset::Percent(100.0)),
                ..MotionState::default()
            },
            Self::SlideDown => MotionState {
                translate_y: Some(Offset::Percent(-100.0)),
                ..MotionState::default()
            },
            Self::SlideLeft => MotionState {
                translate_x: Some(Offset::Percent(100.0)),
                ..MotionState::default()
            },
            Self::SlideRight => MotionState {
                translate_x: Some(Offset::Percent(-100.0)),
                ..MotionState::default()
            },
            Self::ScaleUp | Self::BounceIn | Self::Pop => MotionState {
                scale: Some(s),
                ..hidden
            },
            Self::ScaleDown => MotionState {
                scale: Some(2.0 - s),
                ..hidden
            },
            Self::ZoomIn => MotionState {
                scale: Some(s / 2.0),
                ..hidden
            },
            Self::ZoomOut => MotionState {
                scale: Some(1.0 + (1.0 - s) * 5.0),
                ..hidden
            },
            Self::ZoomInUp => MotionState {
                translate_y: Some(Offset::Px(d)),
                scale: Some(s),
                ..hidden
            },
            Self::ZoomInDown => MotionState {
                translate_y: Some(Offset::Px(-d)),
                scale: Some(s),
                ..hidden
            },
            Self::FlipX => MotionState {
                perspective: Some(PRESET_PERSPECTIVE),
                rotate_x: Some(90.0),
                ..hidden
            },
            Self::FlipY => MotionState {
                perspective: Some(PRESET_PERSPECTIVE),
                rotate_y: Some(90.0),
                ..hidden
            },
            Self::RotateIn => MotionState {
                rotate: Some(-a),
                ..hidden
            },
            Self::RotateInLeft => MotionState {
                translate_x: Some(Offset::Px(-d)),
                rotate: Some(-a),
                ..hidden
            },
            Self::RotateInRight => MotionState {
                translate_x: Some(Offset::Px(d)),
                rotate: Some(a),
                ..hidden
            },
            Self::BlurIn => MotionState {
                blur: Some(b),
                ..hidden
            },
            Self::BlurUp => MotionState {
                translate_y: Some(Offset::Px(d)),
                blur: Some(b),
                ..hidden
            },
            Self::BlurDown => MotionState {
                translate_y: Some(Offset::Px(-d)),
                blur: Some(b),
                ..hidden
            },
            Self::SwingIn => MotionState {
                perspective: Some(PRESET_PERSPECTIVE),
                rotate_x: Some(-a),
                ..hidden
            },
            Self::RevealUp => MotionState {
                clip_inset: Some([100.0, 0.0, 0.0, 0.0]),
                ..MotionState::default()
            },
            Self::RevealDown => MotionState {
                clip_inset: Some([0.0, 0.0, 100.0, 0.0]),
                ..MotionState::default()
            },
            Self::RevealLeft => MotionState {
                clip_inset: Some([0.0, 0.0, 0.0, 100.0]),
                ..MotionState::default()
            },
            Self::RevealRight => MotionState {
                clip_inset: Some([0.0, 100.0, 0.0, 0.0]),
                ..MotionState::default()
            },
        };
        Some(state)
    }

    /// `(initial, animate)` for this preset.
    #[must_use]
    pub fn state_pair(self, intensity: &Intensity) -> Option<(MotionState, MotionState)> {
        self.initial_state(intensity)
            .map(|initial| (initial, initial.at_rest()))
    }

    /// Easing the preset always uses, whatever the value selects.
    #[must_use]
    pub const fn easing_override(self) -> Option<Easing> {
        match self {
            Self::BounceIn => Some(Easing::Bounce),
            Self::Pop => Some(Easing::Spring),
            _ => None,
        }
    }

    /// Whether the preset reads `distance`.
    #[must_use]
    pub const fn uses_distance(self) -> bool {
        matches!(
            self,
            Self::FadeUp
                | Self::FadeDown
                | Self::FadeLeft
                | Self::FadeRight
                | Self::ZoomInUp
                | Self::ZoomInDown
                | Self::RotateInLeft
                | Self::RotateInRight
                | Self::BlurUp
                | Self::BlurDown
        )
    }

    /// Whether the preset reads `scaleFrom`.
    #[must_use]
    pub const fn uses_scale(self) -> bool {
        matches!(
            self,
            Self::ScaleUp
                | Self::ScaleDown
                | Self::ZoomIn
                | Self::ZoomOut
                | Self::ZoomInUp
                | Self::ZoomInDown
                | Self::BounceIn
                | Self::Pop
        )
    }

    /// Whether the preset reads `rotateAngle`.
    #[must_use]
    pub const fn uses_rotation(self) -> bool {
        matches!(
            self,
            Self::RotateIn | Self::RotateInLeft | Self::RotateInRight | Self::SwingIn
        )
    }

    /// Whether the preset reads `blurAmount`.
    #[must_use]
    pub const fn uses_blur(self) -> bool {
        matches!(self, Self::BlurIn | Self::BlurUp | Self::BlurDown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_preset_but_none_has_a_pair() {
        let intensity = Intensity::default();
        for preset in EntrancePreset::iter() {
            let pair = preset.state_pair(&intensity);
            assert_eq!(pair.is_none(), preset == EntrancePreset::None, "{preset}");
        }
    }

    #[test]
    fn test_rest_state_keeps_transform_shape() {
        let (initial, animate) = EntrancePreset::ZoomInUp
            .state_pair(&Intensity::default())
            .unwrap();
        assert_eq!(
            initial.to_style().get("transform"),
            Some("translateY(24px) scale(0.9)")
        );
        assert_eq!(
            animate.to_style().get("transform"),
            Some("translateY(0px) scale(1)")
        );
    }
}
