//! Animation values
//!
//! [CSS Transitions Level 1](https://www.w3.org/TR/css-transitions-1/)
//! [CSS Easing Functions Level 1](https://www.w3.org/TR/css-easing-1/)
//!
//! An animation value is either a named entrance preset played when the
//! element scrolls into view, or a custom transition applied to every
//! property change.

mod preset;
mod stagger;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::style::{StyleProperties, format_length, format_number};
use crate::values::AnchorPosition;
use crate::values::keyword::lenient_keyword;

pub use preset::{EntrancePreset, Intensity, MotionState, Offset};
pub use stagger::{StaggerConfig, StaggerDirection, get_stagger_delay};

/// Entrance duration when the value leaves it unset, in milliseconds.
pub const DEFAULT_ENTRANCE_DURATION_MS: f64 = 600.0;
/// Custom transition duration when the value leaves it unset, in milliseconds.
pub const DEFAULT_TRANSITION_DURATION_MS: f64 = 300.0;

/// [CSS Easing § 2 Easing functions](https://www.w3.org/TR/css-easing-1/#easing-functions)
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
pub enum Easing {
    /// `linear`
    Linear,
    /// `ease`
    #[default]
    Ease,
    /// `ease-in`
    EaseIn,
    /// `ease-out`
    EaseOut,
    /// `ease-in-out`
    EaseInOut,
    /// Slight overshoot.
    Spring,
    /// Anticipation and overshoot.
    Bounce,
    /// Material standard curve.
    Smooth,
    /// Fast start, long settle.
    Snappy,
}

lenient_keyword!(Easing, "easing");

impl Easing {
    /// The `<easing-function>` text.
    #[must_use]
    pub const fn to_css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
            Self::Bounce => "cubic-bezier(0.68, -0.55, 0.265, 1.55)",
            Self::Smooth => "cubic-bezier(0.4, 0, 0.2, 1)",
            Self::Snappy => "cubic-bezier(0.2, 0, 0, 1)",
        }
    }
}

/// Preset entrance or custom transition.
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
pub enum AnimationMode {
    /// Named entrance played on view.
    #[default]
    Preset,
    /// Transition on property changes.
    Custom,
}

lenient_keyword!(AnimationMode, "animation mode");

/// An animation as the editor stores it. Every field is optional; the
/// accessors apply the defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationValue {
    /// Preset or custom.
    pub mode: AnimationMode,
    /// Entrance preset (preset mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrance: Option<EntrancePreset>,
    /// Entrance duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrance_duration: Option<f64>,
    /// Entrance delay in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrance_delay: Option<f64>,
    /// Travel distance in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Starting scale factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_from: Option<f64>,
    /// Starting angle in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_angle: Option<f64>,
    /// Starting blur in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_amount: Option<f64>,
    /// `transform-origin` during the entrance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<AnchorPosition>,
    /// Timing function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    /// Child stagger settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<StaggerConfig>,
    /// Custom transition duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Custom transition delay in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Play the entrance when scrolled into view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_on_scroll: Option<bool>,
    /// Visible fraction that triggers the entrance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_threshold: Option<f64>,
    /// Play only the first time the element enters the view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_once: Option<bool>,
    /// Margin around the viewport used for intersection, CSS syntax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_margin: Option<String>,
}

/// Intersection settings the renderer hands to its visibility observer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTrigger {
    /// Visible fraction that triggers the entrance.
    pub threshold: f64,
    /// Stop observing after the first trigger.
    pub once: bool,
    /// Root margin in CSS syntax.
    pub root_margin: String,
}

/// The two ends of an entrance plus the transition between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntranceStyles {
    /// Styles applied before the element is revealed.
    pub initial: StyleProperties,
    /// Styles applied once the entrance triggers.
    pub animate: StyleProperties,
    /// `transition` value that interpolates between the two.
    pub transition: String,
}

impl AnimationValue {
    /// A preset entrance with every other field at its default.
    #[must_use]
    pub fn preset(entrance: EntrancePreset) -> Self {
        Self {
            mode: AnimationMode::Preset,
            entrance: Some(entrance),
            ..Self::default()
        }
    }

    /// The selected entrance, `none` when unset.
    #[must_use]
    pub fn entrance(&self) -> EntrancePreset {
        self.entrance.unwrap_or_default()
    }

    /// Intensity knobs with defaults applied.
    #[must_use]
    pub fn intensity(&self) -> Intensity {
        let defaults = Intensity::default();
        Intensity {
            distance: self.distance.unwrap_or(defaults.distance),
            scale_from: self.scale_from.unwrap_or(defaults.scale_from),
            rotate_angle: self.rotate_angle.unwrap_or(defaults.rotate_angle),
            blur_amount: self.blur_amount.unwrap_or(defaults.blur_amount),
        }
    }

    /// The preset's forced easing, else the selected one, else `ease`.
    #[must_use]
    pub fn effective_easing(&self) -> Easing {
        self.entrance()
            .easing_override()
            .or(self.easing)
            .unwrap_or_default()
    }

    /// Transform origin, with the swing preset pinned to its top edge.
    #[must_use]
    pub fn effective_origin(&self) -> AnchorPosition {
        if self.entrance() == EntrancePreset::SwingIn {
            AnchorPosition::Top
        } else {
            self.origin.unwrap_or_default()
        }
    }

    /// Scroll-trigger settings, `None` when the entrance plays immediately.
    #[must_use]
    pub fn scroll_trigger(&self) -> Option<ScrollTrigger> {
        self.trigger_on_scroll.unwrap_or(true).then(|| ScrollTrigger {
            threshold: self.trigger_threshold.unwrap_or(0.1),
            once: self.trigger_once.unwrap_or(true),
            root_margin: self
                .trigger_margin
                .clone()
                .unwrap_or_else(|| "0px".to_string()),
        })
    }

    /// Entrance delay of child `index` of `total`: the base delay plus its
    /// stagger offset.
    #[must_use]
    pub fn child_delay(&self, index: usize, total: usize) -> f64 {
        let stagger = self
            .stagger
            .as_ref()
            .map_or(0.0, |config| get_stagger_delay(index, total, config));
        self.entrance_delay.unwrap_or(0.0) + stagger
    }
}

/// The `(initial, animate)` pair of a preset entrance, `None` in custom mode
/// or when the entrance is `none`.
#[must_use]
pub fn get_entrance_animation_styles(value: &AnimationValue) -> Option<EntranceStyles> {
    entrance_styles_with_delay(value, value.entrance_delay.unwrap_or(0.0))
}

/// Like [`get_entrance_animation_styles`] with the stagger offset of child
/// `index` of `total` folded into the delay.
#[must_use]
pub fn get_child_entrance_styles(
    value: &AnimationValue,
    index: usize,
    total: usize,
) -> Option<EntranceStyles> {
    entrance_styles_with_delay(value, value.child_delay(index, total))
}

fn entrance_styles_with_delay(value: &AnimationValue, delay: f64) -> Option<EntranceStyles> {
    if value.mode != AnimationMode::Preset {
        return None;
    }
    let (initial, animate) = value.entrance().state_pair(&value.intensity())?;
    let duration = value
        .entrance_duration
        .unwrap_or(DEFAULT_ENTRANCE_DURATION_MS);
    let easing = value.effective_easing().to_css();
    let transition = initial
        .animated_properties()
        .iter()
        .map(|property| {
            format!(
                "{property} {} {easing} {}",
                format_length(duration, "ms"),
                format_length(delay, "ms")
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut initial = initial.to_style();
    let mut animate = animate.to_style();
    let origin = value.effective_origin();
    if origin != AnchorPosition::Center {
        initial.set("transform-origin", origin.to_css());
        animate.set("transform-origin", origin.to_css());
    }
    Some(EntranceStyles {
        initial,
        animate,
        transition,
    })
}

/// The static styles of an animation value.
///
/// Custom mode yields `transition: all <duration> <easing> <delay>`. Preset
/// mode yields the entrance transition and origin; the state pair itself
/// comes from [`get_entrance_animation_styles`]. An entrance of `none`
/// yields nothing.
#[must_use]
pub fn animation_value_to_css(value: &AnimationValue) -> Option<StyleProperties> {
    match value.mode {
        AnimationMode::Custom => {
            let duration = value.duration.unwrap_or(DEFAULT_TRANSITION_DURATION_MS);
            let delay = value.delay.unwrap_or(0.0);
            Some(StyleProperties::new().with(
                "transition",
                format!(
                    "all {}ms {} {}ms",
                    format_number(duration),
                    value.easing.unwrap_or_default().to_css(),
                    format_number(delay)
                ),
            ))
        }
        AnimationMode::Preset => {
            let entrance = get_entrance_animation_styles(value)?;
            let mut style = StyleProperties::new().with("transition", entrance.transition);
            if let Some(origin) = entrance.animate.get("transform-origin") {
                style.set("transform-origin", origin);
            }
            Some(style)
        }
    }
}
