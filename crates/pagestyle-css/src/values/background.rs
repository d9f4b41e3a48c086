//! Background values
//!
//! [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)
//! [CSS Images Level 3 § 3 Gradients](https://www.w3.org/TR/css-images-3/#gradients)
//! [CSS Masking Level 1](https://www.w3.org/TR/css-masking-1/)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::color::{ColorValue, rgba};
use super::keyword::lenient_keyword;
use super::position::AnchorPosition;
use crate::style::{StyleProperties, format_number};

/// Which background field is active.
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
pub enum BackgroundKind {
    /// No background.
    #[default]
    None,
    /// Flat color.
    Solid,
    /// Linear or radial gradient.
    Gradient,
    /// Image, optionally with an overlay and a fade mask.
    Image,
}

lenient_keyword!(BackgroundKind, "background type");

/// [§ 3.1 Linear gradients](https://www.w3.org/TR/css-images-3/#linear-gradients)
/// [§ 3.2 Radial gradients](https://www.w3.org/TR/css-images-3/#radial-gradients)
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
pub enum GradientKind {
    /// `linear-gradient()`
    #[default]
    Linear,
    /// `radial-gradient()`
    Radial,
}

lenient_keyword!(GradientKind, "gradient type");

/// "`<radial-shape> = circle | ellipse`"
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
pub enum RadialShape {
    /// `circle`
    Circle,
    /// `ellipse`
    #[default]
    Ellipse,
}

lenient_keyword!(RadialShape, "radial shape");

/// [§ 3.4 Color stops](https://www.w3.org/TR/css-images-3/#color-stop-syntax)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    /// Stop color.
    pub color: ColorValue,
    /// Percentage along the gradient line.
    pub position: f64,
}

/// A gradient as the editor stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradientValue {
    /// Linear or radial.
    #[serde(rename = "type")]
    pub kind: GradientKind,
    /// Linear gradient angle in degrees.
    pub angle: f64,
    /// Color stops in any order.
    pub stops: Vec<GradientStop>,
    /// Radial gradient ending shape.
    pub radial_shape: RadialShape,
    /// Radial gradient center.
    pub radial_position: AnchorPosition,
}

impl Default for GradientValue {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            angle: 180.0,
            stops: Vec::new(),
            radial_shape: RadialShape::Ellipse,
            radial_position: AnchorPosition::Center,
        }
    }
}

/// Serialize a gradient. Stops are sorted by ascending position first; the
/// order the caller stored them in is not trusted. `None` without stops.
#[must_use]
pub fn gradient_value_to_css(gradient: &GradientValue) -> Option<String> {
    if gradient.stops.is_empty() {
        return None;
    }
    let mut stops: Vec<&GradientStop> = gradient.stops.iter().collect();
    stops.sort_by(|a, b| a.position.total_cmp(&b.position));
    let stops = stops
        .iter()
        .map(|stop| format!("{} {}%", stop.color.to_css(), format_number(stop.position)))
        .collect::<Vec<_>>()
        .join(", ");

    Some(match gradient.kind {
        GradientKind::Linear => format!(
            "linear-gradient({}deg, {stops})",
            format_number(gradient.angle)
        ),
        GradientKind::Radial => format!(
            "radial-gradient({} at {}, {stops})",
            gradient.radial_shape,
            gradient.radial_position.to_css()
        ),
    })
}

/// [§ 3.9 'background-size'](https://www.w3.org/TR/css-backgrounds-3/#background-size)
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
pub enum BackgroundSize {
    /// Scale to cover the positioning area.
    #[default]
    Cover,
    /// Scale to fit inside the positioning area.
    Contain,
    /// Intrinsic size.
    Auto,
}

lenient_keyword!(BackgroundSize, "background size");

/// [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
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
pub enum BackgroundRepeat {
    /// `no-repeat`
    #[default]
    NoRepeat,
    /// `repeat`
    Repeat,
    /// `repeat-x`
    RepeatX,
    /// `repeat-y`
    RepeatY,
}

lenient_keyword!(BackgroundRepeat, "background repeat");

/// [§ 3.5 'background-attachment'](https://www.w3.org/TR/css-backgrounds-3/#background-attachment)
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
pub enum BackgroundAttachment {
    /// Scrolls with the element.
    #[default]
    Scroll,
    /// Fixed to the viewport.
    Fixed,
}

lenient_keyword!(BackgroundAttachment, "background attachment");

/// Reference to an uploaded media document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRef {
    /// Public URL of the file.
    pub url: String,
    /// Alternative text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Direction of a fade-to-transparent mask.
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
pub enum FadeDirection {
    /// Fades toward the top edge.
    ToTop,
    /// Fades toward the bottom edge.
    #[default]
    ToBottom,
    /// Fades toward the left edge.
    ToLeft,
    /// Fades toward the right edge.
    ToRight,
    /// Fades outward from the center.
    FromCenter,
}

lenient_keyword!(FadeDirection, "fade direction");

/// Gradient alpha mask applied to an image background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FadeMask {
    /// Whether the mask is applied.
    pub enabled: bool,
    /// Fade direction.
    pub direction: FadeDirection,
    /// Opacity percentage at the start position.
    pub start_opacity: f64,
    /// Opacity percentage at the end position.
    pub end_opacity: f64,
    /// Start position percentage.
    pub start_position: f64,
    /// End position percentage.
    pub end_position: f64,
}

impl Default for FadeMask {
    fn default() -> Self {
        Self {
            enabled: false,
            direction: FadeDirection::ToBottom,
            start_opacity: 100.0,
            end_opacity: 0.0,
            start_position: 0.0,
            end_position: 100.0,
        }
    }
}

/// [CSS Masking § 7.1 'mask-image'](https://www.w3.org/TR/css-masking-1/#the-mask-image)
///
/// Only the alpha channel of a mask matters, so the stops are black with the
/// requested opacity. Every mask property is duplicated under `-webkit-` for
/// engines that still require the prefix.
#[must_use]
pub fn mask_value_to_css(mask: &FadeMask) -> Option<StyleProperties> {
    if !mask.enabled {
        return None;
    }
    let stops = format!(
        "{} {}%, {} {}%",
        rgba(0, 0, 0, mask.start_opacity / 100.0),
        format_number(mask.start_position),
        rgba(0, 0, 0, mask.end_opacity / 100.0),
        format_number(mask.end_position),
    );
    let image = match mask.direction {
        FadeDirection::ToTop => format!("linear-gradient(to top, {stops})"),
        FadeDirection::ToBottom => format!("linear-gradient(to bottom, {stops})"),
        FadeDirection::ToLeft => format!("linear-gradient(to left, {stops})"),
        FadeDirection::ToRight => format!("linear-gradient(to right, {stops})"),
        FadeDirection::FromCenter => format!("radial-gradient(ellipse at center, {stops})"),
    };

    let mut style = StyleProperties::new();
    for prefix in ["", "-webkit-"] {
        style.set(&format!("{prefix}mask-image"), image.clone());
        style.set(&format!("{prefix}mask-size"), "100% 100%");
        style.set(&format!("{prefix}mask-repeat"), "no-repeat");
    }
    Some(style)
}

/// Image settings of an image background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImage {
    /// Selected media; `None` until the editor picks a file.
    #[serde(default)]
    pub media: Option<MediaRef>,
    /// `background-size`
    #[serde(default)]
    pub size: BackgroundSize,
    /// `background-position`
    #[serde(default)]
    pub position: AnchorPosition,
    /// `background-repeat`
    #[serde(default)]
    pub repeat: BackgroundRepeat,
    /// `background-attachment`
    #[serde(default)]
    pub attachment: BackgroundAttachment,
    /// Opacity percentage of the image layer alone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Fade-to-transparent mask.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<FadeMask>,
}

impl BackgroundImage {
    /// Image-layer opacity in 0-1.
    ///
    /// CSS cannot fade one background layer without fading the element's
    /// content, so this is not part of the converter output; the rendering
    /// layer applies it to a dedicated image element.
    #[must_use]
    pub fn opacity_factor(&self) -> f64 {
        self.opacity.unwrap_or(100.0) / 100.0
    }
}

/// Which overlay field is active.
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
pub enum OverlayKind {
    /// Flat tint.
    #[default]
    Solid,
    /// Gradient tint.
    Gradient,
}

lenient_keyword!(OverlayKind, "overlay type");

/// Tint layered above an image background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundOverlay {
    /// Whether the overlay is drawn.
    #[serde(default)]
    pub enabled: bool,
    /// Which of `solid` or `gradient` is read.
    #[serde(rename = "type", default)]
    pub kind: OverlayKind,
    /// Flat tint color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solid: Option<ColorValue>,
    /// Gradient tint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<GradientValue>,
}

impl BackgroundOverlay {
    /// The overlay as one `background-image` layer.
    ///
    /// A multi-layer background has no flat-color layer type, so a solid tint
    /// becomes a two-stop gradient of one color.
    #[must_use]
    pub fn to_layer(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        match self.kind {
            OverlayKind::Solid => self.solid.as_ref().map(|color| {
                let color = color.to_css();
                format!("linear-gradient({color}, {color})")
            }),
            OverlayKind::Gradient => self.gradient.as_ref().and_then(gradient_value_to_css),
        }
    }
}

/// A background as the editor stores it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundValue {
    /// Which field is read.
    #[serde(rename = "type", default)]
    pub kind: BackgroundKind,
    /// Read when `kind` is `solid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solid: Option<ColorValue>,
    /// Read when `kind` is `gradient`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<GradientValue>,
    /// Read when `kind` is `image`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<BackgroundImage>,
    /// Drawn above the image when `kind` is `image`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<BackgroundOverlay>,
}

impl BackgroundValue {
    /// A flat color background.
    #[must_use]
    pub fn solid(color: ColorValue) -> Self {
        Self {
            kind: BackgroundKind::Solid,
            solid: Some(color),
            ..Self::default()
        }
    }

    /// A gradient background.
    #[must_use]
    pub fn gradient(gradient: GradientValue) -> Self {
        Self {
            kind: BackgroundKind::Gradient,
            gradient: Some(gradient),
            ..Self::default()
        }
    }

    /// An image background.
    #[must_use]
    pub fn image(image: BackgroundImage) -> Self {
        Self {
            kind: BackgroundKind::Image,
            image: Some(image),
            ..Self::default()
        }
    }
}

/// [§ 3.1 Layering multiple background images](https://www.w3.org/TR/css-backgrounds-3/#layering)
///
/// "The background of a box can have multiple layers... The first image in
/// the list is the layer closest to the user."
///
/// Only the field matching `kind` is read. An enabled overlay is placed
/// first, and every per-layer property is comma-separated so the overlay and
/// the image keep their own size, position and repeat.
#[must_use]
pub fn background_value_to_css(value: &BackgroundValue) -> Option<StyleProperties> {
    match value.kind {
        BackgroundKind::None => None,
        BackgroundKind::Solid => value
            .solid
            .as_ref()
            .map(|color| StyleProperties::new().with("background-color", color.to_css())),
        BackgroundKind::Gradient => value
            .gradient
            .as_ref()
            .and_then(gradient_value_to_css)
            .map(|image| StyleProperties::new().with("background-image", image)),
        BackgroundKind::Image => image_background_to_css(value),
    }
}

/// One comma-separated entry of a layered background.
struct Layer {
    image: String,
    size: String,
    position: String,
    repeat: String,
    attachment: String,
}

fn join_layers(layers: &[Layer], pick: impl Fn(&Layer) -> &str) -> String {
    layers.iter().map(pick).collect::<Vec<_>>().join(", ")
}

/// [CSS Syntax Level 3 § 4.3.4](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
///
/// A quoted `url("...")`. Backslash and quote are escaped, control
/// characters become hex escapes, so the URL cannot end the string.
fn css_url(url: &str) -> String {
    let mut quoted = String::with_capacity(url.len() + 7);
    quoted.push_str("url(\"");
    for c in url.chars() {
        match c {
            '\\' | '"' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\0' => quoted.push(char::REPLACEMENT_CHARACTER),
            c if c.is_control() => quoted.push_str(&format!("\\{:x} ", u32::from(c))),
            c => quoted.push(c),
        }
    }
    quoted.push_str("\")");
    quoted
}

fn image_background_to_css(value: &BackgroundValue) -> Option<StyleProperties> {
    let image = value.image.as_ref()?;
    let overlay = value.overlay.as_ref().and_then(BackgroundOverlay::to_layer);
    let url = image.media.as_ref().map(|media| css_url(&media.url));

    let mut layers = Vec::with_capacity(2);
    if let Some(overlay) = overlay {
        layers.push(Layer {
            image: overlay,
            size: "cover".to_string(),
            position: "center".to_string(),
            repeat: "no-repeat".to_string(),
            attachment: image.attachment.to_string(),
        });
    }
    if let Some(url) = url {
        layers.push(Layer {
            image: url,
            size: image.size.to_string(),
            position: image.position.to_css().to_string(),
            repeat: image.repeat.to_string(),
            attachment: image.attachment.to_string(),
        });
    }
    if layers.is_empty() {
        return None;
    }

    let mut style = StyleProperties::new()
        .with("background-image", join_layers(&layers, |l| l.image.as_str()))
        .with("background-size", join_layers(&layers, |l| l.size.as_str()))
        .with("background-position", join_layers(&layers, |l| l.position.as_str()))
        .with("background-repeat", join_layers(&layers, |l| l.repeat.as_str()))
        .with("background-attachment", join_layers(&layers, |l| l.attachment.as_str()));

    if let Some(mask) = image.mask.as_ref().and_then(mask_value_to_css) {
        style.extend(mask);
    }
    Some(style)
}
