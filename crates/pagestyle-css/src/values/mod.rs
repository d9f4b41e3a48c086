//! Style value types and their converters
//!
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/)
//! - [CSS Box Sizing Level 3](https://www.w3.org/TR/css-sizing-3/)
//! - [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)
//! - [CSS Transforms Level 1](https://www.w3.org/TR/css-transforms-1/)
//!
//! Each value type is a plain serde struct in the editor's JSON shape. Each
//! converter is a pure `fn(&V) -> Option<StyleProperties>` that returns
//! `None` when the value has no visual effect, so converters can be handed
//! straight to [`crate::compile`].

mod background;
mod border;
mod color;
mod dimensions;
pub(crate) mod keyword;
mod layout;
mod position;
mod shadow;
mod spacing;
mod transform;

pub use background::{
    BackgroundAttachment, BackgroundImage, BackgroundKind, BackgroundOverlay, BackgroundRepeat,
    BackgroundSize, BackgroundValue, FadeDirection, FadeMask, GradientKind, GradientStop,
    GradientValue, MediaRef, OverlayKind, RadialShape, background_value_to_css,
    gradient_value_to_css, mask_value_to_css,
};
pub use border::{BorderSides, BorderStyle, BorderValue, border_value_to_css};
pub use color::{ColorValue, color_value_to_css, hex_to_rgba, normalize_hex, rgba};
pub use dimensions::{
    BlockAlignment, DimensionConstraint, DimensionUnit, DimensionsMode, DimensionsValue,
    dimensions_value_to_css,
};
pub use layout::{
    AspectRatio, ContentAlignment, DividerStyle, DividerValue, aspect_ratio_to_css,
    content_alignment_to_css, divider_value_to_css,
};
pub use position::AnchorPosition;
pub use shadow::{ShadowPreset, ShadowValue, shadow_value_to_css};
pub use spacing::{SpacingUnit, SpacingValue, margin_value_to_css, padding_value_to_css};
pub use transform::{TranslateUnit, TransformValue, transform_value_to_css};
