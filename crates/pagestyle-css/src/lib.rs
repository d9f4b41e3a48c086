//! Style values, CSS converters, and the responsive compiler for pagestyle.
//!
//! # Scope
//!
//! This crate implements:
//! - **Value types** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Color, spacing, dimensions, background, border, transform, shadow
//!   - Aspect ratio, content alignment, divider
//!   - Lenient keyword enums that fall back to a default on unknown input
//!
//! - **Converters**
//!   - One pure function per value type producing [`StyleProperties`]
//!   - `None` whenever a value has no visual effect
//!
//! - **Responsive compiler** ([Media Queries Level 4](https://www.w3.org/TR/mediaqueries-4/))
//!   - Plain values to inline styles
//!   - Per-breakpoint values to mobile-first `min-width` rules
//!   - Visibility to bounded `display: none` ranges
//!
//! - **Animation** ([CSS Transitions Level 1](https://www.w3.org/TR/css-transitions-1/))
//!   - Entrance presets as `(initial, animate)` style pairs
//!   - Custom transitions
//!   - Child stagger delays
//!
//! - **Migration**
//!   - Legacy width values to dimensions
//!
//! # Not Yet Implemented
//!
//! - Container queries
//! - Keyframe animations (entrances are transitions between two states)

/// Animation values, entrance presets, and stagger per [CSS Transitions Level 1](https://www.w3.org/TR/css-transitions-1/).
pub mod animation;
/// Fallible JSON decoding into value types.
pub mod decode;
/// Legacy width value migration.
pub mod migrate;
/// Breakpoints and the media-query compiler per [Media Queries Level 4](https://www.w3.org/TR/mediaqueries-4/).
pub mod responsive;
/// Deterministic class names for generated rules.
pub mod scope;
/// Ordered property maps and number formatting.
pub mod style;
/// Value types and converters.
pub mod values;
/// Per-breakpoint visibility.
pub mod visibility;

// Re-exports for convenience
pub use animation::{
    AnimationMode, AnimationValue, Easing, EntrancePreset, EntranceStyles, StaggerConfig,
    StaggerDirection, animation_value_to_css, get_child_entrance_styles,
    get_entrance_animation_styles, get_stagger_delay,
};
pub use decode::{ValueError, decode, decode_value};
pub use migrate::{
    LegacyWidthValue, WidthInput, is_legacy_width_value, migrate_width_value, width_value_to_css,
};
pub use responsive::{
    Breakpoint, CompiledStyles, MaybeResponsive, Responsive, compile, compile_responsive,
};
pub use scope::scope_class;
pub use style::StyleProperties;
pub use values::{
    BackgroundValue, BorderValue, ColorValue, DimensionsValue, ShadowValue, SpacingValue,
    TransformValue, background_value_to_css, border_value_to_css, dimensions_value_to_css,
    margin_value_to_css, padding_value_to_css, shadow_value_to_css, transform_value_to_css,
};
pub use visibility::{VisibilityValue, visibility_value_to_media_css};
