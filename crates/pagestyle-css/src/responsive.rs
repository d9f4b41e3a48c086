//! Responsive values and the media-query compiler.
//!
//! [Media Queries Level 4 § 4 Media Features](https://www.w3.org/TR/mediaqueries-4/#mq-features)
//!
//! A responsive value holds a base value for the smallest breakpoint and
//! optional overrides for larger ones. Overrides are mobile-first: a value
//! applies from its breakpoint's `min-width` upward until the next explicit
//! override.
//!
//! # Why responsive values never produce inline styles
//!
//! ```text
//!   style="padding: 8px"                  ← specificity (1,0,0,0)
//!   @media (min-width: 768px) {
//!     .ps-1f2e { padding: 16px; }         ← specificity (0,0,1,0), loses
//!   }
//! ```
//!
//! An inline declaration beats any stylesheet rule, so as soon as a value
//! has an override the base must move into the stylesheet too. Plain values
//! stay inline.

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::style::StyleProperties;

/// The fixed breakpoint table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Base, 0px and up.
    Xs,
    /// 640px and up.
    Sm,
    /// 768px and up.
    Md,
    /// 1024px and up.
    Lg,
    /// 1280px and up.
    Xl,
}

impl Breakpoint {
    /// The viewport width at which this breakpoint starts, in pixels.
    #[must_use]
    pub const fn min_width(self) -> u32 {
        match self {
            Self::Xs => 0,
            Self::Sm => 640,
            Self::Md => 768,
            Self::Lg => 1024,
            Self::Xl => 1280,
        }
    }

    /// The next larger breakpoint.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Xs => Some(Self::Sm),
            Self::Sm => Some(Self::Md),
            Self::Md => Some(Self::Lg),
            Self::Lg => Some(Self::Xl),
            Self::Xl => None,
        }
    }

    /// The widest viewport still inside this breakpoint, `None` for the last.
    #[must_use]
    pub fn max_width(self) -> Option<u32> {
        self.next().map(|next| next.min_width() - 1)
    }
}

/// A value at `xs` with optional overrides at larger breakpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Responsive<T> {
    /// Base value.
    pub xs: T,
    /// Override from 640px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<T>,
    /// Override from 768px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<T>,
    /// Override from 1024px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<T>,
    /// Override from 1280px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<T>,
}

impl<T> Responsive<T> {
    /// A responsive value with only a base.
    #[must_use]
    pub const fn new(xs: T) -> Self {
        Self {
            xs,
            sm: None,
            md: None,
            lg: None,
            xl: None,
        }
    }

    /// Builder: set the value at `breakpoint` (replacing the base for `xs`).
    #[must_use]
    pub fn with(mut self, breakpoint: Breakpoint, value: T) -> Self {
        match breakpoint {
            Breakpoint::Xs => self.xs = value,
            Breakpoint::Sm => self.sm = Some(value),
            Breakpoint::Md => self.md = Some(value),
            Breakpoint::Lg => self.lg = Some(value),
            Breakpoint::Xl => self.xl = Some(value),
        }
        self
    }

    /// The value explicitly set at `breakpoint`.
    #[must_use]
    pub const fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        match breakpoint {
            Breakpoint::Xs => Some(&self.xs),
            Breakpoint::Sm => self.sm.as_ref(),
            Breakpoint::Md => self.md.as_ref(),
            Breakpoint::Lg => self.lg.as_ref(),
            Breakpoint::Xl => self.xl.as_ref(),
        }
    }

    /// The value in effect at `breakpoint`: its own override or the nearest
    /// smaller one.
    #[must_use]
    pub fn resolve(&self, breakpoint: Breakpoint) -> &T {
        Breakpoint::iter()
            .take_while(|bp| *bp <= breakpoint)
            .filter_map(|bp| self.get(bp))
            .last()
            .unwrap_or(&self.xs)
    }

    /// Explicitly set breakpoints, smallest first.
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        Breakpoint::iter().filter_map(|bp| self.get(bp).map(|value| (bp, value)))
    }
}

/// A field that may or may not use the responsive envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MaybeResponsive<T> {
    /// Per-breakpoint values.
    Responsive(Responsive<T>),
    /// One value for every viewport.
    Plain(T),
}

impl<T> MaybeResponsive<T> {
    /// Returns `true` for the envelope shape.
    #[must_use]
    pub const fn is_responsive(&self) -> bool {
        matches!(self, Self::Responsive(_))
    }
}

impl<T> From<T> for MaybeResponsive<T> {
    fn from(value: T) -> Self {
        Self::Plain(value)
    }
}

/// True iff `value` is an object carrying the `xs` key of the envelope.
#[must_use]
pub fn is_responsive_value(value: &Value) -> bool {
    value.as_object().is_some_and(|object| object.contains_key("xs"))
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for MaybeResponsive<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        if is_responsive_value(&raw) {
            Responsive::deserialize(raw)
                .map(Self::Responsive)
                .map_err(D::Error::custom)
        } else {
            T::deserialize(raw).map(Self::Plain).map_err(D::Error::custom)
        }
    }
}

/// Output of [`compile`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledStyles {
    /// Styles to apply inline. Empty for responsive values.
    pub base_styles: StyleProperties,
    /// Stylesheet text to inject verbatim. Empty for plain values.
    pub media_query_css: String,
}

impl CompiledStyles {
    /// Returns `true` when neither output has content.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.base_styles.is_empty() && self.media_query_css.is_empty()
    }
}

/// `.class`, tolerating a class name that already carries the dot.
#[must_use]
pub fn class_selector(class_name: &str) -> String {
    format!(".{}", class_name.trim_start_matches('.'))
}

/// A single style rule, `None` for an empty block.
fn style_rule(selector: &str, style: &StyleProperties) -> Option<String> {
    (!style.is_empty()).then(|| format!("{selector} {{ {style} }}"))
}

/// Wrap `rule` in the `min-width` query of `breakpoint`; `xs` is unconditional.
fn at_breakpoint(breakpoint: Breakpoint, rule: String) -> String {
    match breakpoint {
        Breakpoint::Xs => rule,
        bp => format!("@media (min-width: {}px) {{ {rule} }}", bp.min_width()),
    }
}

/// Compile a possibly responsive value.
///
/// - `None` compiles to nothing.
/// - A plain value becomes `base_styles` for inline use.
/// - A responsive value becomes stylesheet rules keyed by `class_name`:
///   `xs` unconditionally and every other explicit breakpoint inside its
///   `min-width` query. Breakpoints without an override, and overrides the
///   converter turns into nothing, emit no rule and inherit through the
///   cascade.
///
/// An override cannot clear what a smaller breakpoint set. A `md` border
/// with style `none` converts to nothing, so the `xs` border rule keeps
/// matching from 768px up. To remove a value at a breakpoint, give that
/// breakpoint a value whose converter emits the resetting declarations.
#[must_use]
pub fn compile<T, F>(
    value: Option<&MaybeResponsive<T>>,
    converter: F,
    class_name: &str,
) -> CompiledStyles
where
    F: Fn(&T) -> Option<StyleProperties>,
{
    match value {
        None => CompiledStyles::default(),
        Some(MaybeResponsive::Plain(plain)) => CompiledStyles {
            base_styles: converter(plain).unwrap_or_default(),
            media_query_css: String::new(),
        },
        Some(MaybeResponsive::Responsive(responsive)) => CompiledStyles {
            base_styles: StyleProperties::new(),
            media_query_css: compile_responsive(responsive, converter, class_name),
        },
    }
}

/// The stylesheet text for a responsive value, one rule per line.
#[must_use]
pub fn compile_responsive<T, F>(value: &Responsive<T>, converter: F, class_name: &str) -> String
where
    F: Fn(&T) -> Option<StyleProperties>,
{
    let selector = class_selector(class_name);
    value
        .iter()
        .filter_map(|(bp, v)| {
            let style = converter(v)?;
            style_rule(&selector, &style).map(|rule| at_breakpoint(bp, rule))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_inherits_upward() {
        let value = Responsive::new(1).with(Breakpoint::Md, 3);
        assert_eq!(*value.resolve(Breakpoint::Xs), 1);
        assert_eq!(*value.resolve(Breakpoint::Sm), 1);
        assert_eq!(*value.resolve(Breakpoint::Md), 3);
        assert_eq!(*value.resolve(Breakpoint::Xl), 3);
    }

    #[test]
    fn test_max_width() {
        assert_eq!(Breakpoint::Sm.max_width(), Some(767));
        assert_eq!(Breakpoint::Xl.max_width(), None);
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Gap {
        px: u32,
    }

    #[test]
    fn test_envelope_decodes_without_default_bound() {
        let value: MaybeResponsive<Gap> =
            serde_json::from_str(r#"{ "xs": { "px": 4 }, "md": { "px": 12 } }"#).unwrap();
        let MaybeResponsive::Responsive(responsive) = value else {
            panic!("expected the envelope");
        };
        assert_eq!(responsive.xs, Gap { px: 4 });
        assert_eq!(responsive.sm, None);
        assert_eq!(responsive.md, Some(Gap { px: 12 }));
    }

    #[test]
    fn test_class_selector_strips_dot() {
        assert_eq!(class_selector(".hero"), ".hero");
        assert_eq!(class_selector("hero"), ".hero");
    }
}
