//! Per-breakpoint visibility.
//!
//! [Media Queries Level 4 § 4.2 'width'](https://www.w3.org/TR/mediaqueries-4/#width)
//!
//! Unlike other responsive values, "hidden at `sm` only" cannot be expressed
//! with open-ended `min-width` rules: the element must reappear at `md`
//! without a rule that re-asserts its `display`, which the hiding layer
//! cannot know. Hidden stretches are therefore emitted as bounded
//! `min-width`/`max-width` ranges.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::responsive::{Breakpoint, class_selector};

/// Visibility at `xs` with optional overrides at larger breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityValue {
    /// Base visibility.
    pub xs: bool,
    /// Override from 640px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<bool>,
    /// Override from 768px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<bool>,
    /// Override from 1024px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<bool>,
    /// Override from 1280px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<bool>,
}

impl Default for VisibilityValue {
    fn default() -> Self {
        Self::visible()
    }
}

/// A contiguous stretch of breakpoints, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakpointRange {
    /// First hidden breakpoint.
    pub from: Breakpoint,
    /// Last hidden breakpoint.
    pub to: Breakpoint,
}

impl BreakpointRange {
    /// `@media` condition for the range, `None` when it spans every viewport.
    #[must_use]
    pub fn media_condition(self) -> Option<String> {
        let min = (self.from != Breakpoint::Xs).then_some(self.from.min_width());
        let max = self.to.max_width();
        match (min, max) {
            (None, None) => None,
            (Some(min), None) => Some(format!("(min-width: {min}px)")),
            (None, Some(max)) => Some(format!("(max-width: {max}px)")),
            (Some(min), Some(max)) => {
                Some(format!("(min-width: {min}px) and (max-width: {max}px)"))
            }
        }
    }
}

impl VisibilityValue {
    /// Visible everywhere.
    #[must_use]
    pub const fn visible() -> Self {
        Self {
            xs: true,
            sm: None,
            md: None,
            lg: None,
            xl: None,
        }
    }

    /// Builder: set visibility at `breakpoint`.
    #[must_use]
    pub const fn with(mut self, breakpoint: Breakpoint, visible: bool) -> Self {
        match breakpoint {
            Breakpoint::Xs => self.xs = visible,
            Breakpoint::Sm => self.sm = Some(visible),
            Breakpoint::Md => self.md = Some(visible),
            Breakpoint::Lg => self.lg = Some(visible),
            Breakpoint::Xl => self.xl = Some(visible),
        }
        self
    }

    /// The visibility explicitly set at `breakpoint`.
    #[must_use]
    pub const fn get(self, breakpoint: Breakpoint) -> Option<bool> {
        match breakpoint {
            Breakpoint::Xs => Some(self.xs),
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// Visibility in effect at `breakpoint`, inherited from the nearest
    /// smaller explicit value.
    #[must_use]
    pub fn is_visible_at(self, breakpoint: Breakpoint) -> bool {
        Breakpoint::iter()
            .take_while(|bp| *bp <= breakpoint)
            .filter_map(|bp| self.get(bp))
            .last()
            .unwrap_or(self.xs)
    }

    /// Maximal runs of hidden breakpoints, smallest first.
    #[must_use]
    pub fn hidden_ranges(self) -> Vec<BreakpointRange> {
        let mut ranges: Vec<BreakpointRange> = Vec::new();
        let mut open: Option<Breakpoint> = None;
        let mut previous = Breakpoint::Xs;
        for bp in Breakpoint::iter() {
            match (self.is_visible_at(bp), open) {
                (false, None) => open = Some(bp),
                (true, Some(from)) => {
                    ranges.push(BreakpointRange { from, to: previous });
                    open = None;
                }
                _ => {}
            }
            previous = bp;
        }
        if let Some(from) = open {
            ranges.push(BreakpointRange {
                from,
                to: Breakpoint::Xl,
            });
        }
        ranges
    }
}

/// `display: none` rules for every hidden range, one rule per line. Empty
/// when the element is visible everywhere.
#[must_use]
pub fn visibility_value_to_media_css(value: VisibilityValue, class_name: &str) -> String {
    let rule = format!(
        "{} {{ display: none !important; }}",
        class_selector(class_name)
    );
    value
        .hidden_ranges()
        .iter()
        .map(|range| match range.media_condition() {
            Some(condition) => format!("@media {condition} {{ {rule} }}"),
            None => rule.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
