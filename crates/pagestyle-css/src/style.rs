//! Style property maps and CSS number serialization.
//!
//! [CSSOM § 6.6 CSS Declaration Blocks](https://www.w3.org/TR/cssom-1/#css-declaration-blocks)
//!
//! Every converter produces a [`StyleProperties`]: an ordered list of
//! declarations keyed by their CSS property name. Order is preserved because
//! later declarations win inside a block and the emitted text must be
//! byte-stable across calls.

use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// [§ 6.6 CSS Declaration Blocks](https://www.w3.org/TR/cssom-1/#css-declaration-blocks)
///
/// "A CSS declaration block is an ordered collection of CSS properties with
/// their associated values."
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleProperties {
    declarations: Vec<(String, String)>,
}

impl StyleProperties {
    /// An empty declaration block.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// Set `property` to `value`, replacing an earlier declaration of the same
    /// property in place.
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(existing) = self
            .declarations
            .iter_mut()
            .find(|(name, _)| name == property)
        {
            existing.1 = value;
        } else {
            self.declarations.push((property.to_string(), value));
        }
    }

    /// Builder form of [`StyleProperties::set`].
    #[must_use]
    pub fn with(mut self, property: &str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Look up the value of a property.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if the block declares `property`.
    #[must_use]
    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Returns `true` if the block has no declarations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Number of declarations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Iterate declarations in insertion order.
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Append every declaration of `other`, later values winning.
    pub fn extend(&mut self, other: Self) {
        for (name, value) in other.declarations {
            self.set(&name, value);
        }
    }

    /// `None` when the block is empty; converters return this so that "no
    /// visual effect" is distinguishable from an empty map.
    #[must_use]
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

/// Serializes as `prop: value; prop: value;`, the body of a style rule and a
/// valid inline `style` attribute.
impl fmt::Display for StyleProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}: {value};")?;
        }
        Ok(())
    }
}

impl Serialize for StyleProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len()))?;
        for (name, value) in &self.declarations {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// [CSSOM § 6.7.2 Serializing CSS Values](https://www.w3.org/TR/cssom-1/#serializing-css-values)
///
/// "A base-ten number using digits 0-9 ... with the shortest possible
/// representation." Values are rounded to four decimal places so that float
/// noise (`0.1 + 0.2`) never reaches the stylesheet, and negative zero prints
/// as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// `<number><unit>`, e.g. `format_length(8.0, "px")` is `8px`.
#[must_use]
pub fn format_length(value: f64, unit: &str) -> String {
    format!("{}{unit}", format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut style = StyleProperties::new()
            .with("margin", "0")
            .with("padding", "4px");
        style.set("margin", "auto");
        assert_eq!(style.to_string(), "margin: auto; padding: 4px;");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-12.25), "-12.25");
        assert_eq!(format_number(f64::NAN), "0");
    }

    #[test]
    fn test_non_empty() {
        assert!(StyleProperties::new().non_empty().is_none());
        assert!(StyleProperties::new().with("a", "b").non_empty().is_some());
    }
}
