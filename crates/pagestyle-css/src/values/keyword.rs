//! Lenient keyword decoding.
//!
//! Keyword enums round-trip through their kebab-case strings. A string the
//! enum does not know decodes to the enum's default and logs a warning
//! instead of failing the whole value.

use std::fmt::Display;
use std::str::FromStr;

use pagestyle_common::warning::warn_once;

/// Parse `raw` as a keyword of `T`, falling back to `T::default()`.
pub(crate) fn parse_keyword<T: FromStr + Default + Display>(raw: &str, what: &str) -> T {
    raw.parse().unwrap_or_else(|_| {
        let fallback = T::default();
        warn_once(what, &format!("unknown {what} '{raw}', using '{fallback}'"));
        fallback
    })
}

/// Implements `From<String>` (lenient) and `Into<String>` for a strum keyword
/// enum so it can be used with `#[serde(from = "String", into = "String")]`.
macro_rules! lenient_keyword {
    ($ty:ty, $what:literal) => {
        impl From<String> for $ty {
            fn from(raw: String) -> Self {
                $crate::values::keyword::parse_keyword(&raw, $what)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.to_string()
            }
        }
    };
}

pub(crate) use lenient_keyword;
