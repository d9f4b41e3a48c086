//! Decoding editor JSON into value types.
//!
//! Converters never fail; this is the only fallible boundary.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Failure to turn JSON text into a value type.
#[derive(thiserror::Error, Debug)]
pub enum ValueError {
    /// The text is not JSON at all.
    #[error("malformed JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// The JSON does not have the shape of the requested value.
    #[error("not a valid {kind} value: {source}")]
    Shape {
        /// Human name of the value type, e.g. `"padding"`.
        kind: &'static str,
        /// The underlying mismatch.
        #[source]
        source: serde_json::Error,
    },
}

/// Parse `text` and decode it as a `kind` value.
///
/// # Errors
///
/// [`ValueError::Json`] when `text` is not JSON, [`ValueError::Shape`] when
/// it is JSON of the wrong shape.
pub fn decode<T: DeserializeOwned>(kind: &'static str, text: &str) -> Result<T, ValueError> {
    let raw: Value = serde_json::from_str(text).map_err(ValueError::Json)?;
    decode_value(kind, raw)
}

/// Decode an already parsed JSON value as a `kind` value.
///
/// # Errors
///
/// [`ValueError::Shape`] when `raw` has the wrong shape.
pub fn decode_value<T: DeserializeOwned>(kind: &'static str, raw: Value) -> Result<T, ValueError> {
    serde_json::from_value(raw).map_err(|source| ValueError::Shape { kind, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::SpacingValue;

    #[test]
    fn test_syntax_error_is_json_variant() {
        let err = decode::<SpacingValue>("padding", "{ top: ").unwrap_err();
        assert!(matches!(err, ValueError::Json(_)));
    }

    #[test]
    fn test_wrong_shape_names_kind() {
        let err = decode::<SpacingValue>("padding", "\"wide\"").unwrap_err();
        assert!(matches!(err, ValueError::Shape { kind: "padding", .. }));
        assert!(err.to_string().starts_with("not a valid padding value"));
    }
}
