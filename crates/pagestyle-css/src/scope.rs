//! Content-addressed class names for scoping generated rules.
//!
//! A renderer without a stable element id derives one from the value
//! itself plus a key for the render scope (component type, slot name,
//! position in the tree). Equal inputs always produce the same class, so
//! server and client renders agree without any shared counter.

use serde::Serialize;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a.
fn fnv1a(bytes: impl IntoIterator<Item = u8>, mut hash: u64) -> u64 {
    for byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Hash of the scope key and the value's JSON form.
#[must_use]
pub fn scope_hash<T: Serialize + ?Sized>(value: &T, scope_key: &str) -> u64 {
    let json = serde_json::to_vec(value).unwrap_or_default();
    let hash = fnv1a(scope_key.bytes(), FNV_OFFSET_BASIS);
    // Separator so ("ab", "c") and ("a", "bc") differ.
    let hash = fnv1a([0xff], hash);
    fnv1a(json, hash)
}

/// `ps-<16 hex digits>`, a valid CSS class name for `value` in `scope_key`.
#[must_use]
pub fn scope_class<T: Serialize + ?Sized>(value: &T, scope_key: &str) -> String {
    format!("ps-{:016x}", scope_hash(value, scope_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_reference_vector() {
        // FNV-1a 64 of "a".
        assert_eq!(fnv1a(*b"a", FNV_OFFSET_BASIS), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn test_scope_key_changes_class() {
        let value = serde_json::json!({ "xs": 1 });
        assert_eq!(scope_class(&value, "hero"), scope_class(&value, "hero"));
        assert_ne!(scope_class(&value, "hero"), scope_class(&value, "footer"));
    }
}
