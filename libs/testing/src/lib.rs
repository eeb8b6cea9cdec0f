//! Test fixtures and property-testing strategies shared across the workspace.

use proptest::prelude::*;
use uuid::Uuid;

/// Application ID used by the worked examples.
pub const APPLICATION_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Owner ID used by the worked examples.
pub const OWNER_ID: &str = "11111111-1111-1111-1111-111111111111";

/// A non-empty path component: anything except `/`.
pub fn segment_value() -> impl Strategy<Value = String> {
    "[^/]{1,48}"
}

/// A hyphenated UUID string, in lower or upper case.
pub fn uuid_string() -> impl Strategy<Value = String> {
    (any::<u128>(), any::<bool>()).prop_map(|(bits, upper)| {
        let s = Uuid::from_u128(bits).hyphenated().to_string();
        if upper {
            s.to_ascii_uppercase()
        } else {
            s
        }
    })
}

/// `literal` with the ASCII case of each character chosen at random.
pub fn case_variant(literal: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), literal.len()).prop_map(move |flips| {
        literal
            .chars()
            .zip(flips)
            .map(|(c, flip)| if flip { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect()
    })
}
