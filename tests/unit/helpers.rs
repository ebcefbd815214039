//! Shared helpers for conmap unit tests

use conmap::profile::{QuerySignature, ReferenceProfile};

pub fn ten_item_profile() -> ReferenceProfile {
    ReferenceProfile::synthetic(10).unwrap()
}

pub fn matching_signature(profile: &ReferenceProfile) -> QuerySignature {
    QuerySignature::matching(profile)
}

pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected {expected}, got {actual} (tolerance {tol})"
    );
}
