//! Unit tests for score/engine.rs and score/weighting.rs

use conmap::profile::{QuerySignature, ReferenceProfile, Window};
use conmap::score::{
    connection_score, connection_strength, max_connection_strength, LinearRank, RankWeighting,
};

use super::helpers::{assert_close, matching_signature, ten_item_profile};

#[test]
fn test_max_strength_table() {
    // sum_{i=1}^{m} (n - i + 1)
    assert_eq!(max_connection_strength(10, 5, &LinearRank).unwrap(), 40.0);
    assert_eq!(max_connection_strength(10, 10, &LinearRank).unwrap(), 55.0);
    assert_eq!(max_connection_strength(10, 1, &LinearRank).unwrap(), 10.0);
    assert_eq!(max_connection_strength(10, 0, &LinearRank).unwrap(), 0.0);
    assert_eq!(max_connection_strength(5, 5, &LinearRank).unwrap(), 15.0);
}

#[test]
fn test_max_strength_ignores_offset_and_signature() {
    let profile = ten_item_profile();
    let signature = matching_signature(&profile);

    // Two windows of the same length at different offsets share a maximum
    let top = connection_score(&signature, &profile, Window::new(5, 0), &LinearRank).unwrap();
    let bottom = connection_score(&signature, &profile, Window::new(5, 5), &LinearRank).unwrap();
    assert_eq!(top.max_strength, bottom.max_strength);
}

#[test]
fn test_matching_signature_scores_exactly_one() {
    let profile = ten_item_profile();
    let signature = matching_signature(&profile);

    for m in 1..=10 {
        let result =
            connection_score(&signature, &profile, Window::new(m, 0), &LinearRank).unwrap();
        assert_eq!(result.score, 1.0, "m = {m}");
    }
}

#[test]
fn test_documented_offset_example() {
    // N=10, m=5, offset 5: window values [-5, 4, -3, 2, -1] against signs
    // [-1, 1, -1, 1, -1] gives strength 15 over an unchanged maximum of 40
    let profile = ten_item_profile();
    let signature = matching_signature(&profile);

    let strength = connection_strength(&signature, &profile, Window::new(5, 5)).unwrap();
    assert_eq!(strength, 15.0);

    let result = connection_score(&signature, &profile, Window::new(5, 5), &LinearRank).unwrap();
    assert_eq!(result.max_strength, 40.0);
    assert_eq!(result.score, 0.375);
}

#[test]
fn test_score_non_increasing_as_offset_grows() {
    let profile = ReferenceProfile::synthetic(30).unwrap();
    let signature = matching_signature(&profile);
    let m = 6;

    let mut previous = f64::INFINITY;
    for offset in 0..=(30 - m) {
        let result =
            connection_score(&signature, &profile, Window::new(m, offset), &LinearRank).unwrap();
        assert!(
            result.score <= previous,
            "score rose from {previous} to {} at offset {offset}",
            result.score
        );
        previous = result.score;
    }
}

#[test]
fn test_zero_length_window_is_convention_not_error() {
    let profile = ten_item_profile();
    let signature = matching_signature(&profile);

    let result = connection_score(&signature, &profile, Window::new(0, 3), &LinearRank).unwrap();
    assert_eq!(result.score, 0.0);
}

#[test]
fn test_window_past_profile_end_rejected() {
    let profile = ten_item_profile();
    let signature = matching_signature(&profile);

    assert!(connection_score(&signature, &profile, Window::new(6, 5), &LinearRank).is_err());
    assert!(max_connection_strength(10, 11, &LinearRank).is_err());
}

/// Flat weighting: every rank worth 1, so the maximum is just the window
/// length. Exercises the pluggable scheme seam.
struct UniformRank;

impl RankWeighting for UniformRank {
    fn weight(&self, _n: usize, _rank: usize) -> f64 {
        1.0
    }
}

#[test]
fn test_alternate_weighting_scheme() {
    assert_eq!(max_connection_strength(10, 5, &UniformRank).unwrap(), 5.0);

    // Unit-magnitude profile: under flat weighting a full sign match is
    // exactly the maximum
    let profile = ReferenceProfile::from_weights(vec![1.0, -1.0, 1.0, -1.0]).unwrap();
    let signature = QuerySignature::matching(&profile);
    let result = connection_score(&signature, &profile, Window::new(4, 0), &UniformRank).unwrap();
    assert_eq!(result.score, 1.0);
}

#[test]
fn test_opposed_signature_scores_negative() {
    let profile = ten_item_profile();
    let signs = profile
        .weights()
        .iter()
        .map(|w| if *w < 0.0 { 1 } else { -1 })
        .collect();
    let opposed = QuerySignature::from_signs(signs).unwrap();

    let result = connection_score(&opposed, &profile, Window::new(10, 0), &LinearRank).unwrap();
    assert_close(result.score, -1.0, 1e-12);
}
