//! High-level entry points
//!
//! Thin wrappers over the profile, score, sweep, and stats modules for
//! callers that want the canonical linear weighting and a default-sized
//! worker pool without assembling the pieces themselves.

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::profile::{QuerySignature, ReferenceProfile, Window};
use crate::score::{connection_score, LinearRank, ScoreResult};
use crate::stats::{
    estimate_significance_series, RandomSignaturePopulation, SignificanceResult,
};
use crate::sweep::{SweepPool, DEFAULT_SWEEP_THREADS};

/// Build the synthetic reference profile of size `n`.
pub fn build_reference_profile(n: usize) -> Result<ReferenceProfile> {
    ReferenceProfile::synthetic(n)
}

/// Derive the direction signature that matches `profile` sign-for-sign.
pub fn derive_query_signature(profile: &ReferenceProfile) -> QuerySignature {
    QuerySignature::matching(profile)
}

/// Score one window under the canonical linear weighting.
pub fn score(
    signature: &QuerySignature,
    profile: &ReferenceProfile,
    window: Window,
) -> Result<ScoreResult> {
    connection_score(signature, profile, window, &LinearRank)
}

/// Score every window length m = 1..=n at offset 0.
pub fn sweep_by_window_length(
    profile: &ReferenceProfile,
    signature: &QuerySignature,
) -> Result<Vec<ScoreResult>> {
    let pool = SweepPool::new(DEFAULT_SWEEP_THREADS)?;
    pool.sweep_by_window_length(profile, signature, &LinearRank)
}

/// Score a fixed window length at every offset F = 0..=n-m.
pub fn sweep_by_offset(
    profile: &ReferenceProfile,
    signature: &QuerySignature,
    window_len: usize,
) -> Result<Vec<ScoreResult>> {
    let pool = SweepPool::new(DEFAULT_SWEEP_THREADS)?;
    pool.sweep_by_offset(profile, signature, window_len, &LinearRank)
}

/// Attach empirical p-values to an observed score series.
///
/// Draws one population of `population_size` random signatures from `seed`
/// and evaluates every observed window against it.
pub fn estimate_significance(
    observed: &[ScoreResult],
    profile: &ReferenceProfile,
    population_size: usize,
    seed: u64,
) -> Result<Vec<SignificanceResult>> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let population =
        RandomSignaturePopulation::generate(profile.len(), population_size, &mut rng)?;
    estimate_significance_series(observed, profile, &population, &LinearRank)
}
