//! Empirical significance estimation
//!
//! The p-value of an observed connection score is the fraction of a random
//! signature population whose score at the same window strictly exceeds it
//! (one-tailed, upper tail). The normalizing maximum strength is fixed by
//! (n, m), so it is computed once and shared across the whole population
//! rather than recomputed per draw.

use anyhow::{bail, Result};
use rayon::prelude::*;

use super::random_signatures::RandomSignaturePopulation;
use crate::profile::{ReferenceProfile, Window};
use crate::score::{connection_strength, max_connection_strength, RankWeighting, ScoreResult};

/// A scored window with its empirical p-value.
#[derive(Debug, Clone, Copy)]
pub struct SignificanceResult {
    pub window: Window,
    pub score: f64,
    pub p_value: f64,
}

/// Empirical one-tailed p-value for `observed_score` at `window`.
///
/// Ties (random score equal to the observed score) are not counted as more
/// extreme; the count is strictly greater-than. Every random strength is
/// bounded above by the shared maximum, so an observed score of 1 under the
/// canonical construction yields a p-value of exactly 0 for every population
/// and seed.
///
/// The population is scored in parallel; it is immutable and shared by
/// reference, so the only reduction is the final count.
pub fn estimate_p_value<W>(
    observed_score: f64,
    window: Window,
    profile: &ReferenceProfile,
    population: &RandomSignaturePopulation,
    weighting: &W,
) -> Result<f64>
where
    W: RankWeighting + ?Sized,
{
    if population.is_empty() {
        bail!("cannot estimate significance from an empty population");
    }
    window.validate(profile.len())?;
    let max_strength = max_connection_strength(profile.len(), window.len, weighting)?;

    let exceeding = population
        .signatures()
        .par_iter()
        .map(|signature| -> Result<u64> {
            let strength = connection_strength(signature, profile, window)?;
            let score = if window.len == 0 {
                0.0
            } else {
                strength / max_strength
            };
            Ok(u64::from(score > observed_score))
        })
        .try_reduce(|| 0u64, |a, b| Ok(a + b))?;

    Ok(exceeding as f64 / population.len() as f64)
}

/// Attach an empirical p-value to each entry of an observed score series,
/// evaluating every window against the same population.
pub fn estimate_significance_series<W>(
    observed: &[ScoreResult],
    profile: &ReferenceProfile,
    population: &RandomSignaturePopulation,
    weighting: &W,
) -> Result<Vec<SignificanceResult>>
where
    W: RankWeighting + ?Sized,
{
    observed
        .iter()
        .map(|result| {
            let p_value =
                estimate_p_value(result.score, result.window, profile, population, weighting)?;
            Ok(SignificanceResult {
                window: result.window,
                score: result.score,
                p_value,
            })
        })
        .collect()
}
