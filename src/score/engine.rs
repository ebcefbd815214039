//! Connection strength and score computation
//!
//! The strength of a window is the elementwise sum of signature sign times
//! profile weight over the window's ranks; the score normalizes that strength
//! by the largest strength any signature could reach at the same window
//! length. Correctness hinges on index alignment between the signature, the
//! profile, and the window bounds, so both sequences are bounds-checked
//! before extraction.

use anyhow::{bail, Result};

use super::weighting::RankWeighting;
use crate::profile::{QuerySignature, ReferenceProfile, Window};

/// One window evaluation.
#[derive(Debug, Clone, Copy)]
pub struct ScoreResult {
    pub window: Window,
    /// Raw signed alignment sum over the window
    pub strength: f64,
    /// Largest strength reachable at this window length
    pub max_strength: f64,
    /// strength / max_strength, or 0 for a zero-length window
    pub score: f64,
}

/// Theoretical maximum connection strength for a window of `m` ranks in a
/// profile of `n` items: the sum of the `m` largest weights.
///
/// Formula (canonical linear weighting): sum_{i=1}^{m} (n - i + 1)
///
/// Depends only on (n, m) and the weighting scheme, never on the window
/// offset or the signature content. `m = 0` is the empty sum.
pub fn max_connection_strength<W>(n: usize, m: usize, weighting: &W) -> Result<f64>
where
    W: RankWeighting + ?Sized,
{
    if m > n {
        bail!("window length {m} exceeds profile size {n}");
    }
    Ok((1..=m).map(|rank| weighting.weight(n, rank)).sum())
}

/// Raw alignment between a signature and a profile over `window`: the
/// elementwise product sum of signature sign and profile weight across the
/// window's ranks.
///
/// Both sequences must cover the window; an out-of-bounds window on either
/// side is rejected.
pub fn connection_strength(
    signature: &QuerySignature,
    profile: &ReferenceProfile,
    window: Window,
) -> Result<f64> {
    window.validate(profile.len())?;
    if window.len + window.offset > signature.len() {
        bail!(
            "window over ranks [{}, {}] exceeds signature length {}",
            window.offset + 1,
            window.offset + window.len,
            signature.len()
        );
    }

    let signs = &signature.signs()[window.range()];
    let weights = &profile.weights()[window.range()];
    Ok(signs
        .iter()
        .zip(weights)
        .map(|(s, w)| f64::from(*s) * w)
        .sum())
}

/// Normalized connection score: strength over the maximum achievable at this
/// window length.
///
/// A zero-length window scores 0 by convention rather than dividing by a
/// zero maximum. Scores are not clamped: a profile whose magnitudes are not
/// non-increasing in rank can push the ratio outside [-1, 1].
pub fn connection_score<W>(
    signature: &QuerySignature,
    profile: &ReferenceProfile,
    window: Window,
    weighting: &W,
) -> Result<ScoreResult>
where
    W: RankWeighting + ?Sized,
{
    if window.len == 0 {
        window.validate(profile.len())?;
        return Ok(ScoreResult {
            window,
            strength: 0.0,
            max_strength: 0.0,
            score: 0.0,
        });
    }

    let strength = connection_strength(signature, profile, window)?;
    let max_strength = max_connection_strength(profile.len(), window.len, weighting)?;
    Ok(ScoreResult {
        window,
        strength,
        max_strength,
        score: strength / max_strength,
    })
}
