//! Reference profiles, query signatures, and rank windows
//!
//! A reference profile is a ranked list of signed weights: rank 1 carries the
//! greatest magnitude and magnitudes are non-increasing down the list, with
//! the sign of each entry encoding direction of regulation. A query signature
//! carries only direction (+1/-1 per item, no rank information). A window
//! selects a contiguous run of ranks that the scoring engine evaluates.

use anyhow::{bail, Result};

/// A ranked, signed reference profile.
///
/// Rank i is stored at index i-1. Non-increasing magnitude down the ranks is
/// a precondition of the engine's maximum-strength normalization, not
/// something this type enforces: callers wrapping their own measurements via
/// `from_weights` must keep magnitudes rank-ordered for normalized scores to
/// stay in [-1, 1].
#[derive(Debug, Clone)]
pub struct ReferenceProfile {
    weights: Vec<f64>,
}

impl ReferenceProfile {
    /// Synthetic profile of size `n`: rank i has magnitude `n - i + 1`, with
    /// the sign alternating by rank parity (even ranks negative).
    ///
    /// For n = 10 this yields [10, -9, 8, -7, 6, -5, 4, -3, 2, -1].
    pub fn synthetic(n: usize) -> Result<Self> {
        if n == 0 {
            bail!("profile size must be positive, got 0");
        }
        let weights = (1..=n)
            .map(|rank| {
                let magnitude = (n - rank + 1) as f64;
                if rank % 2 == 0 {
                    -magnitude
                } else {
                    magnitude
                }
            })
            .collect();
        Ok(Self { weights })
    }

    /// Wrap caller-supplied signed weights, rank order preserved.
    pub fn from_weights(weights: Vec<f64>) -> Result<Self> {
        if weights.is_empty() {
            bail!("profile must contain at least one weight");
        }
        Ok(Self { weights })
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// A direction-only query signature: one sign per item, no magnitudes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySignature {
    signs: Vec<i8>,
}

impl QuerySignature {
    /// Signature whose i-th sign matches the sign of `profile`'s i-th weight.
    pub fn matching(profile: &ReferenceProfile) -> Self {
        let signs = profile
            .weights()
            .iter()
            .map(|w| if *w < 0.0 { -1 } else { 1 })
            .collect();
        Self { signs }
    }

    /// Wrap caller-supplied signs. Every entry must be +1 or -1.
    pub fn from_signs(signs: Vec<i8>) -> Result<Self> {
        if signs.is_empty() {
            bail!("signature must contain at least one sign");
        }
        if let Some(bad) = signs.iter().find(|s| **s != 1 && **s != -1) {
            bail!("signature entries must be +1 or -1, got {bad}");
        }
        Ok(Self { signs })
    }

    pub fn len(&self) -> usize {
        self.signs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }

    pub fn signs(&self) -> &[i8] {
        &self.signs
    }
}

/// A window over the ranked profile: `len` consecutive ranks starting
/// `offset` positions below the top, i.e. 1-based ranks
/// [offset + 1, offset + len].
///
/// `len = 0` is the documented degenerate window: the engine scores it 0 by
/// convention instead of dividing by a zero maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub len: usize,
    pub offset: usize,
}

impl Window {
    pub fn new(len: usize, offset: usize) -> Self {
        Self { len, offset }
    }

    /// Check that the window fits a sequence of `n` items.
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.len + self.offset > n {
            bail!(
                "window over ranks [{}, {}] exceeds profile size {}",
                self.offset + 1,
                self.offset + self.len,
                n
            );
        }
        Ok(())
    }

    /// 0-based index range selected by this window.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len
    }
}
