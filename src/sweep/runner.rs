//! Parallel sweep execution
//!
//! Every sweep point is independent of every other, so the sweep domain is
//! partitioned into contiguous chunks, evaluated on a bounded worker pool,
//! and reassembled in ascending sweep order. The caller-visible ordering is
//! identical to sequential execution regardless of how chunks are scheduled;
//! any chunk error aborts the whole sweep, since a partial statistical series
//! is not meaningful.

use anyhow::{bail, Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;

use crate::profile::{QuerySignature, ReferenceProfile, Window};
use crate::score::{connection_score, RankWeighting, ScoreResult};
use crate::stats::{
    estimate_p_value, RandomSignaturePopulation, SignificanceResult,
};

/// Default worker count when the caller does not size the pool explicitly.
pub const DEFAULT_SWEEP_THREADS: usize = 4;

/// Bounded worker pool for sweep evaluation.
pub struct SweepPool {
    pool: rayon::ThreadPool,
}

impl SweepPool {
    /// Build a pool of `num_threads` workers; 0 sizes the pool from the
    /// machine's logical CPUs.
    pub fn new(num_threads: usize) -> Result<Self> {
        let num_threads = if num_threads == 0 {
            num_cpus::get()
        } else {
            num_threads
        };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .context("Failed to build sweep thread pool")?;
        Ok(Self { pool })
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `op` inside this pool so nested parallel iterators use its
    /// workers instead of the global pool.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    /// Evaluate `eval` at every point of `domain`, preserving domain order
    /// in the output regardless of chunk completion order.
    ///
    /// Chunks carry the sweep index of each result; the merge sorts by that
    /// index after the join, so out-of-order chunk completion cannot leak
    /// into the output.
    fn run_chunked<T, F>(&self, domain: &[usize], eval: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(usize) -> Result<T> + Sync,
    {
        if domain.is_empty() {
            return Ok(Vec::new());
        }
        let chunk_len = domain.len().div_ceil(self.num_threads());
        let mut tagged: Vec<(usize, T)> = self.pool.install(|| {
            domain
                .par_chunks(chunk_len)
                .enumerate()
                .map(|(chunk_idx, chunk)| {
                    let base = chunk_idx * chunk_len;
                    chunk
                        .iter()
                        .enumerate()
                        .map(|(i, &point)| eval(point).map(|value| (base + i, value)))
                        .collect::<Result<Vec<_>>>()
                })
                .try_reduce(Vec::new, |mut merged, mut part| {
                    merged.append(&mut part);
                    Ok(merged)
                })
        })?;
        tagged.sort_by_key(|(index, _)| *index);
        Ok(tagged.into_iter().map(|(_, value)| value).collect())
    }

    /// Score every window length m = 1..=n at offset 0, ascending in m.
    pub fn sweep_by_window_length<W>(
        &self,
        profile: &ReferenceProfile,
        signature: &QuerySignature,
        weighting: &W,
    ) -> Result<Vec<ScoreResult>>
    where
        W: RankWeighting + ?Sized,
    {
        let domain: Vec<usize> = (1..=profile.len()).collect();
        self.run_chunked(&domain, |m| {
            connection_score(signature, profile, Window::new(m, 0), weighting)
        })
    }

    /// Score a fixed window length at every offset F = 0..=n-m, ascending
    /// in F.
    pub fn sweep_by_offset<W>(
        &self,
        profile: &ReferenceProfile,
        signature: &QuerySignature,
        window_len: usize,
        weighting: &W,
    ) -> Result<Vec<ScoreResult>>
    where
        W: RankWeighting + ?Sized,
    {
        let n = profile.len();
        if window_len == 0 {
            bail!("offset sweep requires a positive window length");
        }
        if window_len > n {
            bail!("window length {window_len} exceeds profile size {n}");
        }
        let domain: Vec<usize> = (0..=n - window_len).collect();
        self.run_chunked(&domain, |offset| {
            connection_score(signature, profile, Window::new(window_len, offset), weighting)
        })
    }

    /// Window-length sweep with an empirical p-value per window.
    ///
    /// One population of `population_size` random signatures is drawn from
    /// the seed and shared across every window, so the p-values of a sweep
    /// are comparable under a single null sample.
    pub fn sweep_significance<W>(
        &self,
        profile: &ReferenceProfile,
        signature: &QuerySignature,
        weighting: &W,
        population_size: usize,
        seed: u64,
    ) -> Result<Vec<SignificanceResult>>
    where
        W: RankWeighting + ?Sized,
    {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let population =
            RandomSignaturePopulation::generate(profile.len(), population_size, &mut rng)?;
        let observed = self.sweep_by_window_length(profile, signature, weighting)?;

        observed
            .iter()
            .map(|result| {
                let p_value = self.pool.install(|| {
                    estimate_p_value(result.score, result.window, profile, &population, weighting)
                })?;
                Ok(SignificanceResult {
                    window: result.window,
                    score: result.score,
                    p_value,
                })
            })
            .collect()
    }
}
