//! Subcommand orchestration
//!
//! One `run` function per CLI subcommand: build the synthetic profile and
//! its matching signature, evaluate the requested sweep on a bounded worker
//! pool, and render the series as a TSV table.

pub mod args;

pub use args::{LengthSweepArgs, OffsetSweepArgs};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::profile::{QuerySignature, ReferenceProfile};
use crate::report::{write_score_table, write_significance_table};
use crate::score::LinearRank;
use crate::stats::{estimate_p_value, RandomSignaturePopulation, SignificanceResult};
use crate::sweep::SweepPool;

pub fn run_length_sweep(args: LengthSweepArgs) -> Result<()> {
    let profile = ReferenceProfile::synthetic(args.profile_size)?;
    let signature = QuerySignature::matching(&profile);
    let pool = SweepPool::new(args.num_threads)?;

    if args.verbose {
        eprintln!(
            "[INFO] length sweep: profile_size={}, threads={}",
            args.profile_size,
            pool.num_threads()
        );
    }

    if args.significance {
        let mut rng = ChaCha20Rng::seed_from_u64(args.seed);
        let population =
            RandomSignaturePopulation::generate(args.profile_size, args.permutations, &mut rng)?;
        let observed = pool.sweep_by_window_length(&profile, &signature, &LinearRank)?;

        let bar = if args.verbose {
            let bar = ProgressBar::new(observed.len() as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
                    .unwrap(),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        let mut results = Vec::with_capacity(observed.len());
        for result in &observed {
            let p_value = pool.install(|| {
                estimate_p_value(result.score, result.window, &profile, &population, &LinearRank)
            })?;
            results.push(SignificanceResult {
                window: result.window,
                score: result.score,
                p_value,
            });
            bar.inc(1);
        }
        bar.finish_and_clear();

        write_significance_table(&results, args.out.as_ref())?;
    } else {
        let results = pool.sweep_by_window_length(&profile, &signature, &LinearRank)?;
        write_score_table(&results, args.out.as_ref())?;
    }
    Ok(())
}

pub fn run_offset_sweep(args: OffsetSweepArgs) -> Result<()> {
    let profile = ReferenceProfile::synthetic(args.profile_size)?;
    let signature = QuerySignature::matching(&profile);
    let pool = SweepPool::new(args.num_threads)?;

    if args.verbose {
        eprintln!(
            "[INFO] offset sweep: profile_size={}, window_length={}, threads={}",
            args.profile_size,
            args.window_length,
            pool.num_threads()
        );
    }

    let results = pool.sweep_by_offset(&profile, &signature, args.window_length, &LinearRank)?;
    write_score_table(&results, args.out.as_ref())?;
    Ok(())
}
