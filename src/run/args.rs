use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct LengthSweepArgs {
    /// Number of ranked items in the synthetic reference profile
    #[arg(short = 'N', long, default_value_t = 100)]
    pub profile_size: usize,
    /// Attach an empirical p-value to every window length
    #[arg(long, default_value_t = false)]
    pub significance: bool,
    /// Random signature population size for significance estimation
    #[arg(short = 'R', long, default_value_t = 1000)]
    pub permutations: usize,
    /// Seed for the random signature population
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Worker threads for sweep evaluation (0 = all logical CPUs)
    #[arg(short = 'n', long, default_value_t = 4)]
    pub num_threads: usize,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct OffsetSweepArgs {
    /// Number of ranked items in the synthetic reference profile
    #[arg(short = 'N', long, default_value_t = 100)]
    pub profile_size: usize,
    /// Window length held fixed while the offset sweeps 0..=N-m
    #[arg(short = 'm', long, default_value_t = 10)]
    pub window_length: usize,
    /// Worker threads for sweep evaluation (0 = all logical CPUs)
    #[arg(short = 'n', long, default_value_t = 4)]
    pub num_threads: usize,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}
