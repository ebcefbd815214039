use anyhow::Result;
use clap::{Parser, Subcommand};
use conmap::run::{run_length_sweep, run_offset_sweep, LengthSweepArgs, OffsetSweepArgs};

#[derive(Parser)]
#[command(name = "conmap")]
#[command(version = "0.1.0")]
#[command(about = "Rank-weighted connection scoring with permutation significance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every window length m = 1..=N at offset zero
    LengthSweep(LengthSweepArgs),

    /// Score a fixed window length at every offset F = 0..=N-m
    OffsetSweep(OffsetSweepArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::LengthSweep(args) => {
            run_length_sweep(args)?;
        }
        Commands::OffsetSweep(args) => {
            run_offset_sweep(args)?;
        }
    }
    Ok(())
}
