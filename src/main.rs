use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use practicum_assigner::display::{print_run_footer, print_statistics};
use practicum_assigner::{run, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "practicum-assigner")]
#[command(about = "Select students in groups based on preferences", long_about = None)]
struct Args {
    /// Tab separated file with ranked preferences
    infile: PathBuf,

    /// Where to write the assignment
    outfile: PathBuf,

    /// Semicolon separated file with capacity and name per experiment
    experiment_names: PathBuf,

    /// Seed for the random tie-break between unranked experiments
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start_time = Instant::now();
    let args = Args::parse();

    let config = RunConfig {
        preferences: args.infile,
        output: args.outfile.clone(),
        activities: args.experiment_names,
        seed: args.seed,
    };
    let report = run(&config).context("assignment failed")?;

    print_statistics(&report.stats);
    print_run_footer(&args.outfile.display().to_string(), start_time.elapsed());
    Ok(())
}
