use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use practicum_assigner::dummy::{generate, write_dummy_data, DummyConfig};

#[derive(Parser, Debug)]
#[command(name = "generate_dummy_data")]
#[command(about = "Generate dummy preference data", long_about = None)]
struct Args {
    /// Where to write the tab separated preference file
    outfile: PathBuf,

    /// Number of students
    #[arg(short, long, default_value_t = 100)]
    students: usize,

    /// Number of ranked preferences per student
    #[arg(short, long, default_value_t = 3)]
    preferences: usize,

    /// Number of experiments to choose from
    #[arg(short, long, default_value_t = 8)]
    experiments: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = DummyConfig {
        students: args.students,
        preferences: args.preferences,
        experiments: args.experiments,
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Using seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let rows = generate(&config, &mut rng, Local::now().naive_local())
        .context("invalid generator settings")?;
    write_dummy_data(&args.outfile, &rows)
        .with_context(|| format!("writing {}", args.outfile.display()))?;

    println!("Students: {}", config.students);
    println!("Preferences: {}", config.preferences);
    println!("Experiments: {}", config.experiments);
    println!("Data written to {}", args.outfile.display());
    Ok(())
}
