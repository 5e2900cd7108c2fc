//! Assigns participants to capacity limited activities so that their
//! stated preferences are satisfied as well as possible.
//!
//! The pipeline reads a preference file and a capacity file, builds a
//! participant × place cost matrix from the rankings, solves it with the
//! Hungarian method and writes every participant's placement back out.

pub mod assign;
pub mod display;
pub mod dummy;
pub mod error;
pub mod export;
pub mod parser;
pub mod stats;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use assign::{assign_participants, AssignedParticipant, RankPosition};
use display::format_participant_name;
use error::AssignError;
use parser::{load_activities, load_preferences};
use stats::AssignmentStats;

/// Inputs for one assignment run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub preferences: PathBuf,
    pub output: PathBuf,
    pub activities: PathBuf,
    /// Seed for the unranked tie-break; a random one is drawn when absent
    pub seed: Option<u64>,
}

/// Outcome of a finished run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub assigned: Vec<AssignedParticipant>,
    pub stats: AssignmentStats,
    pub seed: u64,
}

/// Reads both inputs, assigns every participant and writes the result file.
/// Nothing is written unless every earlier step succeeded.
pub fn run(config: &RunConfig) -> Result<RunReport, AssignError> {
    let activities = load_activities(&config.activities)?;
    let participants = load_preferences(&config.preferences, activities.len())?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("Using tie-break seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let assigned = assign_participants(&participants, &activities, &mut rng)?;
    for entry in assigned.iter().filter(|a| a.placement.rank == RankPosition::Unranked) {
        let p = &entry.participant;
        debug!(
            "{} placed in unranked activity {}",
            format_participant_name(&p.given_name, &p.family_name, p.id),
            entry.placement.activity_id
        );
    }

    let stats = AssignmentStats::compute(&assigned, &activities);
    export::write_results(&config.output, &assigned)?;

    Ok(RunReport {
        assigned,
        stats,
        seed,
    })
}
