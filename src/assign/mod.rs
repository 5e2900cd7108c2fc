pub mod types;
pub mod slot_utils;
pub mod cost_matrix;
pub mod hungarian;
pub mod annotate;

pub use types::{Activity, ActivityId, AssignedParticipant, Participant, Placement, RankPosition};
pub use cost_matrix::{build_cost_matrix, CostMatrix};
pub use hungarian::{solve, Matching};
pub use annotate::annotate;

use rand::Rng;
use crate::error::AssignError;

/// Builds the cost matrix, solves it and annotates every participant
pub fn assign_participants<R: Rng + ?Sized>(
    participants: &[Participant],
    activities: &[Activity],
    rng: &mut R,
) -> Result<Vec<AssignedParticipant>, AssignError> {
    let matrix = build_cost_matrix(participants, activities, rng)?;
    let matching = solve(&matrix)?;
    Ok(annotate(participants, activities, &matrix, &matching))
}
