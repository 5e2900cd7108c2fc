use log::{debug, info, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::AssignError;
use super::slot_utils::{activity_id_to_index, slot_owners, total_slots};
use super::types::{Activity, Participant};

/// Participant × slot cost grid, stored row-major.
/// Lower cost means a more preferred pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    costs: Vec<u32>,
    slot_owners: Vec<usize>,
}

impl CostMatrix {
    /// Builds a matrix from explicit rows. Every row must have `slot_owners.len()` entries.
    pub fn from_rows(rows: Vec<Vec<u32>>, slot_owners: Vec<usize>) -> Self {
        let cols = slot_owners.len();
        let row_count = rows.len();
        let costs: Vec<u32> = rows.into_iter().flatten().collect();
        assert_eq!(costs.len(), row_count * cols, "ragged cost matrix");
        CostMatrix {
            rows: row_count,
            cols,
            costs,
            slot_owners,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.costs[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[u32] {
        &self.costs[row * self.cols..(row + 1) * self.cols]
    }

    /// Index of the activity owning slot column `col`
    pub fn slot_owner(&self, col: usize) -> usize {
        self.slot_owners[col]
    }
}

/// Cost of every activity for one participant, in activity order.
///
/// A ranked activity costs its 1-based rank. The unranked activities share
/// the leftover ranks `k+1..=n` through a fresh random permutation, so no two
/// of them get the same cost.
pub fn activity_costs<R: Rng + ?Sized>(
    participant: &Participant,
    activity_count: usize,
    rng: &mut R,
) -> Result<Vec<u32>, AssignError> {
    let ranked = participant.distinct_preferences();
    if ranked.len() < participant.preferences.len() {
        debug!(
            "Participant {} repeats activities in their ranking, only first occurrences count",
            participant.id
        );
    }

    // 0 marks an activity the participant did not rank
    let mut costs = vec![0u32; activity_count];
    for (position, &activity) in ranked.iter().enumerate() {
        let index = activity_id_to_index(activity, activity_count).ok_or(
            AssignError::UnknownActivity {
                participant: participant.id,
                activity,
                activity_count,
            },
        )?;
        costs[index] = position as u32 + 1;
    }

    let mut remaining: Vec<u32> = (ranked.len() as u32 + 1..=activity_count as u32).collect();
    remaining.shuffle(rng);
    for (cost, position) in costs.iter_mut().filter(|c| **c == 0).zip(remaining) {
        *cost = position;
    }

    trace!("Participant {} activity costs: {:?}", participant.id, costs);
    Ok(costs)
}

/// Builds the participant × slot cost matrix.
///
/// Fails with `InsufficientCapacity` before any row is built when there are
/// fewer places than participants.
pub fn build_cost_matrix<R: Rng + ?Sized>(
    participants: &[Participant],
    activities: &[Activity],
    rng: &mut R,
) -> Result<CostMatrix, AssignError> {
    let slots = total_slots(activities);
    if slots < participants.len() {
        return Err(AssignError::InsufficientCapacity {
            slots,
            participants: participants.len(),
        });
    }

    info!(
        "Building cost matrix for {} participants over {} activities ({} places)...",
        participants.len(),
        activities.len(),
        slots
    );

    let mut costs = Vec::with_capacity(participants.len() * slots);
    for participant in participants {
        let per_activity = activity_costs(participant, activities.len(), rng)?;
        for (cost, activity) in per_activity.iter().zip(activities) {
            costs.extend(std::iter::repeat(*cost).take(activity.capacity as usize));
        }
    }

    Ok(CostMatrix {
        rows: participants.len(),
        cols: slots,
        costs,
        slot_owners: slot_owners(activities),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::assign::types::test_participant;

    fn activities(capacities: &[u32]) -> Vec<Activity> {
        capacities
            .iter()
            .enumerate()
            .map(|(i, &capacity)| Activity {
                name: format!("experiment {}", i + 1),
                capacity,
            })
            .collect()
    }

    #[test]
    fn ranked_activities_cost_their_rank() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = test_participant(1, vec![3, 1]);
        for _ in 0..20 {
            let costs = activity_costs(&p, 5, &mut rng).unwrap();
            assert_eq!(costs[2], 1);
            assert_eq!(costs[0], 2);
        }
    }

    #[test]
    fn unranked_activities_share_the_leftover_ranks() {
        let mut rng = StdRng::seed_from_u64(11);
        let p = test_participant(1, vec![4, 2]);
        for _ in 0..50 {
            let costs = activity_costs(&p, 6, &mut rng).unwrap();
            let mut unranked: Vec<u32> = [0, 2, 4, 5].iter().map(|&i| costs[i]).collect();
            unranked.sort();
            assert_eq!(unranked, vec![3, 4, 5, 6]);
        }
    }

    #[test]
    fn tie_break_varies_between_participants() {
        let mut rng = StdRng::seed_from_u64(3);
        let rows: Vec<Vec<u32>> = (0..40)
            .map(|id| activity_costs(&test_participant(id, vec![]), 4, &mut rng).unwrap())
            .collect();
        assert!(rows.iter().any(|r| r != &rows[0]));
        for row in &rows {
            let mut sorted = row.clone();
            sorted.sort();
            assert_eq!(sorted, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn repeated_rankings_keep_the_first_occurrence() {
        let mut rng = StdRng::seed_from_u64(5);
        let costs = activity_costs(&test_participant(1, vec![2, 2, 1]), 3, &mut rng).unwrap();
        assert_eq!(costs, vec![2, 1, 3]);
    }

    #[test]
    fn unknown_activity_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let err = activity_costs(&test_participant(9, vec![1, 4]), 3, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            AssignError::UnknownActivity { participant: 9, activity: 4, activity_count: 3 }
        ));
    }

    #[test]
    fn columns_repeat_per_place() {
        let mut rng = StdRng::seed_from_u64(1);
        let participants = vec![test_participant(1, vec![2, 3, 1]), test_participant(2, vec![1, 2, 3])];
        let matrix = build_cost_matrix(&participants, &activities(&[2, 1, 3]), &mut rng).unwrap();
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 6);
        assert_eq!(matrix.row(0), &[3, 3, 1, 2, 2, 2]);
        assert_eq!(matrix.row(1), &[1, 1, 2, 3, 3, 3]);
        assert_eq!(matrix.slot_owner(2), 1);
        assert_eq!(matrix.slot_owner(5), 2);
    }

    #[test]
    fn same_seed_gives_same_matrix() {
        let participants: Vec<Participant> = (0..10).map(|id| test_participant(id, vec![1])).collect();
        let acts = activities(&[3, 3, 3, 3]);
        let a = build_cost_matrix(&participants, &acts, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = build_cost_matrix(&participants, &acts, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn too_few_places_fails_fast() {
        let mut rng = StdRng::seed_from_u64(1);
        let participants: Vec<Participant> = (0..3).map(|id| test_participant(id, vec![1])).collect();
        let err = build_cost_matrix(&participants, &activities(&[1, 1]), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            AssignError::InsufficientCapacity { slots: 2, participants: 3 }
        ));
    }
}
