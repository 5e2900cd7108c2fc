use log::trace;

use super::cost_matrix::CostMatrix;
use super::hungarian::Matching;
use super::slot_utils::index_to_activity_id;
use super::types::{Activity, AssignedParticipant, Participant, Placement, RankPosition};

/// Attaches the solved activity to every participant.
///
/// `participants` must be in the same order as the rows of `matrix`.
pub fn annotate(
    participants: &[Participant],
    activities: &[Activity],
    matrix: &CostMatrix,
    matching: &Matching,
) -> Vec<AssignedParticipant> {
    participants
        .iter()
        .zip(&matching.columns)
        .map(|(participant, &col)| {
            let index = matrix.slot_owner(col);
            let activity_id = index_to_activity_id(index);
            let rank = match participant.rank_of(activity_id) {
                Some(rank) => RankPosition::Ranked(rank),
                None => RankPosition::Unranked,
            };
            trace!(
                "Participant {} -> activity {} (slot {}, rank {})",
                participant.id, activity_id, col, rank
            );
            AssignedParticipant {
                participant: participant.clone(),
                placement: Placement {
                    activity_id,
                    activity_name: activities[index].name.clone(),
                    rank,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::types::test_participant;

    fn setup() -> (Vec<Participant>, Vec<Activity>, CostMatrix, Matching) {
        let participants = vec![test_participant(1, vec![2, 1]), test_participant(2, vec![])];
        let activities = vec![
            Activity { name: "Titration".to_string(), capacity: 1 },
            Activity { name: "PCR".to_string(), capacity: 2 },
        ];
        let matrix = CostMatrix::from_rows(
            vec![vec![2, 1, 1], vec![1, 2, 2]],
            vec![0, 1, 1],
        );
        let matching = Matching { columns: vec![2, 0], total_cost: 2 };
        (participants, activities, matrix, matching)
    }

    #[test]
    fn slots_map_back_to_their_activity() {
        let (participants, activities, matrix, matching) = setup();
        let assigned = annotate(&participants, &activities, &matrix, &matching);

        assert_eq!(assigned[0].placement.activity_id, 2);
        assert_eq!(assigned[0].placement.activity_name, "PCR");
        assert_eq!(assigned[0].placement.rank, RankPosition::Ranked(1));

        assert_eq!(assigned[1].placement.activity_id, 1);
        assert_eq!(assigned[1].placement.activity_name, "Titration");
        assert_eq!(assigned[1].placement.rank, RankPosition::Unranked);
    }

    #[test]
    fn annotating_twice_gives_identical_records() {
        let (participants, activities, matrix, matching) = setup();
        let first = annotate(&participants, &activities, &matrix, &matching);
        let second = annotate(&participants, &activities, &matrix, &matching);
        assert_eq!(first, second);
    }
}
