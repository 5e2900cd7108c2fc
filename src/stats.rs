use crate::assign::slot_utils::index_to_activity_id;
use crate::assign::{Activity, ActivityId, AssignedParticipant, RankPosition};

/// How full one activity ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityFill {
    pub id: ActivityId,
    pub name: String,
    pub capacity: u32,
    pub assigned: u32,
    pub left_over: u32,
}

/// Summary of a finished assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentStats {
    pub participants: usize,
    pub fills: Vec<ActivityFill>,
    /// `rank_counts[r - 1]` participants got their r-th choice
    pub rank_counts: Vec<usize>,
    pub unranked: usize,
    pub score: u64,
}

impl AssignmentStats {
    /// Tallies fills, rank positions and the score.
    ///
    /// A first choice scores the number of activities, every step down the
    /// ranking one point less, and an unranked placement nothing.
    pub fn compute(assigned: &[AssignedParticipant], activities: &[Activity]) -> Self {
        let mut counts = vec![0u32; activities.len()];
        let longest_ranking = assigned
            .iter()
            .map(|a| a.participant.distinct_preferences().len())
            .max()
            .unwrap_or(0);
        let mut rank_counts = vec![0usize; longest_ranking];
        let mut unranked = 0;
        let mut score = 0u64;

        for entry in assigned {
            let index = entry.placement.activity_id as usize - 1;
            counts[index] += 1;
            match entry.placement.rank {
                RankPosition::Ranked(rank) => {
                    rank_counts[rank as usize - 1] += 1;
                    score += activities.len() as u64 - (rank as u64 - 1);
                }
                RankPosition::Unranked => unranked += 1,
            }
        }

        let fills = activities
            .iter()
            .zip(counts)
            .enumerate()
            .map(|(index, (activity, assigned))| ActivityFill {
                id: index_to_activity_id(index),
                name: activity.name.clone(),
                capacity: activity.capacity,
                assigned,
                left_over: activity.capacity.saturating_sub(assigned),
            })
            .collect();

        AssignmentStats {
            participants: assigned.len(),
            fills,
            rank_counts,
            unranked,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::types::test_participant;
    use crate::assign::Placement;

    fn placed(id: u64, preferences: Vec<u32>, activity_id: u32, rank: RankPosition) -> AssignedParticipant {
        AssignedParticipant {
            participant: test_participant(id, preferences),
            placement: Placement {
                activity_id,
                activity_name: format!("experiment {}", activity_id),
                rank,
            },
        }
    }

    #[test]
    fn counts_fills_ranks_and_score() {
        let activities = vec![
            Activity { name: "experiment 1".to_string(), capacity: 2 },
            Activity { name: "experiment 2".to_string(), capacity: 1 },
            Activity { name: "experiment 3".to_string(), capacity: 3 },
            Activity { name: "experiment 4".to_string(), capacity: 1 },
        ];
        let assigned = vec![
            placed(1, vec![1, 2], 1, RankPosition::Ranked(1)),
            placed(2, vec![1, 3, 2], 3, RankPosition::Ranked(2)),
            placed(3, vec![], 1, RankPosition::Unranked),
            placed(4, vec![2], 2, RankPosition::Ranked(1)),
        ];

        let stats = AssignmentStats::compute(&assigned, &activities);
        assert_eq!(stats.participants, 4);
        assert_eq!(stats.rank_counts, vec![2, 1, 0]);
        assert_eq!(stats.unranked, 1);
        // 4 + 3 + 0 + 4
        assert_eq!(stats.score, 11);

        let assigned_counts: Vec<u32> = stats.fills.iter().map(|f| f.assigned).collect();
        let left_over: Vec<u32> = stats.fills.iter().map(|f| f.left_over).collect();
        assert_eq!(assigned_counts, vec![2, 1, 1, 0]);
        assert_eq!(left_over, vec![0, 0, 2, 1]);
        assert_eq!(stats.fills[3].id, 4);
    }

    #[test]
    fn empty_run_has_zero_score() {
        let activities = vec![Activity { name: "experiment 1".to_string(), capacity: 2 }];
        let stats = AssignmentStats::compute(&[], &activities);
        assert_eq!(stats.score, 0);
        assert!(stats.rank_counts.is_empty());
        assert_eq!(stats.fills[0].left_over, 2);
    }
}
