use crate::assign::types::{Activity, ActivityId};

/// Total number of places across all activities
pub fn total_slots(activities: &[Activity]) -> usize {
    activities.iter().map(|a| a.capacity as usize).sum()
}

/// Maps every slot column to the index of the activity that owns it.
/// Columns are grouped per activity in capacity file order, so capacities
/// [2, 1, 3] give [0, 0, 1, 2, 2, 2].
pub fn slot_owners(activities: &[Activity]) -> Vec<usize> {
    activities
        .iter()
        .enumerate()
        .flat_map(|(index, activity)| std::iter::repeat(index).take(activity.capacity as usize))
        .collect()
}

/// Converts a 0-based activity index to the id used in the input files
pub fn index_to_activity_id(index: usize) -> ActivityId {
    index as ActivityId + 1
}

/// Converts an activity id from the input files to its 0-based index
pub fn activity_id_to_index(id: ActivityId, activity_count: usize) -> Option<usize> {
    let index = (id as usize).checked_sub(1)?;
    (index < activity_count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(capacity: u32) -> Activity {
        Activity { name: format!("cap {}", capacity), capacity }
    }

    #[test]
    fn owners_are_grouped_in_file_order() {
        let activities = vec![activity(2), activity(1), activity(3)];
        assert_eq!(slot_owners(&activities), vec![0, 0, 1, 2, 2, 2]);
        assert_eq!(total_slots(&activities), 6);
    }

    #[test]
    fn activity_ids_are_one_based() {
        assert_eq!(index_to_activity_id(0), 1);
        assert_eq!(activity_id_to_index(1, 3), Some(0));
        assert_eq!(activity_id_to_index(3, 3), Some(2));
        assert_eq!(activity_id_to_index(0, 3), None);
        assert_eq!(activity_id_to_index(4, 3), None);
    }
}
