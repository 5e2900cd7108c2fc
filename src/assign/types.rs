use std::collections::HashSet;
use std::fmt;
use serde::{Serialize, Deserialize};

/// 1-based position of an activity in the capacity file
pub type ActivityId = u32;

/// A participant as read from the preference file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u64,
    pub family_name: String,
    pub given_name: String,
    pub group: String,
    pub theme: String,
    pub date: String,
    pub time: String,
    pub preferences: Vec<ActivityId>, // best first
}

impl Participant {
    /// Ranked activities with repeats removed, keeping the first occurrence
    pub fn distinct_preferences(&self) -> Vec<ActivityId> {
        let mut seen = HashSet::new();
        self.preferences
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// 1-based rank of `activity`, or None when it was not ranked
    pub fn rank_of(&self, activity: ActivityId) -> Option<u32> {
        self.distinct_preferences()
            .iter()
            .position(|&id| id == activity)
            .map(|pos| pos as u32 + 1)
    }
}

/// An activity with a fixed number of places
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub capacity: u32,
}

/// Where an assigned activity sat in the participant's ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankPosition {
    Ranked(u32),
    Unranked,
}

impl fmt::Display for RankPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankPosition::Ranked(rank) => write!(f, "{}", rank),
            RankPosition::Unranked => write!(f, "unranked"),
        }
    }
}

/// The activity a participant ended up in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub activity_id: ActivityId,
    pub activity_name: String,
    pub rank: RankPosition,
}

/// A participant together with its placement, as produced by the annotator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedParticipant {
    pub participant: Participant,
    pub placement: Placement,
}

#[cfg(test)]
pub(crate) fn test_participant(id: u64, preferences: Vec<ActivityId>) -> Participant {
    Participant {
        id,
        family_name: format!("achternaam {}", id),
        given_name: format!("voornaam {}", id),
        group: "BOVR2B".to_string(),
        theme: "5".to_string(),
        date: "2018-12-19".to_string(),
        time: "10:00:00".to_string(),
        preferences,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_ignores_repeated_entries() {
        let p = test_participant(1, vec![3, 3, 1]);
        assert_eq!(p.distinct_preferences(), vec![3, 1]);
        assert_eq!(p.rank_of(3), Some(1));
        assert_eq!(p.rank_of(1), Some(2));
        assert_eq!(p.rank_of(2), None);
    }

    #[test]
    fn rank_position_display() {
        assert_eq!(RankPosition::Ranked(2).to_string(), "2");
        assert_eq!(RankPosition::Unranked.to_string(), "unranked");
    }
}
