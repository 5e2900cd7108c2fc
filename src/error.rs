use std::path::PathBuf;

/// Everything that can stop an assignment run
#[derive(Debug, thiserror::Error)]
pub enum AssignError {
    #[error("only {slots} activity places available for {participants} participants")]
    InsufficientCapacity { slots: usize, participants: usize },

    #[error("{}:{line}: {reason}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("participant {participant} ranks activity {activity}, but only {activity_count} activities exist")]
    UnknownActivity {
        participant: u64,
        activity: u32,
        activity_count: usize,
    },

    #[error("solver could not place row {row}; matrix has more rows than free columns")]
    SolverIncomplete { row: usize },

    #[error("invalid generator settings: {0}")]
    InvalidSettings(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
