use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};
use std::collections::HashSet;
use std::path::Path;

use crate::assign::slot_utils::activity_id_to_index;
use crate::assign::{Activity, ActivityId, Participant};
use crate::error::AssignError;

/// Minimum fields in a preference row: index, id, family name, given name,
/// group, theme, date, time and the activity id as the last field
const MIN_PREFERENCE_FIELDS: usize = 9;

fn malformed(path: &Path, record: &StringRecord, reason: String) -> AssignError {
    AssignError::MalformedRow {
        path: path.to_path_buf(),
        line: record.position().map(|p| p.line()).unwrap_or(0),
        reason,
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.is_empty())
}

/// Loads participants from a tab separated preference file.
///
/// Every row holds one ranked activity. Consecutive rows with the same
/// participant id form one participant; the first of them supplies the
/// name and other personal fields, and the row order gives the ranking.
pub fn load_preferences<P: AsRef<Path>>(
    path: P,
    activity_count: usize,
) -> Result<Vec<Participant>, AssignError> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_path(path)?;

    let mut participants: Vec<Participant> = Vec::new();
    let mut finished: HashSet<u64> = HashSet::new();

    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        if record.len() < MIN_PREFERENCE_FIELDS {
            return Err(malformed(
                path,
                &record,
                format!(
                    "expected at least {} tab separated fields, found {}",
                    MIN_PREFERENCE_FIELDS,
                    record.len()
                ),
            ));
        }

        let id: u64 = record[1].parse().map_err(|_| {
            malformed(path, &record, format!("participant id '{}' is not a number", &record[1]))
        })?;
        let last = &record[record.len() - 1];
        let activity: ActivityId = last.parse().map_err(|_| {
            malformed(path, &record, format!("activity id '{}' is not a number", last))
        })?;
        if activity_id_to_index(activity, activity_count).is_none() {
            return Err(AssignError::UnknownActivity {
                participant: id,
                activity,
                activity_count,
            });
        }

        if let Some(current) = participants.last_mut().filter(|p| p.id == id) {
            if current.preferences.contains(&activity) {
                warn!(
                    "Participant {} ranks activity {} more than once, keeping the first",
                    id, activity
                );
            }
            current.preferences.push(activity);
            continue;
        }

        if let Some(previous) = participants.last() {
            finished.insert(previous.id);
        }
        if finished.contains(&id) {
            return Err(malformed(
                path,
                &record,
                format!("rows for participant {} are not contiguous", id),
            ));
        }
        participants.push(Participant {
            id,
            family_name: record[2].to_string(),
            given_name: record[3].to_string(),
            group: record[4].to_string(),
            theme: record[5].to_string(),
            date: record[6].to_string(),
            time: record[7].to_string(),
            preferences: vec![activity],
        });
    }

    info!("Loaded {} participants from {}", participants.len(), path.display());
    Ok(participants)
}

/// Loads activities from a semicolon separated file.
///
/// The first field is the number of places and the last field the display
/// name. Row order defines the activity ids, starting at 1.
pub fn load_activities<P: AsRef<Path>>(path: P) -> Result<Vec<Activity>, AssignError> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;

    let mut activities = Vec::new();
    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        if record.len() < 2 {
            return Err(malformed(
                path,
                &record,
                "expected a capacity and a name separated by ';'".to_string(),
            ));
        }

        let capacity: u32 = record[0].parse().map_err(|_| {
            malformed(path, &record, format!("capacity '{}' is not a number", &record[0]))
        })?;
        if capacity == 0 {
            return Err(malformed(path, &record, "capacity must be at least 1".to_string()));
        }

        activities.push(Activity {
            name: record[record.len() - 1].to_string(),
            capacity,
        });
    }

    info!("Loaded {} activities from {}", activities.len(), path.display());
    Ok(activities)
}
