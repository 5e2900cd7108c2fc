use csv::{QuoteStyle, WriterBuilder};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::assign::{ActivityId, AssignedParticipant};
use crate::error::AssignError;

/// One line of the result file, in the column order downstream sheets expect
#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    family_name: &'a str,
    given_name: &'a str,
    id: u64,
    group: &'a str,
    // the legacy layout carries the group column twice
    group_again: &'a str,
    theme: &'a str,
    date: &'a str,
    time: &'a str,
    preferences: String,
    rank: String,
    activity_id: ActivityId,
    activity_name: &'a str,
}

/// Renders a ranking as "[3, 1, 2]"
pub fn format_preferences(preferences: &[ActivityId]) -> String {
    let items: Vec<String> = preferences.iter().map(|p| p.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Writes assigned participants as fully quoted, semicolon separated rows,
/// sorted by family name
pub fn write_results_to<W: Write>(writer: W, assigned: &[AssignedParticipant]) -> Result<(), AssignError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Always)
        .has_headers(false)
        .from_writer(writer);

    let mut sorted: Vec<&AssignedParticipant> = assigned.iter().collect();
    sorted.sort_by(|a, b| a.participant.family_name.cmp(&b.participant.family_name));

    for entry in sorted {
        let p = &entry.participant;
        wtr.serialize(ResultRow {
            family_name: &p.family_name,
            given_name: &p.given_name,
            id: p.id,
            group: &p.group,
            group_again: &p.group,
            theme: &p.theme,
            date: &p.date,
            time: &p.time,
            preferences: format_preferences(&p.preferences),
            rank: entry.placement.rank.to_string(),
            activity_id: entry.placement.activity_id,
            activity_name: &entry.placement.activity_name,
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the result file at `path`, replacing any existing file
pub fn write_results<P: AsRef<Path>>(path: P, assigned: &[AssignedParticipant]) -> Result<(), AssignError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_results_to(file, assigned)?;
    info!("Wrote {} assignments to {}", assigned.len(), path.display());
    Ok(())
}
