use chrono::NaiveDateTime;
use csv::{QuoteStyle, WriterBuilder};
use rand::seq::index;
use rand::Rng;
use serde::Serialize;
use std::path::Path;

use crate::assign::ActivityId;
use crate::error::AssignError;

const FIRST_STUDENT_NUMBER: u64 = 300001;
const GROUP: &str = "BOVR2B";
const THEME: u32 = 5;

/// Settings for a synthetic preference file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DummyConfig {
    pub students: usize,
    pub preferences: usize,
    pub experiments: usize,
}

impl Default for DummyConfig {
    fn default() -> Self {
        DummyConfig {
            students: 100,
            preferences: 3,
            experiments: 8,
        }
    }
}

impl DummyConfig {
    pub fn validate(&self) -> Result<(), AssignError> {
        if self.experiments == 0 {
            return Err(AssignError::InvalidSettings("at least one experiment is needed".to_string()));
        }
        if self.preferences == 0 {
            return Err(AssignError::InvalidSettings("at least one preference is needed".to_string()));
        }
        if self.preferences > self.experiments {
            return Err(AssignError::InvalidSettings(format!(
                "{} preferences cannot be chosen from {} experiments",
                self.preferences, self.experiments
            )));
        }
        Ok(())
    }
}

/// One line of the preference file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DummyRow {
    pub entry: usize,
    pub student_number: u64,
    pub family_name: String,
    pub given_name: String,
    pub group: String,
    pub theme: u32,
    pub date: String,
    pub time: String,
    pub choice_number: usize,
    pub entry_again: usize,
    pub choice_number_again: usize,
    pub activity: ActivityId,
}

/// Generates preference rows: `preferences` distinct random experiments per
/// student, one row per choice, stamped with `now`
pub fn generate<R: Rng + ?Sized>(
    config: &DummyConfig,
    rng: &mut R,
    now: NaiveDateTime,
) -> Result<Vec<DummyRow>, AssignError> {
    config.validate()?;

    let width = (config.students as i64 - 1).to_string().len();
    let date = now.format("%Y-%m-%d").to_string();
    let time = now.format("%H:%M:%S").to_string();

    let mut rows = Vec::with_capacity(config.students * config.preferences);
    for student in 0..config.students {
        let entry = student + 1;
        let padded = format!("{:0width$}", entry, width = width);
        let choices = index::sample(rng, config.experiments, config.preferences);
        for (line, choice) in choices.into_iter().enumerate() {
            rows.push(DummyRow {
                entry,
                student_number: FIRST_STUDENT_NUMBER + student as u64,
                family_name: format!("achternaam {}", padded),
                given_name: format!("voornaam {}", padded),
                group: GROUP.to_string(),
                theme: THEME,
                date: date.clone(),
                time: time.clone(),
                choice_number: line + 1,
                entry_again: entry,
                choice_number_again: line + 1,
                activity: choice as ActivityId + 1,
            });
        }
    }
    Ok(rows)
}

/// Writes rows as an unquoted, tab separated file
pub fn write_dummy_data<P: AsRef<Path>>(path: P, rows: &[DummyRow]) -> Result<(), AssignError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .has_headers(false)
        .from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
