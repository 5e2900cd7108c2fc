use std::time::Duration;
use crate::stats::AssignmentStats;

/// Formats a participant as "given family (id)"
pub fn format_participant_name(given_name: &str, family_name: &str, id: u64) -> String {
    if given_name.is_empty() {
        format!("{} ({})", family_name, id)
    } else {
        format!("{} {} ({})", given_name, family_name, id)
    }
}

/// Renders the per activity fill lines and the preference summary
pub fn format_statistics(stats: &AssignmentStats) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Number of participants: {}", stats.participants));
    lines.push(String::new());

    for fill in &stats.fills {
        lines.push(format!(
            "activity {}: {}, capacity: {}, assigned: {}, places left over: {}",
            fill.id, fill.name, fill.capacity, fill.assigned, fill.left_over
        ));
    }
    lines.push(String::new());

    for (index, count) in stats.rank_counts.iter().enumerate() {
        lines.push(format!("Preference {}: {}", index + 1, count));
    }
    lines.push(format!("Unranked: {}", stats.unranked));
    lines.push(String::new());
    lines.push(format!("Total Score: {}", stats.score));

    lines.join("\n")
}

/// Prints the statistics of a finished run
pub fn print_statistics(stats: &AssignmentStats) {
    println!("{}", format_statistics(stats));
}

/// Prints the closing lines of a run
pub fn print_run_footer(outfile: &str, elapsed: Duration) {
    println!("Result written to {}", outfile);
    println!("Approximate runtime: {:.2} sec", elapsed.as_secs_f64());
    println!("Done...");
}
