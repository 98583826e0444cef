//! Stats command - Show aggregate course statistics

use anyhow::Result;

use study_helper::course::CourseStore;
use study_helper::storage::KeyValueStore;

use super::utils;

/// Aggregate statistics over both course lists
#[derive(Debug, Default)]
pub struct Stats {
    /// Number of courses in progress
    pub in_progress: usize,

    /// Number of completed courses
    pub completed: usize,

    /// Quizzes completed across all courses
    pub quizzes_completed: i64,

    /// Mean progress of in-progress courses (0 when there are none)
    pub average_progress: i64,

    /// Completion date of the most recently completed course
    pub last_completed: Option<String>,
}

/// Compute statistics against any store
pub fn stats<S: KeyValueStore>(store: &CourseStore<S>) -> Result<Stats> {
    let in_progress = store.in_progress()?;
    let completed = store.completed()?;

    let quizzes_completed = in_progress
        .iter()
        .chain(completed.iter())
        .map(|c| c.quizzes_completed)
        .sum();

    let average_progress = if in_progress.is_empty() {
        0
    } else {
        in_progress.iter().map(|c| c.progress).sum::<i64>() / in_progress.len() as i64
    };

    // The completed list is in completion order
    let last_completed = completed.last().and_then(|c| c.completed_date.clone());

    Ok(Stats {
        in_progress: in_progress.len(),
        completed: completed.len(),
        quizzes_completed,
        average_progress,
        last_completed,
    })
}

/// Execute the stats command
pub fn execute() -> Result<Stats> {
    let store = utils::open_store()?;
    stats(&store)
}

/// Format stats for display
pub fn format_stats(stats: &Stats) -> String {
    let mut lines = vec![];

    lines.push(format!("Courses in progress: {}", stats.in_progress));
    lines.push(format!("Courses completed: {}", stats.completed));
    lines.push(String::new()); // blank line

    lines.push(format!("Quizzes completed: {}", stats.quizzes_completed));
    lines.push(format!("Average progress: {}%", stats.average_progress));

    if let Some(date) = &stats.last_completed {
        lines.push(format!("Last completion: {}", utils::format_date(date)));
    }

    lines.join("\n")
}
