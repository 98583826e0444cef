//! Quiz command - Record a completed quiz for a course

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::utils;

/// Execute the quiz command
///
/// Increments the course's quiz count and recomputes progress. When the
/// course meets its quota (`daysToComplete * quizzesPerDay` quizzes), it is
/// moved to the completed list.
pub fn execute(position: Option<usize>, id: Option<&str>) -> Result<()> {
    let mut store = utils::open_store()?;
    let index = utils::resolve_index(&store, position, id)?;

    let outcome = store
        .record_quiz(index)?
        .context("Course disappeared while resolving it")?;

    println!(
        "Recorded quiz for '{}': {} quizzes, {}% progress",
        outcome.course.name,
        utils::quiz_summary(&outcome.course),
        outcome.course.progress
    );

    if outcome.quota_met {
        let completed = store
            .complete(index)?
            .context("Course disappeared while completing it")?;
        println!(
            "{} '{}' finished its quiz quota and was moved to completed courses",
            "Completed:".green(),
            completed.name
        );
    }

    Ok(())
}
