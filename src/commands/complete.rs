//! Complete command - Move a course to the completed list

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::utils;

/// Execute the complete command
pub fn execute(position: Option<usize>, id: Option<&str>) -> Result<()> {
    let mut store = utils::open_store()?;
    let index = utils::resolve_index(&store, position, id)?;

    let course = store
        .complete(index)?
        .context("Course disappeared while resolving it")?;

    println!(
        "{} '{}' ({} quizzes completed, {}% progress)",
        "Completed:".green(),
        course.name,
        course.quizzes_completed,
        course.progress
    );

    Ok(())
}
