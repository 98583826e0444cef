//! Delete command - Remove a course from the in-progress list

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use super::utils;

/// Execute the delete command
pub fn execute(position: Option<usize>, id: Option<&str>, yes: bool) -> Result<()> {
    let mut store = utils::open_store()?;
    let index = utils::resolve_index(&store, position, id)?;

    let courses = store.in_progress()?;
    let course = courses
        .get(index)
        .context("Course disappeared while resolving it")?;

    println!(
        "'{}' ({} quizzes, {}% progress, created {})",
        course.name,
        utils::quiz_summary(course),
        course.progress,
        utils::format_date(&course.created_at)
    );

    if !yes {
        print!("Delete this course? (y/N) ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let removed = store
        .delete(index)?
        .context("Course disappeared while deleting it")?;
    println!("{} '{}'", "Deleted:".green(), removed.name);

    Ok(())
}
