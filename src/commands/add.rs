//! Add command - Submit a course (create, or overwrite a pending edit)

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use study_helper::course::validate::ADDITIONAL_INFO_MAX;
use study_helper::course::{parse_fields, CourseFields, Submission};

use super::utils;

/// Execute the add command
///
/// This is the submission path: it consults the pending edit marker, so after
/// `edit <position>` the same invocation overwrites that course instead of
/// creating a new one.
pub fn execute(fields: CourseFields) -> Result<()> {
    // Out-of-range input never reaches persistence
    let input = match parse_fields(&fields) {
        Ok(input) => input,
        Err(e) => bail!("{}", e),
    };

    if fields.additional_info.trim().chars().count() > ADDITIONAL_INFO_MAX {
        println!(
            "{} additional info truncated to {} characters",
            "Note:".yellow(),
            ADDITIONAL_INFO_MAX
        );
    }

    let mut store = utils::open_store()?;

    match store.submit(input)? {
        Submission::Created(course) => {
            println!(
                "{} '{}' ({} days, {} quizzes/day, {} questions/quiz)",
                "Created:".green(),
                course.name,
                course.days_to_complete,
                course.quizzes_per_day,
                course.questions_per_quiz
            );
            println!("  id: {}", course.id.to_string().dimmed());
        }
        Submission::Updated { index, course } => {
            println!(
                "{} '{}' at position {}",
                "Updated:".green(),
                course.name,
                index + 1
            );
        }
        Submission::StaleEdit => {
            println!(
                "{} pending edit pointed at a course that no longer exists; nothing was saved",
                "Warning:".yellow()
            );
        }
    }

    Ok(())
}
