//! Edit command - Update a course, or mark it for the next submission

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;

use study_helper::course::{parse_fields, Course, CourseFields};

use super::utils;

/// New values for a subset of the editable fields
#[derive(Debug, Default)]
pub struct EditFields {
    pub name: Option<String>,
    pub days_to_complete: Option<String>,
    pub quizzes_per_day: Option<String>,
    pub questions_per_quiz: Option<String>,
    pub additional_info: Option<String>,
}

impl EditFields {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.days_to_complete.is_none()
            && self.quizzes_per_day.is_none()
            && self.questions_per_quiz.is_none()
            && self.additional_info.is_none()
    }

    /// Submitted values win; everything else keeps the course's current value
    fn merge_over(self, course: &Course) -> CourseFields {
        CourseFields {
            name: self.name.unwrap_or_else(|| course.name.clone()),
            days_to_complete: self
                .days_to_complete
                .unwrap_or_else(|| course.days_to_complete.to_string()),
            quizzes_per_day: self
                .quizzes_per_day
                .unwrap_or_else(|| course.quizzes_per_day.to_string()),
            questions_per_quiz: self
                .questions_per_quiz
                .unwrap_or_else(|| course.questions_per_quiz.to_string()),
            additional_info: self
                .additional_info
                .unwrap_or_else(|| course.additional_info.clone()),
        }
    }
}

/// Execute the edit command
///
/// With field options, applies a partial update immediately. With none, it
/// stores the edit marker so the next `add` overwrites this course.
pub fn execute(position: Option<usize>, id: Option<&str>, fields: EditFields) -> Result<()> {
    let mut store = utils::open_store()?;
    let index = utils::resolve_index(&store, position, id)?;

    if fields.is_empty() {
        let course = store
            .begin_edit(index)?
            .context("Course disappeared while resolving it")?;

        println!("Editing '{}' (position {}):", course.name, index + 1);
        println!("  days to complete:  {}", course.days_to_complete);
        println!("  quizzes per day:   {}", course.quizzes_per_day);
        println!("  questions per quiz: {}", course.questions_per_quiz);
        if !course.additional_info.is_empty() {
            println!("  info: {}", course.additional_info);
        }
        println!();
        println!("The next {} will overwrite this course.", "add".bold());
        return Ok(());
    }

    let courses = store.in_progress()?;
    let course = courses
        .get(index)
        .context("Course disappeared while resolving it")?;

    let merged = fields.merge_over(course);
    let input = match parse_fields(&merged) {
        Ok(input) => input,
        Err(e) => bail!("{}", e),
    };

    match store.update(index, input)? {
        Some(course) => {
            println!(
                "{} '{}' at position {}",
                "Updated:".green(),
                course.name,
                index + 1
            );
        }
        None => bail!("No course at position {}", index + 1),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_helper::course::NewCourse;

    fn course() -> Course {
        Course::new(NewCourse {
            name: "Existing Course".to_string(),
            days_to_complete: 30,
            quizzes_per_day: 2,
            questions_per_quiz: 10,
            additional_info: "notes".to_string(),
        })
    }

    #[test]
    fn test_empty_fields_detected() {
        assert!(EditFields::default().is_empty());
        assert!(!EditFields {
            name: Some("x".to_string()),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_merge_submitted_fields_win() {
        let fields = EditFields {
            days_to_complete: Some("45".to_string()),
            ..Default::default()
        };

        let merged = fields.merge_over(&course());
        assert_eq!(merged.name, "Existing Course");
        assert_eq!(merged.days_to_complete, "45");
        assert_eq!(merged.quizzes_per_day, "2");
        assert_eq!(merged.questions_per_quiz, "10");
        assert_eq!(merged.additional_info, "notes");
    }

    #[test]
    fn test_merged_fields_revalidate() {
        let fields = EditFields {
            days_to_complete: Some("366".to_string()),
            ..Default::default()
        };

        let merged = fields.merge_over(&course());
        assert!(parse_fields(&merged).is_err());
    }
}
