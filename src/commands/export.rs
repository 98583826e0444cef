//! Export command - Write course data to a readable format

use anyhow::{Context, Result};
use std::fs;

use study_helper::course::{Course, CourseStore};
use study_helper::storage::KeyValueStore;

use super::utils;

/// Output format for course export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Json,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Which lists to export
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Export completed courses instead of in-progress ones
    pub completed: bool,
    /// Export both lists
    pub all: bool,
}

/// Execute the export command
pub fn execute(format: ExportFormat, output: Option<&str>, options: ExportOptions) -> Result<()> {
    let store = utils::open_store()?;
    let content = render(&store, format, options)?;

    match output {
        Some(path) => {
            fs::write(path, &content).with_context(|| format!("Failed to write: {}", path))?;
            println!("Exported to {}", path);
        }
        None => println!("{}", content),
    }

    Ok(())
}

/// Render the selected lists against any store
pub fn render<S: KeyValueStore>(
    store: &CourseStore<S>,
    format: ExportFormat,
    options: ExportOptions,
) -> Result<String> {
    let in_progress = if !options.completed || options.all {
        Some(store.in_progress()?)
    } else {
        None
    };
    let completed = if options.completed || options.all {
        Some(store.completed()?)
    } else {
        None
    };

    match format {
        ExportFormat::Json => render_json(in_progress, completed),
        ExportFormat::Markdown => Ok(render_markdown(in_progress, completed)),
    }
}

fn render_json(in_progress: Option<Vec<Course>>, completed: Option<Vec<Course>>) -> Result<String> {
    // Mirror the persisted key names so exports read like the stored data
    let mut root = serde_json::Map::new();
    if let Some(courses) = in_progress {
        root.insert("coursesInProgress".to_string(), serde_json::to_value(courses)?);
    }
    if let Some(courses) = completed {
        root.insert("completedCourses".to_string(), serde_json::to_value(courses)?);
    }

    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(
        root,
    ))?)
}

fn render_markdown(in_progress: Option<Vec<Course>>, completed: Option<Vec<Course>>) -> String {
    let mut lines = vec!["# Study courses".to_string()];

    if let Some(courses) = in_progress {
        lines.push(String::new());
        lines.push("## In progress".to_string());
        if courses.is_empty() {
            lines.push(String::new());
            lines.push("No courses in progress.".to_string());
        }
        for course in &courses {
            lines.extend(course_section(course));
        }
    }

    if let Some(courses) = completed {
        lines.push(String::new());
        lines.push("## Completed".to_string());
        if courses.is_empty() {
            lines.push(String::new());
            lines.push("No completed courses.".to_string());
        }
        for course in &courses {
            lines.extend(course_section(course));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

fn course_section(course: &Course) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("### {}", course.name),
        String::new(),
        format!("- Days to complete: {}", course.days_to_complete),
        format!("- Quizzes per day: {}", course.quizzes_per_day),
        format!("- Questions per quiz: {}", course.questions_per_quiz),
        format!(
            "- Progress: {}% ({} quizzes)",
            course.progress,
            utils::quiz_summary(course)
        ),
        format!("- Created: {}", utils::format_date(&course.created_at)),
    ];

    if let Some(date) = &course.completed_date {
        lines.push(format!("- Completed: {}", utils::format_date(date)));
    }

    if !course.additional_info.is_empty() {
        lines.push(String::new());
        lines.push(course.additional_info.clone());
    }

    lines
}
