//! List command - Show tracked courses

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use study_helper::course::{Course, CourseStore};
use study_helper::storage::KeyValueStore;

use super::utils;

/// Options for the list command
pub struct ListOptions {
    /// Show completed courses instead of in-progress ones
    pub completed: bool,
    /// Show both lists
    pub all: bool,
    /// Show the stable course id for each row (use with --id on other commands)
    pub with_id: bool,
    /// Sort by: created, name, progress (default: created)
    pub sort: String,
    /// Reverse sort order
    pub reverse: bool,
    /// Limit number of results per list
    pub limit: Option<usize>,
}

/// Execute the list command and return formatted output
pub fn execute(options: ListOptions) -> Result<String> {
    let store = utils::open_store()?;
    render(&store, &options)
}

/// Render the requested lists against any store
pub fn render<S: KeyValueStore>(store: &CourseStore<S>, options: &ListOptions) -> Result<String> {
    let mut sections = Vec::new();

    if !options.completed || options.all {
        sections.push(in_progress_section(store.in_progress()?, options));
    }
    if options.completed || options.all {
        sections.push(completed_section(store.completed()?, options));
    }

    Ok(sections.join("\n\n"))
}

fn in_progress_section(courses: Vec<Course>, options: &ListOptions) -> String {
    // Pair each course with its stable display position before sorting, so
    // the printed positions stay valid for edit/complete/delete
    let mut rows: Vec<(usize, Course)> = courses.into_iter().enumerate().collect();
    sort_rows(&mut rows, options);

    let total_count = rows.len();
    if let Some(n) = options.limit {
        rows.truncate(n);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("#")];
    if options.with_id {
        header.push(Cell::new("ID"));
    }
    header.extend([
        Cell::new("Name"),
        Cell::new("Days"),
        Cell::new("Quizzes"),
        Cell::new("Progress"),
        Cell::new("Created"),
    ]);
    table.set_header(header);

    for (index, course) in &rows {
        let mut row = vec![Cell::new(index + 1)];
        if options.with_id {
            row.push(Cell::new(course.id));
        }
        row.extend([
            Cell::new(&course.name),
            Cell::new(course.days_to_complete),
            Cell::new(utils::quiz_summary(course)),
            Cell::new(format!("{}%", course.progress)),
            Cell::new(utils::format_date(&course.created_at)),
        ]);
        table.add_row(row);
    }

    let mut output = table.to_string();
    if rows.len() < total_count {
        output.push_str(&format!(
            "\n\nShowing {} of {} courses in progress",
            rows.len(),
            total_count
        ));
    } else {
        output.push_str(&format!("\n\n{} course(s) in progress", total_count));
    }
    output
}

fn completed_section(courses: Vec<Course>, options: &ListOptions) -> String {
    let mut rows: Vec<(usize, Course)> = courses.into_iter().enumerate().collect();
    sort_rows(&mut rows, options);

    let total_count = rows.len();
    if let Some(n) = options.limit {
        rows.truncate(n);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("#")];
    if options.with_id {
        header.push(Cell::new("ID"));
    }
    header.extend([
        Cell::new("Name"),
        Cell::new("Days"),
        Cell::new("Quizzes"),
        Cell::new("Completed"),
    ]);
    table.set_header(header);

    for (index, course) in &rows {
        let completed_str = course
            .completed_date
            .as_deref()
            .map(utils::format_date)
            .unwrap_or_else(|| "-".to_string());

        let mut row = vec![Cell::new(index + 1)];
        if options.with_id {
            row.push(Cell::new(course.id));
        }
        row.extend([
            Cell::new(&course.name),
            Cell::new(course.days_to_complete),
            Cell::new(course.quizzes_completed),
            Cell::new(completed_str),
        ]);
        table.add_row(row);
    }

    let mut output = table.to_string();
    if rows.len() < total_count {
        output.push_str(&format!(
            "\n\nShowing {} of {} completed courses",
            rows.len(),
            total_count
        ));
    } else {
        output.push_str(&format!("\n\n{} completed course(s)", total_count));
    }
    output
}

fn sort_rows(rows: &mut [(usize, Course)], options: &ListOptions) {
    match options.sort.as_str() {
        "name" => {
            rows.sort_by(|a, b| a.1.name.cmp(&b.1.name));
        }
        "progress" => {
            rows.sort_by(|a, b| b.1.progress.cmp(&a.1.progress));
        }
        _ => {
            // Default (including "created"): stored order is creation order
        }
    }

    if options.reverse {
        rows.reverse();
    }
}
