//! Shared utilities for commands

use anyhow::{bail, Context, Result};
use uuid::Uuid;

use study_helper::config;
use study_helper::course::{Course, CourseStore};
use study_helper::storage::{KeyValueStore, SqliteStore};

/// Open the course store at its configured location
pub fn open_store() -> Result<CourseStore<SqliteStore>> {
    let path = config::store_path().context("Failed to determine store location")?;
    let store = SqliteStore::open(&path)?;
    Ok(CourseStore::new(store))
}

/// Resolve a 1-based display position or a stable course id to a list index
///
/// Commands accept either form; clap prevents passing both.
pub fn resolve_index<S: KeyValueStore>(
    store: &CourseStore<S>,
    position: Option<usize>,
    id: Option<&str>,
) -> Result<usize> {
    match (position, id) {
        (Some(position), None) => {
            if position == 0 {
                bail!("Positions start at 1 (as shown by `list`)");
            }
            let count = store.in_progress()?.len();
            if count == 0 {
                bail!("No courses in progress");
            }
            let index = position - 1;
            if index >= count {
                bail!("No course at position {} (valid: 1-{})", position, count);
            }
            Ok(index)
        }
        (None, Some(raw)) => {
            let id = Uuid::parse_str(raw).with_context(|| format!("Invalid course id: {}", raw))?;
            store
                .position_of(id)?
                .with_context(|| format!("No in-progress course with id {}", id))
        }
        (None, None) => bail!("Either a position or --id must be provided"),
        (Some(_), Some(_)) => {
            // This case is prevented by clap's conflicts_with
            unreachable!()
        }
    }
}

/// Format an ISO-8601 timestamp as a short date for display
pub fn format_date(iso: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

/// Quizzes completed out of the course's quota, e.g. "3/60"
pub fn quiz_summary(course: &Course) -> String {
    format!("{}/{}", course.quizzes_completed, course.quiz_quota())
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_helper::course::NewCourse;
    use study_helper::storage::MemoryStore;

    fn seeded() -> CourseStore<MemoryStore> {
        let mut store = CourseStore::new(MemoryStore::new());
        store
            .create(NewCourse {
                name: "Test Course".to_string(),
                days_to_complete: 30,
                quizzes_per_day: 2,
                questions_per_quiz: 10,
                additional_info: String::new(),
            })
            .unwrap();
        store
    }

    #[test]
    fn test_resolve_position() {
        let store = seeded();
        assert_eq!(resolve_index(&store, Some(1), None).unwrap(), 0);
    }

    #[test]
    fn test_resolve_position_zero_rejected() {
        let store = seeded();
        assert!(resolve_index(&store, Some(0), None).is_err());
    }

    #[test]
    fn test_resolve_position_out_of_range() {
        let store = seeded();
        let err = resolve_index(&store, Some(2), None).unwrap_err();
        assert!(err.to_string().contains("valid: 1-1"));
    }

    #[test]
    fn test_resolve_by_id() {
        let store = seeded();
        let id = store.in_progress().unwrap()[0].id.to_string();
        assert_eq!(resolve_index(&store, None, Some(&id)).unwrap(), 0);
    }

    #[test]
    fn test_resolve_unknown_id() {
        let store = seeded();
        let unknown = Uuid::new_v4().to_string();
        assert!(resolve_index(&store, None, Some(&unknown)).is_err());
    }

    #[test]
    fn test_resolve_malformed_id() {
        let store = seeded();
        let err = resolve_index(&store, None, Some("not-a-uuid")).unwrap_err();
        assert!(err.to_string().contains("Invalid course id"));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-31T12:30:00.000Z"), "2024-03-31");
        // Unparseable input is shown as-is
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_quiz_summary() {
        let store = seeded();
        let course = &store.in_progress().unwrap()[0];
        assert_eq!(quiz_summary(course), "0/60");
    }
}
