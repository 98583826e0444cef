//! Course record types
//!
//! Records are serialized with the camelCase field names used by the stored
//! JSON arrays, so existing data files remain readable.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted course record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Stable identifier, assigned at creation
    ///
    /// Records written before ids existed deserialize with a fresh one.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Course name (non-empty)
    pub name: String,

    /// Days allotted to finish the course (1-365)
    pub days_to_complete: i64,

    /// Quizzes taken per day (1-5)
    pub quizzes_per_day: i64,

    /// Questions per quiz (1-50)
    pub questions_per_quiz: i64,

    /// Free-form notes, capped at 500 characters
    #[serde(default)]
    pub additional_info: String,

    /// Completion percentage (0-100)
    pub progress: i64,

    /// Number of quizzes completed so far
    pub quizzes_completed: i64,

    /// ISO-8601 creation timestamp
    pub created_at: String,

    /// ISO-8601 completion timestamp, set when the course is completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
}

impl Course {
    /// Build a fresh record from validated input
    pub fn new(input: NewCourse) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            days_to_complete: input.days_to_complete,
            quizzes_per_day: input.quizzes_per_day,
            questions_per_quiz: input.questions_per_quiz,
            additional_info: input.additional_info,
            progress: 0,
            quizzes_completed: 0,
            created_at: now_timestamp(),
            completed_date: None,
        }
    }

    /// Overwrite the editable fields, keeping identity and progress state
    pub fn apply(&mut self, input: NewCourse) {
        self.name = input.name;
        self.days_to_complete = input.days_to_complete;
        self.quizzes_per_day = input.quizzes_per_day;
        self.questions_per_quiz = input.questions_per_quiz;
        self.additional_info = input.additional_info;
    }

    /// Total quizzes required to finish the course
    pub fn quiz_quota(&self) -> i64 {
        self.days_to_complete * self.quizzes_per_day
    }
}

/// Raw field values as submitted (CLI arguments or form input)
#[derive(Debug, Clone, Default)]
pub struct CourseFields {
    pub name: String,
    pub days_to_complete: String,
    pub quizzes_per_day: String,
    pub questions_per_quiz: String,
    pub additional_info: String,
}

/// Validated, typed input ready to become (or overwrite) a record
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub name: String,
    pub days_to_complete: i64,
    pub quizzes_per_day: i64,
    pub questions_per_quiz: i64,
    pub additional_info: String,
}

/// Current time as an ISO-8601 string (millisecond precision, Z suffix)
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> NewCourse {
        NewCourse {
            name: "Test Course".to_string(),
            days_to_complete: 30,
            quizzes_per_day: 2,
            questions_per_quiz: 10,
            additional_info: "Test additional info".to_string(),
        }
    }

    #[test]
    fn test_new_course_defaults() {
        let course = Course::new(sample_input());
        assert_eq!(course.progress, 0);
        assert_eq!(course.quizzes_completed, 0);
        assert!(course.completed_date.is_none());
        assert!(!course.created_at.is_empty());
        assert!(!course.id.is_nil());
    }

    #[test]
    fn test_apply_preserves_identity_and_progress() {
        let mut course = Course::new(sample_input());
        course.progress = 50;
        course.quizzes_completed = 15;
        let id = course.id;
        let created_at = course.created_at.clone();

        course.apply(NewCourse {
            name: "Updated Course".to_string(),
            days_to_complete: 45,
            quizzes_per_day: 3,
            questions_per_quiz: 15,
            additional_info: String::new(),
        });

        assert_eq!(course.name, "Updated Course");
        assert_eq!(course.days_to_complete, 45);
        assert_eq!(course.id, id);
        assert_eq!(course.created_at, created_at);
        assert_eq!(course.progress, 50);
        assert_eq!(course.quizzes_completed, 15);
    }

    #[test]
    fn test_quiz_quota() {
        let mut course = Course::new(sample_input());
        assert_eq!(course.quiz_quota(), 60);

        course.days_to_complete = 1;
        course.quizzes_per_day = 2;
        assert_eq!(course.quiz_quota(), 2);
    }

    #[test]
    fn test_serializes_with_camel_case_names() {
        let course = Course::new(sample_input());
        let json = serde_json::to_value(&course).unwrap();

        assert_eq!(json["name"], "Test Course");
        assert_eq!(json["daysToComplete"], 30);
        assert_eq!(json["quizzesPerDay"], 2);
        assert_eq!(json["questionsPerQuiz"], 10);
        assert_eq!(json["additionalInfo"], "Test additional info");
        assert_eq!(json["progress"], 0);
        assert_eq!(json["quizzesCompleted"], 0);
        assert!(json["createdAt"].is_string());
        // Not completed yet, so the field is omitted entirely
        assert!(json.get("completedDate").is_none());
    }

    #[test]
    fn test_deserializes_legacy_record_without_id() {
        // Records written before ids existed
        let json = r#"{
            "name": "Existing Course",
            "daysToComplete": 30,
            "quizzesPerDay": 2,
            "questionsPerQuiz": 10,
            "progress": 50,
            "quizzesCompleted": 15,
            "createdAt": "2024-03-31T00:00:00.000Z"
        }"#;

        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.name, "Existing Course");
        assert_eq!(course.progress, 50);
        assert_eq!(course.additional_info, "");
        assert!(!course.id.is_nil());
    }

    #[test]
    fn test_timestamp_is_iso_8601() {
        let ts = now_timestamp();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
