//! Course field validation
//!
//! One set of bounds shared by the submission gate (raw field values) and the
//! record-level check, so the two paths cannot drift apart.

use std::ops::RangeInclusive;
use thiserror::Error;

use super::record::{Course, CourseFields, NewCourse};

/// Allowed range for days to complete
pub const DAYS_TO_COMPLETE: RangeInclusive<i64> = 1..=365;

/// Allowed range for quizzes per day
pub const QUIZZES_PER_DAY: RangeInclusive<i64> = 1..=5;

/// Allowed range for questions per quiz
pub const QUESTIONS_PER_QUIZ: RangeInclusive<i64> = 1..=50;

/// Maximum length of the additional-info text, in characters
pub const ADDITIONAL_INFO_MAX: usize = 500;

/// Why a submission or record was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Course name is required")]
    NameRequired,

    #[error("Days to complete must be between 1 and 365")]
    DaysToComplete,

    #[error("Quizzes per day must be between 1 and 5")]
    QuizzesPerDay,

    #[error("Questions per quiz must be between 1 and 50")]
    QuestionsPerQuiz,
}

/// Parse and validate raw field values into typed course input
///
/// The numeric fields must be non-empty and parse to integers within their
/// closed ranges. Additional info is clamped, never rejected.
pub fn parse_fields(fields: &CourseFields) -> Result<NewCourse, ValidationError> {
    let name = fields.name.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    let days_to_complete =
        parse_bounded(&fields.days_to_complete, DAYS_TO_COMPLETE, ValidationError::DaysToComplete)?;
    let quizzes_per_day =
        parse_bounded(&fields.quizzes_per_day, QUIZZES_PER_DAY, ValidationError::QuizzesPerDay)?;
    let questions_per_quiz = parse_bounded(
        &fields.questions_per_quiz,
        QUESTIONS_PER_QUIZ,
        ValidationError::QuestionsPerQuiz,
    )?;

    Ok(NewCourse {
        name: name.to_string(),
        days_to_complete,
        quizzes_per_day,
        questions_per_quiz,
        additional_info: clamp_additional_info(fields.additional_info.trim()),
    })
}

/// True iff every required field is present and within bounds
///
/// The boolean form of [`parse_fields`], used to gate submission.
pub fn validate_fields(fields: &CourseFields) -> bool {
    parse_fields(fields).is_ok()
}

/// Validate a fully-built record against the same bounds
pub fn validate_course(course: &Course) -> Result<(), ValidationError> {
    if course.name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if !DAYS_TO_COMPLETE.contains(&course.days_to_complete) {
        return Err(ValidationError::DaysToComplete);
    }
    if !QUIZZES_PER_DAY.contains(&course.quizzes_per_day) {
        return Err(ValidationError::QuizzesPerDay);
    }
    if !QUESTIONS_PER_QUIZ.contains(&course.questions_per_quiz) {
        return Err(ValidationError::QuestionsPerQuiz);
    }
    Ok(())
}

/// Truncate additional-info text to [`ADDITIONAL_INFO_MAX`] characters
pub fn clamp_additional_info(text: &str) -> String {
    text.chars().take(ADDITIONAL_INFO_MAX).collect()
}

fn parse_bounded(
    raw: &str,
    range: RangeInclusive<i64>,
    err: ValidationError,
) -> Result<i64, ValidationError> {
    let value: i64 = raw.trim().parse().map_err(|_| err.clone())?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(err)
    }
}
