//! Course store - lifecycle operations over the persisted lists
//!
//! Three keys hold all state: `coursesInProgress` and `completedCourses` are
//! JSON arrays of records, `editingCourseIndex` is a stringified index naming
//! which in-progress course the next submission overwrites. Every operation
//! reads a full list, mutates it in memory, and writes it back whole; nothing
//! is written until the mutated list is valid.

use thiserror::Error;
use uuid::Uuid;

use super::record::{now_timestamp, Course, NewCourse};
use super::validate::{self, ValidationError};
use crate::storage::KeyValueStore;

/// Key holding the ordered array of in-progress courses
pub const COURSES_IN_PROGRESS: &str = "coursesInProgress";

/// Key holding the ordered array of completed courses
pub const COMPLETED_COURSES: &str = "completedCourses";

/// Key holding the pending edit marker
pub const EDITING_COURSE_INDEX: &str = "editingCourseIndex";

/// Errors from course store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Stored value under '{key}' is not valid JSON")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// What a create-style submission ended up doing
#[derive(Debug)]
pub enum Submission {
    /// No edit was pending; a new course was appended
    Created(Course),

    /// A pending edit overwrote the course at `index`
    Updated { index: usize, course: Course },

    /// The pending edit pointed past the end of the list; the marker was
    /// dropped and nothing was written
    StaleEdit,
}

/// Result of recording a completed quiz
#[derive(Debug)]
pub struct QuizOutcome {
    /// The course after the update
    pub course: Course,

    /// Whether the course has now met its quiz quota
    pub quota_met: bool,
}

/// Domain layer over an injected key-value store
pub struct CourseStore<S> {
    store: S,
}

impl<S: KeyValueStore> CourseStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Courses currently in progress, in insertion order
    pub fn in_progress(&self) -> Result<Vec<Course>, StoreError> {
        self.load_list(COURSES_IN_PROGRESS)
    }

    /// Completed courses, in completion order
    pub fn completed(&self) -> Result<Vec<Course>, StoreError> {
        self.load_list(COMPLETED_COURSES)
    }

    /// Append a new course built from validated input
    pub fn create(&mut self, input: NewCourse) -> Result<Course, StoreError> {
        let course = Course::new(input);
        validate::validate_course(&course)?;

        let mut courses = self.in_progress()?;
        courses.push(course.clone());
        self.save_list(COURSES_IN_PROGRESS, &courses)?;
        Ok(course)
    }

    /// Overwrite the editable fields of the course at `index`
    ///
    /// Clears any pending edit marker. Returns `Ok(None)` without writing if
    /// the index is out of range.
    pub fn update(&mut self, index: usize, input: NewCourse) -> Result<Option<Course>, StoreError> {
        let mut courses = self.in_progress()?;
        let Some(course) = courses.get_mut(index) else {
            return Ok(None);
        };

        course.apply(input);
        validate::validate_course(course)?;
        let updated = course.clone();

        self.save_list(COURSES_IN_PROGRESS, &courses)?;
        self.clear_edit()?;
        Ok(Some(updated))
    }

    /// Move the course at `index` to the completed list, stamping
    /// `completedDate`
    pub fn complete(&mut self, index: usize) -> Result<Option<Course>, StoreError> {
        let mut in_progress = self.in_progress()?;
        if index >= in_progress.len() {
            return Ok(None);
        }

        let mut course = in_progress.remove(index);
        course.completed_date = Some(now_timestamp());

        let mut completed = self.completed()?;
        completed.push(course.clone());

        // In-progress is written first: a course may never appear in both lists
        self.save_list(COURSES_IN_PROGRESS, &in_progress)?;
        self.save_list(COMPLETED_COURSES, &completed)?;
        Ok(Some(course))
    }

    /// Remove the course at `index` from the in-progress list
    pub fn delete(&mut self, index: usize) -> Result<Option<Course>, StoreError> {
        let mut courses = self.in_progress()?;
        if index >= courses.len() {
            return Ok(None);
        }

        let removed = courses.remove(index);
        self.save_list(COURSES_IN_PROGRESS, &courses)?;
        Ok(Some(removed))
    }

    /// Mark the course at `index` as the target of the next submission
    ///
    /// Returns the course so its current values can be shown. `Ok(None)` if
    /// the index is out of range.
    pub fn begin_edit(&mut self, index: usize) -> Result<Option<Course>, StoreError> {
        let courses = self.in_progress()?;
        let Some(course) = courses.get(index) else {
            return Ok(None);
        };
        let course = course.clone();

        self.store.set(EDITING_COURSE_INDEX, &index.to_string())?;
        Ok(Some(course))
    }

    /// Index of the pending edit, if one is set
    pub fn editing_index(&self) -> Result<Option<usize>, StoreError> {
        // The legacy format stored the literal string "null" for no pending edit
        Ok(self
            .store
            .get(EDITING_COURSE_INDEX)?
            .filter(|raw| raw != "null")
            .and_then(|raw| raw.parse().ok()))
    }

    /// Drop the pending edit marker
    pub fn clear_edit(&mut self) -> Result<(), StoreError> {
        self.store.remove(EDITING_COURSE_INDEX)?;
        Ok(())
    }

    /// Create-style submission: update the pending-edit target if one is set,
    /// otherwise append a new course. The marker is cleared either way.
    pub fn submit(&mut self, input: NewCourse) -> Result<Submission, StoreError> {
        match self.editing_index()? {
            Some(index) => match self.update(index, input)? {
                Some(course) => Ok(Submission::Updated { index, course }),
                None => {
                    self.clear_edit()?;
                    Ok(Submission::StaleEdit)
                }
            },
            None => Ok(Submission::Created(self.create(input)?)),
        }
    }

    /// Record one completed quiz for the course at `index`
    ///
    /// Progress is the completed fraction of the course's quiz quota
    /// (`daysToComplete * quizzesPerDay`) as a percentage, capped at 100.
    pub fn record_quiz(&mut self, index: usize) -> Result<Option<QuizOutcome>, StoreError> {
        let mut courses = self.in_progress()?;
        let Some(course) = courses.get_mut(index) else {
            return Ok(None);
        };

        course.quizzes_completed += 1;
        let quota = course.quiz_quota();
        course.progress = (course.quizzes_completed * 100 / quota).min(100);

        let outcome = QuizOutcome {
            course: course.clone(),
            quota_met: course.quizzes_completed >= quota,
        };

        self.save_list(COURSES_IN_PROGRESS, &courses)?;
        Ok(Some(outcome))
    }

    /// Current position of the in-progress course with the given id
    pub fn position_of(&self, id: Uuid) -> Result<Option<usize>, StoreError> {
        Ok(self.in_progress()?.iter().position(|c| c.id == id))
    }

    fn load_list(&self, key: &'static str) -> Result<Vec<Course>, StoreError> {
        match self.store.get(key)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt { key, source })
            }
            None => Ok(Vec::new()),
        }
    }

    fn save_list(&mut self, key: &'static str, courses: &[Course]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(courses).map_err(|e| StoreError::Backend(e.into()))?;
        self.store.set(key, &raw)?;
        Ok(())
    }
}
