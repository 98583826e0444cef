//! Course tracking domain

pub mod record;
pub mod store;
pub mod validate;

pub use record::{Course, CourseFields, NewCourse};
pub use store::{CourseStore, QuizOutcome, StoreError, Submission};
pub use validate::{parse_fields, validate_course, validate_fields, ValidationError};
