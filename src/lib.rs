//! study-helper library
//!
//! Course tracking over a local key-value store: validated course records,
//! create/edit/quiz/complete/delete lifecycle operations, and the storage
//! backends they run against.

pub mod config;
pub mod course;
pub mod storage;
