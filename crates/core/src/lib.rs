//! LearnBridge core data models.
//!
//! This crate defines the fundamental data structures shared by the
//! catalog, storage, and progress-tracking crates.

#![warn(missing_docs)]

// Catalog entities
mod course;

// Per-user progress state
mod record;

// Re-exports
pub use course::{Course, Level, Lesson, LessonKind, Module};
pub use record::{CourseRecord, ProgressState};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
