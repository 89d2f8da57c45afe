//! Progress tracking for LearnBridge.
//!
//! Enrollment, lesson completion, and derived completion percentages,
//! persisted write-through to a [`learnbridge_storage::ProgressStore`].

#![warn(missing_docs)]

pub mod tracker;

pub use tracker::{DashboardSummary, ProgressTracker, TrackerError};
