//! Storage trait abstraction.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use learnbridge_core::CourseRecord;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Durable store for progress state.
///
/// Two logical keys, mirroring the original key-value layout:
/// the enrollment set (`enrolledCourses`) and the per-course record map
/// (`courseProgress`). Each save replaces the whole value for its key.
/// A missing key loads as the empty default; only unreadable or
/// malformed data is an error, and the caller decides whether that is
/// fatal.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Load the enrollment set.
    async fn load_enrollments(&self) -> Result<BTreeSet<String>>;

    /// Load the per-course record map.
    async fn load_records(&self) -> Result<BTreeMap<String, CourseRecord>>;

    /// Replace the stored enrollment set.
    async fn save_enrollments(&mut self, enrolled: &BTreeSet<String>) -> Result<()>;

    /// Replace the stored record map.
    async fn save_records(&mut self, records: &BTreeMap<String, CourseRecord>) -> Result<()>;
}
