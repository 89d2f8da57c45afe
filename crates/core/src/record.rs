//! Per-user progress state.
//!
//! These types match the persisted key-value layout: `enrolledCourses` is a
//! JSON array of course ids, `courseProgress` maps course id to a record of
//! completed lesson ids and a last-accessed timestamp.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::Time;

/// Progress record for a single course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// Completed lesson ids (membership is what matters)
    pub completed: BTreeSet<String>,

    /// When the course was last accessed
    pub last_accessed: Time,
}

impl CourseRecord {
    /// Create an empty record stamped with the given time.
    pub fn new(now: Time) -> Self {
        Self {
            completed: BTreeSet::new(),
            last_accessed: now,
        }
    }

    /// Add a lesson to the completed set. Returns false if already present.
    pub fn mark_completed(&mut self, lesson_id: &str) -> bool {
        self.completed.insert(lesson_id.to_string())
    }

    /// Remove a lesson from the completed set. Returns false if absent.
    pub fn mark_incomplete(&mut self, lesson_id: &str) -> bool {
        self.completed.remove(lesson_id)
    }

    /// Whether a lesson id is in the completed set.
    pub fn is_completed(&self, lesson_id: &str) -> bool {
        self.completed.contains(lesson_id)
    }
}

/// The full persisted progress state: enrollment set plus per-course records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Course ids the user has enrolled in
    pub enrolled: BTreeSet<String>,

    /// Progress records by course id
    pub records: BTreeMap<String, CourseRecord>,
}
