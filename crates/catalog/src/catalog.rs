//! Catalog lookups over the static course list.

use std::collections::HashMap;
use std::path::Path;

use learnbridge_core::Course;

/// Errors that can occur while loading a catalog from external data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only course catalog: an ordered course list with an id index.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a course list, preserving order.
    ///
    /// Duplicate ids keep the last definition; earlier ones are logged and
    /// shadowed in lookups.
    pub fn new(courses: Vec<Course>) -> Self {
        let mut index = HashMap::with_capacity(courses.len());
        for (pos, course) in courses.iter().enumerate() {
            if index.insert(course.id.clone(), pos).is_some() {
                tracing::warn!("duplicate course id in catalog: {}", course.id);
            }
        }
        Self { courses, index }
    }

    /// The built-in course set.
    pub fn builtin() -> Self {
        Self::new(super::builtin::courses())
    }

    /// Load a catalog from a JSON array of courses.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Ok(Self::new(courses))
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// All courses in catalog order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by id.
    pub fn get(&self, course_id: &str) -> Option<&Course> {
        self.index.get(course_id).map(|&pos| &self.courses[pos])
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
