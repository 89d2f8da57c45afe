//! Course model - the immutable catalog entities.

use serde::{Deserialize, Serialize};

/// A course is the top-level learning unit in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier (human-authored slug, e.g. `server-fundamentals`)
    pub id: String,

    /// Course title
    pub title: String,

    /// Detailed description
    pub description: String,

    /// Instructor name
    pub instructor: String,

    /// Duration label (e.g. "6 weeks")
    pub duration: String,

    /// Difficulty level
    pub level: Level,

    /// Thumbnail reference
    pub thumbnail: String,

    /// Ordered modules
    pub modules: Vec<Module>,

    /// Tag strings
    pub tags: Vec<String>,
}

impl Course {
    /// Total lesson count across all modules.
    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }

    /// Iterate over every lesson id in module order.
    pub fn lesson_ids(&self) -> impl Iterator<Item = &str> {
        self.modules
            .iter()
            .flat_map(|m| m.lessons.iter().map(|l| l.id.as_str()))
    }

    /// Whether a lesson with this id exists in the course.
    pub fn contains_lesson(&self, lesson_id: &str) -> bool {
        self.lesson_ids().any(|id| id == lesson_id)
    }

    /// Look up a lesson by id.
    pub fn find_lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.modules
            .iter()
            .flat_map(|m| m.lessons.iter())
            .find(|l| l.id == lesson_id)
    }
}

/// Course difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    /// No prior knowledge assumed
    Beginner,
    /// Some experience expected
    Intermediate,
    /// For experienced practitioners
    Advanced,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        };
        f.write_str(s)
    }
}

/// A named grouping of lessons within a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Module title
    pub title: String,

    /// Ordered lessons
    pub lessons: Vec<Lesson>,
}

/// An atomic learning item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Identifier, unique within its course
    pub id: String,

    /// Lesson title
    pub title: String,

    /// Duration label (e.g. "30 min")
    pub duration: String,

    /// Lesson type
    #[serde(rename = "type")]
    pub kind: LessonKind,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The kind of content a lesson carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    /// Video lecture
    Video,
    /// Written article
    Article,
    /// Interactive quiz
    Quiz,
}

impl std::fmt::Display for LessonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LessonKind::Video => "video",
            LessonKind::Article => "article",
            LessonKind::Quiz => "quiz",
        };
        f.write_str(s)
    }
}
