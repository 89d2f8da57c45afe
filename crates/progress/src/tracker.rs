//! Progress tracking service.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::Utc;
use learnbridge_catalog::Catalog;
use learnbridge_core::{Course, CourseRecord, ProgressState};
use learnbridge_storage::ProgressStore;

/// Errors from tracker mutations.
///
/// Only catalog validation fails loudly; storage trouble is logged and
/// swallowed because this is client-local cosmetic state.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// The course id is not in the catalog
    #[error("unknown course: {0}")]
    UnknownCourse(String),

    /// The lesson id does not belong to the course
    #[error("course {course} has no lesson {lesson}")]
    UnknownLesson {
        /// Course id
        course: String,
        /// Lesson id
        lesson: String,
    },
}

/// Result alias for tracker mutations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Aggregate numbers for the dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Courses currently enrolled in
    pub enrolled_courses: usize,

    /// Lessons completed across enrolled courses
    pub lessons_completed: usize,

    /// Mean completion percent over enrolled courses (0 when none)
    pub average_percent: u8,
}

/// Single source of truth for enrollment and lesson completion.
///
/// Owns the in-memory state and writes the full enrollment set and record
/// map through the store after every mutation. Catalog access is injected
/// so lesson ids can be validated at write time.
pub struct ProgressTracker<S: ProgressStore> {
    catalog: Arc<Catalog>,
    store: S,
    state: ProgressState,
}

impl<S: ProgressStore> ProgressTracker<S> {
    /// Load tracker state from the store.
    ///
    /// Absent or malformed stored data falls back to empty defaults; the
    /// tracker never fails to start over storage contents.
    pub async fn load(catalog: Arc<Catalog>, store: S) -> Self {
        let enrolled = match store.load_enrollments().await {
            Ok(enrolled) => enrolled,
            Err(e) => {
                tracing::warn!("could not load enrollments, starting empty: {}", e);
                BTreeSet::new()
            }
        };
        let records = match store.load_records().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("could not load progress records, starting empty: {}", e);
                BTreeMap::new()
            }
        };
        Self {
            catalog,
            store,
            state: ProgressState { enrolled, records },
        }
    }

    /// The current in-memory state, as persisted.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    // === Mutations ===

    /// Enroll in a course. Idempotent; creates an empty progress record on
    /// first enrollment.
    pub async fn enroll(&mut self, course_id: &str) -> Result<()> {
        self.require_course(course_id)?;
        let newly_enrolled = self.state.enrolled.insert(course_id.to_string());
        let record_created = if self.state.records.contains_key(course_id) {
            false
        } else {
            self.state.records
                .insert(course_id.to_string(), CourseRecord::new(Utc::now()));
            true
        };
        if newly_enrolled || record_created {
            self.persist().await;
        }
        Ok(())
    }

    /// Leave a course. The progress record is kept so completed lessons
    /// survive re-enrollment. Not an error when not enrolled.
    pub async fn unenroll(&mut self, course_id: &str) {
        if self.state.enrolled.remove(course_id) {
            self.persist().await;
        }
    }

    /// Mark a lesson completed. Idempotent. The progress record is created
    /// on demand; enrollment is not a precondition.
    pub async fn mark_lesson_completed(&mut self, course_id: &str, lesson_id: &str) -> Result<()> {
        self.require_lesson(course_id, lesson_id)?;
        let record = self
            .state
            .records
            .entry(course_id.to_string())
            .or_insert_with(|| CourseRecord::new(Utc::now()));
        if record.mark_completed(lesson_id) {
            self.persist().await;
        }
        Ok(())
    }

    /// Remove a lesson from the completed set; no-op when absent.
    pub async fn mark_lesson_incomplete(&mut self, course_id: &str, lesson_id: &str) -> Result<()> {
        self.require_lesson(course_id, lesson_id)?;
        let changed = match self.state.records.get_mut(course_id) {
            Some(record) => record.mark_incomplete(lesson_id),
            None => false,
        };
        if changed {
            self.persist().await;
        }
        Ok(())
    }

    /// Stamp the course's last-accessed time with now, creating the record
    /// if absent.
    pub async fn touch_last_accessed(&mut self, course_id: &str) -> Result<()> {
        self.require_course(course_id)?;
        let now = Utc::now();
        self.state.records
            .entry(course_id.to_string())
            .and_modify(|r| r.last_accessed = now)
            .or_insert_with(|| CourseRecord::new(now));
        self.persist().await;
        Ok(())
    }

    // === Queries ===

    /// Completion percent in [0, 100].
    ///
    /// Only completed ids that still exist in the course count, so stale
    /// ids from older stored state can never push this past 100. Zero for
    /// an unknown course, a course with no record, or a zero-lesson course.
    pub fn course_progress(&self, course_id: &str) -> u8 {
        let Some(course) = self.catalog.get(course_id) else {
            return 0;
        };
        let total = course.lesson_count();
        if total == 0 {
            return 0;
        }
        let completed = self.completed_count(course_id);
        (100.0 * completed as f64 / total as f64).round() as u8
    }

    /// Completed lessons in this course that exist in the catalog.
    pub fn completed_count(&self, course_id: &str) -> usize {
        let (Some(course), Some(record)) = (self.catalog.get(course_id), self.state.records.get(course_id))
        else {
            return 0;
        };
        record
            .completed
            .iter()
            .filter(|id| course.contains_lesson(id))
            .count()
    }

    /// Whether the lesson is in the course's completed set.
    pub fn is_lesson_completed(&self, course_id: &str, lesson_id: &str) -> bool {
        self.state.records
            .get(course_id)
            .is_some_and(|r| r.is_completed(lesson_id))
    }

    /// Whether the course is in the enrollment set.
    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.state.enrolled.contains(course_id)
    }

    /// When the course was last accessed, if it has a record.
    pub fn last_accessed(&self, course_id: &str) -> Option<learnbridge_core::Time> {
        self.state.records.get(course_id).map(|r| r.last_accessed)
    }

    /// Enrolled courses in catalog order.
    pub fn enrolled_courses(&self) -> Vec<&Course> {
        self.catalog
            .courses()
            .iter()
            .filter(|c| self.state.enrolled.contains(&c.id))
            .collect()
    }

    /// Aggregate dashboard numbers over enrolled courses.
    pub fn summary(&self) -> DashboardSummary {
        let courses = self.enrolled_courses();
        let enrolled_courses = courses.len();
        let lessons_completed = courses.iter().map(|c| self.completed_count(&c.id)).sum();
        let average_percent = if enrolled_courses == 0 {
            0
        } else {
            let total: u32 = courses
                .iter()
                .map(|c| u32::from(self.course_progress(&c.id)))
                .sum();
            (f64::from(total) / enrolled_courses as f64).round() as u8
        };
        DashboardSummary {
            enrolled_courses,
            lessons_completed,
            average_percent,
        }
    }

    // === Internals ===

    fn require_course(&self, course_id: &str) -> Result<&Course> {
        self.catalog
            .get(course_id)
            .ok_or_else(|| TrackerError::UnknownCourse(course_id.to_string()))
    }

    fn require_lesson(&self, course_id: &str, lesson_id: &str) -> Result<()> {
        let course = self.require_course(course_id)?;
        if course.contains_lesson(lesson_id) {
            Ok(())
        } else {
            Err(TrackerError::UnknownLesson {
                course: course_id.to_string(),
                lesson: lesson_id.to_string(),
            })
        }
    }

    /// Write-through persistence of the full state. Storage failures are
    /// logged and swallowed; the in-memory state stays authoritative.
    async fn persist(&mut self) {
        if let Err(e) = self.store.save_enrollments(&self.state.enrolled).await {
            tracing::warn!("failed to persist enrollments: {}", e);
        }
        if let Err(e) = self.store.save_records(&self.state.records).await {
            tracing::warn!("failed to persist progress records: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnbridge_core::{Lesson, LessonKind, Level, Module};
    use learnbridge_storage::{MemoryStore, StorageError};

    fn lesson(id: &str) -> Lesson {
        Lesson {
            id: id.to_string(),
            title: id.to_string(),
            duration: "10 min".to_string(),
            kind: LessonKind::Video,
            description: None,
        }
    }

    fn course(id: &str, modules: Vec<Module>) -> Course {
        Course {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            instructor: "Test".to_string(),
            duration: "1 week".to_string(),
            level: Level::Beginner,
            thumbnail: String::new(),
            modules,
            tags: Vec::new(),
        }
    }

    /// c1 has 4 lessons across 2 modules; c0 has none.
    fn test_catalog() -> Arc<Catalog> {
        Arc::new(Catalog::new(vec![
            course(
                "c1",
                vec![
                    Module {
                        title: "A".to_string(),
                        lessons: vec![lesson("l1"), lesson("l2")],
                    },
                    Module {
                        title: "B".to_string(),
                        lessons: vec![lesson("l3"), lesson("l4")],
                    },
                ],
            ),
            course("c0", Vec::new()),
        ]))
    }

    async fn tracker() -> ProgressTracker<MemoryStore> {
        ProgressTracker::load(test_catalog(), MemoryStore::new()).await
    }

    #[tokio::test]
    async fn test_zero_lesson_course_is_zero_percent() {
        let mut t = tracker().await;
        t.enroll("c0").await.unwrap();
        assert_eq!(t.course_progress("c0"), 0);
    }

    #[tokio::test]
    async fn test_unknown_course_is_zero_percent() {
        let t = tracker().await;
        assert_eq!(t.course_progress("nope"), 0);
        assert!(!t.is_enrolled("nope"));
        assert!(t.last_accessed("c1").is_none());
    }

    #[tokio::test]
    async fn test_percent_is_rounded_fraction_of_total() {
        let mut t = tracker().await;
        t.enroll("c1").await.unwrap();
        t.mark_lesson_completed("c1", "l1").await.unwrap();
        assert_eq!(t.course_progress("c1"), 25);
        t.mark_lesson_completed("c1", "l2").await.unwrap();
        assert_eq!(t.course_progress("c1"), 50);
        t.mark_lesson_completed("c1", "l3").await.unwrap();
        // round(100 * 3/4)
        assert_eq!(t.course_progress("c1"), 75);
    }

    #[tokio::test]
    async fn test_enroll_is_idempotent() {
        let mut t = tracker().await;
        t.enroll("c1").await.unwrap();
        let first_access = t.last_accessed("c1").unwrap();
        t.enroll("c1").await.unwrap();
        assert!(t.is_enrolled("c1"));
        assert_eq!(t.enrolled_courses().len(), 1);
        // the record is not recreated
        assert_eq!(t.last_accessed("c1").unwrap(), first_access);
    }

    #[tokio::test]
    async fn test_complete_then_incomplete_round_trips() {
        let mut t = tracker().await;
        t.enroll("c1").await.unwrap();
        t.mark_lesson_completed("c1", "l1").await.unwrap();
        t.mark_lesson_completed("c1", "l2").await.unwrap();
        t.mark_lesson_incomplete("c1", "l2").await.unwrap();
        assert!(t.is_lesson_completed("c1", "l1"));
        assert!(!t.is_lesson_completed("c1", "l2"));
        assert_eq!(t.course_progress("c1"), 25);
        // incomplete on an absent id is a no-op
        t.mark_lesson_incomplete("c1", "l3").await.unwrap();
        assert_eq!(t.course_progress("c1"), 25);
    }

    #[tokio::test]
    async fn test_progress_survives_unenroll_and_reenroll() {
        let mut t = tracker().await;
        t.enroll("c1").await.unwrap();
        t.mark_lesson_completed("c1", "l1").await.unwrap();
        t.mark_lesson_completed("c1", "l2").await.unwrap();
        assert_eq!(t.course_progress("c1"), 50);

        t.unenroll("c1").await;
        assert!(!t.is_enrolled("c1"));

        t.enroll("c1").await.unwrap();
        assert_eq!(t.course_progress("c1"), 50);
    }

    #[tokio::test]
    async fn test_completion_without_enrollment_is_allowed() {
        let mut t = tracker().await;
        t.mark_lesson_completed("c1", "l1").await.unwrap();
        assert!(!t.is_enrolled("c1"));
        assert!(t.is_lesson_completed("c1", "l1"));
        assert_eq!(t.course_progress("c1"), 25);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_rejected_at_write_time() {
        let mut t = tracker().await;
        assert!(matches!(
            t.enroll("nope").await,
            Err(TrackerError::UnknownCourse(_))
        ));
        assert!(matches!(
            t.mark_lesson_completed("c1", "l99").await,
            Err(TrackerError::UnknownLesson { .. })
        ));
        assert!(matches!(
            t.mark_lesson_incomplete("c1", "l99").await,
            Err(TrackerError::UnknownLesson { .. })
        ));
        assert_eq!(t.course_progress("c1"), 0);
    }

    #[tokio::test]
    async fn test_touch_updates_last_accessed() {
        let mut t = tracker().await;
        t.enroll("c1").await.unwrap();
        let before = t.last_accessed("c1").unwrap();
        t.touch_last_accessed("c1").await.unwrap();
        assert!(t.last_accessed("c1").unwrap() >= before);
        // creates the record on demand
        t.touch_last_accessed("c0").await.unwrap();
        assert!(t.last_accessed("c0").is_some());
    }

    #[tokio::test]
    async fn test_summary_aggregates_enrolled_courses() {
        let mut t = tracker().await;
        t.enroll("c1").await.unwrap();
        t.enroll("c0").await.unwrap();
        t.mark_lesson_completed("c1", "l1").await.unwrap();
        t.mark_lesson_completed("c1", "l2").await.unwrap();
        let summary = t.summary();
        assert_eq!(summary.enrolled_courses, 2);
        assert_eq!(summary.lessons_completed, 2);
        // mean of 50 and 0
        assert_eq!(summary.average_percent, 25);
    }

    #[tokio::test]
    async fn test_state_exposes_the_persisted_pair() {
        let mut t = tracker().await;
        t.enroll("c1").await.unwrap();
        t.mark_lesson_completed("c1", "l1").await.unwrap();
        let state = t.state();
        assert!(state.enrolled.contains("c1"));
        assert!(state.records.get("c1").unwrap().is_completed("l1"));
        // what the store receives is exactly this pair
        assert_eq!(state.enrolled, t.store.load_enrollments().await.unwrap());
        assert_eq!(state.records, t.store.load_records().await.unwrap());
    }

    #[tokio::test]
    async fn test_storage_write_failures_are_not_fatal() {
        let mut store = MemoryStore::new();
        store.fail_writes(true);
        let mut t = ProgressTracker::load(test_catalog(), store).await;
        t.enroll("c1").await.unwrap();
        t.mark_lesson_completed("c1", "l1").await.unwrap();
        // in-memory state stays authoritative
        assert!(t.is_enrolled("c1"));
        assert_eq!(t.course_progress("c1"), 25);
    }

    struct BrokenStore;

    #[async_trait::async_trait]
    impl learnbridge_storage::ProgressStore for BrokenStore {
        async fn load_enrollments(&self) -> learnbridge_storage::Result<BTreeSet<String>> {
            Err(StorageError::Other("corrupt".to_string()))
        }
        async fn load_records(
            &self,
        ) -> learnbridge_storage::Result<BTreeMap<String, CourseRecord>> {
            Err(StorageError::Other("corrupt".to_string()))
        }
        async fn save_enrollments(
            &mut self,
            _enrolled: &BTreeSet<String>,
        ) -> learnbridge_storage::Result<()> {
            Ok(())
        }
        async fn save_records(
            &mut self,
            _records: &BTreeMap<String, CourseRecord>,
        ) -> learnbridge_storage::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_corrupt_storage_falls_back_to_empty_state() {
        let t = ProgressTracker::load(test_catalog(), BrokenStore).await;
        assert!(!t.is_enrolled("c1"));
        assert_eq!(t.course_progress("c1"), 0);
        assert_eq!(t.summary().enrolled_courses, 0);
    }
}
