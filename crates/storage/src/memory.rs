//! In-memory store, for tests and ephemeral sessions.

use std::collections::{BTreeMap, BTreeSet};

use learnbridge_core::CourseRecord;

use super::{ProgressStore, Result, StorageError};

/// Store backed by plain in-process collections. Nothing survives the
/// process; useful as a test double and for `--ephemeral` runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    enrolled: BTreeSet<String>,
    records: BTreeMap<String, CourseRecord>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail, to exercise fail-soft callers.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            Err(StorageError::Other("writes disabled".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl ProgressStore for MemoryStore {
    async fn load_enrollments(&self) -> Result<BTreeSet<String>> {
        Ok(self.enrolled.clone())
    }

    async fn load_records(&self) -> Result<BTreeMap<String, CourseRecord>> {
        Ok(self.records.clone())
    }

    async fn save_enrollments(&mut self, enrolled: &BTreeSet<String>) -> Result<()> {
        self.check_writable()?;
        self.enrolled = enrolled.clone();
        Ok(())
    }

    async fn save_records(&mut self, records: &BTreeMap<String, CourseRecord>) -> Result<()> {
        self.check_writable()?;
        self.records = records.clone();
        Ok(())
    }
}
