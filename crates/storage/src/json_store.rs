//! JSON file storage implementation.
//!
//! Stores each logical key as one JSON document under a root directory:
//! `enrolledCourses.json` holds the enrollment array and
//! `courseProgress.json` holds the record map. Every save replaces the
//! whole document, mirroring the original key-value contract.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use learnbridge_core::CourseRecord;
use tokio::fs;

use super::{ProgressStore, Result};

const ENROLLED_KEY: &str = "enrolledCourses";
const PROGRESS_KEY: &str = "courseProgress";

/// File-based JSON store.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    async fn write_key<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), json.as_bytes()).await?;
        tracing::debug!("persisted {}", key);
        Ok(())
    }

    async fn read_key<T: serde::de::DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait::async_trait]
impl ProgressStore for JsonFileStore {
    async fn load_enrollments(&self) -> Result<BTreeSet<String>> {
        self.read_key(ENROLLED_KEY).await
    }

    async fn load_records(&self) -> Result<BTreeMap<String, CourseRecord>> {
        self.read_key(PROGRESS_KEY).await
    }

    async fn save_enrollments(&mut self, enrolled: &BTreeSet<String>) -> Result<()> {
        self.write_key(ENROLLED_KEY, enrolled).await
    }

    async fn save_records(&mut self, records: &BTreeMap<String, CourseRecord>) -> Result<()> {
        self.write_key(PROGRESS_KEY, records).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_absent_keys_load_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).await.unwrap();
        assert!(store.load_enrollments().await.unwrap().is_empty());
        assert!(store.load_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_state_survives_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).await.unwrap();

        let enrolled: BTreeSet<String> = ["c1".to_string()].into();
        let mut records = BTreeMap::new();
        let mut record = CourseRecord::new(Utc::now());
        record.mark_completed("l1");
        records.insert("c1".to_string(), record);

        store.save_enrollments(&enrolled).await.unwrap();
        store.save_records(&records).await.unwrap();

        let reopened = JsonFileStore::new(dir.path()).await.unwrap();
        assert_eq!(reopened.load_enrollments().await.unwrap(), enrolled);
        assert_eq!(reopened.load_records().await.unwrap(), records);
    }

    #[tokio::test]
    async fn test_corrupt_key_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).await.unwrap();
        tokio::fs::write(dir.path().join("courseProgress.json"), b"{broken")
            .await
            .unwrap();
        let err = store.load_records().await.unwrap_err();
        assert!(matches!(err, crate::StorageError::Json(_)));
    }

    #[tokio::test]
    async fn test_wire_layout_matches_contract() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).await.unwrap();

        let mut records = BTreeMap::new();
        records.insert(
            "c1".to_string(),
            CourseRecord::new("2024-05-01T12:00:00Z".parse().unwrap()),
        );
        store.save_records(&records).await.unwrap();

        let raw = tokio::fs::read_to_string(dir.path().join("courseProgress.json"))
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = value.get("c1").unwrap();
        assert!(record.get("completed").unwrap().is_array());
        assert!(record.get("lastAccessed").unwrap().is_string());
    }
}
