//! Core PlanStore implementation

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

/// Unique identifier for a stored plan
pub type PlanId = String;

/// A persisted plan document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecord {
    /// Unique record ID
    pub id: PlanId,
    /// The goal the plan was generated from
    pub goal: String,
    /// Final plan text as returned by the pipeline
    pub plan: String,
    /// Creation timestamp (unix ms)
    pub created_at: i64,
}

/// The plan document store
pub struct PlanStore {
    /// Base path for storage
    base_path: PathBuf,
    /// Serializes appends to the record log
    write_lock: Mutex<()>,
}

impl PlanStore {
    /// Open or create a plan store at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).context("Failed to create store directory")?;
        debug!(?base_path, "Opened plan store");
        Ok(Self {
            base_path,
            write_lock: Mutex::new(()),
        })
    }

    fn records_path(&self) -> PathBuf {
        self.base_path.join(crate::PLANS_FILE)
    }

    /// Persist a generated plan, returning the stored record
    pub fn insert(&self, goal: impl Into<String>, plan: impl Into<String>) -> Result<PlanRecord> {
        let record = PlanRecord {
            id: Uuid::now_v7().to_string(),
            goal: goal.into(),
            plan: plan.into(),
            created_at: chrono::Utc::now().timestamp_millis(),
        };

        let line = serde_json::to_string(&record).context("Failed to serialize plan record")?;

        let guard = self
            .write_lock
            .lock()
            .map_err(|_| eyre::eyre!("Plan store write lock poisoned"))?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.records_path())
            .context("Failed to open plan record log")?;
        writeln!(file, "{}", line).context("Failed to append plan record")?;
        drop(guard);

        info!(id = %record.id, "Stored plan");
        Ok(record)
    }

    /// Fetch a single record by ID
    pub fn get(&self, id: &str) -> Result<Option<PlanRecord>> {
        Ok(self.read_all()?.into_iter().find(|r| r.id == id))
    }

    /// List all records in insertion order
    pub fn list(&self) -> Result<Vec<PlanRecord>> {
        self.read_all()
    }

    fn read_all(&self) -> Result<Vec<PlanRecord>> {
        let path = self.records_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&path).context("Failed to open plan record log")?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line.context("Failed to read plan record line")?;
            if line.trim().is_empty() {
                continue;
            }
            let record: PlanRecord = serde_json::from_str(&line).context("Corrupt plan record")?;
            records.push(record);
        }

        debug!(count = records.len(), "Read plan records");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, PlanStore) {
        let dir = TempDir::new().unwrap();
        let store = PlanStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_insert_and_get() {
        let (_dir, store) = store();

        let record = store.insert("Build a website in 2 weeks", "1. Design\n2. Build").unwrap();
        assert!(!record.id.is_empty());

        let fetched = store.get(&record.id).unwrap().unwrap();
        assert_eq!(fetched.goal, "Build a website in 2 weeks");
        assert_eq!(fetched.plan, "1. Design\n2. Build");
        assert_eq!(fetched.id, record.id);
    }

    #[test]
    fn test_get_unknown_id() {
        let (_dir, store) = store();
        assert!(store.get("nonexistent").unwrap().is_none());
    }

    #[test]
    fn test_list_insertion_order() {
        let (_dir, store) = store();

        let first = store.insert("goal one", "plan one").unwrap();
        let second = store.insert("goal two", "plan two").unwrap();

        let records = store.list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, first.id);
        assert_eq!(records[1].id, second.id);
    }

    #[test]
    fn test_list_empty_store() {
        let (_dir, store) = store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_reopen_preserves_records() {
        let dir = TempDir::new().unwrap();
        let id = {
            let store = PlanStore::open(dir.path()).unwrap();
            store.insert("goal", "plan").unwrap().id
        };

        let reopened = PlanStore::open(dir.path()).unwrap();
        assert!(reopened.get(&id).unwrap().is_some());
    }
}
