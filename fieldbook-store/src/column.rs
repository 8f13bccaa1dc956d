//! File-backed column primitives
//!
//! One directory per column, one YAML document per record. The record key
//! doubles as the file stem, so keys are validated against filesystem rules
//! before any I/O. Writes go through a temp-file-then-rename so no reader
//! ever observes a partial document.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use ulid::Ulid;

use crate::error::{Result, StoreError};

/// A record persistable in a [`Column`].
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The unique key; doubles as the record's file stem.
    fn key(&self) -> &str;
}

/// One directory of YAML documents, one per record.
///
/// All operations are safe to call concurrently; the conditional writes
/// (`insert_if_absent`, `update_if_present`, `update`) hold the column's
/// write lock across their existence check and write.
pub struct Column<T: Record> {
    dir: PathBuf,
    write_lock: Mutex<()>,
    _record: PhantomData<T>,
}

impl<T: Record> Column<T> {
    /// Create a column over the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    /// The directory this column persists into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Point lookup by key. Fails with [`StoreError::NotFound`] if absent.
    pub async fn get(&self, key: &str) -> Result<T> {
        self.try_get(key).await?.ok_or_else(|| StoreError::NotFound {
            key: key.to_string(),
        })
    }

    /// Point lookup by key, `None` if absent.
    pub async fn try_get(&self, key: &str) -> Result<Option<T>> {
        let path = self.record_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        match self.load(&path).await {
            Ok(record) => Ok(Some(record)),
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Bulk lookup. Keys with no record are silently omitted from the result.
    pub async fn multi_get(&self, keys: &[&str]) -> Result<Vec<T>> {
        let mut records = Vec::new();
        for key in keys {
            if let Some(record) = self.try_get(key).await? {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// All records, unfiltered. Entries that fail to load are skipped with a
    /// warning so one corrupt file cannot poison the whole scan.
    pub async fn scan(&self) -> Result<Vec<T>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            match self.load(&path).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(?path, %e, "skipping unreadable record");
                }
            }
        }
        Ok(records)
    }

    /// Compare-and-insert: persist the record only if no record with its key
    /// exists. Fails with [`StoreError::Conflict`] otherwise, leaving the
    /// existing record untouched.
    pub async fn insert_if_absent(&self, record: &T) -> Result<()> {
        let path = self.record_path(record.key())?;
        let _lock = self.write_lock.lock().await;

        if path.exists() {
            return Err(StoreError::Conflict {
                key: record.key().to_string(),
            });
        }

        self.persist(&path, record).await?;
        debug!(key = record.key(), "inserted record");
        Ok(())
    }

    /// Check-exists-then-update: load the record, apply `mutate`, persist.
    /// Fails with [`StoreError::NotFound`] if absent; never creates a record.
    pub async fn update_if_present<F>(&self, key: &str, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut T) + Send,
    {
        let path = self.record_path(key)?;
        let _lock = self.write_lock.lock().await;

        if !path.exists() {
            return Err(StoreError::NotFound {
                key: key.to_string(),
            });
        }

        let mut record = self.load(&path).await?;
        mutate(&mut record);
        self.persist(&path, &record).await?;
        debug!(key, "updated record");
        Ok(())
    }

    /// Unconditional update: apply `mutate` if the record exists and report
    /// whether it did. An absent key is a no-op.
    pub async fn update<F>(&self, key: &str, mutate: F) -> Result<bool>
    where
        F: FnOnce(&mut T) + Send,
    {
        let path = self.record_path(key)?;
        let _lock = self.write_lock.lock().await;

        if !path.exists() {
            return Ok(false);
        }

        let mut record = self.load(&path).await?;
        mutate(&mut record);
        self.persist(&path, &record).await?;
        debug!(key, "updated record");
        Ok(true)
    }

    /// Unconditional upsert. Last write wins.
    pub async fn put(&self, record: &T) -> Result<()> {
        let path = self.record_path(record.key())?;
        let _lock = self.write_lock.lock().await;

        self.persist(&path, record).await?;
        debug!(key = record.key(), "put record");
        Ok(())
    }

    /// Unconditional delete. Reports whether a record was removed.
    pub async fn remove(&self, key: &str) -> Result<bool> {
        let path = self.record_path(key)?;
        let _lock = self.write_lock.lock().await;

        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path).await?;
        debug!(key, "removed record");
        Ok(true)
    }

    fn record_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.yaml")))
    }

    async fn load(&self, path: &Path) -> Result<T> {
        let content = fs::read_to_string(path).await?;
        Ok(serde_yaml::from_str(&content)?)
    }

    async fn persist(&self, path: &Path, record: &T) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;
        let yaml = serde_yaml::to_string(record)?;
        atomic_write(path, yaml.as_bytes()).await
    }
}

/// Validate a key against the rules for file-backed columns.
///
/// Keys double as file stems: non-empty, no path separators, no NUL, and no
/// leading dot.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey("key cannot be empty".to_string()));
    }
    if key.starts_with('.') {
        return Err(StoreError::InvalidKey(format!(
            "key cannot start with '.': {key}"
        )));
    }
    if key.contains(['/', '\\', '\0']) {
        return Err(StoreError::InvalidKey(format!(
            "key contains a path separator or NUL: {key}"
        )));
    }
    Ok(())
}

/// Write to a temp file then rename for atomic persistence.
async fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "no parent dir"))?;
    let tmp = dir.join(format!(".tmp_{}", Ulid::new()));
    fs::write(&tmp, data).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}
