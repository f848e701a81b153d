//! # File Key-Value Store
//!
//! One JSON object per store file. Every write rewrites the whole file via a
//! temp file and rename, so a crash leaves either the old or the new map.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::lock::StoreLock;
use crate::domain::StoreError;
use crate::ports::{BatchOperation, KeyValueStore};

/// File-backed key-value store.
#[derive(Debug)]
pub struct FileKVStore {
    path: PathBuf,
    data: BTreeMap<String, String>,
    _lock: StoreLock,
}

impl FileKVStore {
    /// Open (or create) the store at `path`.
    ///
    /// Holds an exclusive lock on `<path>.lock` until dropped. A file that is
    /// not a JSON object of strings is treated as empty and replaced on the
    /// next write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let lock = StoreLock::acquire(&sibling(&path, "lock"))?;
        let data = Self::read_map(&path)?;
        debug!(
            "[gl-04] Opened store {} ({} keys)",
            path.display(),
            data.len()
        );

        Ok(Self {
            path,
            data,
            _lock: lock,
        })
    }

    /// Store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(map) => Ok(map),
            Err(e) => {
                warn!(
                    "[gl-04] Ignoring unreadable store {}: {}",
                    path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn persist(&self, data: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec_pretty(data).map_err(|e| StoreError::Corruption {
            message: e.to_string(),
        })?;
        let tmp = sibling(&self.path, "tmp");
        {
            let mut file = File::create(&tmp)?;
            file.write_all(&encoded)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn commit(&mut self, next: BTreeMap<String, String>) -> Result<(), StoreError> {
        self.persist(&next)?;
        self.data = next;
        Ok(())
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

impl KeyValueStore for FileKVStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.atomic_batch_write(vec![BatchOperation::put(key, value)])
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.atomic_batch_write(vec![BatchOperation::delete(key)])
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), StoreError> {
        let mut next = self.data.clone();
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    next.insert(key, value);
                }
                BatchOperation::Delete { key } => {
                    next.remove(&key);
                }
            }
        }
        self.commit(next)
    }
}
