//! In-memory key-value store for tests.

use std::collections::HashMap;

use crate::domain::StoreError;
use crate::ports::{BatchOperation, KeyValueStore};

/// In-memory key-value store.
///
/// `fail_writes` makes every write fail without touching the data, to
/// exercise storage-failure paths.
#[derive(Debug, Default, Clone)]
pub struct InMemoryKVStore {
    data: HashMap<String, String>,
    /// Fail every write.
    pub fail_writes: bool,
    writes: usize,
}

impl InMemoryKVStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful write calls (put, delete or batch).
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Io {
                message: "simulated write failure".into(),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for InMemoryKVStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_writable()?;
        self.data.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.check_writable()?;
        self.data.remove(key);
        self.writes += 1;
        Ok(())
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), StoreError> {
        self.check_writable()?;
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    self.data.insert(key, value);
                }
                BatchOperation::Delete { key } => {
                    self.data.remove(&key);
                }
            }
        }
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_applies_all() {
        let mut store = InMemoryKVStore::new();
        store.put("a", "1").unwrap();
        store
            .atomic_batch_write(vec![BatchOperation::put("b", "2"), BatchOperation::delete("a")])
            .unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
        assert!(store.exists("b").unwrap());
    }

    #[test]
    fn test_failing_store_keeps_data() {
        let mut store = InMemoryKVStore::new();
        store.put("a", "1").unwrap();
        store.fail_writes = true;
        assert!(store.atomic_batch_write(vec![BatchOperation::delete("a")]).is_err());
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.write_count(), 1);
    }
}
