//! # Outbound Ports
//!
//! Storage the cache requires the host to provide.

use crate::domain::StoreError;

/// Abstract interface for key-value storage.
///
/// Production: [`FileKVStore`](crate::adapters::FileKVStore)
/// Testing: [`InMemoryKVStore`](crate::adapters::InMemoryKVStore)
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Put a single key-value pair.
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    /// Execute an atomic batch write.
    ///
    /// Either all operations in the batch are applied, or none are.
    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), StoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Batch operation for atomic writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOperation {
    /// Put a key-value pair.
    Put {
        /// Key
        key: String,
        /// Value
        value: String,
    },
    /// Delete a key.
    Delete {
        /// Key
        key: String,
    },
}

impl BatchOperation {
    /// Create a Put operation.
    pub fn put(key: impl Into<String>, value: impl Into<String>) -> Self {
        BatchOperation::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a Delete operation.
    pub fn delete(key: impl Into<String>) -> Self {
        BatchOperation::Delete { key: key.into() }
    }

    /// Key the operation touches.
    pub fn key(&self) -> &str {
        match self {
            BatchOperation::Put { key, .. } | BatchOperation::Delete { key } => key,
        }
    }
}
