//! # Storage Adapters

pub mod file;
pub mod lock;
pub mod memory;

pub use file::FileKVStore;
pub use lock::StoreLock;
pub use memory::InMemoryKVStore;
