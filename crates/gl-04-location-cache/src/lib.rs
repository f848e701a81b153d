//! # GL-04 Location Cache
//!
//! Durable, device-local copy of the last delivery address and the zone it
//! resolved to.
//!
//! **Subsystem ID:** 04
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Storage Layout
//!
//! | Key | Value |
//! |-----|-------|
//! | `{namespace}.address` | `CacheEnvelope<DeliveryAddress>` |
//! | `{namespace}.zone` | `CacheEnvelope<ZonePayload>` |
//!
//! Every value is a JSON envelope `{version, saved_at, payload}`. Reads never
//! fail: a schema mismatch or a damaged value loads as an empty cache.
//! Writes go through a single atomic batch so address and zone never drift.
//!
//! ## Module Structure
//!
//! ```text
//! gl-04-location-cache/
//! ├── domain/          # CachedLocation, CacheEnvelope, CacheError
//! ├── ports/           # LocationCacheApi (inbound) + KeyValueStore (outbound)
//! ├── application/     # LocationCache
//! ├── adapters/        # InMemoryKVStore, FileKVStore (+ fs2 lock)
//! └── config.rs        # LocationCacheConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{FileKVStore, InMemoryKVStore, StoreLock};
pub use application::LocationCache;
pub use config::LocationCacheConfig;
pub use domain::{
    CacheEnvelope, CacheError, CachedLocation, StoreError, ZonePayload, CACHE_SCHEMA_VERSION,
};
pub use ports::{BatchOperation, KeyValueStore, LocationCacheApi};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
