//! # Cache Entities

use serde::{Deserialize, Serialize};
use shared_types::{Coordinates, DeliveryAddress, ZoneInfo};

/// Current on-disk schema. Bump when `DeliveryAddress` or `ZonePayload`
/// change shape; older entries are then ignored on load.
pub const CACHE_SCHEMA_VERSION: u32 = 1;

/// Versioned wrapper around every stored value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CacheEnvelope<T> {
    /// Schema version the payload was written with.
    pub version: u32,
    /// Unix seconds at write time.
    pub saved_at: u64,
    /// The value.
    pub payload: T,
}

impl<T> CacheEnvelope<T> {
    /// Wrap `payload` with the current schema version.
    pub fn new(payload: T, saved_at: u64) -> Self {
        Self {
            version: CACHE_SCHEMA_VERSION,
            saved_at,
            payload,
        }
    }

    /// Whether the envelope was written by this schema.
    pub fn is_current(&self) -> bool {
        self.version == CACHE_SCHEMA_VERSION
    }
}

/// Cached zone and the location it was resolved for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZonePayload {
    /// The zone.
    pub zone: ZoneInfo,
    /// Coordinates of the address the zone belongs to.
    pub resolved_for: Coordinates,
}

/// What the cache holds. A zone never appears without its address.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CachedLocation {
    /// Last delivery address.
    pub address: Option<DeliveryAddress>,
    /// Zone last resolved for that address.
    pub zone: Option<ZoneInfo>,
}

impl CachedLocation {
    /// Nothing cached.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.address.is_none()
    }
}
