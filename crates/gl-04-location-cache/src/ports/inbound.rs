//! # Inbound Ports
//!
//! API trait defining what the Location Cache can do.

use shared_types::{DeliveryAddress, ZoneInfo};

use crate::domain::{CacheError, CachedLocation};

/// Location cache - inbound port.
pub trait LocationCacheApi: Send + Sync {
    /// Read the cached location. Never fails; anything unreadable is absent.
    fn load(&self) -> CachedLocation;

    /// Store `address` and `zone` in one atomic write.
    ///
    /// `zone = None` removes any previously cached zone in the same write.
    fn save(&mut self, address: &DeliveryAddress, zone: Option<&ZoneInfo>)
        -> Result<(), CacheError>;

    /// Remove everything.
    fn clear(&mut self) -> Result<(), CacheError>;
}
