//! # Location Cache Service
//!
//! Versioned envelopes over a [`KeyValueStore`].

use serde::de::DeserializeOwned;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

use shared_types::{DeliveryAddress, ZoneInfo};

use crate::config::LocationCacheConfig;
use crate::domain::{CacheEnvelope, CacheError, CachedLocation, ZonePayload};
use crate::ports::{BatchOperation, KeyValueStore, LocationCacheApi};

/// Location Cache - implements [`LocationCacheApi`].
pub struct LocationCache<S: KeyValueStore> {
    config: LocationCacheConfig,
    store: S,
}

impl<S: KeyValueStore> LocationCache<S> {
    /// Create a cache over `store`.
    pub fn new(config: LocationCacheConfig, store: S) -> Self {
        Self { config, store }
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Underlying store, mutably.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Read and unwrap one envelope. Anything unusable reads as `None`.
    fn read_envelope<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("[gl-04] Cache read of '{}' failed: {}", key, e);
                return None;
            }
        };

        let envelope: CacheEnvelope<T> = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("[gl-04] Discarding unreadable cache entry '{}': {}", key, e);
                return None;
            }
        };

        if !envelope.is_current() {
            debug!(
                "[gl-04] Discarding cache entry '{}' with schema version {}",
                key, envelope.version
            );
            return None;
        }

        Some(envelope.payload)
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl<S: KeyValueStore> LocationCacheApi for LocationCache<S> {
    fn load(&self) -> CachedLocation {
        let Some(address) = self.read_envelope::<DeliveryAddress>(&self.config.address_key())
        else {
            return CachedLocation::empty();
        };

        let zone = self
            .read_envelope::<ZonePayload>(&self.config.zone_key())
            .and_then(|payload| {
                if payload.resolved_for.same_location(&address.coordinates()) {
                    Some(payload.zone)
                } else {
                    debug!("[gl-04] Cached zone belongs to a different address; ignoring");
                    None
                }
            });

        CachedLocation {
            address: Some(address),
            zone,
        }
    }

    fn save(
        &mut self,
        address: &DeliveryAddress,
        zone: Option<&ZoneInfo>,
    ) -> Result<(), CacheError> {
        let saved_at = now_secs();
        let address_json = serde_json::to_string(&CacheEnvelope::new(address, saved_at))?;

        let zone_op = match zone {
            Some(zone) => {
                let payload = ZonePayload {
                    zone: zone.clone(),
                    resolved_for: address.coordinates(),
                };
                BatchOperation::put(
                    self.config.zone_key(),
                    serde_json::to_string(&CacheEnvelope::new(payload, saved_at))?,
                )
            }
            None => BatchOperation::delete(self.config.zone_key()),
        };

        self.store.atomic_batch_write(vec![
            BatchOperation::put(self.config.address_key(), address_json),
            zone_op,
        ])?;

        debug!(
            "[gl-04] Cached '{}' (zone: {})",
            address.one_line(),
            zone.map(|z| z.zone_id.as_str()).unwrap_or("none")
        );
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CacheError> {
        self.store.atomic_batch_write(vec![
            BatchOperation::delete(self.config.address_key()),
            BatchOperation::delete(self.config.zone_key()),
        ])?;
        debug!("[gl-04] Cache cleared");
        Ok(())
    }
}
