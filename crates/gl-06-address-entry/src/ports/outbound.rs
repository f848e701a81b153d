//! # Outbound Ports
//!
//! Device geolocation and the place a confirmed address goes.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use shared_types::{Coordinates, DeliveryAddress};

use gl_05_location_sync::SyncError;

use crate::domain::GeolocationError;

/// Answer to a location permission request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationPermission {
    /// Access allowed.
    Granted,
    /// Access refused.
    Denied,
}

/// Device geolocation - outbound port.
///
/// Production: `FixedGeolocation` in location-runtime.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Ask for (or report existing) location permission.
    async fn request_permission(&self) -> LocationPermission;

    /// Current device position.
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// Receiver of confirmed addresses - outbound port.
///
/// Production: [`CoordinatorSink`](crate::adapters::CoordinatorSink).
#[async_trait]
pub trait DeliveryAddressSink: Send + Sync {
    /// Make `address` the delivery address.
    async fn deliver_to(&self, address: DeliveryAddress) -> Result<(), SyncError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock geolocation for testing.
pub struct MockGeolocation {
    /// Permission answer.
    pub permission: LocationPermission,
    /// Position answer.
    pub position: Result<Coordinates, GeolocationError>,
}

impl MockGeolocation {
    /// Permission granted, device at `coordinates`.
    pub fn at(coordinates: Coordinates) -> Self {
        Self {
            permission: LocationPermission::Granted,
            position: Ok(coordinates),
        }
    }

    /// Permission refused.
    pub fn denied() -> Self {
        Self {
            permission: LocationPermission::Denied,
            position: Err(GeolocationError::Unavailable("permission denied".into())),
        }
    }

    /// Permission granted but no fix.
    pub fn no_fix() -> Self {
        Self {
            permission: LocationPermission::Granted,
            position: Err(GeolocationError::Timeout),
        }
    }
}

#[async_trait]
impl GeolocationProvider for MockGeolocation {
    async fn request_permission(&self) -> LocationPermission {
        self.permission
    }

    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        self.position.clone()
    }
}

/// Mock address sink for testing.
#[derive(Default)]
pub struct MockAddressSink {
    /// When set, every delivery fails with this error.
    pub failure: Mutex<Option<SyncError>>,
    /// Addresses received, in order.
    pub received: Mutex<Vec<DeliveryAddress>>,
}

impl MockAddressSink {
    /// Start or stop failing.
    pub fn fail_with(&self, error: Option<SyncError>) {
        *self.failure.lock() = error;
    }
}

#[async_trait]
impl DeliveryAddressSink for MockAddressSink {
    async fn deliver_to(&self, address: DeliveryAddress) -> Result<(), SyncError> {
        if let Some(error) = self.failure.lock().clone() {
            return Err(error);
        }
        self.received.lock().push(address);
        Ok(())
    }
}
