//! # Outbound Ports
//!
//! Traits for external dependencies (the service area lookup).

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{Coordinates, TransportError, ZoneInfo};
use std::time::Duration;

use crate::domain::ZoneLookupResponse;

/// Service area lookup - outbound port.
///
/// Production: `HttpZoneGateway` in location-runtime
/// (`GET /zones/check?lat=&lon=`; 404 maps to [`ZoneLookupResponse::outside`]).
#[async_trait]
pub trait ZoneLookupGateway: Send + Sync {
    /// Ask which zone contains `coordinates`.
    async fn check_zone(&self, coordinates: Coordinates)
        -> Result<ZoneLookupResponse, TransportError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock service area lookup for testing.
///
/// Answers are looked up per location first, then fall back to the default
/// answer. Everything is mutable so tests can change the world between calls.
#[derive(Default)]
pub struct MockZoneGateway {
    /// Answer for locations without a specific entry; `None` = out of zone.
    pub default_zone: Mutex<Option<ZoneInfo>>,
    /// Per-location answers.
    pub zones: Mutex<Vec<(Coordinates, Option<ZoneInfo>)>>,
    /// When set, every call fails with this error.
    pub failure: Mutex<Option<TransportError>>,
    /// When set, every call answers in-service-area without zone details.
    pub malformed: Mutex<bool>,
    /// Simulated latency.
    pub delay: Mutex<Option<Duration>>,
    /// Coordinates received, in order.
    pub calls: Mutex<Vec<Coordinates>>,
}

impl MockZoneGateway {
    /// Every location is inside `zone`.
    pub fn serving(zone: ZoneInfo) -> Self {
        let gateway = Self::default();
        *gateway.default_zone.lock() = Some(zone);
        gateway
    }

    /// Every location is out of zone.
    pub fn out_of_zone() -> Self {
        Self::default()
    }

    /// Every call fails with HTTP 500.
    pub fn failing() -> Self {
        let gateway = Self::default();
        gateway.fail_with(Some(TransportError::ServerError { status: 500 }));
        gateway
    }

    /// Answer `zone` for `coordinates`.
    pub fn set_zone_at(&self, coordinates: Coordinates, zone: Option<ZoneInfo>) {
        let mut zones = self.zones.lock();
        zones.retain(|(c, _)| !c.same_location(&coordinates));
        zones.push((coordinates, zone));
    }

    /// Change the fallback answer.
    pub fn set_default_zone(&self, zone: Option<ZoneInfo>) {
        *self.default_zone.lock() = zone;
    }

    /// Start or stop failing.
    pub fn fail_with(&self, error: Option<TransportError>) {
        *self.failure.lock() = error;
    }

    /// Start or stop answering with a malformed payload.
    pub fn set_malformed(&self, malformed: bool) {
        *self.malformed.lock() = malformed;
    }

    /// Delay every answer.
    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock() = delay;
    }

    /// Number of calls that reached the lookup.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl ZoneLookupGateway for MockZoneGateway {
    async fn check_zone(
        &self,
        coordinates: Coordinates,
    ) -> Result<ZoneLookupResponse, TransportError> {
        self.calls.lock().push(coordinates);

        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.failure.lock().clone() {
            return Err(error);
        }
        if *self.malformed.lock() {
            return Ok(ZoneLookupResponse {
                in_service_area: true,
                zone: None,
            });
        }

        let specific = self
            .zones
            .lock()
            .iter()
            .find(|(c, _)| c.same_location(&coordinates))
            .map(|(_, zone)| zone.clone());
        let zone = specific.unwrap_or_else(|| self.default_zone.lock().clone());

        Ok(match zone {
            Some(zone) => ZoneLookupResponse::inside(zone),
            None => ZoneLookupResponse::outside(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(id: &str) -> ZoneInfo {
        ZoneInfo {
            zone_id: id.into(),
            name: id.into(),
            delivery_time_minutes: 30,
            delivery_fee: 3.99,
            free_delivery_threshold: 35.0,
            minimum_order: 10.0,
        }
    }

    #[tokio::test]
    async fn test_specific_location_overrides_default() {
        let gateway = MockZoneGateway::serving(zone("default"));
        let oakland = Coordinates::new(37.8044, -122.2712);
        gateway.set_zone_at(oakland, None);

        let here = gateway.check_zone(oakland).await.unwrap();
        let elsewhere = gateway.check_zone(Coordinates::new(0.0, 0.0)).await.unwrap();

        assert_eq!(here, ZoneLookupResponse::outside());
        assert_eq!(elsewhere, ZoneLookupResponse::inside(zone("default")));
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failure_can_be_cleared() {
        let gateway = MockZoneGateway::failing();
        assert!(gateway.check_zone(Coordinates::new(0.0, 0.0)).await.is_err());
        gateway.fail_with(None);
        assert!(gateway.check_zone(Coordinates::new(0.0, 0.0)).await.is_ok());
    }
}
