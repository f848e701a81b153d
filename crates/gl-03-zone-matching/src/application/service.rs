//! # Zone Matcher
//!
//! Validates coordinates, calls the service area lookup and interprets the
//! answer.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use shared_types::{Coordinates, ZoneInfo};

use crate::config::ZoneMatchingConfig;
use crate::domain::{format_delivery_window, ZoneError};
use crate::metrics;
use crate::ports::{ZoneLookupGateway, ZoneMatcherApi};

/// Zone Matcher - implements [`ZoneMatcherApi`].
pub struct ZoneMatcher<G: ZoneLookupGateway> {
    config: ZoneMatchingConfig,
    gateway: Arc<G>,
}

impl<G: ZoneLookupGateway> ZoneMatcher<G> {
    /// Create a new zone matcher.
    pub fn new(config: ZoneMatchingConfig, gateway: Arc<G>) -> Self {
        Self { config, gateway }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ZoneMatchingConfig {
        &self.config
    }
}

#[async_trait]
impl<G: ZoneLookupGateway + 'static> ZoneMatcherApi for ZoneMatcher<G> {
    async fn resolve(&self, coordinates: Coordinates) -> Result<Option<ZoneInfo>, ZoneError> {
        if !coordinates.is_valid() {
            metrics::record_lookup("invalid_coordinates", 0.0);
            return Err(ZoneError::InvalidCoordinates {
                latitude: coordinates.latitude,
                longitude: coordinates.longitude,
            });
        }

        let started = Instant::now();
        let result = self
            .gateway
            .check_zone(coordinates)
            .await
            .map_err(ZoneError::from)
            .and_then(|response| response.interpret());
        let elapsed = started.elapsed().as_secs_f64();

        match &result {
            Ok(Some(zone)) => {
                debug!(
                    "[gl-03] ({}, {}) is in zone {}",
                    coordinates.latitude, coordinates.longitude, zone.zone_id
                );
                metrics::record_lookup("in_zone", elapsed);
            }
            Ok(None) => {
                debug!(
                    "[gl-03] ({}, {}) is outside every zone",
                    coordinates.latitude, coordinates.longitude
                );
                metrics::record_lookup("out_of_zone", elapsed);
            }
            Err(e) => {
                warn!("[gl-03] Zone lookup failed ({}): {}", e.kind(), e);
                metrics::record_lookup(e.kind(), elapsed);
            }
        }

        result
    }

    fn delivery_time_label(&self, zone: &ZoneInfo) -> String {
        format_delivery_window(zone.delivery_time_minutes, self.config.window_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockZoneGateway;
    use shared_types::TransportError;

    fn downtown() -> ZoneInfo {
        ZoneInfo {
            zone_id: "sf-downtown".into(),
            name: "SF Downtown".into(),
            delivery_time_minutes: 30,
            delivery_fee: 3.99,
            free_delivery_threshold: 35.0,
            minimum_order: 10.0,
        }
    }

    fn market_street() -> Coordinates {
        Coordinates::new(37.7793, -122.4193)
    }

    fn create_test_matcher(
        gateway: MockZoneGateway,
    ) -> (ZoneMatcher<MockZoneGateway>, Arc<MockZoneGateway>) {
        let gateway = Arc::new(gateway);
        let matcher = ZoneMatcher::new(ZoneMatchingConfig::for_testing(), gateway.clone());
        (matcher, gateway)
    }

    #[tokio::test]
    async fn test_in_zone() {
        let (matcher, _) = create_test_matcher(MockZoneGateway::serving(downtown()));
        let zone = matcher.resolve(market_street()).await.unwrap().unwrap();
        assert_eq!(zone.zone_id, "sf-downtown");
        assert_eq!(matcher.delivery_time_label(&zone), "30 min - 90 min");
    }

    #[tokio::test]
    async fn test_out_of_zone_is_none_not_error() {
        let (matcher, _) = create_test_matcher(MockZoneGateway::out_of_zone());
        assert_eq!(matcher.resolve(market_street()).await, Ok(None));
    }

    #[tokio::test]
    async fn test_server_error_is_unknown() {
        let (matcher, _) = create_test_matcher(MockZoneGateway::failing());
        assert_eq!(
            matcher.resolve(market_street()).await,
            Err(ZoneError::Transport(TransportError::ServerError { status: 500 }))
        );
    }

    #[tokio::test]
    async fn test_malformed_answer_is_error() {
        let (matcher, gateway) = create_test_matcher(MockZoneGateway::serving(downtown()));
        gateway.set_malformed(true);
        assert!(matches!(
            matcher.resolve(market_street()).await,
            Err(ZoneError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_coordinates_skip_lookup() {
        let (matcher, gateway) = create_test_matcher(MockZoneGateway::serving(downtown()));
        let result = matcher.resolve(Coordinates::new(91.0, 0.0)).await;
        assert!(matches!(result, Err(ZoneError::InvalidCoordinates { .. })));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_no_memoization() {
        let (matcher, gateway) = create_test_matcher(MockZoneGateway::serving(downtown()));
        matcher.resolve(market_street()).await.unwrap();
        matcher.resolve(market_street()).await.unwrap();
        assert_eq!(gateway.call_count(), 2);
    }
}
