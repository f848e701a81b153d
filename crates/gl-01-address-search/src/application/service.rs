//! # Address Search Service
//!
//! Stateless wrapper over the remote address provider.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use shared_types::{AddressSuggestion, Coordinates};

use crate::config::AddressSearchConfig;
use crate::domain::SearchQuery;
use crate::ports::{AddressSearchGateway, AddressSuggestionSource};

/// Address Search Service - implements [`AddressSuggestionSource`].
pub struct AddressSearchService<G: AddressSearchGateway> {
    /// Configuration.
    config: AddressSearchConfig,
    /// Remote address provider.
    gateway: Arc<G>,
}

impl<G: AddressSearchGateway> AddressSearchService<G> {
    /// Create a new address search service.
    pub fn new(config: AddressSearchConfig, gateway: Arc<G>) -> Self {
        Self { config, gateway }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AddressSearchConfig {
        &self.config
    }

    fn ingest(&self, raw: Vec<AddressSuggestion>) -> Vec<AddressSuggestion> {
        let mut suggestions: Vec<AddressSuggestion> =
            raw.into_iter().map(AddressSuggestion::normalized).collect();
        if self.config.max_results > 0 {
            suggestions.truncate(self.config.max_results);
        }
        suggestions
    }
}

#[async_trait]
impl<G: AddressSearchGateway + 'static> AddressSuggestionSource for AddressSearchService<G> {
    async fn search(&self, query: &str) -> Vec<AddressSuggestion> {
        let Some(query) = SearchQuery::parse(query, self.config.min_query_len) else {
            return Vec::new();
        };

        match self.gateway.search_addresses(query.as_str()).await {
            Ok(raw) => {
                let suggestions = self.ingest(raw);
                debug!(
                    "[gl-01] Search '{}' returned {} suggestions",
                    query.as_str(),
                    suggestions.len()
                );
                suggestions
            }
            Err(e) => {
                warn!("[gl-01] Address search failed ({}): {}", e.kind(), e);
                Vec::new()
            }
        }
    }

    async fn reverse_geocode(&self, coordinates: Coordinates) -> Option<AddressSuggestion> {
        if !coordinates.is_valid() {
            warn!(
                "[gl-01] Skipping reverse geocode of invalid coordinates ({}, {})",
                coordinates.latitude, coordinates.longitude
            );
            return None;
        }

        match self.gateway.reverse_geocode(coordinates).await {
            Ok(Some(suggestion)) => Some(suggestion.normalized()),
            Ok(None) => {
                debug!(
                    "[gl-01] No street-level match at ({}, {})",
                    coordinates.latitude, coordinates.longitude
                );
                None
            }
            Err(e) => {
                warn!("[gl-01] Reverse geocode failed ({}): {}", e.kind(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockSearchGateway;

    fn suggestion(id: &str, street: &str, state: &str) -> AddressSuggestion {
        AddressSuggestion {
            id: id.to_string(),
            street: street.to_string(),
            city: "San Francisco".to_string(),
            state: state.to_string(),
            postal_code: "94102".to_string(),
            latitude: 37.7793,
            longitude: -122.4193,
        }
    }

    fn create_test_service(
        gateway: MockSearchGateway,
    ) -> (
        AddressSearchService<MockSearchGateway>,
        Arc<MockSearchGateway>,
    ) {
        let gateway = Arc::new(gateway);
        let service =
            AddressSearchService::new(AddressSearchConfig::for_testing(), gateway.clone());
        (service, gateway)
    }

    #[tokio::test]
    async fn test_short_query_makes_no_call() {
        let (service, gateway) = create_test_service(MockSearchGateway::with_results(vec![
            suggestion("s-1", "123 Market St", "CA"),
        ]));

        for query in ["", "1", "12", "  12  "] {
            assert!(service.search(query).await.is_empty());
        }
        assert_eq!(gateway.search_calls(), 0);
    }

    #[tokio::test]
    async fn test_search_preserves_order_and_normalizes_state() {
        let (service, gateway) = create_test_service(MockSearchGateway::with_results(vec![
            suggestion("s-2", "125 Market St", "California"),
            suggestion("s-1", "123 Market St", "CA"),
        ]));

        let results = service.search("  123 Mar ").await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "s-2");
        assert_eq!(results[0].state, "CA");
        assert_eq!(results[1].id, "s-1");
        assert_eq!(gateway.queries.lock()[0], "123 Mar");
    }

    #[tokio::test]
    async fn test_search_failure_returns_empty() {
        let (service, gateway) = create_test_service(MockSearchGateway::failing());
        assert!(service.search("123 Market").await.is_empty());
        assert_eq!(gateway.search_calls(), 1);
    }

    #[tokio::test]
    async fn test_max_results_truncates() {
        let gateway = Arc::new(MockSearchGateway::with_results(vec![
            suggestion("s-1", "1 Market St", "CA"),
            suggestion("s-2", "2 Market St", "CA"),
            suggestion("s-3", "3 Market St", "CA"),
        ]));
        let config = AddressSearchConfig {
            max_results: 2,
            ..AddressSearchConfig::default()
        };
        let service = AddressSearchService::new(config, gateway);

        let results = service.search("Market").await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].id, "s-2");
    }

    #[tokio::test]
    async fn test_reverse_geocode_hit() {
        let (service, _) = create_test_service(MockSearchGateway {
            reverse: Some(suggestion("r-1", "123 Market St", "california")),
            ..Default::default()
        });

        let hit = service
            .reverse_geocode(Coordinates::new(37.7793, -122.4193))
            .await
            .unwrap();
        assert_eq!(hit.state, "CA");
    }

    #[tokio::test]
    async fn test_reverse_geocode_miss_and_failure_are_none() {
        let (service, _) = create_test_service(MockSearchGateway::default());
        assert!(service
            .reverse_geocode(Coordinates::new(37.7793, -122.4193))
            .await
            .is_none());

        let (service, _) = create_test_service(MockSearchGateway::failing());
        assert!(service
            .reverse_geocode(Coordinates::new(37.7793, -122.4193))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_reverse_geocode_rejects_invalid_coordinates() {
        let (service, gateway) = create_test_service(MockSearchGateway::default());
        assert!(service
            .reverse_geocode(Coordinates::new(120.0, 0.0))
            .await
            .is_none());
        assert!(gateway.reverse_lookups.lock().is_empty());
    }
}
