//! # Outbound Ports
//!
//! Traits for external dependencies (the remote address provider).

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{AddressSuggestion, Coordinates, TransportError};

/// Remote address provider - outbound port.
///
/// Production: `HttpAddressGateway` in location-runtime
/// (`POST /address/search?q=`, `GET /address/reverse?lat=&lon=`).
#[async_trait]
pub trait AddressSearchGateway: Send + Sync {
    /// Search addresses; results in provider relevance order.
    async fn search_addresses(&self, query: &str)
        -> Result<Vec<AddressSuggestion>, TransportError>;

    /// Reverse geocode; `Ok(None)` when no street-level match exists.
    async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<AddressSuggestion>, TransportError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock address provider for testing.
#[derive(Default)]
pub struct MockSearchGateway {
    /// Results returned for every search.
    pub results: Vec<AddressSuggestion>,
    /// Result returned for every reverse geocode.
    pub reverse: Option<AddressSuggestion>,
    /// Should return errors?
    pub should_fail: bool,
    /// Queries received, in order.
    pub queries: Mutex<Vec<String>>,
    /// Coordinates received by reverse geocode, in order.
    pub reverse_lookups: Mutex<Vec<Coordinates>>,
}

impl MockSearchGateway {
    /// Gateway returning `results` for every search.
    pub fn with_results(results: Vec<AddressSuggestion>) -> Self {
        Self {
            results,
            ..Default::default()
        }
    }

    /// Gateway that fails every call.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    /// Number of search calls that reached the gateway.
    pub fn search_calls(&self) -> usize {
        self.queries.lock().len()
    }
}

#[async_trait]
impl AddressSearchGateway for MockSearchGateway {
    async fn search_addresses(
        &self,
        query: &str,
    ) -> Result<Vec<AddressSuggestion>, TransportError> {
        self.queries.lock().push(query.to_string());
        if self.should_fail {
            return Err(TransportError::ServerError { status: 500 });
        }
        Ok(self.results.clone())
    }

    async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<AddressSuggestion>, TransportError> {
        self.reverse_lookups.lock().push(coordinates);
        if self.should_fail {
            return Err(TransportError::Timeout { timeout_ms: 5000 });
        }
        Ok(self.reverse.clone())
    }
}
