//! # Outbound Ports
//!
//! Traits for external dependencies (the remote standardization provider).

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::TransportError;

use crate::domain::{
    Confidence, StandardizationError, StandardizationRequest, StandardizationResponse,
    StandardizedAddress,
};

/// Remote address standardization - outbound port.
///
/// Production: `HttpValidationGateway` in location-runtime
/// (`POST /address/validate`).
#[async_trait]
pub trait StandardizationGateway: Send + Sync {
    /// Standardize and score an address.
    async fn standardize(
        &self,
        request: &StandardizationRequest,
    ) -> Result<StandardizationResponse, StandardizationError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock standardization provider for testing.
pub struct MockStandardizationGateway {
    /// Canned answer.
    pub result: Result<StandardizationResponse, StandardizationError>,
    /// Requests received, in order.
    pub requests: Mutex<Vec<StandardizationRequest>>,
}

impl MockStandardizationGateway {
    /// Provider that always answers `response`.
    pub fn answering(response: StandardizationResponse) -> Self {
        Self {
            result: Ok(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Provider that confirms every address with high confidence at the
    /// given location, echoing the request back as the standardized form.
    pub fn confirming(latitude: f64, longitude: f64) -> Self {
        Self::answering(StandardizationResponse {
            is_valid: true,
            confidence: Confidence::High,
            standardized: Some(StandardizedAddress {
                street: String::new(),
                secondary: None,
                city: String::new(),
                state: String::new(),
                postal_code: String::new(),
                latitude: Some(latitude),
                longitude: Some(longitude),
            }),
            warnings: Vec::new(),
        })
    }

    /// Provider that fails every call.
    pub fn failing(error: StandardizationError) -> Self {
        Self {
            result: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Provider that cannot be reached.
    pub fn unreachable() -> Self {
        Self::failing(StandardizationError::Transport(TransportError::Timeout {
            timeout_ms: 5000,
        }))
    }

    /// Number of calls that reached the provider.
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl StandardizationGateway for MockStandardizationGateway {
    async fn standardize(
        &self,
        request: &StandardizationRequest,
    ) -> Result<StandardizationResponse, StandardizationError> {
        self.requests.lock().push(request.clone());
        let mut result = self.result.clone();
        // An empty canned street means "echo the request".
        if let Ok(response) = result.as_mut() {
            if let Some(standardized) = response.standardized.as_mut() {
                if standardized.street.is_empty() {
                    standardized.street = request.street.clone();
                    standardized.secondary = request.secondary.clone();
                    standardized.city = request.city.clone();
                    standardized.state = request.state.clone();
                    standardized.postal_code = request.zip.clone();
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> StandardizationRequest {
        StandardizationRequest {
            street: "123 Market St".into(),
            secondary: None,
            city: "San Francisco".into(),
            state: "CA".into(),
            zip: "94102".into(),
        }
    }

    #[tokio::test]
    async fn test_confirming_mock_echoes_request() {
        let gateway = MockStandardizationGateway::confirming(37.7793, -122.4193);
        let response = gateway.standardize(&request()).await.unwrap();
        let standardized = response.standardized.unwrap();
        assert_eq!(standardized.street, "123 Market St");
        assert_eq!(standardized.postal_code, "94102");
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_mock() {
        let gateway = MockStandardizationGateway::unreachable();
        assert!(matches!(
            gateway.standardize(&request()).await,
            Err(StandardizationError::Transport(_))
        ));
    }
}
