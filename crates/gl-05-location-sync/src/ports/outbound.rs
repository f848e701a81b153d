//! # Outbound Ports
//!
//! Traits for external dependencies (the account address service).

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{DeliveryAddress, TransportError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::domain::AccountAddress;

/// Account address service - outbound port.
///
/// Production: `HttpAccountGateway` in location-runtime
/// (`GET /account/addresses`, `POST /account/addresses`, bearer auth).
#[async_trait]
pub trait AccountAddressGateway: Send + Sync {
    /// Saved addresses of the signed-in user.
    async fn fetch_saved_addresses(&self) -> Result<Vec<AccountAddress>, TransportError>;

    /// Persist `address`; returns it with its `remote_id` set.
    async fn save_address(&self, address: &DeliveryAddress)
        -> Result<DeliveryAddress, TransportError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock account address service for testing.
#[derive(Default)]
pub struct MockAccountGateway {
    /// Saved addresses.
    pub addresses: Mutex<Vec<AccountAddress>>,
    /// When set, every call fails with this error.
    pub failure: Mutex<Option<TransportError>>,
    /// Simulated latency of the fetch.
    pub delay: Mutex<Option<Duration>>,
    fetches: AtomicUsize,
}

impl MockAccountGateway {
    /// Account holding `addresses`.
    pub fn with_addresses(addresses: Vec<AccountAddress>) -> Self {
        let gateway = Self::default();
        *gateway.addresses.lock() = addresses;
        gateway
    }

    /// Account service that fails every call.
    pub fn failing(error: TransportError) -> Self {
        let gateway = Self::default();
        *gateway.failure.lock() = Some(error);
        gateway
    }

    /// Delay every fetch.
    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock() = delay;
    }

    /// Number of fetches received.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountAddressGateway for MockAccountGateway {
    async fn fetch_saved_addresses(&self) -> Result<Vec<AccountAddress>, TransportError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(error) = self.failure.lock().clone() {
            return Err(error);
        }
        Ok(self.addresses.lock().clone())
    }

    async fn save_address(
        &self,
        address: &DeliveryAddress,
    ) -> Result<DeliveryAddress, TransportError> {
        if let Some(error) = self.failure.lock().clone() {
            return Err(error);
        }
        let mut addresses = self.addresses.lock();
        let saved = address
            .clone()
            .with_remote_id(format!("addr-{}", addresses.len() + 1));
        let is_default = addresses.is_empty();
        addresses.push(AccountAddress {
            address: saved.clone(),
            is_default,
        });
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Coordinates;

    #[tokio::test]
    async fn test_save_assigns_remote_id() {
        let gateway = MockAccountGateway::default();
        let address = DeliveryAddress::new(
            "123 Market St",
            "San Francisco",
            "CA",
            "94102",
            Coordinates::new(37.7793, -122.4193),
        );

        let saved = gateway.save_address(&address).await.unwrap();

        assert!(saved.is_account_owned());
        let stored = gateway.fetch_saved_addresses().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].is_default);
        assert_eq!(gateway.fetch_count(), 1);
    }
}
