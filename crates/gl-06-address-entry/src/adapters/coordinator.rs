//! Delivers confirmed addresses to the location coordinator.

use async_trait::async_trait;
use shared_types::DeliveryAddress;
use std::sync::Arc;

use gl_05_location_sync::{LocationSyncApi, SyncError};

use crate::ports::DeliveryAddressSink;

/// [`DeliveryAddressSink`] backed by a [`LocationSyncApi`].
pub struct CoordinatorSink<S: LocationSyncApi> {
    coordinator: Arc<S>,
}

impl<S: LocationSyncApi> CoordinatorSink<S> {
    /// Wrap a coordinator.
    pub fn new(coordinator: Arc<S>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl<S: LocationSyncApi + 'static> DeliveryAddressSink for CoordinatorSink<S> {
    async fn deliver_to(&self, address: DeliveryAddress) -> Result<(), SyncError> {
        self.coordinator.set_delivery_address(address).await.map(|_| ())
    }
}
