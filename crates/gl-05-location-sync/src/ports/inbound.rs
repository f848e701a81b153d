//! # Inbound Ports
//!
//! API trait defining what Location Sync can do.

use async_trait::async_trait;
use shared_types::DeliveryAddress;
use tokio::sync::watch;

use crate::domain::{AuthState, LocationState, ReconciliationOutcome, SyncError};

/// Location sync coordinator - inbound port.
///
/// The implementation is the only writer of [`LocationState`]; everything
/// here either mutates it through a serialized transition or reads a
/// snapshot.
#[async_trait]
pub trait LocationSyncApi: Send + Sync {
    /// Load the cached location and resolve its zone. Runs once; later
    /// calls return the current snapshot.
    async fn initialize(&self) -> LocationState;

    /// Make `address` the delivery address, resolving its zone.
    ///
    /// On zone lookup failure the previous state is kept and
    /// [`SyncError::ZoneUnknown`] is returned.
    async fn set_delivery_address(
        &self,
        address: DeliveryAddress,
    ) -> Result<LocationState, SyncError>;

    /// Re-resolve the zone of the current address.
    async fn refresh_zone(&self) -> Result<LocationState, SyncError>;

    /// React to a sign-in or sign-out.
    async fn on_auth_changed(&self, auth: AuthState) -> ReconciliationOutcome;

    /// Persist `address` to the signed-in account and make it current.
    async fn save_address_to_account(
        &self,
        address: DeliveryAddress,
    ) -> Result<LocationState, SyncError>;

    /// Browse without delivery; the cached address is left alone.
    async fn enter_browse_mode(&self) -> LocationState;

    /// Forget the location entirely.
    async fn clear_location(&self) -> LocationState;

    /// Current state.
    fn snapshot(&self) -> LocationState;

    /// Receive every published state.
    fn subscribe(&self) -> watch::Receiver<LocationState>;

    /// Whether items may be added to the cart.
    fn can_add_to_cart(&self) -> bool {
        self.snapshot().can_add_to_cart()
    }

    /// "30 min - 90 min" for the current zone.
    fn delivery_time_label(&self) -> Option<String>;

    /// "FREE" or "$3.99" for the current zone.
    fn delivery_fee_label(&self, subtotal: Option<f64>) -> Option<String>;
}
