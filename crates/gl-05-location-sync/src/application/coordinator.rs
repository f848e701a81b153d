//! # Location Sync Coordinator
//!
//! Single writer of [`LocationState`]. Every transition runs under one fair
//! async mutex that also owns the cache, so the published state and the
//! cached copy move together. Readers get clones over a `watch` channel.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use gl_03_zone_matching::{format_delivery_fee, ZoneMatcherApi};
use gl_04_location_cache::{CachedLocation, LocationCacheApi};
use shared_types::{DeliveryAddress, ZoneInfo};

use crate::config::SyncConfig;
use crate::domain::{
    pick_account_address, AuthState, LocationState, ReconciliationOutcome, SyncError,
};
use crate::metrics;
use crate::ports::{AccountAddressGateway, LocationSyncApi};

struct Inner<C> {
    cache: C,
    initialized: bool,
}

/// Location Sync Coordinator - implements [`LocationSyncApi`].
pub struct LocationSyncCoordinator<Z, C, A>
where
    Z: ZoneMatcherApi,
    C: LocationCacheApi,
    A: AccountAddressGateway,
{
    config: SyncConfig,
    zones: Arc<Z>,
    accounts: Arc<A>,
    inner: Mutex<Inner<C>>,
    state: watch::Sender<LocationState>,
    /// Set before the account fetch; cleared on sign-out.
    reconciled: AtomicBool,
    /// Bumped on every sign-in and sign-out.
    auth_epoch: AtomicU64,
}

impl<Z, C, A> LocationSyncCoordinator<Z, C, A>
where
    Z: ZoneMatcherApi,
    C: LocationCacheApi,
    A: AccountAddressGateway,
{
    /// Create a coordinator in the `Uninitialized` state.
    pub fn new(config: SyncConfig, zones: Arc<Z>, cache: C, accounts: Arc<A>) -> Self {
        let (state, _) = watch::channel(LocationState::uninitialized());
        Self {
            config,
            zones,
            accounts,
            inner: Mutex::new(Inner {
                cache,
                initialized: false,
            }),
            state,
            reconciled: AtomicBool::new(false),
            auth_epoch: AtomicU64::new(0),
        }
    }

    /// What the cache currently holds.
    pub async fn cached_location(&self) -> CachedLocation {
        self.inner.lock().await.cache.load()
    }

    fn current(&self) -> LocationState {
        self.state.borrow().clone()
    }

    fn publish(&self, next: LocationState) -> LocationState {
        debug_assert!(next.is_consistent(), "inconsistent state: {:?}", next);
        debug!(
            mode = next.mode().label(),
            zone = next.zone().map(|z| z.zone_id.as_str()).unwrap_or("none"),
            "[gl-05] Location state published"
        );
        metrics::record_transition(next.mode().label());
        self.state.send_replace(next.clone());
        next
    }

    fn is_current_epoch(&self, epoch: u64) -> bool {
        self.auth_epoch.load(Ordering::SeqCst) == epoch
    }

    fn persist(cache: &mut C, address: &DeliveryAddress, zone: Option<&ZoneInfo>) {
        if let Err(e) = cache.save(address, zone) {
            warn!("[gl-05] Failed to cache location: {}", e);
        }
    }

    fn resolved(address: DeliveryAddress, zone: Option<ZoneInfo>) -> LocationState {
        match zone {
            Some(zone) => LocationState::in_zone(address, zone),
            None => LocationState::browse_only(address),
        }
    }

    /// Resolve and commit `address`. `epoch` ties the call to a sign-in
    /// session; a session that ended meanwhile rolls the change back.
    async fn apply_address(
        &self,
        inner: &mut Inner<C>,
        address: DeliveryAddress,
        epoch: Option<u64>,
    ) -> Result<LocationState, SyncError> {
        inner.initialized = true;
        let previous = self.current();
        self.publish(LocationState::resolving(address.clone(), None));

        let result = self.zones.resolve(address.coordinates()).await;

        if epoch.is_some_and(|e| !self.is_current_epoch(e)) {
            self.publish(previous);
            return Err(SyncError::Superseded);
        }

        match result {
            Ok(zone) => {
                Self::persist(&mut inner.cache, &address, zone.as_ref());
                info!(
                    "[gl-05] Delivery address set to '{}' ({})",
                    address.one_line(),
                    zone.as_ref().map(|z| z.name.as_str()).unwrap_or("out of zone")
                );
                Ok(self.publish(Self::resolved(address, zone)))
            }
            Err(e) => {
                warn!(
                    "[gl-05] Zone lookup for '{}' failed, keeping previous location: {}",
                    address.one_line(),
                    e
                );
                if previous.is_resolved() {
                    self.publish(previous);
                } else {
                    self.publish(LocationState::error(Some(address), None));
                }
                Err(SyncError::ZoneUnknown(e))
            }
        }
    }

    /// Set the one-shot guard and open a new auth epoch after `seen`.
    ///
    /// A sign-out since `seen` makes the sign-in stale; the guard is then
    /// released again so the next sign-in reconciles.
    fn arm_reconciliation(&self, seen: u64) -> Result<u64, ReconciliationOutcome> {
        if self.reconciled.swap(true, Ordering::SeqCst) {
            return Err(ReconciliationOutcome::AlreadyReconciled);
        }
        let epoch = seen + 1;
        match self
            .auth_epoch
            .compare_exchange(seen, epoch, Ordering::SeqCst, Ordering::SeqCst)
        {
            Ok(_) => Ok(epoch),
            Err(_) => {
                self.reconciled.store(false, Ordering::SeqCst);
                Err(ReconciliationOutcome::Stale)
            }
        }
    }

    async fn reconcile(&self, epoch: u64) -> ReconciliationOutcome {
        let saved = match self.accounts.fetch_saved_addresses().await {
            Ok(saved) => saved,
            Err(e) => {
                warn!("[gl-05] Could not fetch account addresses: {}", e);
                return ReconciliationOutcome::Failed(e.to_string());
            }
        };

        if !self.is_current_epoch(epoch) {
            return ReconciliationOutcome::Stale;
        }

        let Some(address) = pick_account_address(&saved).cloned() else {
            info!("[gl-05] Account has no saved addresses; keeping guest location");
            return ReconciliationOutcome::NoSavedAddresses;
        };

        let mut inner = self.inner.lock().await;
        if !self.is_current_epoch(epoch) {
            return ReconciliationOutcome::Stale;
        }

        match self.apply_address(&mut inner, address.clone(), Some(epoch)).await {
            Ok(_) => ReconciliationOutcome::Applied(address),
            Err(SyncError::Superseded) => ReconciliationOutcome::Stale,
            Err(e) => ReconciliationOutcome::Failed(e.to_string()),
        }
    }
}

#[async_trait]
impl<Z, C, A> LocationSyncApi for LocationSyncCoordinator<Z, C, A>
where
    Z: ZoneMatcherApi + 'static,
    C: LocationCacheApi + 'static,
    A: AccountAddressGateway + 'static,
{
    async fn initialize(&self) -> LocationState {
        let mut inner = self.inner.lock().await;
        if inner.initialized {
            return self.current();
        }
        inner.initialized = true;

        let cached = inner.cache.load();
        let Some(address) = cached.address else {
            debug!("[gl-05] No cached location");
            return self.current();
        };

        self.publish(LocationState::resolving(address.clone(), cached.zone.clone()));

        match self.zones.resolve(address.coordinates()).await {
            Ok(zone) => {
                Self::persist(&mut inner.cache, &address, zone.as_ref());
                self.publish(Self::resolved(address, zone))
            }
            Err(e) => {
                warn!("[gl-05] Startup zone lookup failed: {}", e);
                self.publish(LocationState::error(Some(address), cached.zone))
            }
        }
    }

    async fn set_delivery_address(
        &self,
        address: DeliveryAddress,
    ) -> Result<LocationState, SyncError> {
        let mut inner = self.inner.lock().await;
        self.apply_address(&mut inner, address, None).await
    }

    async fn refresh_zone(&self) -> Result<LocationState, SyncError> {
        let mut inner = self.inner.lock().await;
        let current = self.current();
        let Some(address) = current.address().cloned() else {
            return Err(SyncError::NoAddress);
        };

        match self.zones.resolve(address.coordinates()).await {
            Ok(zone) => {
                Self::persist(&mut inner.cache, &address, zone.as_ref());
                Ok(self.publish(Self::resolved(address, zone)))
            }
            Err(e) => {
                warn!("[gl-05] Zone refresh failed, keeping last promise: {}", e);
                if !current.is_resolved() {
                    self.publish(LocationState::error(Some(address), current.zone().cloned()));
                }
                Err(SyncError::ZoneUnknown(e))
            }
        }
    }

    async fn on_auth_changed(&self, auth: AuthState) -> ReconciliationOutcome {
        let outcome = match auth {
            AuthState::SignedOut => {
                self.auth_epoch.fetch_add(1, Ordering::SeqCst);
                self.reconciled.store(false, Ordering::SeqCst);
                self.clear_location().await;
                ReconciliationOutcome::SignedOut
            }
            AuthState::SignedIn { user_id } => {
                if !self.config.reconcile_on_sign_in {
                    return ReconciliationOutcome::Disabled;
                }
                let seen = self.auth_epoch.load(Ordering::SeqCst);
                match self.arm_reconciliation(seen) {
                    Ok(epoch) => self.reconcile(epoch).await,
                    Err(ReconciliationOutcome::AlreadyReconciled) => {
                        debug!("[gl-05] Already reconciled for {}", user_id);
                        return ReconciliationOutcome::AlreadyReconciled;
                    }
                    Err(outcome) => outcome,
                }
            }
        };

        info!(
            outcome = outcome.label(),
            "[gl-05] Auth change handled"
        );
        metrics::record_reconciliation(outcome.label());
        outcome
    }

    async fn save_address_to_account(
        &self,
        address: DeliveryAddress,
    ) -> Result<LocationState, SyncError> {
        let saved = self
            .accounts
            .save_address(&address)
            .await
            .map_err(|e| {
                warn!("[gl-05] Could not save address to account: {}", e);
                SyncError::AccountUnavailable(e)
            })?;
        info!(
            "[gl-05] Saved '{}' to account as {}",
            saved.one_line(),
            saved.remote_id.as_deref().unwrap_or("?")
        );
        self.set_delivery_address(saved).await
    }

    async fn enter_browse_mode(&self) -> LocationState {
        let mut inner = self.inner.lock().await;
        inner.initialized = true;
        let current = self.current();
        self.publish(LocationState::browsing(current.address().cloned()))
    }

    async fn clear_location(&self) -> LocationState {
        let mut inner = self.inner.lock().await;
        inner.initialized = true;
        if let Err(e) = inner.cache.clear() {
            warn!("[gl-05] Failed to clear cached location: {}", e);
        }
        self.publish(LocationState::uninitialized())
    }

    fn snapshot(&self) -> LocationState {
        self.current()
    }

    fn subscribe(&self) -> watch::Receiver<LocationState> {
        self.state.subscribe()
    }

    fn delivery_time_label(&self) -> Option<String> {
        self.current()
            .zone()
            .map(|zone| self.zones.delivery_time_label(zone))
    }

    fn delivery_fee_label(&self, subtotal: Option<f64>) -> Option<String> {
        self.current()
            .zone()
            .map(|zone| format_delivery_fee(zone, subtotal))
    }
}
