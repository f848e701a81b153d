//! # Location Container
//!
//! Holds the wired subsystem instances.
//!
//! ## Construction Order
//!
//! ```text
//! ApiClient ─┬─▶ search (01) ─────────────┐
//!            ├─▶ validation (02) ─────────┤
//!            ├─▶ zones (03) ──┐           ├─▶ entry flow (06)
//!            └─▶ accounts ────┼─▶ sync (05)┘
//! FileKVStore ─▶ cache (04) ──┘
//! ```

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use gl_01_address_search::AddressSearchService;
use gl_02_address_validation::AddressValidationService;
use gl_03_zone_matching::ZoneMatcher;
use gl_04_location_cache::{FileKVStore, LocationCache, StoreError};
use gl_05_location_sync::{
    AuthState, LocationState, LocationSyncApi, LocationSyncCoordinator, ReconciliationOutcome,
};
use gl_06_address_entry::{AddressEntryFlow, CoordinatorSink};
use shared_types::TransportError;

use crate::adapters::{
    ApiClient, FixedGeolocation, HttpAccountGateway, HttpAddressGateway, HttpValidationGateway,
    HttpZoneGateway,
};
use crate::config::{ConfigError, RuntimeConfig};

/// Address search over HTTP.
pub type SearchService = AddressSearchService<HttpAddressGateway>;
/// Address validation over HTTP.
pub type ValidationService = AddressValidationService<HttpValidationGateway>;
/// Zone matching over HTTP.
pub type ZoneService = ZoneMatcher<HttpZoneGateway>;
/// File-backed location cache.
pub type FileLocationCache = LocationCache<FileKVStore>;
/// Production coordinator.
pub type Coordinator = LocationSyncCoordinator<ZoneService, FileLocationCache, HttpAccountGateway>;
/// Production entry flow.
pub type EntryFlow = AddressEntryFlow<
    SearchService,
    ValidationService,
    FixedGeolocation,
    CoordinatorSink<Coordinator>,
>;

/// Startup failures.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Configuration unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP client could not be built.
    #[error("HTTP client: {0}")]
    Http(#[from] TransportError),

    /// Cache file could not be opened (locked by another process, unreadable).
    #[error("Location cache: {0}")]
    Store(#[from] StoreError),
}

/// All subsystems, wired.
pub struct LocationContainer {
    /// Effective configuration.
    pub config: RuntimeConfig,
    /// Address search (01).
    pub search: Arc<SearchService>,
    /// Location coordinator (05); owns the cache (04).
    pub coordinator: Arc<Coordinator>,
    /// Address entry flow (06).
    pub entry: EntryFlow,
    api: Arc<ApiClient>,
}

impl LocationContainer {
    /// Wire everything from `config`.
    pub fn build(config: RuntimeConfig) -> Result<Self, RuntimeError> {
        config.validate()?;
        let api = Arc::new(ApiClient::new(&config.api)?);

        let search = Arc::new(AddressSearchService::new(
            config.search.clone(),
            Arc::new(HttpAddressGateway::new(api.clone())),
        ));
        let validation = Arc::new(AddressValidationService::new(
            config.validation.clone(),
            Arc::new(HttpValidationGateway::new(api.clone())),
        ));
        let zones = Arc::new(ZoneMatcher::new(
            config.zones.clone(),
            Arc::new(HttpZoneGateway::new(api.clone())),
        ));

        let store = FileKVStore::open(&config.storage.cache_path)?;
        let cache = LocationCache::new(config.cache.clone(), store);

        let coordinator = Arc::new(LocationSyncCoordinator::new(
            config.sync.clone(),
            zones,
            cache,
            Arc::new(HttpAccountGateway::new(api.clone())),
        ));

        let entry = AddressEntryFlow::new(
            config.entry.clone(),
            search.clone(),
            validation,
            Arc::new(FixedGeolocation::new(config.device_position())),
            Arc::new(CoordinatorSink::new(coordinator.clone())),
        );

        info!(
            "[runtime] Wired location subsystems (api: {}, cache: {})",
            config.api.base_url,
            config.storage.cache_path.display()
        );

        Ok(Self {
            config,
            search,
            coordinator,
            entry,
            api,
        })
    }

    /// Restore the cached location, then reconcile with the account when
    /// credentials are configured.
    pub async fn start(&self) -> LocationState {
        let state = self.coordinator.initialize().await;
        if !self.api.has_credentials() {
            return state;
        }

        let user = self
            .config
            .api
            .user_id
            .clone()
            .unwrap_or_else(|| "account".to_string());
        match self
            .coordinator
            .on_auth_changed(AuthState::signed_in(user))
            .await
        {
            ReconciliationOutcome::Failed(reason) => {
                warn!("[runtime] Account reconciliation failed: {}", reason);
            }
            outcome => info!("[runtime] Account reconciliation: {}", outcome.label()),
        }
        self.coordinator.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gl_05_location_sync::LocationMode;

    #[tokio::test]
    async fn test_build_and_start_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let container =
            LocationContainer::build(RuntimeConfig::for_testing(dir.path().join("loc.json")))
                .unwrap();

        let state = container.start().await;
        assert_eq!(state.mode(), LocationMode::Uninitialized);
    }

    #[test]
    fn test_second_container_on_same_cache_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loc.json");
        let _first = LocationContainer::build(RuntimeConfig::for_testing(&path)).unwrap();

        assert!(matches!(
            LocationContainer::build(RuntimeConfig::for_testing(&path)),
            Err(RuntimeError::Store(_))
        ));
    }

    #[test]
    fn test_invalid_config_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = RuntimeConfig::for_testing(dir.path().join("loc.json"));
        config.api.timeout_ms = 0;

        assert!(matches!(
            LocationContainer::build(config),
            Err(RuntimeError::Config(_))
        ));
    }
}
