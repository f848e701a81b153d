//! Shared fixtures: the whole location stack over mock gateways.

use std::sync::Arc;

use gl_01_address_search::{AddressSearchConfig, AddressSearchService, MockSearchGateway};
use gl_02_address_validation::{
    AddressDraft, AddressValidationService, MockStandardizationGateway, ValidationConfig,
};
use gl_03_zone_matching::{MockZoneGateway, ZoneMatcher, ZoneMatchingConfig};
use gl_04_location_cache::{InMemoryKVStore, LocationCache, LocationCacheApi, LocationCacheConfig};
use gl_05_location_sync::{LocationSyncCoordinator, MockAccountGateway, SyncConfig};
use gl_06_address_entry::{
    AddressEntryConfig, AddressEntryFlow, CoordinatorSink, MockGeolocation,
};
use shared_types::{AddressSuggestion, Coordinates, DeliveryAddress, ZoneInfo};

pub const MARKET_ST: Coordinates = Coordinates::new(37.7793, -122.4193);
pub const FERRY_BUILDING: Coordinates = Coordinates::new(37.7955, -122.3937);

pub fn downtown() -> ZoneInfo {
    ZoneInfo {
        zone_id: "sf-downtown".into(),
        name: "SF Downtown".into(),
        delivery_time_minutes: 30,
        delivery_fee: 3.99,
        free_delivery_threshold: 35.0,
        minimum_order: 10.0,
    }
}

pub fn market_street() -> DeliveryAddress {
    DeliveryAddress::new("123 Market St", "San Francisco", "CA", "94102", MARKET_ST)
}

pub fn ferry_building() -> DeliveryAddress {
    DeliveryAddress::new("1 Ferry Building", "San Francisco", "CA", "94111", FERRY_BUILDING)
}

/// Search result as the provider sends it, with the full state name.
pub fn market_street_suggestion() -> AddressSuggestion {
    AddressSuggestion {
        id: "sugg-1".into(),
        street: "123 Market St".into(),
        city: "San Francisco".into(),
        state: "California".into(),
        postal_code: "94102".into(),
        latitude: MARKET_ST.latitude,
        longitude: MARKET_ST.longitude,
    }
}

pub fn ferry_building_draft() -> AddressDraft {
    AddressDraft {
        street: "1 Ferry Building".into(),
        city: "San Francisco".into(),
        state: "CA".into(),
        postal_code: "94111".into(),
        ..Default::default()
    }
}

pub type Coordinator<C> =
    LocationSyncCoordinator<ZoneMatcher<MockZoneGateway>, C, MockAccountGateway>;

pub type Flow<C> = AddressEntryFlow<
    AddressSearchService<MockSearchGateway>,
    AddressValidationService<MockStandardizationGateway>,
    MockGeolocation,
    CoordinatorSink<Coordinator<C>>,
>;

/// Every subsystem wired together, with handles on the mock gateways.
pub struct Stack<C: LocationCacheApi + 'static> {
    pub flow: Flow<C>,
    pub coordinator: Arc<Coordinator<C>>,
    pub search: Arc<MockSearchGateway>,
    pub validation: Arc<MockStandardizationGateway>,
    pub zones: Arc<MockZoneGateway>,
    pub accounts: Arc<MockAccountGateway>,
}

/// Builder for [`Stack`].
pub struct StackBuilder {
    pub search: MockSearchGateway,
    pub validation: MockStandardizationGateway,
    pub geolocation: MockGeolocation,
    pub zones: MockZoneGateway,
    pub accounts: MockAccountGateway,
}

impl Default for StackBuilder {
    fn default() -> Self {
        Self {
            search: MockSearchGateway::with_results(vec![market_street_suggestion()]),
            validation: MockStandardizationGateway::confirming(
                MARKET_ST.latitude,
                MARKET_ST.longitude,
            ),
            geolocation: MockGeolocation::at(MARKET_ST),
            zones: MockZoneGateway::serving(downtown()),
            accounts: MockAccountGateway::default(),
        }
    }
}

impl StackBuilder {
    pub fn zones(mut self, zones: MockZoneGateway) -> Self {
        self.zones = zones;
        self
    }

    pub fn validation(mut self, validation: MockStandardizationGateway) -> Self {
        self.validation = validation;
        self
    }

    pub fn accounts(mut self, accounts: MockAccountGateway) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn build_in_memory(self) -> Stack<LocationCache<InMemoryKVStore>> {
        self.build(LocationCache::new(
            LocationCacheConfig::for_testing(),
            InMemoryKVStore::new(),
        ))
    }

    pub fn build<C: LocationCacheApi + 'static>(self, cache: C) -> Stack<C> {
        let search = Arc::new(self.search);
        let validation = Arc::new(self.validation);
        let zones = Arc::new(self.zones);
        let accounts = Arc::new(self.accounts);

        let coordinator = Arc::new(LocationSyncCoordinator::new(
            SyncConfig::for_testing(),
            Arc::new(ZoneMatcher::new(
                ZoneMatchingConfig::for_testing(),
                zones.clone(),
            )),
            cache,
            accounts.clone(),
        ));

        let flow = AddressEntryFlow::new(
            AddressEntryConfig::for_testing(),
            Arc::new(AddressSearchService::new(
                AddressSearchConfig::for_testing(),
                search.clone(),
            )),
            Arc::new(AddressValidationService::new(
                ValidationConfig::default(),
                validation.clone(),
            )),
            Arc::new(self.geolocation),
            Arc::new(CoordinatorSink::new(coordinator.clone())),
        );

        Stack {
            flow,
            coordinator,
            search,
            validation,
            zones,
            accounts,
        }
    }
}
