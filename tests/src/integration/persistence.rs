//! # Restart Persistence
//!
//! The location survives a restart through the file store (04) and is
//! re-resolved by the coordinator (05) on startup.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::Path;

    use gl_03_zone_matching::MockZoneGateway;
    use gl_04_location_cache::{FileKVStore, LocationCache, LocationCacheConfig};
    use gl_05_location_sync::{LocationMode, LocationSyncApi};
    use gl_06_address_entry::AddressEntryApi;

    use crate::integration::fixtures::*;

    fn file_cache(path: &Path) -> LocationCache<FileKVStore> {
        LocationCache::new(
            LocationCacheConfig::for_testing(),
            FileKVStore::open(path).unwrap(),
        )
    }

    async fn confirm_ferry_building(path: &Path) {
        let stack = StackBuilder::default().build(file_cache(path));
        stack.flow.enter_manually();
        stack.flow.edit_details(ferry_building_draft()).unwrap();
        assert!(stack.flow.submit_details().await.unwrap().is_valid());
        stack.flow.confirm().await.unwrap();
        assert_eq!(stack.coordinator.snapshot().mode(), LocationMode::InZone);
    }

    #[tokio::test]
    async fn test_restart_restores_address_and_zone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("location.json");
        confirm_ferry_building(&path).await;

        let restarted = StackBuilder::default().build(file_cache(&path));
        assert_eq!(
            restarted.coordinator.snapshot().mode(),
            LocationMode::Uninitialized
        );

        let state = restarted.coordinator.initialize().await;
        assert_eq!(state.mode(), LocationMode::InZone);
        assert_eq!(state.address().unwrap().street, "1 Ferry Building");
        assert_eq!(state.zone(), Some(&downtown()));
        assert_eq!(restarted.zones.call_count(), 1);
    }

    #[tokio::test]
    async fn test_restart_during_zone_outage_keeps_cached_promise_but_closes_cart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("location.json");
        confirm_ferry_building(&path).await;

        let restarted = StackBuilder::default()
            .zones(MockZoneGateway::failing())
            .build(file_cache(&path));

        let state = restarted.coordinator.initialize().await;
        assert_eq!(state.mode(), LocationMode::Error);
        assert_eq!(state.address().unwrap().street, "1 Ferry Building");
        assert_eq!(state.zone(), Some(&downtown()));
        assert!(!restarted.coordinator.can_add_to_cart());

        // The cached copy is not discarded by the failed lookup.
        let cached = restarted.coordinator.cached_location().await;
        assert_eq!(cached.zone, Some(downtown()));
    }

    #[tokio::test]
    async fn test_store_from_older_schema_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("location.json");
        let config = LocationCacheConfig::for_testing();
        let old_entry = serde_json::json!({
            "version": 0,
            "saved_at": 1_700_000_000u64,
            "payload": { "street": "1 Ferry Building" }
        });
        let mut raw = BTreeMap::new();
        raw.insert(config.address_key(), old_entry.to_string());
        std::fs::write(&path, serde_json::to_string(&raw).unwrap()).unwrap();

        let stack = StackBuilder::default().build(file_cache(&path));
        let state = stack.coordinator.initialize().await;

        assert_eq!(state.mode(), LocationMode::Uninitialized);
        assert_eq!(stack.zones.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unreadable_store_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("location.json");
        std::fs::write(&path, "not json at all").unwrap();

        let stack = StackBuilder::default().build(file_cache(&path));
        let state = stack.coordinator.initialize().await;
        assert_eq!(state.mode(), LocationMode::Uninitialized);

        // The next confirmed address replaces the garbage.
        stack.coordinator.set_delivery_address(market_street()).await.unwrap();
        drop(stack);
        let restarted = StackBuilder::default().build(file_cache(&path));
        assert_eq!(
            restarted.coordinator.initialize().await.address(),
            Some(&market_street())
        );
    }

    #[tokio::test]
    async fn test_cleared_location_stays_cleared_after_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("location.json");
        confirm_ferry_building(&path).await;

        {
            let stack = StackBuilder::default().build(file_cache(&path));
            stack.coordinator.initialize().await;
            stack.coordinator.clear_location().await;
        }

        let restarted = StackBuilder::default().build(file_cache(&path));
        let state = restarted.coordinator.initialize().await;
        assert_eq!(state.mode(), LocationMode::Uninitialized);
        assert!(state.address().is_none());
    }
}
