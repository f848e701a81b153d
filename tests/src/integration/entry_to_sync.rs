//! # Entry Flow → Location Sync
//!
//! A confirmed address goes through search (01), validation (02), the entry
//! flow (06) and the coordinator (05), which resolves its zone (03) and
//! caches it (04).

#[cfg(test)]
mod tests {
    use gl_03_zone_matching::MockZoneGateway;
    use gl_05_location_sync::{LocationMode, LocationSyncApi, SyncError};
    use gl_06_address_entry::{AddressEntryApi, EntryError, EntryStep, SearchDisposition};
    use shared_types::TransportError;

    use crate::integration::fixtures::*;

    #[tokio::test(start_paused = true)]
    async fn test_search_select_verify_confirm_lands_in_zone() {
        let stack = StackBuilder::default().build_in_memory();

        assert_eq!(stack.flow.search("123 Mar").await, SearchDisposition::Applied);
        let suggestions = stack.flow.view().suggestions;
        assert_eq!(suggestions[0].state, "CA");

        stack.flow.select_suggestion(&suggestions[0].id).unwrap();
        assert!(stack.flow.submit_details().await.unwrap().is_valid());
        let address = stack.flow.confirm().await.unwrap();

        let state = stack.coordinator.snapshot();
        assert_eq!(state.mode(), LocationMode::InZone);
        assert_eq!(state.address(), Some(&address));
        assert!(stack.coordinator.can_add_to_cart());
        assert_eq!(
            stack.coordinator.delivery_time_label().as_deref(),
            Some("30 min - 90 min")
        );
        assert_eq!(stack.flow.view().step, EntryStep::Search);
    }

    #[tokio::test]
    async fn test_out_of_zone_address_is_browse_only() {
        let stack = StackBuilder::default()
            .zones(MockZoneGateway::out_of_zone())
            .build_in_memory();

        stack.flow.enter_manually();
        stack.flow.edit_details(ferry_building_draft()).unwrap();
        stack.flow.submit_details().await.unwrap();
        stack.flow.confirm().await.unwrap();

        let state = stack.coordinator.snapshot();
        assert_eq!(state.mode(), LocationMode::BrowseOnly);
        assert_eq!(state.zone(), None);
        assert!(!stack.coordinator.can_add_to_cart());
        assert_eq!(stack.coordinator.delivery_fee_label(None), None);
    }

    #[tokio::test]
    async fn test_structural_failure_never_reaches_provider() {
        let stack = StackBuilder::default().build_in_memory();

        stack.flow.enter_manually();
        stack
            .flow
            .edit_details(gl_02_address_validation::AddressDraft {
                postal_code: "941".into(),
                ..ferry_building_draft()
            })
            .unwrap();

        let outcome = stack.flow.submit_details().await.unwrap();
        assert!(outcome.is_structural());
        assert_eq!(stack.validation.call_count(), 0);
        assert_eq!(stack.zones.call_count(), 0);
        assert_eq!(stack.flow.view().step, EntryStep::Details);
    }

    #[tokio::test]
    async fn test_zone_outage_on_confirm_keeps_previous_location() {
        let stack = StackBuilder::default().build_in_memory();
        stack.coordinator.set_delivery_address(market_street()).await.unwrap();
        let before = stack.coordinator.snapshot();

        stack
            .zones
            .fail_with(Some(TransportError::ServerError { status: 500 }));
        stack.flow.enter_manually();
        stack.flow.edit_details(ferry_building_draft()).unwrap();
        stack.flow.submit_details().await.unwrap();

        let err = stack.flow.confirm().await.unwrap_err();
        assert!(matches!(
            err,
            EntryError::Delivery(SyncError::ZoneUnknown(_))
        ));
        assert!(err.is_retryable());
        assert_eq!(stack.flow.view().step, EntryStep::Verification);
        assert_eq!(stack.coordinator.snapshot(), before);
        assert_eq!(
            stack.coordinator.cached_location().await.address,
            Some(market_street())
        );

        // Service back: the same confirmation goes through.
        stack.zones.fail_with(None);
        let address = stack.flow.confirm().await.unwrap();
        assert_eq!(address.street, "1 Ferry Building");
        assert_eq!(stack.coordinator.snapshot().mode(), LocationMode::InZone);
    }

    #[tokio::test]
    async fn test_current_location_then_manual_street() {
        let stack = StackBuilder::default().build_in_memory();

        // The mock provider has no reverse match: coordinates only.
        stack.flow.use_current_location().await.unwrap();
        let view = stack.flow.view();
        assert_eq!(view.draft.coordinates, Some(MARKET_ST));
        assert!(view.prompt.is_some());

        stack
            .flow
            .edit_details(gl_02_address_validation::AddressDraft {
                coordinates: view.draft.coordinates,
                street: "123 Market St".into(),
                city: "San Francisco".into(),
                state: "CA".into(),
                postal_code: "94102".into(),
                ..Default::default()
            })
            .unwrap();
        assert!(stack.flow.submit_details().await.unwrap().is_valid());
        stack.flow.confirm().await.unwrap();

        assert_eq!(stack.coordinator.snapshot().mode(), LocationMode::InZone);
    }

    #[tokio::test]
    async fn test_cache_holds_what_the_coordinator_published() {
        let stack = StackBuilder::default().build_in_memory();

        stack.flow.enter_manually();
        stack.flow.edit_details(ferry_building_draft()).unwrap();
        stack.flow.submit_details().await.unwrap();
        let address = stack.flow.confirm().await.unwrap();

        let cached = stack.coordinator.cached_location().await;
        assert_eq!(cached.address, Some(address));
        assert_eq!(cached.zone, Some(downtown()));
        assert!(!cached.is_empty());
    }
}
