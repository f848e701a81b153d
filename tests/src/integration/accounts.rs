//! # Account Reconciliation
//!
//! Sign-in hands the location over to the account's saved address; the
//! guest address set through the entry flow loses.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gl_05_location_sync::{
        AccountAddress, AuthState, LocationMode, LocationSyncApi, MockAccountGateway,
        ReconciliationOutcome,
    };
    use gl_06_address_entry::AddressEntryApi;
    use shared_types::{AddressLabel, DeliveryAddress};

    use crate::integration::fixtures::*;

    fn saved_ferry_building() -> DeliveryAddress {
        DeliveryAddress {
            remote_id: Some("addr-7".into()),
            label: Some(AddressLabel::Work),
            ..ferry_building()
        }
    }

    fn account() -> MockAccountGateway {
        MockAccountGateway::with_addresses(vec![
            AccountAddress {
                address: market_street(),
                is_default: false,
            },
            AccountAddress {
                address: saved_ferry_building(),
                is_default: true,
            },
        ])
    }

    async fn confirm_as_guest<C>(stack: &Stack<C>)
    where
        C: gl_04_location_cache::LocationCacheApi + 'static,
    {
        stack.flow.enter_manually();
        stack.flow.edit_details(ferry_building_draft()).unwrap();
        stack.flow.submit_details().await.unwrap();
        stack.flow.confirm().await.unwrap();
    }

    #[tokio::test]
    async fn test_sign_in_replaces_guest_address_with_account_default() {
        let stack = StackBuilder::default().accounts(account()).build_in_memory();
        confirm_as_guest(&stack).await;
        assert_eq!(
            stack.coordinator.snapshot().address().unwrap().remote_id,
            None
        );

        let outcome = stack
            .coordinator
            .on_auth_changed(AuthState::signed_in("user-1"))
            .await;

        assert_eq!(outcome, ReconciliationOutcome::Applied(saved_ferry_building()));
        let state = stack.coordinator.snapshot();
        assert_eq!(state.mode(), LocationMode::InZone);
        assert_eq!(state.address(), Some(&saved_ferry_building()));
        assert_eq!(
            stack.coordinator.cached_location().await.address,
            Some(saved_ferry_building())
        );
    }

    #[tokio::test]
    async fn test_empty_account_keeps_guest_address() {
        let stack = StackBuilder::default().build_in_memory();
        confirm_as_guest(&stack).await;
        let guest = stack.coordinator.snapshot();

        let outcome = stack
            .coordinator
            .on_auth_changed(AuthState::signed_in("user-1"))
            .await;

        assert_eq!(outcome, ReconciliationOutcome::NoSavedAddresses);
        assert_eq!(stack.coordinator.snapshot(), guest);
    }

    #[tokio::test]
    async fn test_sign_out_clears_and_next_sign_in_reconciles_again() {
        let stack = StackBuilder::default().accounts(account()).build_in_memory();

        stack
            .coordinator
            .on_auth_changed(AuthState::signed_in("user-1"))
            .await;
        assert_eq!(
            stack
                .coordinator
                .on_auth_changed(AuthState::signed_in("user-1"))
                .await,
            ReconciliationOutcome::AlreadyReconciled
        );

        let outcome = stack.coordinator.on_auth_changed(AuthState::SignedOut).await;
        assert_eq!(outcome, ReconciliationOutcome::SignedOut);
        assert_eq!(
            stack.coordinator.snapshot().mode(),
            LocationMode::Uninitialized
        );
        assert!(stack.coordinator.cached_location().await.is_empty());

        let outcome = stack
            .coordinator
            .on_auth_changed(AuthState::signed_in("user-2"))
            .await;
        assert!(matches!(outcome, ReconciliationOutcome::Applied(_)));
        assert_eq!(stack.accounts.fetch_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_sign_ins_fetch_once() {
        let stack = StackBuilder::default().accounts(account()).build_in_memory();
        stack.accounts.set_delay(Some(Duration::from_millis(200)));

        let (first, second) = futures::join!(
            stack
                .coordinator
                .on_auth_changed(AuthState::signed_in("user-1")),
            stack
                .coordinator
                .on_auth_changed(AuthState::signed_in("user-1")),
        );

        assert_eq!(first, ReconciliationOutcome::Applied(saved_ferry_building()));
        assert_eq!(second, ReconciliationOutcome::AlreadyReconciled);
        assert_eq!(stack.accounts.fetch_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_out_during_fetch_discards_account_address() {
        let stack = StackBuilder::default().accounts(account()).build_in_memory();
        stack.accounts.set_delay(Some(Duration::from_millis(200)));

        let (signed_in, signed_out) = futures::join!(
            stack
                .coordinator
                .on_auth_changed(AuthState::signed_in("user-1")),
            async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                stack.coordinator.on_auth_changed(AuthState::SignedOut).await
            },
        );

        assert_eq!(signed_in, ReconciliationOutcome::Stale);
        assert_eq!(signed_out, ReconciliationOutcome::SignedOut);
        assert_eq!(
            stack.coordinator.snapshot().mode(),
            LocationMode::Uninitialized
        );
        assert!(stack.coordinator.cached_location().await.is_empty());
    }

    #[tokio::test]
    async fn test_saving_from_the_flow_adopts_remote_id() {
        let stack = StackBuilder::default().build_in_memory();
        confirm_as_guest(&stack).await;

        let address = stack.coordinator.snapshot().address().cloned().unwrap();
        let state = stack
            .coordinator
            .save_address_to_account(address)
            .await
            .unwrap();

        assert!(state.address().unwrap().remote_id.is_some());
        assert_eq!(state.mode(), LocationMode::InZone);
        assert_eq!(stack.accounts.addresses.lock().len(), 1);
    }
}
