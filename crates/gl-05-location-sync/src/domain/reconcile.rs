//! # Sign-in Reconciliation
//!
//! Backend wins: the account's default address (else its first) replaces
//! whatever the guest had. An account with no addresses leaves guest state
//! alone.

use serde::{Deserialize, Serialize};
use shared_types::DeliveryAddress;

/// A saved account address.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountAddress {
    /// The address; `remote_id` is set.
    pub address: DeliveryAddress,
    /// Whether this is the account's default.
    pub is_default: bool,
}

/// What one `on_auth_changed` call did.
#[derive(Clone, Debug, PartialEq)]
pub enum ReconciliationOutcome {
    /// Sign-out handled: guard re-armed and location cleared.
    SignedOut,
    /// Already reconciled for this sign-in; nothing fetched.
    AlreadyReconciled,
    /// Reconciliation is turned off in config.
    Disabled,
    /// Account has no saved addresses; guest state kept.
    NoSavedAddresses,
    /// The account address now drives the location.
    Applied(DeliveryAddress),
    /// User signed out while reconciling; result discarded.
    Stale,
    /// Fetch or zone lookup failed; logged and swallowed.
    Failed(String),
}

impl ReconciliationOutcome {
    /// Stable label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SignedOut => "signed_out",
            Self::AlreadyReconciled => "already_reconciled",
            Self::Disabled => "disabled",
            Self::NoSavedAddresses => "no_saved_addresses",
            Self::Applied(_) => "applied",
            Self::Stale => "stale",
            Self::Failed(_) => "failed",
        }
    }
}

/// Pick the address that should win: the default, else the first.
pub fn pick_account_address(saved: &[AccountAddress]) -> Option<&DeliveryAddress> {
    saved
        .iter()
        .find(|a| a.is_default)
        .or_else(|| saved.first())
        .map(|a| &a.address)
}
