//! # GL-05 Location Sync
//!
//! Owns the delivery [`LocationState`] and reconciles the guest copy with
//! the signed-in account.
//!
//! **Subsystem ID:** 05
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Collaborators
//!
//! ```text
//!                 ┌────────────────────────────┐
//!  set_address ──▶│  LocationSyncCoordinator   │──▶ watch::Receiver<LocationState>
//!  auth change ──▶│  (tokio Mutex, one writer) │
//!                 └──┬──────────┬───────────┬──┘
//!                    ▼          ▼           ▼
//!               ZoneMatcher  LocationCache  AccountAddressGateway
//!                 (gl-03)      (gl-04)        (port)
//! ```
//!
//! ## Reconciliation
//!
//! On sign-in the account's default address (else its first) replaces the
//! guest address: backend wins. The one-shot guard is set before the fetch,
//! so concurrent sign-in signals fetch once. Sign-out re-arms it and clears
//! the location. A result that arrives after the user signed out is thrown
//! away.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;

// Re-exports
pub use application::LocationSyncCoordinator;
pub use config::SyncConfig;
pub use domain::{
    pick_account_address, AccountAddress, AuthState, LocationMode, LocationState,
    ReconciliationOutcome, SyncError,
};
pub use ports::{AccountAddressGateway, LocationSyncApi, MockAccountGateway};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
