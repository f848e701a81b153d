//! # GL-06 Address Entry
//!
//! The three-step flow a user goes through to set a delivery address.
//!
//! **Subsystem ID:** 06
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Flow
//!
//! ```text
//! Search ──select / current location / manual──▶ Details ──valid──▶ Verification
//!   ▲                                              │  ▲                  │
//!   └──────────────────── back ────────────────────┘  └────── back ──────┘
//!                                                                         │
//!                                            confirm ──▶ LocationSync ◀──┘
//! ```
//!
//! - Searches are debounced; a newer query always wins over an older one,
//!   whichever response arrives first
//! - Validation failures stay on Details with an inline prompt
//! - Only `confirm` touches the delivery location; a zone lookup failure
//!   leaves the flow on Verification so the user can retry
//!
//! ## Module Structure
//!
//! ```text
//! gl-06-address-entry/
//! ├── domain/          # EntryStep, DetailsPrompt, SearchSequencer, errors
//! ├── ports/           # AddressEntryApi (inbound) + GeolocationProvider, DeliveryAddressSink (outbound)
//! ├── application/     # AddressEntryFlow
//! ├── adapters/        # CoordinatorSink
//! └── config.rs        # AddressEntryConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::CoordinatorSink;
pub use application::{AddressEntryFlow, EntryView, SearchDisposition};
pub use config::AddressEntryConfig;
pub use domain::{DetailsPrompt, EntryError, EntryStep, GeolocationError, SearchSequencer};
pub use ports::{
    AddressEntryApi, DeliveryAddressSink, GeolocationProvider, LocationPermission,
    MockAddressSink, MockGeolocation,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
