//! # Location Runtime
//!
//! Production wiring for the delivery-location core.
//!
//! ## Modular Structure
//!
//! - `config` - [`RuntimeConfig`] from TOML plus `GL_*` environment overrides
//! - `adapters/` - reqwest gateways for every remote capability, fixed device position
//! - `container` - [`LocationContainer`] holding the wired subsystems
//!
//! ## Wiring
//!
//! ```text
//! AddressEntryFlow(06) ──▶ AddressSearchService(01) ──▶ HttpAddressGateway
//!        │           └───▶ AddressValidationService(02) ──▶ HttpValidationGateway
//!        │
//!        └─ confirm ──▶ LocationSyncCoordinator(05) ──▶ ZoneMatcher(03) ──▶ HttpZoneGateway
//!                              │            └─────────▶ HttpAccountGateway
//!                              └──▶ LocationCache(04) ──▶ FileKVStore
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod container;

pub use config::{ApiConfig, ConfigError, DeviceConfig, RuntimeConfig, StorageConfig};
pub use container::{LocationContainer, RuntimeError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
