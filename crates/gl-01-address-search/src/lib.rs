//! # GL-01 Address Search
//!
//! Address autocomplete and reverse geocoding for the delivery-location flow.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Wrap the remote "search addresses" and "reverse geocode" capabilities:
//! - Queries shorter than the minimum length never reach the network
//! - Results keep the provider's relevance order
//! - State names are normalized to 2-letter codes on ingestion
//! - Transport failures become empty results; the caller decides what to show
//!
//! The service is stateless. Debouncing and superseding of in-flight searches
//! belong to the entry flow (GL-06).
//!
//! ## Module Structure
//!
//! ```text
//! gl-01-address-search/
//! ├── domain/          # SearchQuery
//! ├── ports/           # AddressSuggestionSource (inbound) + AddressSearchGateway (outbound)
//! ├── application/     # AddressSearchService
//! └── config.rs        # AddressSearchConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use application::AddressSearchService;
pub use config::AddressSearchConfig;
pub use domain::{SearchQuery, MIN_QUERY_LEN};
pub use ports::{AddressSearchGateway, AddressSuggestionSource, MockSearchGateway};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
