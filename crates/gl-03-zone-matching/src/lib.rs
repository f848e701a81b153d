//! # GL-03 Zone Matching
//!
//! Resolves coordinates to a serviceable delivery zone and formats the
//! delivery promise shown to shoppers.
//!
//! **Subsystem ID:** 03
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Three answers, never two
//!
//! | Result | Meaning |
//! |--------|---------|
//! | `Ok(Some(zone))` | inside a zone |
//! | `Ok(None)` | confirmed out of zone |
//! | `Err(ZoneError)` | unknown; the caller keeps what it had |
//!
//! Geofence computation is remote; this crate only interprets the answer.
//! Nothing is memoized.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;

// Re-exports
pub use application::ZoneMatcher;
pub use config::ZoneMatchingConfig;
pub use domain::{
    amount_until_free_delivery, format_delivery_fee, format_delivery_time,
    format_delivery_window, meets_minimum_order, ZoneError, ZoneLookupResponse,
    DEFAULT_WINDOW_MINUTES,
};
pub use ports::{MockZoneGateway, ZoneLookupGateway, ZoneMatcherApi};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
