//! # Location State
//!
//! The single published answer to "where do we deliver, and can we?".
//!
//! ```text
//! Uninitialized ──▶ Resolving ──▶ InZone
//!       ▲               │    └──▶ BrowseOnly
//!       │               └───────▶ Error
//!       └──── clear / sign-out (from any mode)
//! ```

use serde::{Deserialize, Serialize};
use shared_types::{DeliveryAddress, ZoneInfo};

/// Where the location lifecycle is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationMode {
    /// Nothing known yet.
    Uninitialized,
    /// Zone lookup in flight.
    Resolving,
    /// Address inside a delivery zone.
    InZone,
    /// Browsing without delivery.
    BrowseOnly,
    /// Zone lookup failed with nothing better to show.
    Error,
}

impl LocationMode {
    /// Stable label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Resolving => "resolving",
            Self::InZone => "in_zone",
            Self::BrowseOnly => "browse_only",
            Self::Error => "error",
        }
    }
}

/// Immutable snapshot of the delivery location.
///
/// Only the coordinator builds these; the constructors are the only way to
/// get one, and each upholds the mode invariants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationState {
    address: Option<DeliveryAddress>,
    zone: Option<ZoneInfo>,
    mode: LocationMode,
    skipped_setup: bool,
}

impl Default for LocationState {
    fn default() -> Self {
        Self::uninitialized()
    }
}

impl LocationState {
    /// Nothing known.
    pub fn uninitialized() -> Self {
        Self {
            address: None,
            zone: None,
            mode: LocationMode::Uninitialized,
            skipped_setup: false,
        }
    }

    /// Looking up the zone for `address`; `zone` is the last known one, kept
    /// for display.
    pub fn resolving(address: DeliveryAddress, zone: Option<ZoneInfo>) -> Self {
        Self {
            address: Some(address),
            zone,
            mode: LocationMode::Resolving,
            skipped_setup: false,
        }
    }

    /// Resolved: `address` is served by `zone`.
    pub fn in_zone(address: DeliveryAddress, zone: ZoneInfo) -> Self {
        Self {
            address: Some(address),
            zone: Some(zone),
            mode: LocationMode::InZone,
            skipped_setup: false,
        }
    }

    /// Resolved: `address` is outside every zone.
    pub fn browse_only(address: DeliveryAddress) -> Self {
        Self {
            address: Some(address),
            zone: None,
            mode: LocationMode::BrowseOnly,
            skipped_setup: false,
        }
    }

    /// Browsing by the user's choice, with or without an address.
    pub fn browsing(address: Option<DeliveryAddress>) -> Self {
        Self {
            skipped_setup: address.is_none(),
            address,
            zone: None,
            mode: LocationMode::BrowseOnly,
        }
    }

    /// Lookup failed; keep whatever address and zone were known.
    pub fn error(address: Option<DeliveryAddress>, zone: Option<ZoneInfo>) -> Self {
        Self {
            address,
            zone,
            mode: LocationMode::Error,
            skipped_setup: false,
        }
    }

    /// Delivery address, if any.
    pub fn address(&self) -> Option<&DeliveryAddress> {
        self.address.as_ref()
    }

    /// Zone, if any.
    pub fn zone(&self) -> Option<&ZoneInfo> {
        self.zone.as_ref()
    }

    /// Lifecycle mode.
    pub fn mode(&self) -> LocationMode {
        self.mode
    }

    /// Whether the user chose to browse without setting an address.
    pub fn skipped_setup(&self) -> bool {
        self.skipped_setup
    }

    /// Add-to-cart is allowed only inside a zone.
    pub fn can_add_to_cart(&self) -> bool {
        self.mode == LocationMode::InZone
    }

    /// Whether a zone lookup has completed for the current address.
    pub fn is_resolved(&self) -> bool {
        matches!(self.mode, LocationMode::InZone | LocationMode::BrowseOnly)
    }

    /// Check the mode invariants.
    pub fn is_consistent(&self) -> bool {
        match self.mode {
            LocationMode::Uninitialized => self.address.is_none() && self.zone.is_none(),
            LocationMode::InZone => self.zone.is_some() && self.address.is_some(),
            LocationMode::BrowseOnly => {
                self.zone.is_none() && (self.address.is_some() || self.skipped_setup)
            }
            LocationMode::Resolving => self.address.is_some(),
            LocationMode::Error => true,
        }
    }
}
