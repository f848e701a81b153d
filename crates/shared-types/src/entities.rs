//! # Core Domain Entities
//!
//! Defines the location entities shared by every subsystem.
//!
//! ## Clusters
//!
//! - **Address**: `DeliveryAddress`, `AddressLabel`, `Coordinates`
//! - **Search**: `AddressSuggestion`
//! - **Service area**: `ZoneInfo`

use serde::{Deserialize, Serialize};

use crate::us_states::normalize_state;

/// Tolerance used when comparing two coordinates for "same place".
///
/// Roughly 10 cm at the equator; anything closer is the same delivery point.
pub const COORDINATE_EPSILON: f64 = 1e-6;

// =============================================================================
// CLUSTER A: ADDRESS
// =============================================================================

/// A latitude/longitude pair in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Coordinates {
    /// Latitude, -90..=90.
    pub latitude: f64,
    /// Longitude, -180..=180.
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite and within the WGS84 ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// True when both axes differ by less than [`COORDINATE_EPSILON`].
    #[must_use]
    pub fn same_location(&self, other: &Coordinates) -> bool {
        (self.latitude - other.latitude).abs() < COORDINATE_EPSILON
            && (self.longitude - other.longitude).abs() < COORDINATE_EPSILON
    }
}

/// User-facing label for a saved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressLabel {
    /// Home address.
    Home,
    /// Work address.
    Work,
    /// Anything else.
    Other,
}

impl AddressLabel {
    /// Parse a label, case-insensitive. Unknown labels map to `Other`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "home" => Self::Home,
            "work" => Self::Work,
            _ => Self::Other,
        }
    }

    /// Lowercase wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::Other => "other",
        }
    }
}

/// A deliverable street address with its geocoded location.
///
/// ## Ownership
///
/// When `remote_id` is set the address has been persisted to an account and
/// is account-owned: synchronization must not silently replace it with a
/// guest copy without an explicit save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    /// Street line ("123 Market St").
    pub street: String,
    /// Apartment, suite or unit.
    #[serde(default)]
    pub secondary: Option<String>,
    /// City name.
    pub city: String,
    /// Two-letter USPS state code.
    pub state: String,
    /// Five-digit ZIP code.
    pub postal_code: String,
    /// Latitude of the delivery point.
    pub latitude: f64,
    /// Longitude of the delivery point.
    pub longitude: f64,
    /// Optional home/work/other label.
    #[serde(default)]
    pub label: Option<AddressLabel>,
    /// Free-text instructions for the courier.
    #[serde(default)]
    pub delivery_instructions: Option<String>,
    /// Backend identifier, present once saved to an account.
    #[serde(default)]
    pub remote_id: Option<String>,
}

impl DeliveryAddress {
    /// Create an address with the required fields; optional fields start empty.
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            street: street.into(),
            secondary: None,
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            label: None,
            delivery_instructions: None,
            remote_id: None,
        }
    }

    /// Set the secondary (apartment/suite) line.
    #[must_use]
    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: AddressLabel) -> Self {
        self.label = Some(label);
        self
    }

    /// Set the backend identifier.
    #[must_use]
    pub fn with_remote_id(mut self, remote_id: impl Into<String>) -> Self {
        self.remote_id = Some(remote_id.into());
        self
    }

    /// Location of the delivery point.
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Whether this address has been persisted to an account.
    #[must_use]
    pub fn is_account_owned(&self) -> bool {
        self.remote_id.is_some()
    }

    /// Whether a non-blank secondary line is present.
    #[must_use]
    pub fn has_secondary(&self) -> bool {
        self.secondary
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    /// Single-line rendering: `street[, secondary], city, ST 12345`.
    #[must_use]
    pub fn one_line(&self) -> String {
        let mut line = self.street.clone();
        if self.has_secondary() {
            if let Some(secondary) = &self.secondary {
                line.push_str(", ");
                line.push_str(secondary.trim());
            }
        }
        format!("{}, {}, {} {}", line, self.city, self.state, self.postal_code)
    }
}

// =============================================================================
// CLUSTER B: SEARCH
// =============================================================================

/// One ranked result of an address search or reverse geocode.
///
/// Ephemeral: produced by a query and discarded once selected or superseded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressSuggestion {
    /// Opaque identifier assigned by the search provider.
    pub id: String,
    /// Street line.
    pub street: String,
    /// City name.
    pub city: String,
    /// State; full name or abbreviation until normalized.
    pub state: String,
    /// ZIP code.
    pub postal_code: String,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
}

impl AddressSuggestion {
    /// Location of the suggestion.
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Replace a full state name with its 2-letter code.
    ///
    /// Unknown names are kept trimmed as-is so the structural check rejects
    /// them later instead of silently guessing.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.state = match normalize_state(&self.state) {
            Some(code) => code.to_string(),
            None => self.state.trim().to_string(),
        };
        self.street = self.street.trim().to_string();
        self.city = self.city.trim().to_string();
        self.postal_code = self.postal_code.trim().to_string();
        self
    }

    /// Convert into a delivery address with no label or remote id.
    #[must_use]
    pub fn into_address(self) -> DeliveryAddress {
        let coordinates = self.coordinates();
        DeliveryAddress::new(
            self.street,
            self.city,
            self.state,
            self.postal_code,
            coordinates,
        )
    }
}

// =============================================================================
// CLUSTER C: SERVICE AREA
// =============================================================================

/// A serviceable delivery zone and its delivery promise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneInfo {
    /// Zone identifier.
    pub zone_id: String,
    /// Display name ("SF Downtown").
    pub name: String,
    /// Lower bound of the delivery estimate, in minutes.
    pub delivery_time_minutes: u32,
    /// Delivery fee in dollars.
    pub delivery_fee: f64,
    /// Order subtotal at which delivery becomes free.
    pub free_delivery_threshold: f64,
    /// Minimum order subtotal.
    pub minimum_order: f64,
}
