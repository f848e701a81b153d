//! # Standardization Exchange
//!
//! Request and response of the remote address standardization call.

use serde::{Deserialize, Serialize};
use shared_types::{normalize_state, Coordinates, TransportError};
use thiserror::Error;

use super::draft::AddressDraft;
use super::outcome::Confidence;

/// Fields sent to the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardizationRequest {
    /// Street line.
    pub street: String,
    /// Apartment/suite, when supplied.
    pub secondary: Option<String>,
    /// City.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Five-digit ZIP.
    pub zip: String,
}

impl StandardizationRequest {
    /// Build from a draft that passed the structural check.
    pub fn from_draft(draft: &AddressDraft) -> Self {
        Self {
            street: draft.street.trim().to_string(),
            secondary: draft.secondary_trimmed(),
            city: draft.city.trim().to_string(),
            state: draft.state.trim().to_ascii_uppercase(),
            zip: draft.postal_code.trim().to_string(),
        }
    }
}

/// Canonical form of the address as returned by the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardizedAddress {
    /// Street line.
    pub street: String,
    /// Apartment/suite, when the provider kept one.
    pub secondary: Option<String>,
    /// City.
    pub city: String,
    /// State, code or full name.
    pub state: String,
    /// ZIP.
    pub postal_code: String,
    /// Geocoded latitude.
    pub latitude: Option<f64>,
    /// Geocoded longitude.
    pub longitude: Option<f64>,
}

impl StandardizedAddress {
    /// Geocoded location, when both parts are present and in range.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)).filter(Coordinates::is_valid),
            _ => None,
        }
    }

    /// State as a 2-letter code when recognized, otherwise trimmed as-is.
    pub fn state_code(&self) -> String {
        normalize_state(&self.state)
            .map(str::to_string)
            .unwrap_or_else(|| self.state.trim().to_string())
    }
}

/// Provider answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardizationResponse {
    /// Provider verdict.
    pub is_valid: bool,
    /// Provider confidence.
    pub confidence: Confidence,
    /// Canonical form, when the provider produced one.
    pub standardized: Option<StandardizedAddress>,
    /// Free-text warnings.
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Standardization call failure.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum StandardizationError {
    /// Provider refused the address (4xx with a message).
    #[error("Address rejected: {0}")]
    Rejected(String),

    /// Provider could not be reached.
    #[error("Standardization unavailable: {0}")]
    Transport(#[from] TransportError),
}
