//! # Zone Matching Errors

use shared_types::TransportError;
use thiserror::Error;

/// Zone lookup failed; in-zone status is unknown.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ZoneError {
    /// Service area lookup could not be reached.
    #[error("Zone lookup unavailable: {0}")]
    Transport(#[from] TransportError),

    /// Service area lookup answered with something we cannot interpret.
    #[error("Malformed zone response: {0}")]
    MalformedResponse(String),

    /// Coordinates out of range; the lookup was not attempted.
    #[error("Invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        /// Latitude supplied
        latitude: f64,
        /// Longitude supplied
        longitude: f64,
    },
}

impl ZoneError {
    /// Short, stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::MalformedResponse(_) => "malformed",
            Self::InvalidCoordinates { .. } => "invalid_coordinates",
        }
    }
}
