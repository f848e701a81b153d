//! # Address Entry Errors

use gl_05_location_sync::SyncError;
use thiserror::Error;

use super::step::EntryStep;

/// Device position could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// Positioning hardware or service unavailable.
    #[error("Position unavailable: {0}")]
    Unavailable(String),

    /// No fix within the allowed time.
    #[error("Position request timed out")]
    Timeout,
}

/// Address entry failure. The flow stays where it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryError {
    /// User refused location access.
    #[error("Location permission denied")]
    PermissionDenied,

    /// Permission granted but no position.
    #[error("Current location unavailable: {0}")]
    LocationUnavailable(#[from] GeolocationError),

    /// Selected suggestion is not in the current result list.
    #[error("Unknown suggestion '{0}'")]
    UnknownSuggestion(String),

    /// Operation not allowed at this step.
    #[error("Expected step {expected:?}, flow is at {actual:?}")]
    WrongStep {
        /// Step the operation needs
        expected: EntryStep,
        /// Step the flow is at
        actual: EntryStep,
    },

    /// The form changed while a request was in flight; its result was
    /// dropped and the newer form stands.
    #[error("Address details changed while the request was running")]
    DraftChanged,

    /// The location coordinator refused the address.
    #[error("Could not set delivery address: {0}")]
    Delivery(#[from] SyncError),
}

impl EntryError {
    /// Whether the user can simply try again.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::LocationUnavailable(_) => true,
            Self::Delivery(e) => e.is_retryable(),
            _ => false,
        }
    }
}
