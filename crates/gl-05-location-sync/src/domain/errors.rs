//! # Location Sync Errors

use gl_03_zone_matching::ZoneError;
use shared_types::TransportError;
use thiserror::Error;

/// Coordinator operation failure. State is never corrupted by one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// Zone lookup failed; the previous location was kept. Retryable.
    #[error("Delivery zone unknown: {0}")]
    ZoneUnknown(#[source] ZoneError),

    /// Account address service unreachable. Retryable.
    #[error("Account addresses unavailable: {0}")]
    AccountUnavailable(#[source] TransportError),

    /// No delivery address is set.
    #[error("No delivery address set")]
    NoAddress,

    /// The sign-in session that started the operation has ended.
    #[error("Sign-in session ended before the address was applied")]
    Superseded,
}

impl SyncError {
    /// Whether retrying the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ZoneUnknown(_) | Self::AccountUnavailable(_))
    }
}
