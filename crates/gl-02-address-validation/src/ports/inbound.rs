//! # Inbound Ports
//!
//! API trait defining what Address Validation can do.

use async_trait::async_trait;

use crate::domain::{AddressDraft, ValidationOutcome};

/// Address validator - inbound port.
#[async_trait]
pub trait AddressValidatorApi: Send + Sync {
    /// Validate a draft.
    ///
    /// Never fails: transport problems are reported as
    /// [`ValidationOutcome::ValidationFailed`]. When the provider geocodes
    /// the address, `draft.coordinates` is replaced with its location.
    async fn validate(&self, draft: &mut AddressDraft) -> ValidationOutcome;
}
