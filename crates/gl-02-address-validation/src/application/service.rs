//! # Address Validation Service
//!
//! Runs the structural check, the remote standardization call and
//! classification for one attempt.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use crate::config::ValidationConfig;
use crate::domain::{
    check_structure, classify, AddressDraft, InvalidReason, StandardizationError,
    StandardizationRequest, ValidationOutcome,
};
use crate::metrics;
use crate::ports::{AddressValidatorApi, StandardizationGateway};

/// Address Validation Service - implements [`AddressValidatorApi`].
pub struct AddressValidationService<G: StandardizationGateway> {
    config: ValidationConfig,
    gateway: Arc<G>,
}

impl<G: StandardizationGateway> AddressValidationService<G> {
    /// Create a new address validation service.
    pub fn new(config: ValidationConfig, gateway: Arc<G>) -> Self {
        Self { config, gateway }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    async fn run(&self, draft: &mut AddressDraft) -> ValidationOutcome {
        if let Err(violation) = check_structure(draft) {
            return ValidationOutcome::Invalid(InvalidReason::Structural(violation));
        }

        let request = StandardizationRequest::from_draft(draft);
        let started = Instant::now();
        let result = self.gateway.standardize(&request).await;
        metrics::record_remote_call(started.elapsed().as_secs_f64());

        let response = match result {
            Ok(response) => response,
            Err(StandardizationError::Rejected(message)) => {
                return ValidationOutcome::Invalid(InvalidReason::Remote(message));
            }
            Err(StandardizationError::Transport(e)) => {
                warn!("[gl-02] Standardization unavailable ({}): {}", e.kind(), e);
                return ValidationOutcome::ValidationFailed(e.to_string());
            }
        };

        if let Some(coordinates) = response.standardized.as_ref().and_then(|s| s.coordinates()) {
            draft.coordinates = Some(coordinates);
        }

        classify(draft, &response, &self.config)
    }
}

#[async_trait]
impl<G: StandardizationGateway + 'static> AddressValidatorApi for AddressValidationService<G> {
    async fn validate(&self, draft: &mut AddressDraft) -> ValidationOutcome {
        let outcome = self.run(draft).await;
        debug!(
            outcome = outcome.label(),
            "[gl-02] Validated '{}, {}'",
            draft.street.trim(),
            draft.city.trim()
        );
        metrics::record_outcome(outcome.label());
        outcome
    }
}
