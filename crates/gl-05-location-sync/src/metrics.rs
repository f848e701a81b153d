//! # Location Sync Metrics
//!
//! - `location_state_transitions_total` - Counter of published states (by mode)
//! - `location_reconciliations_total` - Counter of auth reconciliations (by outcome)

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter_vec, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Published states, labeled by mode
    pub static ref STATE_TRANSITIONS: IntCounterVec = register_int_counter_vec!(
        "location_state_transitions_total",
        "Total number of location states published",
        &["mode"]
    )
    .expect("Failed to create STATE_TRANSITIONS metric");

    /// Reconciliations, labeled by outcome
    pub static ref RECONCILIATIONS: IntCounterVec = register_int_counter_vec!(
        "location_reconciliations_total",
        "Total number of sign-in reconciliations",
        &["outcome"]
    )
    .expect("Failed to create RECONCILIATIONS metric");
}

/// Record a published state
#[cfg(feature = "metrics")]
pub fn record_transition(mode: &str) {
    STATE_TRANSITIONS.with_label_values(&[mode]).inc();
}

/// Record a reconciliation outcome
#[cfg(feature = "metrics")]
pub fn record_reconciliation(outcome: &str) {
    RECONCILIATIONS.with_label_values(&[outcome]).inc();
}

/// No-op without the `metrics` feature.
#[cfg(not(feature = "metrics"))]
pub fn record_transition(_mode: &str) {}

/// No-op without the `metrics` feature.
#[cfg(not(feature = "metrics"))]
pub fn record_reconciliation(_outcome: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_functions_do_not_panic() {
        record_transition("in_zone");
        record_reconciliation("applied");
    }
}
