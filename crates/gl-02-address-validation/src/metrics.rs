//! # Validation Metrics
//!
//! Prometheus metrics for address validation.
//!
//! Enable with the `metrics` feature:
//! ```toml
//! gl-02-address-validation = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `address_validation_outcomes_total` - Counter of outcomes (by outcome label)
//! - `address_validation_remote_calls_total` - Counter of standardization calls
//! - `address_validation_latency_seconds` - Histogram of standardization latency

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Validation outcomes, labeled by outcome
    pub static ref VALIDATION_OUTCOMES: IntCounterVec = register_int_counter_vec!(
        "address_validation_outcomes_total",
        "Total number of address validation outcomes",
        &["outcome"]
    )
    .expect("Failed to create VALIDATION_OUTCOMES metric");

    /// Calls that reached the standardization provider
    pub static ref REMOTE_CALLS: IntCounter = register_int_counter!(
        "address_validation_remote_calls_total",
        "Total number of remote standardization calls"
    )
    .expect("Failed to create REMOTE_CALLS metric");

    /// Standardization latency
    pub static ref REMOTE_LATENCY: Histogram = register_histogram!(
        "address_validation_latency_seconds",
        "Time taken by the standardization provider in seconds",
        vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to create REMOTE_LATENCY metric");
}

/// Record a validation outcome
#[cfg(feature = "metrics")]
pub fn record_outcome(outcome: &str) {
    VALIDATION_OUTCOMES.with_label_values(&[outcome]).inc();
}

/// Record a standardization call and its latency
#[cfg(feature = "metrics")]
pub fn record_remote_call(seconds: f64) {
    REMOTE_CALLS.inc();
    REMOTE_LATENCY.observe(seconds);
}

// No-op implementations when metrics feature is disabled
/// No-op without the `metrics` feature.
#[cfg(not(feature = "metrics"))]
pub fn record_outcome(_outcome: &str) {}

/// No-op without the `metrics` feature.
#[cfg(not(feature = "metrics"))]
pub fn record_remote_call(_seconds: f64) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_functions_do_not_panic() {
        record_outcome("valid");
        record_remote_call(0.2);
    }
}
