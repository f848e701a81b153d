//! # Zone Matching Metrics
//!
//! - `zone_lookups_total` - Counter of lookups (by result: in_zone, out_of_zone, error kind)
//! - `zone_lookup_latency_seconds` - Histogram of lookup latency

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_histogram, register_int_counter_vec, Histogram, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Zone lookups, labeled by result
    pub static ref ZONE_LOOKUPS: IntCounterVec = register_int_counter_vec!(
        "zone_lookups_total",
        "Total number of zone lookups",
        &["result"]
    )
    .expect("Failed to create ZONE_LOOKUPS metric");

    /// Zone lookup latency
    pub static ref ZONE_LOOKUP_LATENCY: Histogram = register_histogram!(
        "zone_lookup_latency_seconds",
        "Time taken by the service area lookup in seconds",
        vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to create ZONE_LOOKUP_LATENCY metric");
}

/// Record a lookup result and its latency
#[cfg(feature = "metrics")]
pub fn record_lookup(result: &str, seconds: f64) {
    ZONE_LOOKUPS.with_label_values(&[result]).inc();
    ZONE_LOOKUP_LATENCY.observe(seconds);
}

/// No-op without the `metrics` feature.
#[cfg(not(feature = "metrics"))]
pub fn record_lookup(_result: &str, _seconds: f64) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_lookup_does_not_panic() {
        record_lookup("in_zone", 0.1);
        record_lookup("transport", 5.0);
    }
}
