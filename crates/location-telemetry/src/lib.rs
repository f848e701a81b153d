//! # Location Telemetry
//!
//! Log subscriber setup and Prometheus export for the delivery-location core.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use location_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::from_env()).expect("telemetry");
//!     // Subsystem logs now flow through the configured subscriber.
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `GL_SERVICE_NAME` | `grocer-location` | Service name in log lines |
//! | `GL_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `GL_JSON_LOGS` | `false` | JSON instead of human-readable lines |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod logging;
mod metrics;

pub use config::TelemetryConfig;
pub use metrics::{record_command, render_metrics, COMMANDS};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log filter directive could not be parsed.
    #[error("Invalid log filter '{filter}': {message}")]
    Filter {
        /// Directive as given
        filter: String,
        /// Parser message
        message: String,
    },

    /// A global subscriber is already installed.
    #[error("Failed to install log subscriber: {0}")]
    SubscriberInit(String),

    /// Metrics could not be encoded.
    #[error("Failed to encode metrics: {0}")]
    MetricsEncode(String),
}

/// Install the global log subscriber.
///
/// Returns a guard to hold for the lifetime of the process.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    logging::init_logging(&config)?;
    tracing::info!(
        service = %config.service_name,
        json = config.json_logs,
        "Telemetry initialized"
    );
    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::debug!(service = %self.service_name, "Shutting down telemetry");
    }
}
