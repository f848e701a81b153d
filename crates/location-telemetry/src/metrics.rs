//! Prometheus text export.
//!
//! Subsystem crates register their counters in the default registry when
//! built with their `metrics` feature; this module renders all of them.
//! Names follow `gl_<subsystem>_<metric>_<unit>`.

use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Runtime commands executed, by command and outcome.
    pub static ref COMMANDS: IntCounterVec = register_int_counter_vec!(
        "gl_runtime_commands_total",
        "Runtime commands executed",
        &["command", "outcome"]
    )
    .expect("metric registration failed");
}

/// Count one runtime command.
pub fn record_command(command: &str, ok: bool) {
    COMMANDS
        .with_label_values(&[command, if ok { "ok" } else { "error" }])
        .inc();
}

/// Every registered metric in the Prometheus text format.
pub fn render_metrics() -> Result<String, TelemetryError> {
    let families = prometheus::gather();
    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsEncode(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsEncode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_command_is_rendered() {
        record_command("status", true);
        record_command("search", false);

        let text = render_metrics().unwrap();
        assert!(text.contains("gl_runtime_commands_total"));
        assert!(text.contains(r#"command="search""#));
        assert!(text.contains(r#"outcome="error""#));
    }
}
