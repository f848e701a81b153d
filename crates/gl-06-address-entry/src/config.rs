//! # Address Entry Configuration

use serde::{Deserialize, Serialize};

/// Address entry configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressEntryConfig {
    /// Quiet period before a search is sent.
    pub debounce_ms: u64,
    /// Shorter queries never reach the network.
    pub min_query_len: usize,
}

impl Default for AddressEntryConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_len: 3,
        }
    }
}

impl AddressEntryConfig {
    /// Create config for testing.
    pub fn for_testing() -> Self {
        Self::default()
    }
}
