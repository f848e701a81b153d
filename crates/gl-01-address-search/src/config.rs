//! # Address Search Configuration

use serde::{Deserialize, Serialize};

use crate::domain::MIN_QUERY_LEN;

/// Address search configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressSearchConfig {
    /// Queries with fewer characters return no results and make no call.
    pub min_query_len: usize,

    /// Maximum suggestions returned to the caller (0 = unlimited).
    pub max_results: usize,
}

impl Default for AddressSearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: MIN_QUERY_LEN,
            max_results: 8,
        }
    }
}

impl AddressSearchConfig {
    /// Create a config for testing (no result cap).
    pub fn for_testing() -> Self {
        Self {
            min_query_len: MIN_QUERY_LEN,
            max_results: 0,
        }
    }
}
