//! # Location Sync Configuration

use serde::{Deserialize, Serialize};

/// Location sync configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Replace guest state with the account's address on sign-in.
    pub reconcile_on_sign_in: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            reconcile_on_sign_in: true,
        }
    }
}

impl SyncConfig {
    /// Create config for testing.
    pub fn for_testing() -> Self {
        Self::default()
    }
}
