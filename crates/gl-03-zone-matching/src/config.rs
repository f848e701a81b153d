//! # Zone Matching Configuration

use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_WINDOW_MINUTES;

/// Zone matching configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneMatchingConfig {
    /// Width of the promised delivery window, added to the zone's estimate.
    pub window_minutes: u32,
}

impl Default for ZoneMatchingConfig {
    fn default() -> Self {
        Self {
            window_minutes: DEFAULT_WINDOW_MINUTES,
        }
    }
}

impl ZoneMatchingConfig {
    /// Create config for testing.
    pub fn for_testing() -> Self {
        Self::default()
    }
}
