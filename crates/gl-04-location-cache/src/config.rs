//! # Location Cache Configuration

use serde::{Deserialize, Serialize};

/// Location cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationCacheConfig {
    /// Key prefix inside the store.
    pub namespace: String,
}

impl Default for LocationCacheConfig {
    fn default() -> Self {
        Self {
            namespace: "gl.location".to_string(),
        }
    }
}

impl LocationCacheConfig {
    /// Create config for testing.
    pub fn for_testing() -> Self {
        Self {
            namespace: "test.location".to_string(),
        }
    }

    /// Key holding the address envelope.
    pub fn address_key(&self) -> String {
        format!("{}.address", self.namespace)
    }

    /// Key holding the zone envelope.
    pub fn zone_key(&self) -> String {
        format!("{}.zone", self.namespace)
    }
}
