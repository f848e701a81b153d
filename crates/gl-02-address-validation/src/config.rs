//! # Validation Configuration
//!
//! Term lists used to read the provider's free-text warnings.

use serde::{Deserialize, Serialize};

/// Address validation configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Words that mark a warning as "this is a multi-unit building".
    pub multi_unit_terms: Vec<String>,

    /// Words that identify the secondary designator in a warning.
    pub secondary_terms: Vec<String>,

    /// Phrases that mark a secondary-designator warning as a rejection.
    pub rejection_phrases: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            multi_unit_terms: to_strings(&[
                "multi",
                "unit",
                "units",
                "apartment",
                "apartments",
                "apt",
                "suite",
                "building",
                "secondary",
            ]),
            secondary_terms: to_strings(&["secondary", "unit", "apt", "apartment", "suite"]),
            rejection_phrases: to_strings(&[
                "invalid",
                "not valid",
                "not found",
                "unrecognized",
                "does not exist",
            ]),
        }
    }
}

fn to_strings(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert!(config.multi_unit_terms.iter().any(|t| t == "building"));
        assert!(config.rejection_phrases.iter().any(|t| t == "not found"));
    }
}
