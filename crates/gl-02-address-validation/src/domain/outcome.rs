//! # Validation Outcome
//!
//! Exactly one outcome per validation attempt.

use serde::{Deserialize, Serialize};
use shared_types::DeliveryAddress;
use std::fmt;

use super::structural::StructuralViolation;

/// Provider confidence in a standardized address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Deliverable as standardized.
    High,
    /// Deliverable with caveats (see warnings).
    Medium,
    /// Not deliverable.
    Low,
}

impl Confidence {
    /// Parse a provider confidence string; unknown values read as `Low`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// Why an address was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidReason {
    /// Failed a local rule; the provider was never called.
    Structural(StructuralViolation),
    /// The provider confirmed the address is not deliverable or not findable.
    Remote(String),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural(violation) => write!(f, "{}", violation),
            Self::Remote(message) => write!(f, "{}", message),
        }
    }
}

/// Result of one validation attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationOutcome {
    /// Standardized, deliverable address.
    Valid(DeliveryAddress),
    /// Multi-unit building and no apartment/suite was given.
    NeedsSecondaryAddress,
    /// The apartment/suite given is not recognized at this address.
    SecondaryAddressInvalid,
    /// The address is not acceptable.
    Invalid(InvalidReason),
    /// The provider could not be reached; retry is possible.
    ValidationFailed(String),
}

impl ValidationOutcome {
    /// Whether the attempt produced a usable address.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The standardized address, if valid.
    pub fn address(&self) -> Option<&DeliveryAddress> {
        match self {
            Self::Valid(address) => Some(address),
            _ => None,
        }
    }

    /// Whether retrying the same draft could give a different answer.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ValidationFailed(_))
    }

    /// Whether the outcome never reached the provider.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Invalid(InvalidReason::Structural(_)))
    }

    /// Inline message to show next to the form; `None` when valid.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Valid(_) => None,
            Self::NeedsSecondaryAddress => {
                Some("This looks like a multi-unit building. Please add an apartment or suite number.".into())
            }
            Self::SecondaryAddressInvalid => {
                Some("We couldn't find that apartment or suite number. Please check it.".into())
            }
            Self::Invalid(reason) => Some(reason.to_string()),
            Self::ValidationFailed(_) => {
                Some("We couldn't verify your address right now. Please try again.".into())
            }
        }
    }

    /// Stable label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Valid(_) => "valid",
            Self::NeedsSecondaryAddress => "needs_secondary",
            Self::SecondaryAddressInvalid => "secondary_invalid",
            Self::Invalid(InvalidReason::Structural(_)) => "invalid_structural",
            Self::Invalid(InvalidReason::Remote(_)) => "invalid_remote",
            Self::ValidationFailed(_) => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_parse() {
        assert_eq!(Confidence::parse("HIGH"), Confidence::High);
        assert_eq!(Confidence::parse(" medium "), Confidence::Medium);
        assert_eq!(Confidence::parse("unknown"), Confidence::Low);
    }

    #[test]
    fn test_only_failed_is_retryable() {
        assert!(ValidationOutcome::ValidationFailed("timeout".into()).is_retryable());
        assert!(!ValidationOutcome::NeedsSecondaryAddress.is_retryable());
        assert!(!ValidationOutcome::Invalid(InvalidReason::Remote("no".into())).is_retryable());
    }

    #[test]
    fn test_structural_message_names_field() {
        let outcome = ValidationOutcome::Invalid(InvalidReason::Structural(
            StructuralViolation::InvalidPostalCode {
                value: "941".into(),
            },
        ));
        assert!(outcome.is_structural());
        assert_eq!(outcome.label(), "invalid_structural");
        assert!(outcome.user_message().unwrap().contains("ZIP"));
    }
}
