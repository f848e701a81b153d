//! # Classification
//!
//! Maps a provider response onto exactly one [`ValidationOutcome`].

use shared_types::DeliveryAddress;

use super::draft::AddressDraft;
use super::outcome::{Confidence, InvalidReason, ValidationOutcome};
use super::standardization::StandardizationResponse;
use crate::config::ValidationConfig;

const NOT_DELIVERABLE: &str = "This address is not deliverable";
const NOT_LOCATED: &str = "This address could not be located";

/// Classify a provider response for the given draft.
///
/// Medium confidence is narrowed by the warnings: a rejected secondary
/// designator wins over a missing one, and neither applies unless the draft
/// matches (secondary supplied / not supplied respectively).
pub fn classify(
    draft: &AddressDraft,
    response: &StandardizationResponse,
    config: &ValidationConfig,
) -> ValidationOutcome {
    if !response.is_valid {
        return ValidationOutcome::Invalid(InvalidReason::Remote(remote_message(response)));
    }

    match response.confidence {
        Confidence::High => accept(draft, response),
        Confidence::Medium => {
            let has_secondary = draft.has_secondary();
            if has_secondary
                && response
                    .warnings
                    .iter()
                    .any(|w| rejects_secondary(w, config))
            {
                ValidationOutcome::SecondaryAddressInvalid
            } else if !has_secondary
                && response
                    .warnings
                    .iter()
                    .any(|w| mentions_multi_unit(w, config))
            {
                ValidationOutcome::NeedsSecondaryAddress
            } else {
                accept(draft, response)
            }
        }
        Confidence::Low => {
            ValidationOutcome::Invalid(InvalidReason::Remote(remote_message(response)))
        }
    }
}

/// Whether a warning mentions a multi-unit or building term as a whole word.
pub fn mentions_multi_unit(warning: &str, config: &ValidationConfig) -> bool {
    let words = words(warning);
    config
        .multi_unit_terms
        .iter()
        .any(|term| words.iter().any(|w| w == term))
}

/// Whether a warning says the secondary designator is invalid or unknown.
pub fn rejects_secondary(warning: &str, config: &ValidationConfig) -> bool {
    let lowered = warning.to_lowercase();
    let words = words(warning);
    let names_secondary = config
        .secondary_terms
        .iter()
        .any(|term| words.iter().any(|w| w == term));
    names_secondary
        && config
            .rejection_phrases
            .iter()
            .any(|phrase| lowered.contains(phrase.as_str()))
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn remote_message(response: &StandardizationResponse) -> String {
    response
        .warnings
        .iter()
        .map(|w| w.trim())
        .find(|w| !w.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| NOT_DELIVERABLE.to_string())
}

fn accept(draft: &AddressDraft, response: &StandardizationResponse) -> ValidationOutcome {
    let standardized = response.standardized.as_ref();
    let coordinates = standardized
        .and_then(|s| s.coordinates())
        .or(draft.coordinates.filter(|c| c.is_valid()));

    let Some(coordinates) = coordinates else {
        return ValidationOutcome::Invalid(InvalidReason::Remote(NOT_LOCATED.to_string()));
    };

    let mut address = match standardized {
        Some(s) => {
            let mut address = DeliveryAddress::new(
                s.street.trim(),
                s.city.trim(),
                s.state_code(),
                s.postal_code.trim(),
                coordinates,
            );
            address.secondary = s
                .secondary
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .or_else(|| draft.secondary_trimmed());
            address
        }
        None => {
            let mut address = DeliveryAddress::new(
                draft.street.trim(),
                draft.city.trim(),
                draft.state.trim().to_ascii_uppercase(),
                draft.postal_code.trim(),
                coordinates,
            );
            address.secondary = draft.secondary_trimmed();
            address
        }
    };
    address.label = draft.label;
    address.delivery_instructions = draft
        .delivery_instructions
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    ValidationOutcome::Valid(address)
}
