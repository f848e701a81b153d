//! # Structural Rules
//!
//! Local, synchronous checks run before any network call.

use thiserror::Error;

use super::draft::AddressDraft;

/// A structural rule the draft violates.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StructuralViolation {
    /// Street line is blank.
    #[error("Street address is required")]
    EmptyStreet,

    /// City is blank.
    #[error("City is required")]
    EmptyCity,

    /// State is not exactly two letters.
    #[error("State must be a 2-letter code, got '{value}'")]
    InvalidStateCode {
        /// Value as typed
        value: String,
    },

    /// Postal code is not exactly five digits.
    #[error("ZIP code must be exactly 5 digits, got '{value}'")]
    InvalidPostalCode {
        /// Value as typed
        value: String,
    },
}

/// Run the structural rules in field order; the first violation wins.
pub fn check_structure(draft: &AddressDraft) -> Result<(), StructuralViolation> {
    if draft.street.trim().is_empty() {
        return Err(StructuralViolation::EmptyStreet);
    }

    if draft.city.trim().is_empty() {
        return Err(StructuralViolation::EmptyCity);
    }

    if !is_state_code(&draft.state) {
        return Err(StructuralViolation::InvalidStateCode {
            value: draft.state.clone(),
        });
    }

    if !is_postal_code(&draft.postal_code) {
        return Err(StructuralViolation::InvalidPostalCode {
            value: draft.postal_code.clone(),
        });
    }

    Ok(())
}

/// Exactly two ASCII letters after trimming; case is ignored.
pub fn is_state_code(raw: &str) -> bool {
    let code = raw.trim().to_ascii_uppercase();
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Exactly five ASCII digits after trimming. Lexical only, no checksum.
pub fn is_postal_code(raw: &str) -> bool {
    let zip = raw.trim();
    zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit())
}
