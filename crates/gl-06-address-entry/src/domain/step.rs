//! Steps of the entry flow and what the Details step is asking for.

use serde::{Deserialize, Serialize};

/// Where the user is in `Search → Details → Verification`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryStep {
    /// Typing a query, picking a suggestion.
    #[default]
    Search,
    /// Completing and correcting the address fields.
    Details,
    /// Reviewing the standardized address before confirming.
    Verification,
}

impl EntryStep {
    /// Step reached by going back.
    pub fn previous(self) -> Self {
        match self {
            Self::Search | Self::Details => Self::Search,
            Self::Verification => Self::Details,
        }
    }
}

/// Inline prompt shown on the Details step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailsPrompt {
    /// Only coordinates are known; the street is missing.
    CompleteStreetAddress,
    /// Multi-unit building; apartment or suite needed.
    AddSecondaryAddress,
    /// The apartment or suite given was not recognized.
    CheckSecondaryAddress,
    /// The address was rejected.
    Invalid(String),
    /// Verification could not run; try again.
    RetryValidation,
}

impl DetailsPrompt {
    /// Text for the prompt.
    pub fn message(&self) -> String {
        match self {
            Self::CompleteStreetAddress => "Please complete your street address.".into(),
            Self::AddSecondaryAddress => "Please add an apartment or suite number.".into(),
            Self::CheckSecondaryAddress => {
                "We couldn't find that apartment or suite number.".into()
            }
            Self::Invalid(reason) => reason.clone(),
            Self::RetryValidation => "We couldn't verify your address. Please try again.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_transitions() {
        assert_eq!(EntryStep::Verification.previous(), EntryStep::Details);
        assert_eq!(EntryStep::Details.previous(), EntryStep::Search);
        assert_eq!(EntryStep::Search.previous(), EntryStep::Search);
    }
}
