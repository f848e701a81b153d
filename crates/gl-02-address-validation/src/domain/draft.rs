//! # Address Draft
//!
//! The editable form of an address while the user is still entering it.

use serde::{Deserialize, Serialize};
use shared_types::{AddressLabel, AddressSuggestion, Coordinates, DeliveryAddress};

/// A partially entered address plus its working coordinates.
///
/// `coordinates` start as whatever the suggestion or device reported and are
/// overwritten by the validator once the provider geocodes the address.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressDraft {
    /// Street line.
    pub street: String,
    /// Apartment, suite or unit.
    pub secondary: Option<String>,
    /// City name.
    pub city: String,
    /// State code as typed.
    pub state: String,
    /// ZIP code as typed.
    pub postal_code: String,
    /// Working coordinates.
    pub coordinates: Option<Coordinates>,
    /// Optional label.
    pub label: Option<AddressLabel>,
    /// Courier instructions.
    pub delivery_instructions: Option<String>,
}

impl AddressDraft {
    /// Draft prefilled from a search or reverse-geocode suggestion.
    pub fn from_suggestion(suggestion: &AddressSuggestion) -> Self {
        Self {
            street: suggestion.street.clone(),
            secondary: None,
            city: suggestion.city.clone(),
            state: suggestion.state.clone(),
            postal_code: suggestion.postal_code.clone(),
            coordinates: Some(suggestion.coordinates()),
            label: None,
            delivery_instructions: None,
        }
    }

    /// Draft for editing an existing address.
    pub fn from_address(address: &DeliveryAddress) -> Self {
        Self {
            street: address.street.clone(),
            secondary: address.secondary.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            postal_code: address.postal_code.clone(),
            coordinates: Some(address.coordinates()),
            label: address.label,
            delivery_instructions: address.delivery_instructions.clone(),
        }
    }

    /// Empty draft that only knows where the device is.
    pub fn at(coordinates: Coordinates) -> Self {
        Self {
            coordinates: Some(coordinates),
            ..Default::default()
        }
    }

    /// Whether a non-blank secondary line was supplied.
    pub fn has_secondary(&self) -> bool {
        self.secondary
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    /// Secondary line trimmed, `None` when blank.
    pub fn secondary_trimmed(&self) -> Option<String> {
        self.secondary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_suggestion_carries_coordinates() {
        let suggestion = AddressSuggestion {
            id: "s-1".into(),
            street: "123 Market St".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            postal_code: "94102".into(),
            latitude: 37.7793,
            longitude: -122.4193,
        };
        let draft = AddressDraft::from_suggestion(&suggestion);
        assert_eq!(draft.coordinates, Some(Coordinates::new(37.7793, -122.4193)));
        assert!(!draft.has_secondary());
    }

    #[test]
    fn test_blank_secondary_is_absent() {
        let draft = AddressDraft {
            secondary: Some("   ".into()),
            ..Default::default()
        };
        assert!(!draft.has_secondary());
        assert_eq!(draft.secondary_trimmed(), None);
    }
}
