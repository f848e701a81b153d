//! # Inbound Ports
//!
//! API trait defining what Address Search can do.

use async_trait::async_trait;
use shared_types::{AddressSuggestion, Coordinates};

/// Address suggestion source - inbound port.
///
/// Neither method fails: transport problems yield an empty list or `None`
/// and the caller decides whether to show an error.
#[async_trait]
pub trait AddressSuggestionSource: Send + Sync {
    /// Ranked suggestions for a free-text query.
    ///
    /// Queries shorter than the configured minimum return an empty list
    /// without a network call.
    async fn search(&self, query: &str) -> Vec<AddressSuggestion>;

    /// Street-level address at `coordinates`.
    ///
    /// `None` means "coordinates only": ask the user to complete the street
    /// address. It is not an error.
    async fn reverse_geocode(&self, coordinates: Coordinates) -> Option<AddressSuggestion>;
}
