//! # Shared Types Crate
//!
//! This crate contains the location entities exchanged between the
//! delivery-location subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `DeliveryAddress`, `AddressSuggestion` and
//!   `ZoneInfo` are defined here and nowhere else.
//! - **Values, not handles**: every type is plain data (`Clone + Serialize`),
//!   so snapshots can be handed to readers without sharing mutable state.
//! - **Normalized on ingestion**: state names are converted to 2-letter codes
//!   at the edges (see [`us_states`]).

pub mod entities;
pub mod errors;
pub mod us_states;

pub use entities::*;
pub use errors::*;
pub use us_states::normalize_state;
