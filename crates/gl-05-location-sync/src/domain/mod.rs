//! # Domain Module
//!
//! Location state, auth transitions and reconciliation rules.

pub mod auth;
pub mod errors;
pub mod reconcile;
pub mod state;

pub use auth::*;
pub use errors::*;
pub use reconcile::*;
pub use state::*;
