//! # Domain Module
//!
//! Zone lookup interpretation and delivery promise formatting.

pub mod errors;
pub mod lookup;
pub mod promise;

pub use errors::*;
pub use lookup::*;
pub use promise::*;
