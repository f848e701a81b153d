//! # Domain Module
//!
//! Core domain types for Address Validation.

pub mod classification;
pub mod draft;
pub mod outcome;
pub mod standardization;
pub mod structural;

pub use classification::*;
pub use draft::*;
pub use outcome::*;
pub use standardization::*;
pub use structural::*;
