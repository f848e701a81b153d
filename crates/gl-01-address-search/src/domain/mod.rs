//! # Domain Module
//!
//! Core domain types for Address Search.

pub mod query;

pub use query::*;
