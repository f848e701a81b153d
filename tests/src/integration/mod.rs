//! # Integration Scenarios

pub mod accounts;
pub mod entry_to_sync;
pub mod fixtures;
pub mod persistence;
