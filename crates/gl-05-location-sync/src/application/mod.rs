//! # Application Module

pub mod coordinator;

pub use coordinator::LocationSyncCoordinator;
