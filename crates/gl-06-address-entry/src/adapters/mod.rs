//! # Adapters

pub mod coordinator;

pub use coordinator::CoordinatorSink;
