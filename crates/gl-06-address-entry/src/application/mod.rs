//! # Application Layer
//!
//! The entry flow state machine.

pub mod flow;

pub use flow::{AddressEntryFlow, EntryView, SearchDisposition};
