//! # Domain Module

pub mod errors;
pub mod sequencer;
pub mod step;

pub use errors::*;
pub use sequencer::*;
pub use step::*;
