//! # Adapters
//!
//! Implementations of the subsystem outbound ports.

mod dto;
pub mod geolocation;
pub mod http;

pub use geolocation::FixedGeolocation;
pub use http::{
    ApiClient, HttpAccountGateway, HttpAddressGateway, HttpValidationGateway, HttpZoneGateway,
};
