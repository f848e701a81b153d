//! # GL-02 Address Validation
//!
//! Multi-stage validation of a user-entered delivery address.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Pipeline
//!
//! ```text
//! AddressDraft ──▶ structural check ──fail──▶ Invalid(Structural)      (no network)
//!                        │
//!                        ▼
//!                remote standardization ──transport──▶ ValidationFailed (retry)
//!                        │            └──rejected───▶ Invalid(Remote)
//!                        ▼
//!                 classification ──▶ Valid | NeedsSecondaryAddress
//!                                    | SecondaryAddressInvalid | Invalid(Remote)
//! ```
//!
//! No state is retained between attempts. The only side effect is on the
//! caller's draft: when the provider geocodes the address, the draft's
//! working coordinates are replaced so the zone lookup uses the
//! standardized location instead of the typed one.
//!
//! ## Module Structure
//!
//! ```text
//! gl-02-address-validation/
//! ├── domain/          # AddressDraft, ValidationOutcome, structural rules, classification
//! ├── ports/           # AddressValidatorApi (inbound) + StandardizationGateway (outbound)
//! ├── application/     # AddressValidationService
//! ├── metrics.rs       # Prometheus counters (feature = "metrics")
//! └── config.rs        # ValidationConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;

// Re-exports
pub use application::AddressValidationService;
pub use config::ValidationConfig;
pub use domain::{
    check_structure, classify, AddressDraft, Confidence, InvalidReason, StandardizationError,
    StandardizationRequest, StandardizationResponse, StandardizedAddress, StructuralViolation,
    ValidationOutcome,
};
pub use ports::{AddressValidatorApi, MockStandardizationGateway, StandardizationGateway};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
