//! # Grocer Location Test Suite
//!
//! Cross-subsystem scenarios run against the real services wired over the
//! mock gateways each subsystem exports.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs       # Addresses, zones, the wired stack
//!     ├── entry_to_sync.rs  # Entry flow (06) driving the coordinator (05)
//!     ├── persistence.rs    # Cache (04) across restarts
//!     └── accounts.rs       # Sign-in reconciliation with the entry flow
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gl-tests
//! cargo test -p gl-tests integration::persistence::
//! ```

#![allow(dead_code)]

pub mod integration;
