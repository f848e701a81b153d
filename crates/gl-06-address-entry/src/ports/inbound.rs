//! # Inbound Ports
//!
//! API trait defining what the Address Entry flow can do.

use async_trait::async_trait;
use gl_02_address_validation::{AddressDraft, ValidationOutcome};
use shared_types::DeliveryAddress;

use crate::application::{EntryView, SearchDisposition};
use crate::domain::{EntryError, EntryStep};

/// Address entry flow - inbound port.
#[async_trait]
pub trait AddressEntryApi: Send + Sync {
    /// Debounced, superseding search.
    async fn search(&self, query: &str) -> SearchDisposition;

    /// Prefill Details from the device position.
    async fn use_current_location(&self) -> Result<EntryStep, EntryError>;

    /// Prefill Details from a suggestion of the current result list.
    fn select_suggestion(&self, id: &str) -> Result<EntryStep, EntryError>;

    /// Open an empty Details step.
    fn enter_manually(&self) -> EntryStep;

    /// Replace the Details draft.
    fn edit_details(&self, draft: AddressDraft) -> Result<(), EntryError>;

    /// Validate the draft; only a valid address advances to Verification.
    async fn submit_details(&self) -> Result<ValidationOutcome, EntryError>;

    /// Go one step back.
    fn back(&self) -> EntryStep;

    /// Hand the verified address to the location coordinator.
    async fn confirm(&self) -> Result<DeliveryAddress, EntryError>;

    /// Current view of the flow.
    fn view(&self) -> EntryView;
}
