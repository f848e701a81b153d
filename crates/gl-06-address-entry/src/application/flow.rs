//! # Address Entry Flow
//!
//! `Search → Details → Verification`, with `back()` one step at a time.
//! Search results go through a [`SearchSequencer`]; everything else lives
//! in one short-held lock that is never kept across an await.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use gl_01_address_search::AddressSuggestionSource;
use gl_02_address_validation::{AddressDraft, AddressValidatorApi, ValidationOutcome};
use shared_types::{AddressSuggestion, DeliveryAddress};

use crate::config::AddressEntryConfig;
use crate::domain::{DetailsPrompt, EntryError, EntryStep, SearchSequencer};
use crate::ports::{
    AddressEntryApi, DeliveryAddressSink, GeolocationProvider, LocationPermission,
};

/// What happened to one `search` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchDisposition {
    /// Its results are now shown.
    Applied,
    /// A newer search took over; its results (if any) were dropped.
    Superseded,
    /// Query below the minimum length; suggestions cleared, no network call.
    TooShort,
}

/// Read-only view of the flow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryView {
    /// Current step.
    pub step: EntryStep,
    /// Last query typed.
    pub query: String,
    /// Suggestions of the newest applied search.
    pub suggestions: Vec<AddressSuggestion>,
    /// Details draft.
    pub draft: AddressDraft,
    /// Inline prompt on the Details step.
    pub prompt: Option<DetailsPrompt>,
    /// Address awaiting confirmation.
    pub verified: Option<DeliveryAddress>,
}

#[derive(Default)]
struct FlowState {
    step: EntryStep,
    /// Bumped on every draft replacement or edit.
    revision: u64,
    query: String,
    draft: AddressDraft,
    prompt: Option<DetailsPrompt>,
    verified: Option<DeliveryAddress>,
}

/// Address Entry Flow - implements [`AddressEntryApi`].
pub struct AddressEntryFlow<S, V, G, D>
where
    S: AddressSuggestionSource,
    V: AddressValidatorApi,
    G: GeolocationProvider,
    D: DeliveryAddressSink,
{
    config: AddressEntryConfig,
    source: Arc<S>,
    validator: Arc<V>,
    geolocation: Arc<G>,
    sink: Arc<D>,
    searches: SearchSequencer<Vec<AddressSuggestion>>,
    state: Mutex<FlowState>,
}

impl<S, V, G, D> AddressEntryFlow<S, V, G, D>
where
    S: AddressSuggestionSource,
    V: AddressValidatorApi,
    G: GeolocationProvider,
    D: DeliveryAddressSink,
{
    /// Create a flow at the Search step.
    pub fn new(
        config: AddressEntryConfig,
        source: Arc<S>,
        validator: Arc<V>,
        geolocation: Arc<G>,
        sink: Arc<D>,
    ) -> Self {
        Self {
            config,
            source,
            validator,
            geolocation,
            sink,
            searches: SearchSequencer::new(),
            state: Mutex::new(FlowState::default()),
        }
    }

    /// Current step.
    pub fn step(&self) -> EntryStep {
        self.state.lock().step
    }

    fn open_details(&self, draft: AddressDraft, prompt: Option<DetailsPrompt>) -> EntryStep {
        // Leaving Search: results still in flight must not land later.
        self.searches.issue();
        Self::replace_draft(&mut self.state.lock(), draft, prompt)
    }

    /// Like `open_details`, unless the form moved on since `seen`.
    fn reopen_details(
        &self,
        seen: (EntryStep, u64),
        draft: AddressDraft,
        prompt: Option<DetailsPrompt>,
    ) -> Result<EntryStep, EntryError> {
        let mut state = self.state.lock();
        if (state.step, state.revision) != seen {
            debug!("[gl-06] Form changed during location lookup; result dropped");
            return Err(EntryError::DraftChanged);
        }
        self.searches.issue();
        Ok(Self::replace_draft(&mut state, draft, prompt))
    }

    fn replace_draft(
        state: &mut FlowState,
        draft: AddressDraft,
        prompt: Option<DetailsPrompt>,
    ) -> EntryStep {
        state.draft = draft;
        state.revision += 1;
        state.prompt = prompt;
        state.verified = None;
        state.step = EntryStep::Details;
        state.step
    }

    fn mark(&self) -> (EntryStep, u64) {
        let state = self.state.lock();
        (state.step, state.revision)
    }

    fn require(&self, expected: EntryStep) -> Result<(), EntryError> {
        let actual = self.state.lock().step;
        if actual == expected {
            Ok(())
        } else {
            Err(EntryError::WrongStep { expected, actual })
        }
    }
}

#[async_trait]
impl<S, V, G, D> AddressEntryApi for AddressEntryFlow<S, V, G, D>
where
    S: AddressSuggestionSource + 'static,
    V: AddressValidatorApi + 'static,
    G: GeolocationProvider + 'static,
    D: DeliveryAddressSink + 'static,
{
    async fn search(&self, query: &str) -> SearchDisposition {
        let ticket = self.searches.issue();
        self.state.lock().query = query.to_string();

        let trimmed = query.trim();
        if trimmed.chars().count() < self.config.min_query_len {
            self.searches.offer(ticket, Vec::new());
            return SearchDisposition::TooShort;
        }

        tokio::time::sleep(Duration::from_millis(self.config.debounce_ms)).await;
        if !self.searches.is_latest(ticket) {
            return SearchDisposition::Superseded;
        }

        let results = self.source.search(trimmed).await;
        let count = results.len();
        if self.searches.offer(ticket, results) {
            debug!("[gl-06] Showing {} suggestions for '{}'", count, trimmed);
            SearchDisposition::Applied
        } else {
            debug!("[gl-06] Dropping stale results for '{}'", trimmed);
            SearchDisposition::Superseded
        }
    }

    async fn use_current_location(&self) -> Result<EntryStep, EntryError> {
        let seen = self.mark();
        if self.geolocation.request_permission().await == LocationPermission::Denied {
            info!("[gl-06] Location permission denied");
            return Err(EntryError::PermissionDenied);
        }

        let coordinates = self.geolocation.current_position().await.map_err(|e| {
            warn!("[gl-06] Could not read device position: {}", e);
            EntryError::from(e)
        })?;

        let step = match self.source.reverse_geocode(coordinates).await {
            Some(suggestion) => {
                self.reopen_details(seen, AddressDraft::from_suggestion(&suggestion), None)?
            }
            None => self.reopen_details(
                seen,
                AddressDraft::at(coordinates),
                Some(DetailsPrompt::CompleteStreetAddress),
            )?,
        };
        Ok(step)
    }

    fn select_suggestion(&self, id: &str) -> Result<EntryStep, EntryError> {
        let suggestion = self
            .searches
            .current()
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| EntryError::UnknownSuggestion(id.to_string()))?;
        Ok(self.open_details(AddressDraft::from_suggestion(&suggestion), None))
    }

    fn enter_manually(&self) -> EntryStep {
        self.open_details(AddressDraft::default(), None)
    }

    fn edit_details(&self, draft: AddressDraft) -> Result<(), EntryError> {
        self.require(EntryStep::Details)?;
        let mut state = self.state.lock();
        state.draft = draft;
        state.revision += 1;
        state.prompt = None;
        Ok(())
    }

    async fn submit_details(&self) -> Result<ValidationOutcome, EntryError> {
        self.require(EntryStep::Details)?;
        let (mut draft, revision) = {
            let state = self.state.lock();
            (state.draft.clone(), state.revision)
        };

        let outcome = self.validator.validate(&mut draft).await;

        let mut state = self.state.lock();
        if state.step != EntryStep::Details {
            return Err(EntryError::WrongStep {
                expected: EntryStep::Details,
                actual: state.step,
            });
        }
        if state.revision != revision {
            debug!(
                "[gl-06] Details edited during validation; dropping '{}' outcome",
                outcome.label()
            );
            return Err(EntryError::DraftChanged);
        }
        state.draft = draft;
        match &outcome {
            ValidationOutcome::Valid(address) => {
                state.verified = Some(address.clone());
                state.prompt = None;
                state.step = EntryStep::Verification;
            }
            ValidationOutcome::NeedsSecondaryAddress => {
                state.prompt = Some(DetailsPrompt::AddSecondaryAddress);
            }
            ValidationOutcome::SecondaryAddressInvalid => {
                state.prompt = Some(DetailsPrompt::CheckSecondaryAddress);
            }
            ValidationOutcome::Invalid(reason) => {
                state.prompt = Some(DetailsPrompt::Invalid(reason.to_string()));
            }
            ValidationOutcome::ValidationFailed(_) => {
                state.prompt = Some(DetailsPrompt::RetryValidation);
            }
        }
        Ok(outcome)
    }

    fn back(&self) -> EntryStep {
        let mut state = self.state.lock();
        match state.step {
            EntryStep::Verification => state.verified = None,
            EntryStep::Details => state.prompt = None,
            EntryStep::Search => {}
        }
        state.step = state.step.previous();
        state.step
    }

    async fn confirm(&self) -> Result<DeliveryAddress, EntryError> {
        self.require(EntryStep::Verification)?;
        let Some(address) = self.state.lock().verified.clone() else {
            return Err(EntryError::WrongStep {
                expected: EntryStep::Verification,
                actual: EntryStep::Details,
            });
        };

        if let Err(e) = self.sink.deliver_to(address.clone()).await {
            warn!("[gl-06] Confirm failed, staying on verification: {}", e);
            return Err(EntryError::Delivery(e));
        }

        info!("[gl-06] Delivery address confirmed: {}", address.one_line());
        self.searches.reset();
        {
            let mut state = self.state.lock();
            let revision = state.revision + 1;
            *state = FlowState {
                revision,
                ..FlowState::default()
            };
        }
        Ok(address)
    }

    fn view(&self) -> EntryView {
        let state = self.state.lock();
        EntryView {
            step: state.step,
            query: state.query.clone(),
            suggestions: self.searches.current(),
            draft: state.draft.clone(),
            prompt: state.prompt.clone(),
            verified: state.verified.clone(),
        }
    }
}
