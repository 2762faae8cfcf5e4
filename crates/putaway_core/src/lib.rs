use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use shared::{
    domain::{Item, ItemId, Quantity},
    error::WorkflowError,
    protocol::{QrPayload, SubmitLocationRequest},
};
use tokio::sync::{broadcast, Mutex};
use tracing::warn;

pub mod config;
pub mod numerals;

pub use config::{load_settings, Settings};
pub use numerals::{EnglishNumerals, NumeralSpeller};

/// Coarse position of the session within the put-away workflow, derived
/// from the state record. Scanning is orthogonal: an initial-location
/// scan can be active during `ItemSelected` and a confirmation scan
/// during `Submitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ItemSelected,
    LocationEntered,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowEvent {
    CatalogLoaded { item_count: usize },
    SelectionChanged { item_id: ItemId },
    ScanningChanged { active: bool },
    ErrorRaised { message: String },
    SubmissionCompleted { qr_payload: String, qr_image_url: String },
}

/// Read-only copy of the observable workflow state for a UI to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSnapshot {
    pub phase: Phase,
    pub catalog: Vec<Item>,
    pub selection: Option<Item>,
    pub unit: String,
    pub quantity: Quantity,
    pub text_numerals: String,
    pub destination_location: String,
    pub scanning: bool,
    pub error: Option<WorkflowError>,
    pub qr_payload: Option<String>,
    pub qr_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub qr_payload: String,
    pub qr_image_url: String,
}

struct WorkflowState {
    catalog: Vec<Item>,
    selection: Option<Item>,
    unit: String,
    quantity: Quantity,
    text_numerals: String,
    destination_location: String,
    scanning: bool,
    error: Option<WorkflowError>,
    qr_payload: Option<String>,
    qr_image_url: Option<String>,
    submit_in_flight: bool,
}

impl WorkflowState {
    fn new() -> Self {
        Self {
            catalog: Vec::new(),
            selection: None,
            unit: String::new(),
            quantity: Quantity::Unset,
            text_numerals: String::new(),
            destination_location: String::new(),
            scanning: false,
            error: None,
            qr_payload: None,
            qr_image_url: None,
            submit_in_flight: false,
        }
    }

    fn phase(&self) -> Phase {
        if self.qr_payload.is_some() {
            Phase::Submitted
        } else if self.selection.is_some() && !self.destination_location.is_empty() {
            Phase::LocationEntered
        } else if self.selection.is_some() {
            Phase::ItemSelected
        } else {
            Phase::Idle
        }
    }
}

/// Location-assignment workflow controller for a put-away station.
///
/// Owns the whole session state behind one lock; every mutation goes
/// through a controller method, so the UI can never observe a partially
/// updated record. The two network calls (catalog fetch, submission)
/// are sequential awaits with no retry; every failure is terminal for
/// that attempt and recovery is manual re-invocation.
pub struct PutawayController {
    http: Client,
    settings: Settings,
    speller: Arc<dyn NumeralSpeller>,
    inner: Mutex<WorkflowState>,
    events: broadcast::Sender<WorkflowEvent>,
}

impl PutawayController {
    pub fn new() -> Self {
        Self::new_with_settings(config::load_settings())
    }

    pub fn new_with_settings(settings: Settings) -> Self {
        Self::new_with_dependencies(settings, Arc::new(EnglishNumerals))
    }

    pub fn new_with_dependencies(settings: Settings, speller: Arc<dyn NumeralSpeller>) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            http: Client::new(),
            settings,
            speller,
            inner: Mutex::new(WorkflowState::new()),
            events,
        }
    }

    /// Fetches the item catalog. Called once on session start; a failed
    /// fetch is diagnostic-only and leaves the catalog empty.
    pub async fn load_catalog(&self) {
        match self.fetch_catalog().await {
            Ok(items) => {
                let item_count = items.len();
                {
                    let mut state = self.inner.lock().await;
                    state.catalog = items;
                }
                let _ = self.events.send(WorkflowEvent::CatalogLoaded { item_count });
            }
            Err(err) => warn!("catalog fetch failed: {err}"),
        }
    }

    /// Selects an item from the loaded catalog and mirrors its unit.
    /// The id must come from the rendered catalog list.
    pub async fn select_item(&self, id: ItemId) -> Result<()> {
        let mut state = self.inner.lock().await;
        let item = state
            .catalog
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| anyhow!("item {} is not present in the loaded catalog", id.0))?;
        state.unit = item.unit.clone();
        state.selection = Some(item);
        state.error = None;
        drop(state);

        let _ = self.events.send(WorkflowEvent::SelectionChanged { item_id: id });
        Ok(())
    }

    /// Parses the raw quantity input. Numeric input is stored with its
    /// text-numeral spelling; anything else is stored as not-a-number
    /// with empty numerals. No validation guard, matching the form.
    pub async fn set_quantity(&self, raw: &str) {
        let (quantity, text_numerals) = match raw.trim().parse::<u64>() {
            Ok(n) => (Quantity::Count(n), self.speller.spell(n)),
            Err(_) => (Quantity::NotANumber, String::new()),
        };

        let mut state = self.inner.lock().await;
        state.quantity = quantity;
        state.text_numerals = text_numerals;
        state.error = None;
    }

    /// Activates the camera scan for the initial location. Requires a
    /// selection; without one the missing-selection error is recorded.
    pub async fn begin_location_scan(&self) -> Result<()> {
        let mut state = self.inner.lock().await;
        if state.selection.is_none() {
            return Err(self.record_error(&mut state, WorkflowError::MissingSelection));
        }
        state.scanning = true;
        state.error = None;
        drop(state);

        let _ = self.events.send(WorkflowEvent::ScanningChanged { active: true });
        Ok(())
    }

    /// Consumes a decoded scan. A non-empty payload deactivates
    /// scanning and becomes the destination location, whichever scan
    /// (initial or confirmation) produced it. Empty decodes are noise
    /// from the scanner and are ignored.
    pub async fn on_scan_result(&self, payload: &str) {
        if payload.is_empty() {
            return;
        }

        {
            let mut state = self.inner.lock().await;
            state.scanning = false;
            state.destination_location = payload.to_string();
            state.error = None;
        }
        let _ = self.events.send(WorkflowEvent::ScanningChanged { active: false });
    }

    /// Scan-capability failures are diagnostic-only.
    pub fn on_scan_error(&self, err: &str) {
        warn!("location scan failed: {err}");
    }

    /// Direct text entry for the destination location.
    pub async fn set_destination_location(&self, text: &str) {
        let mut state = self.inner.lock().await;
        state.destination_location = text.to_string();
        state.error = None;
    }

    /// Validates and submits the location assignment.
    ///
    /// The checks run in order and short-circuit on the first failure:
    /// selection present, destination non-empty, destination allowed
    /// for the item. On HTTP-ok the confirmation QR payload and image
    /// URL are exposed and scanning re-activates for the confirmation
    /// scan. Overlapping submissions are rejected up front.
    pub async fn submit(&self) -> Result<SubmissionOutcome> {
        let (item, location) = {
            let mut state = self.inner.lock().await;
            if state.submit_in_flight {
                return Err(self.record_error(&mut state, WorkflowError::SubmitInFlight));
            }
            let Some(item) = state.selection.clone() else {
                return Err(self.record_error(&mut state, WorkflowError::MissingSelection));
            };
            if state.destination_location.is_empty() {
                return Err(self.record_error(&mut state, WorkflowError::MissingLocation));
            }
            if !item.allows_location(&state.destination_location) {
                return Err(self.record_error(&mut state, WorkflowError::LocationNotAllowed));
            }
            state.submit_in_flight = true;
            (item, state.destination_location.clone())
        };

        let posted = self.post_location_assignment(&item, &location).await;

        let mut state = self.inner.lock().await;
        state.submit_in_flight = false;
        if let Err(err) = posted {
            warn!("location submission failed: {err}");
            return Err(self.record_error(&mut state, WorkflowError::SubmitFailed));
        }

        let payload = QrPayload {
            selected_item: item,
            location,
        };
        let qr_payload =
            serde_json::to_string(&payload).context("failed to encode confirmation QR payload")?;
        let qr_image_url = self.settings.qr_image_url(&qr_payload);

        state.qr_payload = Some(qr_payload.clone());
        state.qr_image_url = Some(qr_image_url.clone());
        state.scanning = true;
        state.error = None;
        drop(state);

        let _ = self.events.send(WorkflowEvent::ScanningChanged { active: true });
        let _ = self.events.send(WorkflowEvent::SubmissionCompleted {
            qr_payload: qr_payload.clone(),
            qr_image_url: qr_image_url.clone(),
        });

        Ok(SubmissionOutcome {
            qr_payload,
            qr_image_url,
        })
    }

    pub async fn snapshot(&self) -> WorkflowSnapshot {
        let state = self.inner.lock().await;
        WorkflowSnapshot {
            phase: state.phase(),
            catalog: state.catalog.clone(),
            selection: state.selection.clone(),
            unit: state.unit.clone(),
            quantity: state.quantity,
            text_numerals: state.text_numerals.clone(),
            destination_location: state.destination_location.clone(),
            scanning: state.scanning,
            error: state.error.clone(),
            qr_payload: state.qr_payload.clone(),
            qr_image_url: state.qr_image_url.clone(),
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<WorkflowEvent> {
        self.events.subscribe()
    }

    fn record_error(&self, state: &mut WorkflowState, err: WorkflowError) -> anyhow::Error {
        state.error = Some(err.clone());
        let _ = self.events.send(WorkflowEvent::ErrorRaised {
            message: err.to_string(),
        });
        err.into()
    }

    async fn fetch_catalog(&self) -> Result<Vec<Item>> {
        let items = self
            .http
            .get(&self.settings.catalog_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(items)
    }

    async fn post_location_assignment(&self, item: &Item, location: &str) -> Result<()> {
        self.http
            .post(&self.settings.submit_url)
            .json(&SubmitLocationRequest {
                item_id: item.id,
                location: location.to_string(),
            })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

impl Default for PutawayController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
