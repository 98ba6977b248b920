//! Submission controller for the contact form.
//!
//! Owns the form state (input values, field errors, submission status) and
//! moves it through the submit cycle: validate, mark pending, insert, then
//! record success or failure.

use crate::client::AsyncStorageClient;
use crate::config::DEFAULT_TABLE;
use crate::domain::Field;
use crate::error::StorageError;
use crate::metrics::Metrics;
use crate::models::{RawContact, SubmissionStatus};
use crate::schema::{self, FieldErrors};
use crate::view::FormView;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Status message used when a pending submission is dropped before it resolves.
const CANCELLED_REASON: &str = "solicitud cancelada";

/// Everything the form displays, owned by one controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: RawContact,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
}

/// What a submit trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Validation failed; field errors were published and nothing was sent.
    Invalid,

    /// The record was stored and the form cleared.
    Saved,

    /// Storage rejected the record; input was kept for a retry.
    Failed,

    /// A submission was already pending; the trigger had no effect.
    Ignored,
}

/// Mediates between user input, the validation schema and the storage client.
///
/// At most one storage request is outstanding per controller: submit triggers
/// that arrive while the status is `Pending` are ignored. The state lock is
/// never held across the storage call.
pub struct SubmissionController {
    client: Arc<dyn AsyncStorageClient>,
    table: String,
    timeout: Option<Duration>,
    metrics: Metrics,
    state: Mutex<FormState>,
}

impl SubmissionController {
    /// Create a controller that inserts into the default `contactos` table.
    pub fn new(client: Arc<dyn AsyncStorageClient>) -> Self {
        Self {
            client,
            table: DEFAULT_TABLE.to_string(),
            timeout: None,
            metrics: Metrics::new(),
            state: Mutex::new(FormState::default()),
        }
    }

    /// Insert into a different table.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Fail a pending submission if storage has not answered within `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Share a metrics collector, typically the storage client's.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// User typed into one input.
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.lock().values.set(field, value);
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> FormState {
        self.lock().clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.lock().status.clone()
    }

    /// Render model of the current state.
    pub fn view(&self) -> FormView {
        FormView::from_state(&self.lock())
    }

    /// Handle a submit trigger.
    ///
    /// Never returns an error: validation failures land in the field errors,
    /// storage failures in the status.
    pub async fn submit(&self) -> SubmitOutcome {
        let record = {
            let mut state = self.lock();

            if state.status.is_pending() {
                tracing::debug!("Submit ignored: a submission is already pending");
                self.metrics.record_submission_ignored();
                return SubmitOutcome::Ignored;
            }

            match schema::validate(&state.values) {
                Err(errors) => {
                    tracing::debug!("Submit blocked by {} field error(s)", errors.len());
                    state.errors = errors;
                    self.metrics.record_submission_rejected();
                    return SubmitOutcome::Invalid;
                }
                Ok(record) => {
                    state.errors = FieldErrors::default();
                    state.status = SubmissionStatus::Pending;
                    record
                }
            }
        };

        self.metrics.record_submission_accepted();
        tracing::info!("Submitting contact to table '{}'", self.table);

        let mut guard = PendingGuard { controller: self, armed: true };
        let rows = std::slice::from_ref(&record);
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.client.insert(&self.table, rows))
                .await
                .unwrap_or(Err(StorageError::Timeout)),
            None => self.client.insert(&self.table, rows).await,
        };
        guard.armed = false;

        let mut state = self.lock();
        match result {
            Ok(()) => {
                tracing::info!("Contact saved");
                state.status = SubmissionStatus::succeeded();
                state.values.clear();
                state.errors = FieldErrors::default();
                SubmitOutcome::Saved
            }
            Err(e) => {
                tracing::error!("Error al guardar datos: {}", e);
                state.status = SubmissionStatus::failed(e.message());
                SubmitOutcome::Failed
            }
        }
    }
}

/// Leaves the form retryable if a submit future is dropped while pending.
struct PendingGuard<'a> {
    controller: &'a SubmissionController,
    armed: bool,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::warn!("Pending submission dropped before storage answered");
            let mut state = self.controller.lock();
            if state.status.is_pending() {
                state.status = SubmissionStatus::failed(CANCELLED_REASON);
            }
        }
    }
}
