use chrono::NaiveDate;
use schedule_view_cell::services::lifecycle::completion_eligibility;
use shared_models::{AppointmentRecord, CompletionError};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::models::StatusFilter;
use crate::services::source::RecordSource;

#[derive(Debug, Default)]
struct DirectoryState {
    appointments: Vec<AppointmentRecord>,
    is_loading: bool,
    error: Option<String>,
}

/// In-memory snapshot of the clinic's appointments.
///
/// Every fetch replaces the snapshot wholesale; overlapping fetches are not
/// serialized, so the last one to finish wins. A failed fetch keeps the
/// previous snapshot so the dashboard degrades to stale data, not a blank
/// screen.
pub struct AppointmentDirectory<S: RecordSource> {
    source: S,
    state: RwLock<DirectoryState>,
}

impl<S: RecordSource> AppointmentDirectory<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RwLock::new(DirectoryState::default()),
        }
    }

    /// Reloads the snapshot from the backend.
    pub async fn fetch_appointments(&self, filter: StatusFilter) {
        {
            let mut state = self.state.write().await;
            state.is_loading = true;
        }

        let outcome = self.source.fetch(filter).await;

        let mut state = self.state.write().await;
        state.is_loading = false;
        match outcome {
            Ok(rows) => {
                let records: Vec<AppointmentRecord> =
                    rows.into_iter().map(AppointmentRecord::from_raw).collect();
                info!("loaded {} appointment records", records.len());
                state.appointments = records;
                state.error = None;
            }
            Err(err) => {
                warn!("appointment fetch failed, keeping previous snapshot: {err:#}");
                state.error = Some(err.to_string());
            }
        }
    }

    /// The current snapshot. Views work on this copy; a swap mid-render
    /// cannot shear a list.
    pub async fn appointments(&self) -> Vec<AppointmentRecord> {
        self.state.read().await.appointments.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }

    /// Message from the most recent failed fetch, cleared by the next
    /// successful one.
    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Marks an appointment completed after checking eligibility against the
    /// snapshot. The backend is only called for a record that passes.
    pub async fn complete_appointment(
        &self,
        id: &str,
        today: NaiveDate,
    ) -> Result<(), CompletionError> {
        if id.trim().is_empty() {
            return Err(CompletionError::MissingId);
        }

        let record = {
            let state = self.state.read().await;
            state
                .appointments
                .iter()
                .find(|record| record.id == id)
                .cloned()
        };
        let Some(record) = record else {
            return Err(CompletionError::NotFound);
        };

        completion_eligibility(&record, today)?;

        self.source.mark_completed(id).await.map_err(|err| {
            warn!("completing appointment {id} failed upstream: {err:#}");
            CompletionError::Backend(err.to_string())
        })?;

        // No optimistic local edit: the snapshot stays as fetched, and the
        // next fetch observes the change.
        info!("appointment {id} marked completed");

        Ok(())
    }
}
