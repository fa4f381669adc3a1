use chrono::{Duration, NaiveDate, NaiveDateTime};
use shared_config::AppConfig;
use shared_models::{AppointmentRecord, CompletionError, VisitStatus};
use tracing::debug;

/// Checks whether a record may be marked completed today.
///
/// Checks run in a fixed order so the caller always sees the same rejection
/// for the same record: identity first, then kind, then status, then day.
pub fn completion_eligibility(
    record: &AppointmentRecord,
    today: NaiveDate,
) -> Result<(), CompletionError> {
    if record.id.trim().is_empty() {
        return Err(CompletionError::MissingId);
    }

    if record.is_open_slot() {
        return Err(CompletionError::OpenSlot);
    }

    match record.status() {
        VisitStatus::Cancelled => return Err(CompletionError::Cancelled),
        VisitStatus::Completed => return Err(CompletionError::AlreadyCompleted),
        VisitStatus::Scheduled | VisitStatus::Expired => {}
    }

    match record.visit_day() {
        Some(day) if day == today => Ok(()),
        _ => {
            debug!(appointment_id = %record.id, "completion refused outside the scheduled day");
            Err(CompletionError::NotToday)
        }
    }
}

/// How long past its scheduled end a visit may run before the sweep marks
/// it expired.
#[derive(Debug, Clone, Copy)]
pub struct ExpiryPolicy {
    pub grace: Duration,
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self {
            grace: Duration::zero(),
        }
    }
}

impl ExpiryPolicy {
    pub fn with_grace_hours(hours: i64) -> Self {
        Self {
            grace: Duration::hours(hours.max(0)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_grace_hours(config.expiry_grace_hours)
    }
}

/// True when a booked, still-scheduled visit has run past its end plus the
/// policy grace. Terminal records and open slots are never swept.
pub fn should_mark_expired(
    record: &AppointmentRecord,
    now: NaiveDateTime,
    policy: ExpiryPolicy,
) -> bool {
    if record.status() != VisitStatus::Scheduled || !record.is_booked() {
        return false;
    }

    match record.ends_at() {
        Some(end) => now > end + policy.grace,
        None => false,
    }
}
