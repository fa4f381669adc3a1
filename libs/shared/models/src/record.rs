use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::status::VisitStatus;
use crate::temporal;

/// Reserved patient name the upstream booking system writes on unbooked slots.
pub const OPEN_SLOT_PATIENT_NAME: &str = "Available Slot";
/// Placeholder patient id used interchangeably with an empty one.
pub const OPEN_SLOT_PATIENT_ID: &str = "0";
/// Duration assumed when a record arrives without one.
pub const DEFAULT_VISIT_MINUTES: u32 = 30;

/// An appointment row exactly as the upstream feed delivers it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAppointment {
    pub id: String,
    #[serde(default)]
    pub patient_id: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    pub visit_date: String,
    pub start_time: String,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub status: String,
}

/// Whether a slot holds a real booking or is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Booked,
    OpenSlot,
}

impl SlotKind {
    /// A slot is open when its patient id is blank or the "0" placeholder,
    /// or when it carries the reserved open-slot patient name.
    pub fn classify(patient_id: Option<&str>, patient_name: Option<&str>) -> Self {
        let blank_id = patient_id.map_or(true, |id| {
            let id = id.trim();
            id.is_empty() || id == OPEN_SLOT_PATIENT_ID
        });
        let reserved_name =
            patient_name.map_or(false, |name| name.trim() == OPEN_SLOT_PATIENT_NAME);

        if blank_id || reserved_name {
            Self::OpenSlot
        } else {
            Self::Booked
        }
    }
}

/// A normalized appointment.
///
/// Built from a [`RawAppointment`] exactly once at ingestion; the derived
/// status, kind and instant are read-only from then on so every view works
/// from the same facts.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentRecord {
    pub id: String,
    pub patient_id: Option<String>,
    pub patient_name: Option<String>,
    pub visit_date: String,
    pub start_time: String,
    pub duration_minutes: Option<u32>,
    pub raw_status: String,
    status: VisitStatus,
    kind: SlotKind,
    starts_at: Option<NaiveDateTime>,
}

impl AppointmentRecord {
    pub fn from_raw(raw: RawAppointment) -> Self {
        let status = VisitStatus::from_raw(&raw.status);
        let kind = SlotKind::classify(raw.patient_id.as_deref(), raw.patient_name.as_deref());
        let starts_at = temporal::parse_visit_instant(&raw.visit_date, &raw.start_time);

        Self {
            id: raw.id,
            patient_id: raw.patient_id,
            patient_name: raw.patient_name,
            visit_date: raw.visit_date,
            start_time: raw.start_time,
            duration_minutes: raw.duration_minutes,
            raw_status: raw.status,
            status,
            kind,
            starts_at,
        }
    }

    pub fn status(&self) -> VisitStatus {
        self.status
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    /// Canonical start instant, or `None` when either raw field was
    /// unparseable. Undated records are excluded from all date math.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        self.starts_at
    }

    pub fn visit_day(&self) -> Option<NaiveDate> {
        self.starts_at.map(|at| at.date())
    }

    pub fn day_key(&self) -> Option<String> {
        self.visit_day().map(temporal::day_key)
    }

    pub fn effective_duration_minutes(&self) -> u32 {
        self.duration_minutes.unwrap_or(DEFAULT_VISIT_MINUTES)
    }

    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        self.starts_at
            .map(|at| at + Duration::minutes(i64::from(self.effective_duration_minutes())))
    }

    pub fn is_open_slot(&self) -> bool {
        self.kind == SlotKind::OpenSlot
    }

    pub fn is_booked(&self) -> bool {
        self.kind == SlotKind::Booked
    }

    /// Name shown on schedule entries.
    pub fn display_name(&self) -> &str {
        match self.kind {
            SlotKind::OpenSlot => OPEN_SLOT_PATIENT_NAME,
            SlotKind::Booked => self.patient_name.as_deref().unwrap_or("Unknown"),
        }
    }
}
