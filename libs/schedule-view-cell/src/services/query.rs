use chrono::{Duration, NaiveDate, NaiveDateTime};
use shared_models::{AppointmentRecord, VisitStatus};

// Every filter is pure: inputs are never mutated and results are fresh
// allocations. Records without a parseable instant are silently excluded
// from date math rather than treated as errors.

/// Records whose visit day equals `day`.
pub fn on_date(records: &[AppointmentRecord], day: NaiveDate) -> Vec<AppointmentRecord> {
    records
        .iter()
        .filter(|record| record.visit_day() == Some(day))
        .cloned()
        .collect()
}

/// Records whose visit day falls inside `start..=end`.
///
/// The comparison is day-level, so a record at any time of day on a boundary
/// date is included. An inverted range matches nothing.
pub fn in_range(
    records: &[AppointmentRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<AppointmentRecord> {
    records
        .iter()
        .filter(|record| matches!(record.visit_day(), Some(day) if start <= day && day <= end))
        .cloned()
        .collect()
}

/// Today's still-scheduled entries.
pub fn today_schedule(records: &[AppointmentRecord], today: NaiveDate) -> Vec<AppointmentRecord> {
    on_date(records, today)
        .into_iter()
        .filter(|record| record.status() == VisitStatus::Scheduled)
        .collect()
}

/// Scheduled visits starting strictly after `now` and no later than
/// `now + hours`.
pub fn upcoming_within_hours(
    records: &[AppointmentRecord],
    now: NaiveDateTime,
    hours: i64,
) -> Vec<AppointmentRecord> {
    let horizon = now + Duration::hours(hours.max(0));

    in_range(records, now.date(), horizon.date())
        .into_iter()
        .filter(|record| record.status() == VisitStatus::Scheduled)
        .filter(|record| {
            record
                .starts_at()
                .map_or(false, |at| at > now && at <= horizon)
        })
        .collect()
}

/// Entries that slipped past without resolution.
///
/// A record is past due when it is marked expired, or when its day is
/// strictly before `today` — a booked slot still sitting in Scheduled by
/// then was missed even if nothing upstream ever marked it.
pub fn past_due(records: &[AppointmentRecord], today: NaiveDate) -> Vec<AppointmentRecord> {
    records
        .iter()
        .filter(|record| is_past_due(record, today))
        .cloned()
        .collect()
}

pub(crate) fn is_past_due(record: &AppointmentRecord, today: NaiveDate) -> bool {
    if record.status() == VisitStatus::Expired {
        return true;
    }

    match record.visit_day() {
        Some(day) if day < today => match record.status() {
            VisitStatus::Scheduled => record.is_booked(),
            VisitStatus::Completed | VisitStatus::Cancelled | VisitStatus::Expired => true,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_models::RawAppointment;

    fn record(id: &str, visit_date: &str, start_time: &str, status: &str) -> AppointmentRecord {
        AppointmentRecord::from_raw(RawAppointment {
            id: id.to_string(),
            patient_id: Some("p-1".to_string()),
            patient_name: Some("Ada Lovelace".to_string()),
            visit_date: visit_date.to_string(),
            start_time: start_time.to_string(),
            duration_minutes: Some(30),
            status: status.to_string(),
        })
    }

    fn open_slot(id: &str, visit_date: &str, start_time: &str) -> AppointmentRecord {
        AppointmentRecord::from_raw(RawAppointment {
            id: id.to_string(),
            patient_id: None,
            patient_name: Some("Available Slot".to_string()),
            visit_date: visit_date.to_string(),
            start_time: start_time.to_string(),
            duration_minutes: Some(30),
            status: "scheduled".to_string(),
        })
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids(records: &[AppointmentRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn on_date_matches_both_date_shapes() {
        let records = vec![
            record("bare", "2025-03-10", "09:00", "scheduled"),
            record("stamped", "2025-03-10T00:00:00Z", "10:00", "scheduled"),
            record("other-day", "2025-03-11", "09:00", "scheduled"),
            record("undated", "n/a", "09:00", "scheduled"),
        ];

        let matched = on_date(&records, day(2025, 3, 10));
        assert_eq!(ids(&matched), vec!["bare", "stamped"]);
    }

    #[test]
    fn in_range_is_inclusive_at_both_boundaries() {
        let records = vec![
            record("before", "2025-03-09", "23:00", "scheduled"),
            record("first", "2025-03-10", "00:30", "scheduled"),
            record("last", "2025-03-16", "23:30", "scheduled"),
            record("after", "2025-03-17", "00:30", "scheduled"),
        ];

        let matched = in_range(&records, day(2025, 3, 10), day(2025, 3, 16));
        assert_eq!(ids(&matched), vec!["first", "last"]);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let records = vec![record("a", "2025-03-10", "09:00", "scheduled")];
        assert!(in_range(&records, day(2025, 3, 16), day(2025, 3, 10)).is_empty());
    }

    #[test]
    fn today_schedule_keeps_only_still_scheduled() {
        let records = vec![
            record("live", "2025-03-10", "09:00", "scheduled"),
            record("done", "2025-03-10", "10:00", "completed"),
            record("gone", "2025-03-10", "11:00", "cancelled"),
            record("tomorrow", "2025-03-11", "09:00", "scheduled"),
        ];

        let matched = today_schedule(&records, day(2025, 3, 10));
        assert_eq!(ids(&matched), vec!["live"]);
    }

    #[test]
    fn upcoming_window_is_exclusive_start_inclusive_end() {
        let now = day(2025, 3, 10).and_hms_opt(12, 0, 0).unwrap();
        let records = vec![
            record("at-now", "2025-03-10", "12:00", "scheduled"),
            record("soon", "2025-03-10", "12:01", "scheduled"),
            record("at-horizon", "2025-03-11", "12:00", "scheduled"),
            record("too-late", "2025-03-11", "12:01", "scheduled"),
            record("done", "2025-03-10", "15:00", "completed"),
        ];

        let matched = upcoming_within_hours(&records, now, 24);
        assert_eq!(ids(&matched), vec!["soon", "at-horizon"]);
    }

    #[test]
    fn past_due_catches_misses_and_expired_marks() {
        let today = day(2025, 3, 11);
        let records = vec![
            // A 2025-03-10 booked visit still scheduled on the 11th was missed.
            record("missed", "2025-03-10", "09:00", "scheduled"),
            record("old-done", "2025-03-10", "10:00", "completed"),
            record("flagged-today", "2025-03-11", "09:00", "expired"),
            record("still-coming", "2025-03-12", "09:00", "scheduled"),
            open_slot("stale-slot", "2025-03-10", "11:00"),
        ];

        let matched = past_due(&records, today);
        assert_eq!(ids(&matched), vec!["missed", "old-done", "flagged-today"]);
    }

    #[test]
    fn unbooked_slots_are_never_missed() {
        let records = vec![open_slot("slot", "2025-03-01", "09:00")];
        assert!(past_due(&records, day(2025, 3, 11)).is_empty());
    }

    #[test]
    fn filters_leave_the_input_untouched() {
        let records = vec![
            record("b", "2025-03-10", "10:00", "scheduled"),
            record("a", "2025-03-10", "09:00", "scheduled"),
        ];

        let _ = on_date(&records, day(2025, 3, 10));
        let _ = past_due(&records, day(2025, 3, 11));

        assert_eq!(ids(&records), vec!["b", "a"]);
    }
}
