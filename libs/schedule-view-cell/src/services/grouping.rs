use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use shared_models::{temporal, AppointmentRecord};

use crate::models::WeekWindow;

/// Stable ascending sort by canonical instant.
///
/// Stability matters: ties keep their original relative order, so repeated
/// re-sorts between renders never visibly shuffle the list. Undated records
/// sink to the end in their original order.
pub fn sort_by_instant(records: &[AppointmentRecord]) -> Vec<AppointmentRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| match (a.starts_at(), b.starts_at()) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

/// Buckets records under their canonical "YYYY-MM-DD" key.
///
/// Keys iterate in chronological order. Undated records are left out.
pub fn group_by_day(records: &[AppointmentRecord]) -> BTreeMap<String, Vec<AppointmentRecord>> {
    let mut buckets: BTreeMap<String, Vec<AppointmentRecord>> = BTreeMap::new();
    for record in records {
        if let Some(key) = record.day_key() {
            buckets.entry(key).or_default().push(record.clone());
        }
    }
    buckets
}

/// Partitions records into Monday-start week windows, ascending by window
/// start. Only weeks that actually hold a record are returned; each window's
/// records are sorted by instant.
pub fn weeks_with_records(records: &[AppointmentRecord]) -> Vec<WeekWindow> {
    let mut windows: BTreeMap<NaiveDate, Vec<AppointmentRecord>> = BTreeMap::new();
    for record in records {
        if let Some(day) = record.visit_day() {
            windows
                .entry(temporal::week_start(day))
                .or_default()
                .push(record.clone());
        }
    }

    windows
        .into_iter()
        .map(|(start, records)| WeekWindow {
            start,
            end: temporal::week_end(start),
            records: sort_by_instant(&records),
        })
        .collect()
}

/// Index of the window containing `reference`, or `None` when that week has
/// no records. Callers fall back to the first available window instead of
/// failing.
pub fn find_current_week_index(weeks: &[WeekWindow], reference: NaiveDate) -> Option<usize> {
    weeks.iter().position(|week| week.contains(reference))
}
