use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use shared_models::{temporal, AppointmentRecord};
use tracing::debug;

use crate::models::{
    DayView, MonthDayCell, MonthView, ScheduleOverview, ScheduledEntry, WeekView, WeekWindow,
};
use crate::services::grouping::{group_by_day, sort_by_instant};
use crate::services::layout::TimeGrid;
use crate::services::query;

fn place(record: AppointmentRecord, grid: &TimeGrid) -> ScheduledEntry {
    let time_label = record
        .starts_at()
        .map(|at| temporal::format_clock_time(at.time()))
        .unwrap_or_else(|| record.start_time.clone());

    ScheduledEntry {
        band: grid.band(&record),
        time_label,
        badge: record.status().badge(),
        record,
    }
}

/// Lays out one day: entries in start order, bookings ahead of open slots.
pub fn day_view(records: &[AppointmentRecord], day: NaiveDate, grid: &TimeGrid) -> DayView {
    let mut bookings = Vec::new();
    let mut open_slots = Vec::new();

    for record in sort_by_instant(&query::on_date(records, day)) {
        let entry = place(record, grid);
        if entry.record.is_open_slot() {
            open_slots.push(entry);
        } else {
            bookings.push(entry);
        }
    }

    DayView {
        day,
        label: temporal::format_day_label(day),
        bookings,
        open_slots,
    }
}

/// Lays out a week window: always seven day columns, empty or not, plus the
/// hour guide lines.
pub fn week_view(window: &WeekWindow, grid: &TimeGrid) -> WeekView {
    let days = (0..7)
        .map(|offset| day_view(&window.records, window.start + Duration::days(offset), grid))
        .collect();

    WeekView {
        start: window.start,
        end: window.end,
        label: window.label(),
        days,
        hour_marks: grid.hour_marks(),
    }
}

/// Week view for the Monday-start week containing `reference`, built from
/// the full snapshot. The week need not hold any records.
pub fn week_view_containing(
    records: &[AppointmentRecord],
    reference: NaiveDate,
    grid: &TimeGrid,
) -> WeekView {
    let start = temporal::week_start(reference);
    let end = temporal::week_end(reference);
    let window = WeekWindow {
        start,
        end,
        records: query::in_range(records, start, end),
    };
    week_view(&window, grid)
}

/// Builds the month calendar: every cell carries its booked and open counts,
/// and the grid is padded with adjacent-month days to whole weeks.
///
/// An invalid month yields an empty calendar rather than an error.
pub fn month_view(records: &[AppointmentRecord], year: i32, month: u32) -> MonthView {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        debug!(year, month, "month view requested for an invalid month");
        return MonthView {
            year,
            month,
            label: format!("{year}-{month:02}"),
            weeks: Vec::new(),
        };
    };

    let last = last_day_of_month(first);
    let grid_start = temporal::week_start(first);
    let grid_end = temporal::week_end(last);
    let buckets = group_by_day(records);

    let mut weeks = Vec::new();
    let mut week = Vec::with_capacity(7);
    let mut day = grid_start;
    while day <= grid_end {
        let (booked, open) = match buckets.get(&temporal::day_key(day)) {
            Some(bucket) => {
                let booked = bucket.iter().filter(|r| r.is_booked()).count();
                (booked, bucket.len() - booked)
            }
            None => (0, 0),
        };

        week.push(MonthDayCell {
            day,
            in_month: day.month() == month && day.year() == year,
            booked,
            open,
        });
        if week.len() == 7 {
            weeks.push(std::mem::take(&mut week));
        }
        day = day + Duration::days(1);
    }

    MonthView {
        year,
        month,
        label: temporal::format_month_label(first),
        weeks,
    }
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let next_month = match first.month() {
        12 => NaiveDate::from_ymd_opt(first.year() + 1, 1, 1),
        m => NaiveDate::from_ymd_opt(first.year(), m + 1, 1),
    };
    // The first of the following month always exists.
    next_month
        .and_then(|d| d.pred_opt())
        .unwrap_or(first)
}

/// Assembles the landing-page buckets from one pass over the snapshot.
///
/// All three buckets use the same predicates as the standalone queries, so
/// no record can be "upcoming" here and "past due" elsewhere. Today and
/// upcoming sort soonest first; past due sorts most recent first.
pub fn schedule_overview(
    records: &[AppointmentRecord],
    now: NaiveDateTime,
    upcoming_hours: i64,
) -> ScheduleOverview {
    let today = now.date();

    let mut past_due = sort_by_instant(&query::past_due(records, today));
    past_due.reverse();

    ScheduleOverview {
        today: sort_by_instant(&query::today_schedule(records, today)),
        upcoming: sort_by_instant(&query::upcoming_within_hours(records, now, upcoming_hours)),
        past_due,
    }
}
