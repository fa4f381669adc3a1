use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

// Upstream systems send the visit date in one of two shapes: a bare
// "YYYY-MM-DD" or a full timestamp ("2025-03-10T00:00:00Z",
// "2025-03-10 00:00:00"). Either way only the date component counts;
// the clock time always comes from the separate time-of-day field.

/// Parses the visit-date field down to its calendar day.
pub fn parse_visit_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    match raw.split_once(|c: char| c == 'T' || c == ' ') {
        Some((date_part, _)) => parse_dashed_day(date_part),
        None => parse_dashed_day(raw),
    }
}

fn parse_dashed_day(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.splitn(3, '-');
    let year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses an "HH:MM" clock time. A single-digit component ("9:5") is
/// accepted; trailing seconds are ignored.
pub fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    let mut parts = raw.trim().splitn(3, ':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = parts.next()?.trim().parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Combines the two raw fields into the canonical visit instant.
///
/// Returns `None` when either field fails to parse; callers treat such
/// records as undated rather than guessing.
pub fn parse_visit_instant(visit_date: &str, start_time: &str) -> Option<NaiveDateTime> {
    let day = parse_visit_day(visit_date)?;
    let time = parse_clock_time(start_time)?;
    Some(day.and_time(time))
}

/// Canonical "YYYY-MM-DD" key used for day buckets and equality checks.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Monday of the week containing `day`.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

/// Sunday of the week containing `day`.
pub fn week_end(day: NaiveDate) -> NaiveDate {
    week_start(day) + Duration::days(6)
}

// ===== DISPLAY FORMATTING =====
// One locale-independent convention for the whole engine.

/// "Mon 10 Mar"
pub fn format_day_label(day: NaiveDate) -> String {
    day.format("%a %d %b").to_string()
}

/// "08:30"
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// "10 Mar - 16 Mar"
pub fn format_range_label(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", start.format("%d %b"), end.format("%d %b"))
}

/// "March 2025"
pub fn format_month_label(day: NaiveDate) -> String {
    day.format("%B %Y").to_string()
}
