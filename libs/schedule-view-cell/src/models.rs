use chrono::NaiveDate;
use serde::Serialize;
use shared_models::{temporal, AppointmentRecord};

// ===== GROUPING =====

/// A Monday-aligned week holding every record whose visit day falls inside it.
#[derive(Debug, Clone, Serialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub records: Vec<AppointmentRecord>,
}

impl WeekWindow {
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// "10 Mar - 16 Mar"
    pub fn label(&self) -> String {
        temporal::format_range_label(self.start, self.end)
    }
}

// ===== LAYOUT =====

/// Vertical placement of one schedule entry on the time grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridBand {
    pub offset_px: u32,
    pub height_px: u32,
}

/// One horizontal guide line of the time grid.
#[derive(Debug, Clone, Serialize)]
pub struct HourMark {
    pub hour: u32,
    pub offset_px: u32,
    pub label: String,
}

// ===== ASSEMBLED VIEWS =====

/// An appointment placed on the grid, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduledEntry {
    pub record: AppointmentRecord,
    pub band: GridBand,
    pub time_label: String,
    pub badge: &'static str,
}

/// One day of the schedule. Bookings come first; open slots are listed
/// separately so the dashboard can render them as secondary.
#[derive(Debug, Clone, Serialize)]
pub struct DayView {
    pub day: NaiveDate,
    pub label: String,
    pub bookings: Vec<ScheduledEntry>,
    pub open_slots: Vec<ScheduledEntry>,
}

impl DayView {
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty() && self.open_slots.is_empty()
    }

    pub fn total_entries(&self) -> usize {
        self.bookings.len() + self.open_slots.len()
    }
}

/// A Monday-to-Sunday week with its seven day columns laid out.
#[derive(Debug, Clone, Serialize)]
pub struct WeekView {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
    pub days: Vec<DayView>,
    pub hour_marks: Vec<HourMark>,
}

/// One cell of the month calendar.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonthDayCell {
    pub day: NaiveDate,
    pub in_month: bool,
    pub booked: usize,
    pub open: usize,
}

impl MonthDayCell {
    pub fn total(&self) -> usize {
        self.booked + self.open
    }
}

/// A month calendar padded to whole Monday-start weeks.
#[derive(Debug, Clone, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub weeks: Vec<Vec<MonthDayCell>>,
}

/// The at-a-glance buckets on the dashboard landing page.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleOverview {
    pub today: Vec<AppointmentRecord>,
    pub upcoming: Vec<AppointmentRecord>,
    pub past_due: Vec<AppointmentRecord>,
}

// ===== PAGINATION =====

/// One page of a longer list, with enough context to render the controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub paginated: bool,
}

impl<T> PageView<'_, T> {
    /// "Page 2 of 5"
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}
