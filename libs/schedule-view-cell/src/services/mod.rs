pub mod grouping;
pub mod layout;
pub mod lifecycle;
pub mod pagination;
pub mod query;
pub mod views;

pub use grouping::{find_current_week_index, group_by_day, sort_by_instant, weeks_with_records};
pub use layout::TimeGrid;
pub use lifecycle::{completion_eligibility, should_mark_expired, ExpiryPolicy};
pub use pagination::Pager;
pub use views::{day_view, month_view, schedule_overview, week_view, week_view_containing};
