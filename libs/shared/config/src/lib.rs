use std::env;
use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

/// Tunables for the scheduling views. Every value has a sensible default so the
/// engine works with an empty environment.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    /// First hour shown on the day/week grid (0-23).
    pub grid_start_hour: u32,
    /// Hour at which the grid ends; must be after `grid_start_hour`.
    pub grid_end_hour: u32,
    /// Vertical scale of the grid. 60 makes one minute one pixel.
    pub pixels_per_hour: u32,
    /// Bands shorter than this are stretched so their labels stay readable.
    pub min_band_height_px: u32,
    /// Bands taller than this are capped so corrupt durations cannot break the layout.
    pub max_band_height_px: u32,
    /// Page size for long appointment lists.
    pub items_per_page: usize,
    /// Lists at or below this length are served as a single page.
    pub pagination_threshold: usize,
    /// Hours past the scheduled end before a visit counts as expired.
    pub expiry_grace_hours: i64,
    /// Look-ahead window for the "upcoming" bucket of the overview.
    pub upcoming_window_hours: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_start_hour: 8,
            grid_end_hour: 21,
            pixels_per_hour: 60,
            min_band_height_px: 40,
            max_band_height_px: 780,
            items_per_page: 20,
            pagination_threshold: 50,
            expiry_grace_hours: 0,
            upcoming_window_hours: 24,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            grid_start_hour: env_number("SCHEDULE_GRID_START_HOUR", defaults.grid_start_hour),
            grid_end_hour: env_number("SCHEDULE_GRID_END_HOUR", defaults.grid_end_hour),
            pixels_per_hour: env_number("SCHEDULE_PIXELS_PER_HOUR", defaults.pixels_per_hour),
            min_band_height_px: env_number(
                "SCHEDULE_MIN_BAND_HEIGHT_PX",
                defaults.min_band_height_px,
            ),
            max_band_height_px: env_number(
                "SCHEDULE_MAX_BAND_HEIGHT_PX",
                defaults.max_band_height_px,
            ),
            items_per_page: env_number("SCHEDULE_ITEMS_PER_PAGE", defaults.items_per_page),
            pagination_threshold: env_number(
                "SCHEDULE_PAGINATION_THRESHOLD",
                defaults.pagination_threshold,
            ),
            expiry_grace_hours: env_number(
                "SCHEDULE_EXPIRY_GRACE_HOURS",
                defaults.expiry_grace_hours,
            ),
            upcoming_window_hours: env_number(
                "SCHEDULE_UPCOMING_WINDOW_HOURS",
                defaults.upcoming_window_hours,
            ),
        };

        config.sanitized()
    }

    /// Replaces values that would make the views unusable with their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.grid_start_hour > 23 || self.grid_end_hour > 24 {
            warn!(
                "grid hours {}-{} out of range, using {}-{}",
                self.grid_start_hour,
                self.grid_end_hour,
                defaults.grid_start_hour,
                defaults.grid_end_hour
            );
            self.grid_start_hour = defaults.grid_start_hour;
            self.grid_end_hour = defaults.grid_end_hour;
        }

        if self.grid_end_hour <= self.grid_start_hour {
            warn!(
                "grid end hour {} not after start hour {}, using {}-{}",
                self.grid_end_hour,
                self.grid_start_hour,
                defaults.grid_start_hour,
                defaults.grid_end_hour
            );
            self.grid_start_hour = defaults.grid_start_hour;
            self.grid_end_hour = defaults.grid_end_hour;
        }

        if self.pixels_per_hour == 0 {
            warn!("SCHEDULE_PIXELS_PER_HOUR must be positive, using {}", defaults.pixels_per_hour);
            self.pixels_per_hour = defaults.pixels_per_hour;
        }

        if self.items_per_page == 0 {
            warn!("SCHEDULE_ITEMS_PER_PAGE must be positive, using {}", defaults.items_per_page);
            self.items_per_page = defaults.items_per_page;
        }

        self
    }
}

fn env_number<T>(name: &str, default: T) -> T
where
    T: FromStr + Display,
{
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("{} is not a number ({:?}), using default {}", name, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}
