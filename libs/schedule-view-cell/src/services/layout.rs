use chrono::NaiveTime;
use shared_config::AppConfig;
use shared_models::{temporal, AppointmentRecord};

use crate::models::{GridBand, HourMark};

/// Maps clock times and durations onto a vertical pixel band inside a fixed
/// visible window. Overlapping records are positioned independently; the grid
/// does no lane-packing.
#[derive(Debug, Clone, Copy)]
pub struct TimeGrid {
    start_hour: u32,
    end_hour: u32,
    pixels_per_hour: u32,
    min_band_px: u32,
    max_band_px: u32,
}

impl TimeGrid {
    pub fn new(start_hour: u32, end_hour: u32, pixels_per_hour: u32) -> Self {
        // Out-of-range hours would put every band off-canvas; normalize
        // rather than panic.
        let start_hour = start_hour.min(23);
        let end_hour = end_hour.clamp(start_hour + 1, 24);
        let pixels_per_hour = pixels_per_hour.max(1);
        let height = (end_hour - start_hour) * pixels_per_hour;

        Self {
            start_hour,
            end_hour,
            pixels_per_hour,
            min_band_px: 40.min(height),
            max_band_px: height,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut grid = Self::new(
            config.grid_start_hour,
            config.grid_end_hour,
            config.pixels_per_hour,
        );
        grid.min_band_px = config.min_band_height_px.min(grid.height_px());
        grid.max_band_px = config
            .max_band_height_px
            .clamp(grid.min_band_px, grid.height_px());
        grid
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Total canvas height in pixels.
    pub fn height_px(&self) -> u32 {
        (self.end_hour - self.start_hour) * self.pixels_per_hour
    }

    /// Vertical offset for a clock time, clamped to the canvas: times before
    /// the window pin to the top, times after pin to the bottom.
    pub fn position_at(&self, time: NaiveTime) -> u32 {
        use chrono::Timelike;

        let minutes = time.hour() * 60 + time.minute();
        let window_start = self.start_hour * 60;
        if minutes <= window_start {
            return 0;
        }

        let offset = u64::from(minutes - window_start) * u64::from(self.pixels_per_hour) / 60;
        offset.min(u64::from(self.height_px())) as u32
    }

    /// Vertical offset for a raw "HH:MM" string; unparseable times pin to
    /// the top rather than failing.
    pub fn position(&self, start_time: &str) -> u32 {
        match temporal::parse_clock_time(start_time) {
            Some(time) => self.position_at(time),
            None => 0,
        }
    }

    /// Band height for a duration: one minute per `pixels_per_hour / 60`
    /// pixels, floored so short visits stay legible and capped so corrupt
    /// durations cannot blow out the canvas.
    pub fn band_height(&self, duration_minutes: u32) -> u32 {
        let raw = u64::from(duration_minutes) * u64::from(self.pixels_per_hour) / 60;
        let capped = raw.min(u64::from(self.max_band_px)) as u32;
        capped.max(self.min_band_px)
    }

    /// Full placement for a record on this grid.
    pub fn band(&self, record: &AppointmentRecord) -> GridBand {
        let offset_px = match record.starts_at() {
            Some(at) => self.position_at(at.time()),
            None => self.position(&record.start_time),
        };

        GridBand {
            offset_px,
            height_px: self.band_height(record.effective_duration_minutes()),
        }
    }

    /// Guide lines for every full hour of the window, top to bottom.
    pub fn hour_marks(&self) -> Vec<HourMark> {
        (self.start_hour..=self.end_hour)
            .map(|hour| HourMark {
                hour,
                offset_px: (hour - self.start_hour) * self.pixels_per_hour,
                label: format!("{hour:02}:00"),
            })
            .collect()
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
