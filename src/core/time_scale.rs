use chrono::{DateTime, Utc};

use crate::core::{Period, PlotArea};
use crate::error::{ChartError, ChartResult};

/// Time axis for one render pass, fixed to the requested period.
///
/// The visible window is always `[now - period, now]`, independent of the
/// actual sample range. The axis therefore stays stable across polls, and a
/// trailing outage visibly stretches up to "now" instead of snapping the
/// window to the last sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    window_start_ms: f64,
    window_end_ms: f64,
}

impl TimeScale {
    pub fn for_period(period: Period, now: DateTime<Utc>) -> ChartResult<Self> {
        let end = now.timestamp_millis() as f64;
        Self::new(end - period.duration_ms() as f64, end)
    }

    pub fn new(window_start_ms: f64, window_end_ms: f64) -> ChartResult<Self> {
        if !window_start_ms.is_finite()
            || !window_end_ms.is_finite()
            || window_start_ms >= window_end_ms
        {
            return Err(ChartError::InvalidData(
                "time window must be finite and non-empty".to_owned(),
            ));
        }

        Ok(Self {
            window_start_ms,
            window_end_ms,
        })
    }

    #[must_use]
    pub fn window(self) -> (f64, f64) {
        (self.window_start_ms, self.window_end_ms)
    }

    #[must_use]
    pub fn span_ms(self) -> f64 {
        self.window_end_ms - self.window_start_ms
    }

    #[must_use]
    pub fn contains(self, time_ms: f64) -> bool {
        time_ms >= self.window_start_ms && time_ms <= self.window_end_ms
    }

    /// Maps a timestamp (unix milliseconds) to a horizontal pixel position.
    #[must_use]
    pub fn time_to_pixel(self, time_ms: f64, plot: PlotArea) -> f64 {
        plot.left + (time_ms - self.window_start_ms) / self.span_ms() * plot.width
    }

    /// Inverse of `time_to_pixel`.
    #[must_use]
    pub fn pixel_to_time(self, pixel_x: f64, plot: PlotArea) -> f64 {
        self.window_start_ms + (pixel_x - plot.left) / plot.width * self.span_ms()
    }

    /// Timestamp at a window ratio in `[0, 1]`, for evenly spaced axis labels.
    #[must_use]
    pub fn time_at_ratio(self, ratio: f64) -> f64 {
        self.window_start_ms + ratio * self.span_ms()
    }
}
