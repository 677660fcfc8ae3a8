use ordered_float::OrderedFloat;

use crate::core::{PlotArea, Sample};

/// Baseline ceiling so a quiet series still gets a readable axis.
const MIN_PEAK_MS: f64 = 100.0;
/// Headroom multiplier above the observed peak.
const HEADROOM_FACTOR: f64 = 1.2;
/// Ceiling floor while offline, so an outage excursion does not clip.
const OFFLINE_MIN_CEILING_MS: f64 = 500.0;

/// Value (response time) axis for one render pass.
///
/// The axis ceiling is `max(100, peak) * 1.2`, raised to at least 500 while
/// the data source is offline. Zero is always the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    max_value: f64,
}

impl ValueScale {
    #[must_use]
    pub fn from_samples(samples: &[Sample], offline: bool) -> Self {
        let peak = samples
            .iter()
            .map(|sample| OrderedFloat(sample.response_time_ms))
            .max()
            .map(|peak| peak.into_inner())
            .unwrap_or(0.0);

        let mut max_value = peak.max(MIN_PEAK_MS) * HEADROOM_FACTOR;
        if offline {
            max_value = max_value.max(OFFLINE_MIN_CEILING_MS);
        }

        Self { max_value }
    }

    #[must_use]
    pub fn max_value(self) -> f64 {
        self.max_value
    }

    /// Maps a response time to a vertical pixel position (larger values up).
    #[must_use]
    pub fn value_to_pixel(self, value_ms: f64, plot: PlotArea) -> f64 {
        plot.top + plot.height - (value_ms / self.max_value) * plot.height
    }

    /// Grid-line value at a top-down ratio in `[0, 1]`.
    #[must_use]
    pub fn value_at_ratio(self, ratio: f64) -> f64 {
        self.max_value - ratio * self.max_value
    }
}
