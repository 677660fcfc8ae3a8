use smallvec::SmallVec;

use crate::core::{Sample, Series};

/// Default spacing beyond which two consecutive samples imply an outage.
pub const DEFAULT_GAP_THRESHOLD_MS: i64 = 15 * 60 * 1000;

/// Unified outage representation consumed by both the path builder and the
/// tooltip resolver, whether the outage was declared or inferred.
///
/// `value_before` / `value_after` carry the response times of the bounding
/// real samples; a side is `None` when the outage has no sample on that side
/// (leading or trailing gap).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapInterval {
    pub start_ms: f64,
    pub end_ms: f64,
    pub value_before: Option<f64>,
    pub value_after: Option<f64>,
}

impl GapInterval {
    #[must_use]
    pub fn contains(&self, time_ms: f64) -> bool {
        time_ms >= self.start_ms && time_ms <= self.end_ms
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }
}

pub type GapIntervals = SmallVec<[GapInterval; 4]>;

/// Resolves a series into ordered gap intervals.
///
/// When the source declared markers, each marker becomes one interval and the
/// threshold is ignored. Otherwise any consecutive-sample delta above the
/// threshold becomes one interval bounded by the pair itself.
#[must_use]
pub fn resolve_gap_intervals(series: &Series, threshold_ms: i64) -> GapIntervals {
    if series.has_gap_markers() {
        resolve_declared(series)
    } else {
        resolve_inferred(series.samples(), threshold_ms)
    }
}

fn resolve_declared(series: &Series) -> GapIntervals {
    let samples = series.samples();
    let mut intervals = GapIntervals::new();
    // Markers and samples are both timestamp-ordered, so the scan for
    // bounding samples resumes where the previous marker left off.
    let mut scan_from = 0;

    for marker in series.gap_markers() {
        let start_ms = marker.start.timestamp_millis() as f64;
        let end_ms = marker.end.timestamp_millis() as f64;

        let mut value_before = None;
        let mut value_after = None;
        for (index, sample) in samples.iter().enumerate().skip(scan_from) {
            if sample.timestamp_ms() <= start_ms {
                value_before = Some(sample.response_time_ms);
                scan_from = index;
            } else {
                value_after = Some(sample.response_time_ms);
                break;
            }
        }

        intervals.push(GapInterval {
            start_ms,
            end_ms,
            value_before,
            value_after,
        });
    }

    intervals
}

fn resolve_inferred(samples: &[Sample], threshold_ms: i64) -> GapIntervals {
    let threshold_ms = threshold_ms as f64;
    let mut intervals = GapIntervals::new();

    for pair in samples.windows(2) {
        let start_ms = pair[0].timestamp_ms();
        let end_ms = pair[1].timestamp_ms();
        if end_ms - start_ms > threshold_ms {
            intervals.push(GapInterval {
                start_ms,
                end_ms,
                value_before: Some(pair[0].response_time_ms),
                value_after: Some(pair[1].response_time_ms),
            });
        }
    }

    intervals
}

/// Finds the gap interval containing a timestamp, if any.
#[must_use]
pub fn gap_at(intervals: &[GapInterval], time_ms: f64) -> Option<&GapInterval> {
    intervals.iter().find(|interval| interval.contains(time_ms))
}

/// Finds the adjacent sample pair bracketing a timestamp.
#[must_use]
pub fn bounding_pair(samples: &[Sample], time_ms: f64) -> Option<(&Sample, &Sample)> {
    samples.windows(2).find_map(|pair| {
        let (first, second) = (&pair[0], &pair[1]);
        (first.timestamp_ms() <= time_ms && time_ms <= second.timestamp_ms())
            .then_some((first, second))
    })
}

/// Linear interpolation of the response time between two bracketing samples.
///
/// Duplicate timestamps collapse to the first sample's value rather than
/// dividing by zero.
#[must_use]
pub fn interpolate(first: &Sample, second: &Sample, time_ms: f64) -> f64 {
    let span = second.timestamp_ms() - first.timestamp_ms();
    if span <= 0.0 {
        return first.response_time_ms;
    }

    let factor = (time_ms - first.timestamp_ms()) / span;
    first.response_time_ms + factor * (second.response_time_ms - first.response_time_ms)
}
