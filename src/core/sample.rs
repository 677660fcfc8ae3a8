use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One measured (timestamp, response-time) observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub response_time_ms: f64,
}

impl Sample {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, response_time_ms: f64) -> Self {
        Self {
            timestamp,
            response_time_ms,
        }
    }

    #[must_use]
    pub fn timestamp_ms(self) -> f64 {
        self.timestamp.timestamp_millis() as f64
    }
}

/// Explicit, source-declared outage interval interleaved with samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapMarker {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl GapMarker {
    #[must_use]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// One element of the inbound history sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SeriesEntry {
    Sample(Sample),
    Gap(GapMarker),
}

impl SeriesEntry {
    fn timestamp(self) -> DateTime<Utc> {
        match self {
            SeriesEntry::Sample(sample) => sample.timestamp,
            SeriesEntry::Gap(marker) => marker.start,
        }
    }
}

/// Ordered history series: real samples plus optional explicit gap markers.
///
/// Construction is sanitizing rather than fallible: entries that violate the
/// series invariants (non-finite response time, decreasing timestamp, inverted
/// marker interval) are skipped with a warning. One bad sample must not blank
/// the whole chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    samples: Vec<Sample>,
    gap_markers: Vec<GapMarker>,
}

impl Series {
    #[must_use]
    pub fn from_entries(entries: Vec<SeriesEntry>) -> Self {
        let mut samples = Vec::with_capacity(entries.len());
        let mut gap_markers = Vec::new();
        let mut last_timestamp: Option<DateTime<Utc>> = None;

        for entry in entries {
            if let Some(last) = last_timestamp {
                if entry.timestamp() < last {
                    tracing::warn!(
                        timestamp = %entry.timestamp(),
                        "skipping out-of-order series entry"
                    );
                    continue;
                }
            }

            match entry {
                SeriesEntry::Sample(sample) => {
                    if !sample.response_time_ms.is_finite() {
                        tracing::warn!(
                            timestamp = %sample.timestamp,
                            "skipping sample with non-finite response time"
                        );
                        continue;
                    }
                    last_timestamp = Some(sample.timestamp);
                    samples.push(sample);
                }
                SeriesEntry::Gap(marker) => {
                    if marker.end < marker.start {
                        tracing::warn!(
                            start = %marker.start,
                            end = %marker.end,
                            "skipping inverted gap marker"
                        );
                        continue;
                    }
                    last_timestamp = Some(marker.start);
                    gap_markers.push(marker);
                }
            }
        }

        Self {
            samples,
            gap_markers,
        }
    }

    #[must_use]
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self::from_entries(samples.into_iter().map(SeriesEntry::Sample).collect())
    }

    /// Real observations, in timestamp order, markers excluded.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn gap_markers(&self) -> &[GapMarker] {
        &self.gap_markers
    }

    /// True when the source declared outages explicitly. Gap inference from
    /// sample spacing is bypassed entirely in that case.
    #[must_use]
    pub fn has_gap_markers(&self) -> bool {
        !self.gap_markers.is_empty()
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
