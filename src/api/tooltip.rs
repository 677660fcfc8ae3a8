use chrono::{DateTime, Utc};

use crate::core::{
    CursorPos, GapInterval, PlotArea, Sample, TimeScale, bounding_pair, gap_at, interpolate,
};

/// Resolved tooltip for the current cursor position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tooltip {
    Value(ValueTooltip),
    Gap(GapTooltip),
}

/// Interpolated measurement under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTooltip {
    pub at: DateTime<Utc>,
    pub value_ms: f64,
}

impl ValueTooltip {
    /// Single-line label: cursor instant plus the value rounded to whole ms.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {:.0} ms", self.at.format("%d/%m/%Y %H:%M:%S"), self.value_ms)
    }
}

/// Outage interval under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapTooltip {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl GapTooltip {
    /// Offline duration as `2h`, `1h5m` or `12min`.
    #[must_use]
    pub fn duration_label(&self) -> String {
        let total_minutes =
            ((self.end - self.start).num_milliseconds() as f64 / 60_000.0).round() as i64;
        let hours = total_minutes / 60;
        let minutes = total_minutes % 60;

        if hours > 0 {
            if minutes > 0 {
                format!("{hours}h{minutes}m")
            } else {
                format!("{hours}h")
            }
        } else {
            format!("{total_minutes}min")
        }
    }

    #[must_use]
    pub fn headline(&self) -> String {
        format!("Offline ({})", self.duration_label())
    }

    /// Outage endpoints, time-only when both fall on the same calendar day.
    #[must_use]
    pub fn range_label(&self) -> String {
        let same_day = self.start.date_naive() == self.end.date_naive();
        if same_day {
            format!(
                "{} → {}",
                self.start.format("%H:%M"),
                self.end.format("%H:%M")
            )
        } else {
            format!(
                "{} → {}",
                self.start.format("%-d %b %H:%M"),
                self.end.format("%-d %b %H:%M")
            )
        }
    }
}

/// Maps a cursor back to time and resolves what the tooltip should show.
///
/// Gap intervals win over value interpolation; a cursor outside the plot's
/// horizontal bounds, or with no bracketing sample pair, yields nothing.
#[must_use]
pub fn resolve_tooltip(
    samples: &[Sample],
    gaps: &[GapInterval],
    cursor: CursorPos,
    time_scale: TimeScale,
    plot: PlotArea,
) -> Option<Tooltip> {
    if !plot.contains_x(cursor.x) {
        return None;
    }

    let cursor_time_ms = time_scale.pixel_to_time(cursor.x, plot);

    if let Some(gap) = gap_at(gaps, cursor_time_ms) {
        let start = DateTime::<Utc>::from_timestamp_millis(gap.start_ms.round() as i64)?;
        let end = DateTime::<Utc>::from_timestamp_millis(gap.end_ms.round() as i64)?;
        return Some(Tooltip::Gap(GapTooltip { start, end }));
    }

    let (first, second) = bounding_pair(samples, cursor_time_ms)?;
    let at = DateTime::<Utc>::from_timestamp_millis(cursor_time_ms.round() as i64)?;
    Some(Tooltip::Value(ValueTooltip {
        at,
        value_ms: interpolate(first, second, cursor_time_ms),
    }))
}
