use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Requested time window width for the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "2h")]
    H2,
    #[serde(rename = "6h")]
    H6,
    #[serde(rename = "12h")]
    H12,
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "7d")]
    D7,
    #[serde(rename = "30d")]
    D30,
}

impl Default for Period {
    fn default() -> Self {
        Period::H24
    }
}

impl Period {
    #[must_use]
    pub const fn duration_ms(self) -> i64 {
        match self {
            Period::H1 => 3_600_000,
            Period::H2 => 7_200_000,
            Period::H6 => 21_600_000,
            Period::H12 => 43_200_000,
            Period::H24 => 86_400_000,
            Period::D7 => 604_800_000,
            Period::D30 => 2_592_000_000,
        }
    }

    /// Number of evenly spaced time-axis labels for this window width.
    #[must_use]
    pub const fn axis_label_count(self) -> usize {
        match self {
            Period::H1 | Period::H2 => 6,
            Period::H6 | Period::H12 => 7,
            Period::H24 => 6,
            Period::D7 => 7,
            Period::D30 => 6,
        }
    }

    /// Formats one time-axis label. Hour-scale windows show clock time,
    /// day-scale windows show calendar dates.
    #[must_use]
    pub fn format_axis_label(self, at: DateTime<Utc>) -> String {
        match self {
            Period::H1 | Period::H2 | Period::H6 | Period::H12 | Period::H24 => {
                at.format("%H:%M").to_string()
            }
            Period::D7 => at.format("%a %-d").to_string(),
            Period::D30 => at.format("%-d %b").to_string(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Period::H1 => "1h",
            Period::H2 => "2h",
            Period::H6 => "6h",
            Period::H12 => "12h",
            Period::H24 => "24h",
            Period::D7 => "7d",
            Period::D30 => "30d",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display state handed to every render call alongside the series.
///
/// `offline` marks the data source as currently unreachable, with cached or
/// stale data on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayMode {
    pub period: Period,
    pub offline: bool,
}

impl DisplayMode {
    #[must_use]
    pub fn new(period: Period) -> Self {
        Self {
            period,
            offline: false,
        }
    }

    #[must_use]
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }
}
