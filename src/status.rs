//! Inbound status-payload model.
//!
//! The engine never fetches anything; hosts parse the poll response (or a
//! cached copy of it) into a [`StatusSnapshot`] and hand it over. The wire
//! shape mirrors the status API: a system status, a named component list,
//! and a history sequence mixing measurements with explicit gap markers.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{GapMarker, Sample, Series, SeriesEntry};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Operational,
    DegradedPerformance,
    PartialOutage,
    MajorOutage,
    Offline,
}

impl ServiceStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ServiceStatus::Operational => "Operational",
            ServiceStatus::DegradedPerformance => "Degraded performance",
            ServiceStatus::PartialOutage => "Partial outage",
            ServiceStatus::MajorOutage => "Major outage",
            ServiceStatus::Offline => "Offline",
        }
    }

    /// Badge color for this status level.
    #[must_use]
    pub const fn indicator_color(self) -> Color {
        match self {
            ServiceStatus::Operational => Color::from_rgb8(0x10, 0xB9, 0x81),
            ServiceStatus::DegradedPerformance => Color::from_rgb8(0xF5, 0x9E, 0x0B),
            ServiceStatus::PartialOutage => Color::from_rgb8(0xF9, 0x73, 0x16),
            ServiceStatus::MajorOutage => Color::from_rgb8(0xEF, 0x44, 0x44),
            ServiceStatus::Offline => Color::from_rgb8(0x94, 0xA3, 0xB8),
        }
    }

    #[must_use]
    pub const fn is_operational(self) -> bool {
        matches!(self, ServiceStatus::Operational)
    }
}

/// Health of one named component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub status: ServiceStatus,
    pub response_time_ms: Option<f64>,
}

/// One parsed poll response, ready for the engine.
///
/// Components keep their payload order so hosts render the list stably.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub system: ServiceStatus,
    pub components: IndexMap<String, ComponentHealth>,
    pub history: Series,
}

impl StatusSnapshot {
    /// Parses the status API's JSON `data` object.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let wire: WireSnapshot = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse status payload: {e}")))?;
        Ok(Self::from_wire(wire))
    }

    fn from_wire(wire: WireSnapshot) -> Self {
        let components = wire
            .components
            .into_iter()
            .map(|component| {
                (
                    component.name,
                    ComponentHealth {
                        status: component.status,
                        response_time_ms: component.response_time,
                    },
                )
            })
            .collect();

        let entries = wire
            .history
            .into_iter()
            .filter_map(WireHistoryEntry::into_series_entry)
            .collect();

        Self {
            system: wire.system.status,
            components,
            history: Series::from_entries(entries),
        }
    }

    /// Degraded view shown when a poll fails: the cached snapshot with every
    /// component forced offline and response times cleared, or a default
    /// all-offline component set when no cache exists.
    #[must_use]
    pub fn offline_fallback(cached: Option<StatusSnapshot>) -> StatusSnapshot {
        match cached {
            Some(mut snapshot) => {
                snapshot.system = ServiceStatus::Offline;
                for health in snapshot.components.values_mut() {
                    health.status = ServiceStatus::Offline;
                    health.response_time_ms = None;
                }
                snapshot
            }
            None => {
                let components = ["API Core", "Database", "File Storage", "Background Tasks"]
                    .into_iter()
                    .map(|name| {
                        (
                            name.to_owned(),
                            ComponentHealth {
                                status: ServiceStatus::Offline,
                                response_time_ms: None,
                            },
                        )
                    })
                    .collect();

                StatusSnapshot {
                    system: ServiceStatus::Offline,
                    components,
                    history: Series::default(),
                }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireSnapshot {
    system: WireSystem,
    #[serde(default)]
    components: Vec<WireComponent>,
    #[serde(default)]
    history: Vec<WireHistoryEntry>,
}

#[derive(Debug, Deserialize)]
struct WireSystem {
    status: ServiceStatus,
}

#[derive(Debug, Deserialize)]
struct WireComponent {
    name: String,
    status: ServiceStatus,
    #[serde(rename = "responseTime")]
    response_time: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WireHistoryEntry {
    #[serde(default)]
    is_gap: bool,
    created_at: DateTime<Utc>,
    #[serde(default)]
    created_at_end: Option<DateTime<Utc>>,
    #[serde(default)]
    response_time: Option<f64>,
}

impl WireHistoryEntry {
    fn into_series_entry(self) -> Option<SeriesEntry> {
        if self.is_gap {
            let Some(end) = self.created_at_end else {
                tracing::warn!(start = %self.created_at, "gap marker without end timestamp");
                return None;
            };
            return Some(SeriesEntry::Gap(GapMarker::new(self.created_at, end)));
        }

        let Some(response_time) = self.response_time else {
            tracing::warn!(timestamp = %self.created_at, "history sample without response time");
            return None;
        };
        Some(SeriesEntry::Sample(Sample::new(
            self.created_at,
            response_time,
        )))
    }
}
