use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_GAP_THRESHOLD_MS, Padding, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::PointerConfig;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default = "default_gap_threshold_ms")]
    pub gap_threshold_ms: i64,
    #[serde(default)]
    pub pointer: PointerConfig,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding: Padding::default(),
            gap_threshold_ms: default_gap_threshold_ms(),
            pointer: PointerConfig::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_gap_threshold_ms(mut self, gap_threshold_ms: i64) -> Self {
        self.gap_threshold_ms = gap_threshold_ms;
        self
    }

    #[must_use]
    pub fn with_pointer(mut self, pointer: PointerConfig) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        self.plot_area().map(|_| ())?;
        if self.gap_threshold_ms <= 0 {
            return Err(ChartError::InvalidData(
                "gap threshold must be > 0 milliseconds".to_owned(),
            ));
        }
        Ok(())
    }

    /// Plot rectangle for the configured viewport and padding.
    pub fn plot_area(self) -> ChartResult<PlotArea> {
        PlotArea::from_viewport(self.viewport, self.padding)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_gap_threshold_ms() -> i64 {
    DEFAULT_GAP_THRESHOLD_MS
}
