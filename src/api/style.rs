use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Dash pattern lengths in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub on_px: f64,
    pub off_px: f64,
}

/// Visual styling for the whole chart.
///
/// Defaults reproduce the status-page palette: blue series line, slate
/// offline variant, red outage accents, light grid on a white surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub series_color: Color,
    pub offline_series_color: Color,
    pub alert_color: Color,
    pub grid_color: Color,
    pub axis_label_color: Color,
    pub placeholder_color: Color,
    pub tooltip_background: Color,
    pub gap_tooltip_background: Color,
    pub tooltip_text_color: Color,
    pub marker_fill: Color,
    pub series_stroke_width: f64,
    pub gap_stroke_width: f64,
    pub grid_stroke_width: f64,
    pub gap_dash: DashPattern,
    pub crosshair_dash: DashPattern,
    pub axis_font_size_px: f64,
    pub placeholder_font_size_px: f64,
    pub tooltip_font_size_px: f64,
    pub tooltip_sub_font_size_px: f64,
    pub marker_radius_px: f64,
    pub tooltip_corner_radius_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            series_color: Color::from_rgb8(0x01, 0x7E, 0xFF),
            offline_series_color: Color::from_rgb8(0x94, 0xA3, 0xB8),
            alert_color: Color::from_rgb8(0xEF, 0x44, 0x44),
            grid_color: Color::from_rgb8(0xE0, 0xE0, 0xE0),
            axis_label_color: Color::from_rgb8(0x99, 0x99, 0x99),
            placeholder_color: Color::from_rgb8(0x66, 0x66, 0x66),
            tooltip_background: Color::rgba(0.0, 0.0, 0.0, 0.9),
            gap_tooltip_background: Color::rgba(220.0 / 255.0, 38.0 / 255.0, 38.0 / 255.0, 0.95),
            tooltip_text_color: Color::rgb(1.0, 1.0, 1.0),
            marker_fill: Color::rgb(1.0, 1.0, 1.0),
            series_stroke_width: 2.0,
            gap_stroke_width: 3.0,
            grid_stroke_width: 1.0,
            gap_dash: DashPattern {
                on_px: 6.0,
                off_px: 6.0,
            },
            crosshair_dash: DashPattern {
                on_px: 5.0,
                off_px: 5.0,
            },
            axis_font_size_px: 10.0,
            placeholder_font_size_px: 14.0,
            tooltip_font_size_px: 12.0,
            tooltip_sub_font_size_px: 11.0,
            marker_radius_px: 5.0,
            tooltip_corner_radius_px: 6.0,
        }
    }
}

impl ChartStyle {
    /// Series line color for the current offline state.
    #[must_use]
    pub fn line_color(&self, offline: bool) -> Color {
        if offline {
            self.offline_series_color
        } else {
            self.series_color
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.series_color,
            self.offline_series_color,
            self.alert_color,
            self.grid_color,
            self.axis_label_color,
            self.placeholder_color,
            self.tooltip_background,
            self.gap_tooltip_background,
            self.tooltip_text_color,
            self.marker_fill,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("series stroke width", self.series_stroke_width),
            ("gap stroke width", self.gap_stroke_width),
            ("grid stroke width", self.grid_stroke_width),
            ("gap dash on length", self.gap_dash.on_px),
            ("gap dash off length", self.gap_dash.off_px),
            ("crosshair dash on length", self.crosshair_dash.on_px),
            ("crosshair dash off length", self.crosshair_dash.off_px),
            ("axis font size", self.axis_font_size_px),
            ("placeholder font size", self.placeholder_font_size_px),
            ("tooltip font size", self.tooltip_font_size_px),
            ("tooltip sub font size", self.tooltip_sub_font_size_px),
            ("marker radius", self.marker_radius_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        if !self.tooltip_corner_radius_px.is_finite() || self.tooltip_corner_radius_px < 0.0 {
            return Err(ChartError::InvalidData(
                "tooltip corner radius must be finite and >= 0".to_owned(),
            ));
        }

        Ok(())
    }
}
