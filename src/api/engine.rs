use chrono::{DateTime, Utc};

use crate::core::{
    CursorPos, DisplayMode, Period, Series, TimeScale, Viewport, resolve_gap_intervals,
};
use crate::error::ChartResult;
use crate::interaction::PointerTracker;
use crate::render::{RenderFrame, Renderer};
use crate::status::StatusSnapshot;

use super::frame_builder::build_frame;
use super::tooltip::{Tooltip, resolve_tooltip};
use super::{ChartEngineConfig, ChartStyle};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` holds the last-delivered series and display mode (replaced
/// wholesale on every poll), the pointer state machine, and the renderer.
/// Frame building itself is pure; the engine only wires state to it so
/// cursor-driven and poll-driven redraws share one path.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    style: ChartStyle,
    series: Series,
    mode: DisplayMode,
    pointer: PointerTracker,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            style: ChartStyle::default(),
            series: Series::default(),
            mode: DisplayMode::default(),
            pointer: PointerTracker::new(config.pointer),
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    /// Resize path: replaces the viewport, keeping padding and tuning.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let mut updated = self.config;
        updated.viewport = viewport;
        updated.validate()?;
        self.config = updated;
        Ok(())
    }

    pub fn set_period(&mut self, period: Period) {
        self.mode.period = period;
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.mode.offline = offline;
    }

    /// Replaces the whole series, as a successful poll does.
    pub fn set_series(&mut self, series: Series) {
        self.series = series;
    }

    /// Adopts a full status payload: its history becomes the series and the
    /// offline flag tracks whether the payload came from a live poll or a
    /// stale-cache fallback.
    pub fn apply_snapshot(&mut self, snapshot: &StatusSnapshot, offline: bool) {
        tracing::debug!(
            samples = snapshot.history.sample_count(),
            offline,
            "applying status snapshot"
        );
        self.series = snapshot.history.clone();
        self.mode.offline = offline;
    }

    // Pointer passthroughs. Each returns `true` when the host should call
    // `render` again.

    pub fn on_mouse_move(&mut self, x: f64, y: f64) -> bool {
        self.pointer.on_mouse_move(x, y)
    }

    pub fn on_mouse_leave(&mut self) -> bool {
        self.pointer.on_mouse_leave()
    }

    pub fn on_touch_start(&mut self, x: f64, y: f64, now_ms: u64) -> bool {
        self.pointer.on_touch_start(x, y, now_ms)
    }

    pub fn on_touch_move(&mut self, x: f64, y: f64, now_ms: u64) -> bool {
        self.pointer.on_touch_move(x, y, now_ms)
    }

    pub fn on_touch_end(&mut self, now_ms: u64) -> bool {
        self.pointer.on_touch_end(now_ms)
    }

    pub fn on_touch_cancel(&mut self) -> bool {
        self.pointer.on_touch_cancel()
    }

    pub fn poll_pointer(&mut self, now_ms: u64) -> bool {
        self.pointer.poll(now_ms)
    }

    /// Resolves the tooltip model for an arbitrary cursor without building a
    /// frame, so hosts can drive external tooltip widgets or tests can assert
    /// on semantics directly.
    pub fn tooltip_at(&self, cursor: CursorPos, now: DateTime<Utc>) -> ChartResult<Option<Tooltip>> {
        if self.series.sample_count() < 2 {
            return Ok(None);
        }

        let plot = self.config.plot_area()?;
        let time_scale = TimeScale::for_period(self.mode.period, now)?;
        let gaps = resolve_gap_intervals(&self.series, self.config.gap_threshold_ms);
        Ok(resolve_tooltip(
            self.series.samples(),
            &gaps,
            cursor,
            time_scale,
            plot,
        ))
    }

    /// Materializes the draw plan for the current state.
    pub fn build_render_frame(&self, now: DateTime<Utc>) -> ChartResult<RenderFrame> {
        build_frame(
            &self.series,
            self.mode,
            self.pointer.cursor(),
            now,
            &self.config,
            &self.style,
        )
    }

    /// Builds and paints one full frame.
    pub fn render(&mut self, now: DateTime<Utc>) -> ChartResult<()> {
        let frame = self.build_render_frame(now)?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
