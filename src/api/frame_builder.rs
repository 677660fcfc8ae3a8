use chrono::{DateTime, Utc};

use crate::core::{
    CursorPos, DisplayMode, GapInterval, Period, PlotArea, Sample, Series, TimeScale, ValueScale,
    Viewport, resolve_gap_intervals,
};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::style::{ChartStyle, DashPattern};
use super::tooltip::{Tooltip, resolve_tooltip};
use super::ChartEngineConfig;

pub const NO_DATA_MESSAGE: &str = "No data available for this period";
pub const SINGLE_SAMPLE_MESSAGE: &str = "Not enough data to draw a trend";

/// Number of horizontal grid lines, edges included.
const GRID_LINE_COUNT: usize = 5;

const TOOLTIP_BOX_TEXT_PADDING_PX: f64 = 24.0;
const TOOLTIP_BOX_MARGIN_PX: f64 = 5.0;
const VALUE_TOOLTIP_BOX_HEIGHT_PX: f64 = 30.0;
const GAP_TOOLTIP_BOX_HEIGHT_PX: f64 = 45.0;

/// Materializes backend-agnostic primitives for one draw pass.
///
/// Pure in its inputs: `now` anchors the time window, nothing reads the wall
/// clock, and identical arguments produce geometrically identical frames.
pub fn build_frame(
    series: &Series,
    mode: DisplayMode,
    cursor: Option<CursorPos>,
    now: DateTime<Utc>,
    config: &ChartEngineConfig,
    style: &ChartStyle,
) -> ChartResult<RenderFrame> {
    let plot = config.plot_area()?;
    let mut frame = RenderFrame::new(config.viewport);
    let samples = series.samples();

    if samples.is_empty() {
        push_placeholder(&mut frame, NO_DATA_MESSAGE, config.viewport, style);
        return Ok(frame);
    }

    let time_scale = TimeScale::for_period(mode.period, now)?;
    let value_scale = ValueScale::from_samples(samples, mode.offline);

    push_grid(&mut frame, plot, value_scale, style);
    push_time_labels(&mut frame, plot, time_scale, mode.period, config.viewport, style);

    // A line needs two points; a lone sample keeps the axes but gets its own
    // placeholder message instead of a degenerate path.
    if samples.len() == 1 {
        push_placeholder(&mut frame, SINGLE_SAMPLE_MESSAGE, config.viewport, style);
        return Ok(frame);
    }

    let gaps = resolve_gap_intervals(series, config.gap_threshold_ms);
    push_series_path(
        &mut frame,
        samples,
        &gaps,
        time_scale,
        value_scale,
        plot,
        mode.offline,
        style,
    );

    if let Some(cursor) = cursor {
        if let Some(tooltip) = resolve_tooltip(samples, &gaps, cursor, time_scale, plot) {
            push_tooltip_overlay(
                &mut frame,
                &tooltip,
                cursor,
                value_scale,
                plot,
                config.viewport,
                mode.offline,
                style,
            );
        }
    }

    tracing::trace!(
        samples = samples.len(),
        gaps = gaps.len(),
        lines = frame.lines.len(),
        "built render frame"
    );
    Ok(frame)
}

fn push_placeholder(frame: &mut RenderFrame, message: &str, viewport: Viewport, style: &ChartStyle) {
    frame.texts.push(TextPrimitive::new(
        message,
        f64::from(viewport.width) / 2.0,
        f64::from(viewport.height) / 2.0,
        style.placeholder_font_size_px,
        style.placeholder_color,
        TextHAlign::Center,
    ));
}

fn push_grid(frame: &mut RenderFrame, plot: PlotArea, value_scale: ValueScale, style: &ChartStyle) {
    for index in 0..GRID_LINE_COUNT {
        let ratio = index as f64 / (GRID_LINE_COUNT - 1) as f64;
        let y = plot.top + ratio * plot.height;

        frame.lines.push(LinePrimitive::new(
            plot.left,
            y,
            plot.right(),
            y,
            style.grid_stroke_width,
            style.grid_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format!("{:.0}ms", value_scale.value_at_ratio(ratio)),
            plot.left - 5.0,
            y + 4.0,
            style.axis_font_size_px,
            style.axis_label_color,
            TextHAlign::Right,
        ));
    }
}

fn push_time_labels(
    frame: &mut RenderFrame,
    plot: PlotArea,
    time_scale: TimeScale,
    period: Period,
    viewport: Viewport,
    style: &ChartStyle,
) {
    let count = period.axis_label_count();
    for index in 0..count {
        let ratio = index as f64 / (count - 1) as f64;
        let Some(at) = DateTime::<Utc>::from_timestamp_millis(time_scale.time_at_ratio(ratio) as i64)
        else {
            continue;
        };

        frame.texts.push(TextPrimitive::new(
            period.format_axis_label(at),
            plot.left + ratio * plot.width,
            f64::from(viewport.height) - 10.0,
            style.axis_font_size_px,
            style.axis_label_color,
            TextHAlign::Center,
        ));
    }
}

#[allow(clippy::too_many_arguments)]
fn push_series_path(
    frame: &mut RenderFrame,
    samples: &[Sample],
    gaps: &[GapInterval],
    time_scale: TimeScale,
    value_scale: ValueScale,
    plot: PlotArea,
    offline: bool,
    style: &ChartStyle,
) {
    let line_color = style.line_color(offline);

    // Solid polyline segments over in-window samples, broken at every gap.
    // Out-of-window samples are skipped here but already participated in gap
    // resolution, so a gap straddling the window edge still breaks the path.
    let mut segment: Vec<(f64, f64)> = Vec::new();
    let mut previous_plotted: Option<f64> = None;

    let flush = |segment: &mut Vec<(f64, f64)>, frame: &mut RenderFrame| {
        for pair in segment.windows(2) {
            frame.lines.push(LinePrimitive::new(
                pair[0].0,
                pair[0].1,
                pair[1].0,
                pair[1].1,
                style.series_stroke_width,
                line_color,
            ));
        }
        segment.clear();
    };

    for sample in samples {
        let time_ms = sample.timestamp_ms();
        if !time_scale.contains(time_ms) {
            continue;
        }

        let point = (
            time_scale.time_to_pixel(time_ms, plot),
            value_scale.value_to_pixel(sample.response_time_ms, plot),
        );

        let broken = previous_plotted.is_some_and(|previous_ms| {
            gaps.iter()
                .any(|gap| gap.start_ms >= previous_ms && gap.start_ms <= time_ms)
        });
        if broken {
            flush(&mut segment, frame);
        }

        segment.push(point);
        previous_plotted = Some(time_ms);
    }
    flush(&mut segment, frame);

    // One dashed alert segment per gap, spanning the gap's own extent and
    // borrowing the bounding samples' values; mid-height when a side has no
    // bounding sample.
    let (window_start, window_end) = time_scale.window();
    for gap in gaps {
        if gap.end_ms < window_start || gap.start_ms > window_end {
            continue;
        }

        let y1 = gap
            .value_before
            .map_or(plot.mid_y(), |value| value_scale.value_to_pixel(value, plot));
        let y2 = gap
            .value_after
            .map_or(plot.mid_y(), |value| value_scale.value_to_pixel(value, plot));

        frame.lines.push(
            LinePrimitive::new(
                time_scale.time_to_pixel(gap.start_ms, plot),
                y1,
                time_scale.time_to_pixel(gap.end_ms, plot),
                y2,
                style.gap_stroke_width,
                style.alert_color,
            )
            .with_stroke_style(dashed(style.gap_dash)),
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn push_tooltip_overlay(
    frame: &mut RenderFrame,
    tooltip: &Tooltip,
    cursor: CursorPos,
    value_scale: ValueScale,
    plot: PlotArea,
    viewport: Viewport,
    offline: bool,
    style: &ChartStyle,
) {
    match tooltip {
        Tooltip::Gap(gap) => {
            let anchor_y = plot.mid_y();
            push_crosshair(frame, cursor.x, plot, 2.0, style.alert_color, style);
            push_marker(frame, cursor.x, anchor_y, style.alert_color, style);

            let headline = gap.headline();
            let range = gap.range_label();
            let box_width = estimate_text_width_px(&headline, style.tooltip_font_size_px)
                .max(estimate_text_width_px(&range, style.tooltip_sub_font_size_px))
                + TOOLTIP_BOX_TEXT_PADDING_PX;
            let (box_x, box_y) = place_tooltip_box(
                cursor.x,
                anchor_y - 55.0,
                anchor_y + 20.0,
                box_width,
                viewport,
            );

            frame.rects.push(RectPrimitive::new(
                box_x,
                box_y,
                box_width,
                GAP_TOOLTIP_BOX_HEIGHT_PX,
                style.tooltip_corner_radius_px,
                style.gap_tooltip_background,
            ));
            frame.texts.push(
                TextPrimitive::new(
                    headline,
                    box_x + box_width / 2.0,
                    box_y + 18.0,
                    style.tooltip_font_size_px,
                    style.tooltip_text_color,
                    TextHAlign::Center,
                )
                .with_bold(true),
            );
            frame.texts.push(TextPrimitive::new(
                range,
                box_x + box_width / 2.0,
                box_y + 33.0,
                style.tooltip_sub_font_size_px,
                style.tooltip_text_color,
                TextHAlign::Center,
            ));
        }
        Tooltip::Value(value) => {
            let line_color = style.line_color(offline);
            let anchor_y = value_scale.value_to_pixel(value.value_ms, plot);
            push_crosshair(frame, cursor.x, plot, 1.0, line_color, style);
            push_marker(frame, cursor.x, anchor_y, line_color, style);

            let label = value.label();
            let box_width = estimate_text_width_px(&label, style.tooltip_font_size_px)
                + TOOLTIP_BOX_TEXT_PADDING_PX;
            let (box_x, box_y) = place_tooltip_box(
                cursor.x,
                anchor_y - 45.0,
                anchor_y + 20.0,
                box_width,
                viewport,
            );

            frame.rects.push(RectPrimitive::new(
                box_x,
                box_y,
                box_width,
                VALUE_TOOLTIP_BOX_HEIGHT_PX,
                style.tooltip_corner_radius_px,
                style.tooltip_background,
            ));
            frame.texts.push(TextPrimitive::new(
                label,
                box_x + box_width / 2.0,
                box_y + 19.0,
                style.tooltip_font_size_px,
                style.tooltip_text_color,
                TextHAlign::Center,
            ));
        }
    }
}

fn push_crosshair(
    frame: &mut RenderFrame,
    x: f64,
    plot: PlotArea,
    stroke_width: f64,
    color: Color,
    style: &ChartStyle,
) {
    frame.lines.push(
        LinePrimitive::new(x, plot.top, x, plot.bottom(), stroke_width, color)
            .with_stroke_style(dashed(style.crosshair_dash)),
    );
}

fn push_marker(
    frame: &mut RenderFrame,
    x: f64,
    y: f64,
    stroke_color: Color,
    style: &ChartStyle,
) {
    frame.circles.push(CirclePrimitive::new(
        x,
        y,
        style.marker_radius_px,
        style.marker_fill,
        2.0,
        stroke_color,
    ));
}

/// Clamps a tooltip box into the surface, flipping below the anchor when the
/// preferred position would poke out of the top.
fn place_tooltip_box(
    center_x: f64,
    preferred_y: f64,
    fallback_y: f64,
    box_width: f64,
    viewport: Viewport,
) -> (f64, f64) {
    let mut box_x = center_x - box_width / 2.0;
    let max_x = f64::from(viewport.width) - TOOLTIP_BOX_MARGIN_PX - box_width;
    if box_x < TOOLTIP_BOX_MARGIN_PX {
        box_x = TOOLTIP_BOX_MARGIN_PX;
    }
    if box_x > max_x {
        box_x = max_x;
    }

    let box_y = if preferred_y < TOOLTIP_BOX_MARGIN_PX {
        fallback_y
    } else {
        preferred_y
    };

    (box_x, box_y)
}

/// Rough width estimate for centering tooltip boxes; backends owning real
/// text metrics can reflow, this only sizes the plan.
fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * 0.6
}

fn dashed(pattern: DashPattern) -> LineStrokeStyle {
    LineStrokeStyle::Dashed {
        on_px: pattern.on_px,
        off_px: pattern.off_px,
    }
}
