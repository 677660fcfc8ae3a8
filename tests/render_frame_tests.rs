use approx::assert_relative_eq;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uptime_chart::api::{
    ChartEngineConfig, ChartStyle, NO_DATA_MESSAGE, SINGLE_SAMPLE_MESSAGE, build_frame,
};
use uptime_chart::core::{
    DisplayMode, Period, Sample, Series, TimeScale, ValueScale, Viewport,
};
use uptime_chart::render::{LinePrimitive, TextHAlign};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
}

fn config() -> ChartEngineConfig {
    ChartEngineConfig::new(Viewport::new(800, 400))
}

fn series_minutes_ago(points: &[(i64, f64)]) -> Series {
    Series::from_samples(
        points
            .iter()
            .map(|&(minutes_ago, value)| {
                Sample::new(now() - Duration::minutes(minutes_ago), value)
            })
            .collect(),
    )
}

fn solid_series_lines(frame: &uptime_chart::render::RenderFrame) -> Vec<&LinePrimitive> {
    let style = ChartStyle::default();
    frame
        .lines
        .iter()
        .filter(|line| !line.is_dashed() && line.color != style.grid_color)
        .collect()
}

#[test]
fn empty_series_renders_only_the_placeholder_message() {
    let frame = build_frame(
        &Series::default(),
        DisplayMode::new(Period::H24),
        None,
        now(),
        &config(),
        &ChartStyle::default(),
    )
    .expect("frame");

    assert!(frame.lines.is_empty());
    assert!(frame.circles.is_empty());
    assert!(frame.rects.is_empty());
    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].text, NO_DATA_MESSAGE);
}

#[test]
fn single_sample_keeps_axes_but_draws_no_line() {
    let frame = build_frame(
        &series_minutes_ago(&[(10, 120.0)]),
        DisplayMode::new(Period::H24),
        None,
        now(),
        &config(),
        &ChartStyle::default(),
    )
    .expect("frame");

    // Grid only: five horizontal lines, no series path.
    assert_eq!(frame.lines.len(), 5);
    assert!(solid_series_lines(&frame).is_empty());
    assert!(
        frame
            .texts
            .iter()
            .any(|text| text.text == SINGLE_SAMPLE_MESSAGE)
    );
}

#[test]
fn full_render_has_five_grid_lines_with_value_labels() {
    let frame = build_frame(
        &series_minutes_ago(&[(10, 50.0), (5, 900.0)]),
        DisplayMode::new(Period::H24),
        None,
        now(),
        &config(),
        &ChartStyle::default(),
    )
    .expect("frame");

    let style = ChartStyle::default();
    let grid: Vec<_> = frame
        .lines
        .iter()
        .filter(|line| line.color == style.grid_color)
        .collect();
    assert_eq!(grid.len(), 5);

    // max(100, 900) * 1.2 = 1080, labeled top-down in quarters.
    for expected in ["1080ms", "810ms", "540ms", "270ms", "0ms"] {
        assert!(
            frame.texts.iter().any(|text| text.text == expected),
            "missing grid label {expected}"
        );
    }
}

#[test]
fn time_axis_label_count_follows_the_period() {
    for (period, expected) in [
        (Period::H1, 6),
        (Period::H2, 6),
        (Period::H6, 7),
        (Period::H12, 7),
        (Period::H24, 6),
        (Period::D7, 7),
        (Period::D30, 6),
    ] {
        let frame = build_frame(
            &series_minutes_ago(&[(10, 50.0), (5, 60.0)]),
            DisplayMode::new(period),
            None,
            now(),
            &config(),
            &ChartStyle::default(),
        )
        .expect("frame");

        let centered = frame
            .texts
            .iter()
            .filter(|text| text.h_align == TextHAlign::Center)
            .count();
        assert_eq!(centered, expected, "period {period}");
    }
}

#[test]
fn wide_sample_spacing_renders_one_dashed_alert_segment() {
    // 20 minutes between samples, threshold 15, so the pair itself becomes
    // the dashed outage segment and no solid line connects them.
    let style = ChartStyle::default();
    let frame = build_frame(
        &series_minutes_ago(&[(25, 50.0), (5, 900.0)]),
        DisplayMode::new(Period::H24),
        None,
        now(),
        &config(),
        &ChartStyle::default(),
    )
    .expect("frame");

    let dashed: Vec<_> = frame.lines.iter().filter(|line| line.is_dashed()).collect();
    assert_eq!(dashed.len(), 1);
    assert_eq!(dashed[0].color, style.alert_color);
    assert_eq!(dashed[0].stroke_width, style.gap_stroke_width);
    assert!(solid_series_lines(&frame).is_empty());
}

#[test]
fn close_samples_connect_with_solid_segments_in_series_color() {
    let style = ChartStyle::default();
    let frame = build_frame(
        &series_minutes_ago(&[(15, 50.0), (10, 60.0), (5, 55.0)]),
        DisplayMode::new(Period::H24),
        None,
        now(),
        &config(),
        &ChartStyle::default(),
    )
    .expect("frame");

    let solid = solid_series_lines(&frame);
    assert_eq!(solid.len(), 2);
    assert!(solid.iter().all(|line| line.color == style.series_color));
    assert!(
        solid
            .iter()
            .all(|line| line.stroke_width == style.series_stroke_width)
    );
}

#[test]
fn offline_mode_switches_the_series_line_color() {
    let style = ChartStyle::default();
    let frame = build_frame(
        &series_minutes_ago(&[(10, 50.0), (5, 60.0)]),
        DisplayMode::new(Period::H24).offline(true),
        None,
        now(),
        &config(),
        &ChartStyle::default(),
    )
    .expect("frame");

    let solid = solid_series_lines(&frame);
    assert!(!solid.is_empty());
    assert!(
        solid
            .iter()
            .all(|line| line.color == style.offline_series_color)
    );
    // Offline ceiling floor shows up in the top grid label.
    assert!(frame.texts.iter().any(|text| text.text == "500ms"));
}

#[test]
fn out_of_window_samples_are_not_plotted() {
    let frame = build_frame(
        &series_minutes_ago(&[(90, 40.0), (10, 50.0), (5, 60.0)]),
        DisplayMode::new(Period::H1),
        None,
        now(),
        &config(),
        &ChartStyle::default(),
    )
    .expect("frame");

    // The 90-minutes-ago sample is outside the 1h window; only the last two
    // connect.
    assert_eq!(solid_series_lines(&frame).len(), 1);
}

#[test]
fn polyline_vertices_inverse_map_to_the_samples() {
    let points = [(40i64, 50.0), (30, 80.0), (20, 65.0), (10, 120.0)];
    let series = series_minutes_ago(&points);
    let config = config();
    let frame = build_frame(
        &series,
        DisplayMode::new(Period::H24),
        None,
        now(),
        &config,
        &ChartStyle::default(),
    )
    .expect("frame");

    let plot = config.plot_area().expect("plot");
    let time_scale = TimeScale::for_period(Period::H24, now()).expect("scale");
    let value_scale = ValueScale::from_samples(series.samples(), false);

    let solid = solid_series_lines(&frame);
    assert_eq!(solid.len(), points.len() - 1);

    for (line, pair) in solid.iter().zip(series.samples().windows(2)) {
        let recovered_t1 = time_scale.pixel_to_time(line.x1, plot);
        let recovered_t2 = time_scale.pixel_to_time(line.x2, plot);
        assert_relative_eq!(recovered_t1, pair[0].timestamp_ms(), max_relative = 1e-9);
        assert_relative_eq!(recovered_t2, pair[1].timestamp_ms(), max_relative = 1e-9);

        let recovered_v1 =
            (plot.top + plot.height - line.y1) / plot.height * value_scale.max_value();
        let recovered_v2 =
            (plot.top + plot.height - line.y2) / plot.height * value_scale.max_value();
        assert_relative_eq!(recovered_v1, pair[0].response_time_ms, max_relative = 1e-9);
        assert_relative_eq!(recovered_v2, pair[1].response_time_ms, max_relative = 1e-9);
    }
}

#[test]
fn identical_inputs_produce_identical_frames() {
    let series = series_minutes_ago(&[(25, 50.0), (10, 900.0), (5, 70.0)]);
    let mode = DisplayMode::new(Period::H6);
    let config = config();
    let style = ChartStyle::default();

    let first = build_frame(&series, mode, None, now(), &config, &style).expect("first frame");
    let second = build_frame(&series, mode, None, now(), &config, &style).expect("second frame");

    assert_eq!(first, second);
}

#[test]
fn frames_pass_primitive_validation() {
    let series = series_minutes_ago(&[(25, 50.0), (10, 900.0), (5, 70.0)]);
    let frame = build_frame(
        &series,
        DisplayMode::new(Period::H24),
        None,
        now(),
        &config(),
        &ChartStyle::default(),
    )
    .expect("frame");

    frame.validate().expect("valid frame");
}
