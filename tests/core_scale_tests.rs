use chrono::{DateTime, TimeZone, Utc};
use uptime_chart::core::{Padding, Period, PlotArea, Sample, TimeScale, ValueScale, Viewport};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
}

fn sample(at_ms: i64, response_time_ms: f64) -> Sample {
    Sample::new(
        DateTime::<Utc>::from_timestamp_millis(at_ms).unwrap(),
        response_time_ms,
    )
}

fn plot() -> PlotArea {
    PlotArea::from_viewport(Viewport::new(800, 400), Padding::default()).expect("plot area")
}

#[test]
fn window_start_maps_to_left_padding_and_window_end_to_right_edge() {
    let plot = plot();
    let scale = TimeScale::for_period(Period::H24, now()).expect("scale");
    let (start, end) = scale.window();

    assert_eq!(scale.time_to_pixel(start, plot), plot.left);
    assert_eq!(scale.time_to_pixel(end, plot), plot.left + plot.width);
}

#[test]
fn window_spans_exactly_the_requested_period() {
    let scale = TimeScale::for_period(Period::H6, now()).expect("scale");
    let (start, end) = scale.window();

    assert_eq!(end - start, Period::H6.duration_ms() as f64);
    assert_eq!(end, now().timestamp_millis() as f64);
}

#[test]
fn time_scale_round_trip_within_tolerance() {
    let plot = plot();
    let scale = TimeScale::for_period(Period::H1, now()).expect("scale");
    let original = now().timestamp_millis() as f64 - 1_234_567.0;

    let px = scale.time_to_pixel(original, plot);
    let recovered = scale.pixel_to_time(px, plot);

    assert!((recovered - original).abs() <= 1e-6);
}

#[test]
fn degenerate_time_window_is_rejected() {
    assert!(TimeScale::new(1000.0, 1000.0).is_err());
    assert!(TimeScale::new(f64::NAN, 2000.0).is_err());
}

#[test]
fn value_ceiling_applies_headroom_over_the_peak() {
    let samples = vec![sample(0, 50.0), sample(60_000, 900.0)];
    let scale = ValueScale::from_samples(&samples, false);

    assert_eq!(scale.max_value(), 1080.0);
}

#[test]
fn value_ceiling_never_drops_below_baseline() {
    let samples = vec![sample(0, 3.0), sample(60_000, 7.0)];
    let scale = ValueScale::from_samples(&samples, false);

    // max(100, 7) * 1.2
    assert_eq!(scale.max_value(), 120.0);
}

#[test]
fn offline_mode_floors_the_ceiling_for_outage_headroom() {
    let samples = vec![sample(0, 50.0), sample(60_000, 60.0)];
    let scale = ValueScale::from_samples(&samples, true);

    assert_eq!(scale.max_value(), 500.0);
}

#[test]
fn offline_floor_does_not_shrink_a_larger_ceiling() {
    let samples = vec![sample(0, 900.0)];
    let scale = ValueScale::from_samples(&samples, true);

    assert_eq!(scale.max_value(), 1080.0);
}

#[test]
fn value_zero_maps_to_plot_bottom_and_ceiling_to_plot_top() {
    let plot = plot();
    let samples = vec![sample(0, 100.0)];
    let scale = ValueScale::from_samples(&samples, false);

    assert_eq!(scale.value_to_pixel(0.0, plot), plot.bottom());
    assert_eq!(scale.value_to_pixel(scale.max_value(), plot), plot.top);
}

#[test]
fn plot_area_rejects_padding_larger_than_the_viewport() {
    let padding = Padding {
        top: 300.0,
        right: 30.0,
        bottom: 300.0,
        left: 40.0,
    };

    assert!(PlotArea::from_viewport(Viewport::new(800, 400), padding).is_err());
}

#[test]
fn plot_area_rejects_zero_viewport() {
    assert!(PlotArea::from_viewport(Viewport::new(0, 400), Padding::default()).is_err());
}
