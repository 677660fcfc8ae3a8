use chrono::DateTime;
use proptest::prelude::*;
use uptime_chart::core::{Padding, PlotArea, Sample, TimeScale, ValueScale, Viewport, interpolate};

proptest! {
    #[test]
    fn time_scale_round_trip_property(
        window_start in 1_000_000_000_000.0f64..2_000_000_000_000.0,
        window_span in 60_000.0f64..2_592_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let window_end = window_start + window_span;
        let time = window_start + value_factor * window_span;

        let plot = PlotArea::from_viewport(Viewport::new(2048, 1024), Padding::default())
            .expect("plot area");
        let scale = TimeScale::new(window_start, window_end).expect("valid scale");

        let px = scale.time_to_pixel(time, plot);
        let recovered = scale.pixel_to_time(px, plot);

        prop_assert!((recovered - time).abs() <= 1e-3);
    }

    #[test]
    fn time_to_pixel_is_monotonic(
        window_start in 1_000_000_000_000.0f64..2_000_000_000_000.0,
        window_span in 60_000.0f64..2_592_000_000.0,
        factor_a in 0.0f64..1.0,
        factor_b in 0.0f64..1.0
    ) {
        prop_assume!(factor_a < factor_b);

        let plot = PlotArea::from_viewport(Viewport::new(2048, 1024), Padding::default())
            .expect("plot area");
        let scale = TimeScale::new(window_start, window_start + window_span).expect("valid scale");

        let earlier = scale.time_to_pixel(window_start + factor_a * window_span, plot);
        let later = scale.time_to_pixel(window_start + factor_b * window_span, plot);

        prop_assert!(earlier <= later);
    }

    #[test]
    fn value_scale_keeps_samples_inside_the_plot(
        peak in 1.0f64..100_000.0,
        value_factor in 0.0f64..1.0,
        offline in any::<bool>()
    ) {
        let value = peak * value_factor;
        let samples = vec![
            Sample::new(DateTime::from_timestamp_millis(0).unwrap(), value),
            Sample::new(DateTime::from_timestamp_millis(60_000).unwrap(), peak),
        ];

        let plot = PlotArea::from_viewport(Viewport::new(800, 400), Padding::default())
            .expect("plot area");
        let scale = ValueScale::from_samples(&samples, offline);

        let y = scale.value_to_pixel(value, plot);
        prop_assert!(y >= plot.top - 1e-9);
        prop_assert!(y <= plot.bottom() + 1e-9);
    }

    #[test]
    fn interpolation_matches_the_closed_form(
        t1 in 0i64..1_000_000,
        span in 1i64..1_000_000,
        v1 in 0.0f64..10_000.0,
        v2 in 0.0f64..10_000.0,
        factor in 0.0f64..1.0
    ) {
        let t2 = t1 + span;
        let first = Sample::new(DateTime::from_timestamp_millis(t1).unwrap(), v1);
        let second = Sample::new(DateTime::from_timestamp_millis(t2).unwrap(), v2);

        let time = t1 as f64 + factor * span as f64;
        let expected = v1 + (time - t1 as f64) / (t2 - t1) as f64 * (v2 - v1);

        prop_assert!((interpolate(&first, &second, time) - expected).abs() <= 1e-9);
    }
}
