pub mod gaps;
pub mod period;
pub mod sample;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use gaps::{
    DEFAULT_GAP_THRESHOLD_MS, GapInterval, GapIntervals, bounding_pair, gap_at, interpolate,
    resolve_gap_intervals,
};
pub use period::{DisplayMode, Period};
pub use sample::{GapMarker, Sample, Series, SeriesEntry};
pub use time_scale::TimeScale;
pub use types::{CursorPos, Padding, PlotArea, Viewport};
pub use value_scale::ValueScale;
