mod engine;
mod engine_config;
mod frame_builder;
mod style;
mod tooltip;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use frame_builder::{NO_DATA_MESSAGE, SINGLE_SAMPLE_MESSAGE, build_frame};
pub use style::{ChartStyle, DashPattern};
pub use tooltip::{GapTooltip, Tooltip, ValueTooltip, resolve_tooltip};
