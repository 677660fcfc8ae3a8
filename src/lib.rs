//! uptime-chart: gap-aware response-time charting engine for status pages.
//!
//! The crate maps an irregularly sampled, possibly gapped latency series onto
//! a fixed pixel surface, renders outage gaps distinctly (declared by the
//! source or inferred from sample spacing), and resolves cursor-driven
//! interpolated tooltips, including "inside an outage" semantics. Rendering
//! backends only consume materialized [`render::RenderFrame`]s, so all
//! geometry and tooltip logic stays headless and testable.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod status;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartStyle};
pub use error::{ChartError, ChartResult};
