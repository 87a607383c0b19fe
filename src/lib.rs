//! scatter-rs: responsive poverty vs. healthcare scatter chart.
//!
//! The crate renders into a retained, page-like `Document` owned by the
//! host and can serialize the result to SVG. Data loading, scales and
//! drawing are split so each render cycle can be tested in isolation.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartRenderer, RenderOutcome, ResizeController, ScatterChartConfig};
pub use error::{ChartError, ChartResult};
