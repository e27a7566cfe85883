//! dotplot-rs: dumbbell dot-plot charts rendered to SVG.
//!
//! The crate loads a `state,male,female` CSV table, groups it by state, maps
//! values through a linear and a point scale, and draws one connected pair of
//! dots per state into an owned SVG document with hover tooltips.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, DotPlotChart, LoadOutcome};
pub use error::{ChartError, ChartResult};
