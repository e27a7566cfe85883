mod axis;
mod document;
mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use axis::{Axis, AxisOrient, AxisTick};
pub use document::{Element, NodeId, SvgDocument};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, Paint, TextAnchor, TextPrimitive, format_number,
};
pub use svg_backend::{SvgOutputMode, SvgRenderStats, SvgRenderer};

use crate::error::ChartResult;

/// Contract implemented by any output backend.
///
/// Backends receive the finished document tree so drawing code stays isolated
/// from data loading and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame<'_>) -> ChartResult<()>;
}
