mod axis;
mod document;
mod null_renderer;
mod svg_backend;

pub use axis::{AXIS_CLASS, AxisOrient, AxisSpec, DOMAIN_CLASS, TICK_CLASS, draw_axis};
pub use document::{Document, Element, EventKind, NodeId};
pub use null_renderer::NullRenderer;
pub use svg_backend::{SVG_NAMESPACE, SvgRenderer};

use crate::error::ChartResult;

/// Contract implemented by any output backend.
///
/// Backends read the retained document after a render cycle, so drawing
/// code stays isolated from data loading and interaction wiring.
pub trait Renderer {
    fn render(&mut self, document: &Document) -> ChartResult<()>;
}
