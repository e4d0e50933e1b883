mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;
mod surface;

pub use frame::{DrawCommand, LayerPrimitives, RenderFrame};
pub use layer_stack::CanvasLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, ClearPrimitive, Color, LinePrimitive, TextHAlign, TextPrimitive, TextVAlign,
};
pub use surface::{DrawingSurface, SurfaceRenderer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
