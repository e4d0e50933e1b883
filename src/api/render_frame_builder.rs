use crate::error::ChartResult;
use crate::extensions::OverlayDisplay;
use crate::render::{RenderFrame, Renderer};

use super::ChartEngine;

impl<R: Renderer, O: OverlayDisplay> ChartEngine<R, O> {
    /// Materializes backend-agnostic primitives for one draw pass.
    ///
    /// Geometry is computed here so renderer backends only execute drawing
    /// commands. An empty series yields a frame that only clears the surface.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let style = &self.core.config.style;
        let mut frame = RenderFrame::new(self.core.config.viewport, style.background_color);

        let visible = self.core.series.visible();
        if visible.is_empty() {
            return Ok(frame);
        }

        let raw_bounds = self.data_bounds(false)?;
        let transform = self.data_transform(true)?;

        self.append_candlestick_primitives(&mut frame, visible, transform);
        self.append_moving_average_primitives(&mut frame, transform);
        self.append_annotation_primitives(&mut frame, transform);
        self.append_axis_primitives(&mut frame, raw_bounds, transform);

        frame.validate()?;
        Ok(frame)
    }
}
