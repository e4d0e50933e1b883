use crate::core::CoordinateTransform;
use crate::extensions::OverlayDisplay;
use crate::render::{CanvasLayerKind, LinePrimitive, RenderFrame, Renderer};

use super::ChartEngine;

impl<R: Renderer, O: OverlayDisplay> ChartEngine<R, O> {
    /// Polyline through consecutive block-average points.
    pub(super) fn append_moving_average_primitives(
        &self,
        frame: &mut RenderFrame,
        transform: CoordinateTransform,
    ) {
        let style = &self.core.config.style;
        let pixels: Vec<_> = self
            .moving_average_points()
            .into_iter()
            .map(|point| transform.data_to_pixel(point))
            .collect();

        for pair in pixels.windows(2) {
            frame.push_line(
                CanvasLayerKind::MovingAverage,
                LinePrimitive::new(
                    pair[0],
                    pair[1],
                    style.moving_average_line_width_px,
                    style.moving_average_color,
                ),
            );
        }
    }

    pub(super) fn append_annotation_primitives(
        &self,
        frame: &mut RenderFrame,
        transform: CoordinateTransform,
    ) {
        let style = &self.core.config.style;
        for line in self.core.annotations.lines() {
            frame.push_line(
                CanvasLayerKind::Annotations,
                LinePrimitive::new(
                    transform.data_to_pixel(line.start),
                    transform.data_to_pixel(line.end),
                    style.annotation_line_width_px,
                    style.annotation_line_color,
                ),
            );
        }
    }
}
