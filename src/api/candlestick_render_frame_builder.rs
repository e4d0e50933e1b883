use crate::core::{CoordinateTransform, OhlcRecord, project_candles};
use crate::extensions::OverlayDisplay;
use crate::render::{CanvasLayerKind, CirclePrimitive, LinePrimitive, RenderFrame, Renderer};

use super::ChartEngine;

impl<R: Renderer, O: OverlayDisplay> ChartEngine<R, O> {
    /// Wick, body and the four key-point markers for each visible candle.
    pub(super) fn append_candlestick_primitives(
        &self,
        frame: &mut RenderFrame,
        visible: &[OhlcRecord],
        transform: CoordinateTransform,
    ) {
        let style = &self.core.config.style;
        let layer = CanvasLayerKind::Candles;

        for candle in project_candles(visible, transform) {
            frame.push_line(
                layer,
                LinePrimitive::new(candle.high, candle.low, style.wick_width_px, style.wick_color),
            );

            let body_color = if candle.is_up {
                style.candle_up_color
            } else {
                style.candle_down_color
            };
            frame.push_line(
                layer,
                LinePrimitive::new(
                    candle.open,
                    candle.close,
                    style.candle_body_width_px,
                    body_color,
                ),
            );

            for center in [candle.open, candle.high, candle.low, candle.close] {
                frame.push_circle(
                    layer,
                    CirclePrimitive::new(center, style.point_radius_px, style.point_color),
                );
            }
        }
    }
}
