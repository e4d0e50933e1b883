use crate::core::{Bounds, CoordinateTransform, Point};
use crate::extensions::OverlayDisplay;
use crate::render::{
    CanvasLayerKind, LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive, TextVAlign,
};

use super::ChartEngine;
use super::axis_label_format::{format_price_label, format_time_label};

impl<R: Renderer, O: OverlayDisplay> ChartEngine<R, O> {
    /// Price axis on the left plot edge and time axis on the bottom edge.
    ///
    /// Ticks sit at the raw extremes and midpoint of each axis; their pixel
    /// position follows pan/zoom while labels keep the raw values.
    pub(super) fn append_axis_primitives(
        &self,
        frame: &mut RenderFrame,
        raw_bounds: Bounds,
        transform: CoordinateTransform,
    ) {
        let style = &self.core.config.style;
        let plot = self.pixel_bounds();
        let layer = CanvasLayerKind::Axes;
        let tick = style.tick_length_px;
        let axis_line = |from: Point, to: Point| {
            LinePrimitive::new(from, to, style.axis_line_width_px, style.axis_line_color)
        };
        let label = |text: String, position: Point, h_align, v_align| {
            TextPrimitive::new(
                text,
                position,
                style.label_font_size_px,
                style.text_color,
                h_align,
                v_align,
            )
        };

        frame.push_line(
            layer,
            axis_line(Point::new(plot.left, plot.top), Point::new(plot.left, plot.bottom)),
        );
        frame.push_line(
            layer,
            axis_line(Point::new(plot.left, plot.bottom), Point::new(plot.right, plot.bottom)),
        );

        let price_mid = (raw_bounds.top + raw_bounds.bottom) / 2.0;
        for price in [raw_bounds.top, price_mid, raw_bounds.bottom] {
            let y = transform.data_to_pixel(Point::new(raw_bounds.left, price)).y;
            frame.push_line(
                layer,
                axis_line(Point::new(plot.left - tick, y), Point::new(plot.left, y)),
            );
            frame.push_text(
                layer,
                label(
                    format_price_label(price, style.price_precision),
                    Point::new(plot.left - tick, y),
                    TextHAlign::Right,
                    TextVAlign::Middle,
                ),
            );
        }

        let time_mid = (raw_bounds.left + raw_bounds.right) / 2.0;
        for time in [raw_bounds.left, time_mid, raw_bounds.right] {
            let x = transform.data_to_pixel(Point::new(time, raw_bounds.bottom)).x;
            frame.push_line(
                layer,
                axis_line(Point::new(x, plot.bottom), Point::new(x, plot.bottom + tick)),
            );
            let text = format_time_label(time, &style.time_label_format);
            if !text.is_empty() {
                frame.push_text(
                    layer,
                    label(
                        text,
                        Point::new(x, plot.bottom + tick),
                        TextHAlign::Center,
                        TextVAlign::Top,
                    ),
                );
            }
        }

        let Some(titles) = &style.axis_titles else {
            return;
        };
        if !titles.value.is_empty() {
            frame.push_text(
                layer,
                label(
                    titles.value.clone(),
                    Point::new(plot.left, plot.top - tick),
                    TextHAlign::Center,
                    TextVAlign::Bottom,
                ),
            );
        }
        if !titles.time.is_empty() {
            frame.push_text(
                layer,
                label(
                    titles.time.clone(),
                    Point::new(plot.right + tick, plot.bottom),
                    TextHAlign::Left,
                    TextVAlign::Middle,
                ),
            );
        }
    }
}
