use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, ClearPrimitive, Color, LinePrimitive, TextPrimitive,
};

/// One primitive draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line(LinePrimitive),
    Circle(CirclePrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

/// Ordered draw commands belonging to one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub commands: Vec<DrawCommand>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    #[must_use]
    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    #[must_use]
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }
}

/// Backend-agnostic scene for one full redraw: a surface clear followed by
/// layers in [`CanvasLayerKind::CANONICAL_ORDER`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub clear: ClearPrimitive,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    /// Frame that clears the whole surface with `background` and has empty
    /// layers.
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            clear: ClearPrimitive {
                x: 0.0,
                y: 0.0,
                width: f64::from(viewport.width),
                height: f64::from(viewport.height),
                color: background,
            },
            layers: CanvasLayerKind::CANONICAL_ORDER
                .iter()
                .map(|&kind| LayerPrimitives {
                    kind,
                    commands: Vec::new(),
                })
                .collect(),
        }
    }

    pub fn push(&mut self, kind: CanvasLayerKind, command: DrawCommand) {
        if let Some(layer) = self.layers.iter_mut().find(|layer| layer.kind == kind) {
            layer.commands.push(command);
        } else {
            self.layers.push(LayerPrimitives {
                kind,
                commands: vec![command],
            });
        }
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        self.push(kind, DrawCommand::Line(line));
    }

    pub fn push_circle(&mut self, kind: CanvasLayerKind, circle: CirclePrimitive) {
        self.push(kind, DrawCommand::Circle(circle));
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        self.push(kind, DrawCommand::Text(text));
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    /// All draw commands in paint order.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.layers.iter().flat_map(|layer| layer.commands.iter())
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines().count()).sum()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.circles().count()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts().count()).sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.clear.validate()?;
        for command in self.commands() {
            command.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;
    use crate::core::{Point, Viewport};
    use crate::render::{CanvasLayerKind, Color, LinePrimitive};

    #[test]
    fn commands_follow_layer_order_not_push_order() {
        let mut frame = RenderFrame::new(Viewport::new(100, 100), Color::WHITE);
        let axis = LinePrimitive::new(Point::new(0.0, 0.0), Point::new(0.0, 10.0), 1.0, Color::BLACK);
        let candle = LinePrimitive::new(Point::new(5.0, 0.0), Point::new(5.0, 10.0), 2.0, Color::BLACK);
        frame.push_line(CanvasLayerKind::Axes, axis);
        frame.push_line(CanvasLayerKind::Candles, candle);

        let widths: Vec<f64> = frame
            .commands()
            .filter_map(|command| match command {
                super::DrawCommand::Line(line) => Some(line.stroke_width),
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![2.0, 1.0]);
        assert_eq!(frame.line_count(), 2);
    }

    #[test]
    fn new_frame_is_empty_but_clears_full_surface() {
        let frame = RenderFrame::new(Viewport::new(320, 200), Color::WHITE);
        assert!(frame.is_empty());
        assert_eq!(frame.clear.width, 320.0);
        assert_eq!(frame.clear.height, 200.0);
        frame.validate().expect("valid frame");
    }
}
