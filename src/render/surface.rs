use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, ClearPrimitive, DrawCommand, LinePrimitive, RenderFrame, Renderer,
    TextPrimitive,
};

/// Immediate-mode drawing surface supplied by a host backend.
///
/// This is the smallest capability set the chart needs: clear a region,
/// stroke a line, fill a circle and draw text.
pub trait DrawingSurface {
    fn clear_rect(&mut self, clear: &ClearPrimitive) -> ChartResult<()>;
    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()>;
    fn fill_circle(&mut self, circle: &CirclePrimitive) -> ChartResult<()>;
    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;
}

/// Replays validated frames onto a [`DrawingSurface`] in paint order.
#[derive(Debug, Default)]
pub struct SurfaceRenderer<S: DrawingSurface> {
    surface: S,
}

impl<S: DrawingSurface> SurfaceRenderer<S> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: DrawingSurface> Renderer for SurfaceRenderer<S> {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.surface.clear_rect(&frame.clear)?;
        for command in frame.commands() {
            match command {
                DrawCommand::Line(line) => self.surface.draw_line(line)?,
                DrawCommand::Circle(circle) => self.surface.fill_circle(circle)?,
                DrawCommand::Text(text) => self.surface.draw_text(text)?,
            }
        }
        Ok(())
    }
}
