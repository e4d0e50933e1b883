use tracing::{trace, warn};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::extensions::{NullOverlay, OverlayDisplay};
use crate::render::{RenderFrame, Renderer};

use super::validation::validate_render_style;
use super::{ChartEngineConfig, RenderStyle, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the series, pan/zoom state, annotations and pointer
/// state, and hands a complete frame to its renderer after every mutation.
pub struct ChartEngine<R: Renderer, O: OverlayDisplay = NullOverlay> {
    pub(super) renderer: R,
    pub(super) overlay: O,
    pub(super) core: EngineCore,
}

impl<R: Renderer, O: OverlayDisplay> ChartEngine<R, O> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.core.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.config.viewport
    }

    #[must_use]
    pub fn render_style(&self) -> &RenderStyle {
        &self.core.config.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        validate_render_style(&style)?;
        let previous = std::mem::replace(&mut self.core.config.style, style);
        self.redraw_or_restore(|core| core.config.style = previous)
    }

    /// Clears the surface and draws every layer from current state.
    pub fn redraw(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.render_frame(&frame)
    }

    /// Redraws after a mutation. When the mutated state cannot be turned
    /// into a valid frame, `restore` puts the previous state back and the
    /// frame error is returned; the last rendered frame stays on screen.
    pub(super) fn redraw_or_restore(
        &mut self,
        restore: impl FnOnce(&mut EngineCore),
    ) -> ChartResult<()> {
        let frame = match self.build_render_frame() {
            Ok(frame) => frame,
            Err(err) => {
                restore(&mut self.core);
                warn!(error = %err, "rejected state that cannot be drawn; restored previous state");
                return Err(err);
            }
        };
        self.render_frame(&frame)
    }

    fn render_frame(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.renderer.render(frame)?;
        trace!(
            lines = frame.line_count(),
            circles = frame.circle_count(),
            texts = frame.text_count(),
            "redraw"
        );
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn into_parts(self) -> (R, O) {
        (self.renderer, self.overlay)
    }
}
