use tracing::debug;

use crate::core::{Bounds, CoordinateTransform, Point, ViewportState, plot_pixel_bounds};
use crate::error::ChartResult;
use crate::extensions::OverlayDisplay;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer, O: OverlayDisplay> ChartEngine<R, O> {
    #[must_use]
    pub fn viewport_state(&self) -> ViewportState {
        self.core.viewport_state
    }

    /// Plot rectangle in surface pixels.
    #[must_use]
    pub fn pixel_bounds(&self) -> Bounds {
        let viewport = self.core.config.viewport;
        plot_pixel_bounds(viewport.width, viewport.height, self.core.config.margin_px)
    }

    /// Data↔pixel transform over the visible records.
    pub fn data_transform(&self, apply_viewport: bool) -> ChartResult<CoordinateTransform> {
        CoordinateTransform::new(self.data_bounds(apply_viewport)?, self.pixel_bounds())
    }

    /// Restores identity pan/zoom and redraws.
    pub fn reset_scale(&mut self) -> ChartResult<()> {
        self.core.viewport_state.reset();
        self.core.interaction.on_pan_end();
        debug!("reset scale");
        self.redraw()
    }

    /// Translates the view by a data-space delta and redraws.
    pub fn pan_by(&mut self, delta: Point) -> ChartResult<()> {
        let previous = self.core.viewport_state;
        self.core.viewport_state.pan_by(delta)?;
        self.redraw_or_restore(|core| core.viewport_state = previous)
    }

    /// Applies `steps` zoom steps (positive zooms out) and redraws when the
    /// scale changed.
    pub fn zoom_by(&mut self, steps: f64) -> ChartResult<()> {
        let previous = self.core.viewport_state;
        if self
            .core
            .viewport_state
            .zoom_steps(steps, self.core.config.zoom)
        {
            self.redraw_or_restore(|core| core.viewport_state = previous)?;
        }
        Ok(())
    }

    /// Radius within which a key point activates the tooltip.
    ///
    /// Scales inversely with the zoom scale value.
    #[must_use]
    pub fn hit_radius_px(&self) -> f64 {
        self.core.config.margin_px / 10.0 / self.core.viewport_state.scale
    }
}
