use tracing::trace;

use crate::core::Point;
use crate::error::{ChartError, ChartResult};
use crate::extensions::OverlayDisplay;
use crate::interaction::{InteractionMode, InteractionState, PointerEvent, PositionSpace, WheelEvent};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer, O: OverlayDisplay> ChartEngine<R, O> {
    #[must_use]
    pub fn interaction_state(&self) -> &InteractionState {
        &self.core.interaction
    }

    /// Converts a device-space pointer into the requested coordinate space.
    ///
    /// Data spaces need at least one visible record and fail with
    /// `ChartError::EmptySeries` otherwise.
    pub fn mouse_position(&self, event: PointerEvent, space: PositionSpace) -> ChartResult<Point> {
        let pixel = pointer_pixel(event)?;
        match space {
            PositionSpace::Pixel => Ok(pixel),
            PositionSpace::Data => Ok(self.data_transform(true)?.pixel_to_data(pixel)),
            PositionSpace::RawData => Ok(self.data_transform(false)?.pixel_to_data(pixel)),
        }
    }

    /// Pan mode grabs the chart; draw mode places a line endpoint and
    /// commits the line on every second point.
    ///
    /// Without visible data there is nothing to grab and the event is ignored.
    pub fn pointer_down(&mut self, event: PointerEvent, mode: InteractionMode) -> ChartResult<()> {
        let pixel = pointer_pixel(event)?;
        if self.core.series.visible().is_empty() {
            return Ok(());
        }
        let point = self.data_transform(true)?.pixel_to_data(pixel);
        trace!(?mode, x = pixel.x, y = pixel.y, "pointer down");

        match mode {
            InteractionMode::Pan => {
                self.core.interaction.on_pan_start(point);
                Ok(())
            }
            InteractionMode::DrawLine => {
                match self.core.interaction.draft_mut().push(point) {
                    Some(line) => self.add_line(line.start, line.end),
                    None => Ok(()),
                }
            }
        }
    }

    /// Drags the view while panning, then refreshes the tooltip.
    pub fn pointer_move(&mut self, event: PointerEvent, mode: InteractionMode) -> ChartResult<()> {
        let pixel = pointer_pixel(event)?;
        self.core.interaction.on_pointer_move(pixel);
        if self.core.series.visible().is_empty() {
            return Ok(());
        }

        if mode == InteractionMode::Pan && self.core.interaction.is_dragging() {
            let previous = self.core.viewport_state;
            let current = self.data_transform(true)?.pixel_to_data(pixel);
            let anchor = self.core.interaction.drag().anchor;
            self.core.viewport_state.drag(anchor, current)?;
            trace!(
                offset_x = self.core.viewport_state.offset.x,
                offset_y = self.core.viewport_state.offset.y,
                "pan"
            );
            self.redraw_or_restore(|core| core.viewport_state = previous)?;
            let anchor = self.data_transform(true)?.pixel_to_data(pixel);
            self.core.interaction.set_anchor(anchor);
        }

        if self.core.tooltip_enabled {
            self.update_tooltip(pixel);
        }
        Ok(())
    }

    pub fn pointer_up(&mut self, event: PointerEvent) -> ChartResult<()> {
        let pixel = pointer_pixel(event)?;
        if self.core.interaction.is_dragging() {
            trace!(x = pixel.x, y = pixel.y, "pan end");
        }
        self.core.interaction.on_pan_end();
        Ok(())
    }

    /// Ends any drag and hides the tooltip.
    pub fn pointer_leave(&mut self) {
        self.core.interaction.on_pointer_leave();
        self.hide_tooltip();
    }

    /// Steps the zoom scale by the sign of `delta_y` and redraws.
    pub fn wheel(&mut self, event: WheelEvent) -> ChartResult<()> {
        let pixel = pointer_pixel(event.pointer)?;
        if self.core.series.visible().is_empty() {
            return Ok(());
        }
        let previous = self.core.viewport_state;
        let changed = self
            .core
            .viewport_state
            .zoom_wheel(event.delta_y, self.core.config.zoom);
        if !changed {
            return Ok(());
        }
        trace!(scale = self.core.viewport_state.scale, "zoom");
        self.redraw_or_restore(|core| core.viewport_state = previous)?;
        if self.core.tooltip_enabled {
            self.update_tooltip(pixel);
        }
        Ok(())
    }

    /// Buffered endpoints of the line being drawn, in data space.
    #[must_use]
    pub fn line_draft(&self) -> &[Point] {
        self.core.interaction.draft().points()
    }

    /// Turning tooltips off hides one that is currently shown.
    pub fn set_tooltip_enabled(&mut self, enabled: bool) {
        self.core.tooltip_enabled = enabled;
        if !enabled {
            self.hide_tooltip();
        }
    }

    #[must_use]
    pub fn tooltip_enabled(&self) -> bool {
        self.core.tooltip_enabled
    }
}

fn pointer_pixel(event: PointerEvent) -> ChartResult<Point> {
    let pixel = event.surface_position();
    if !pixel.is_finite() {
        return Err(ChartError::InvalidData(
            "pointer position must be finite".to_owned(),
        ));
    }
    Ok(pixel)
}
