use tracing::debug;

use crate::core::{LineSegment, LineSelector, MovingAverageSetting, Point, block_moving_average};
use crate::error::ChartResult;
use crate::extensions::OverlayDisplay;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer, O: OverlayDisplay> ChartEngine<R, O> {
    /// Stores a data-space line and redraws.
    ///
    /// A line whose endpoints cannot be projected onto the surface is
    /// dropped again and the error returned.
    pub fn add_line(&mut self, start: Point, end: Point) -> ChartResult<()> {
        let previous = self.core.annotations.clone();
        self.core
            .annotations
            .add_line(LineSegment::new(start, end))?;
        debug!(count = self.core.annotations.lines().len(), "add line");
        self.redraw_or_restore(|core| core.annotations = previous)
    }

    /// Removes one line or all of them and redraws.
    ///
    /// Returns the number of removed lines. A missing index fails with
    /// `ChartError::InvalidLineIndex` and changes nothing.
    pub fn remove_line(&mut self, selector: LineSelector) -> ChartResult<usize> {
        let removed = self.core.annotations.remove_line(selector)?;
        debug!(?selector, removed, "remove line");
        self.redraw()?;
        Ok(removed)
    }

    #[must_use]
    pub fn lines(&self) -> &[LineSegment] {
        self.core.annotations.lines()
    }

    pub fn set_moving_average(&mut self, setting: MovingAverageSetting) -> ChartResult<()> {
        let previous = self.core.annotations.clone();
        self.core.annotations.set_moving_average(setting)?;
        debug!(?setting, "set moving average");
        self.redraw_or_restore(|core| core.annotations = previous)
    }

    #[must_use]
    pub fn moving_average(&self) -> MovingAverageSetting {
        self.core.annotations.moving_average()
    }

    /// Data-space block-average points over the visible records.
    ///
    /// Empty when the overlay is disabled.
    #[must_use]
    pub fn moving_average_points(&self) -> Vec<Point> {
        match self.core.annotations.moving_average() {
            MovingAverageSetting::Disabled => Vec::new(),
            MovingAverageSetting::Window(window) => {
                block_moving_average(self.core.series.visible(), window)
            }
        }
    }
}
