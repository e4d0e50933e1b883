use serde::{Deserialize, Serialize};

use crate::core::geometry::{Bounds, Point};
use crate::error::{ChartError, ChartResult};

/// Zoom stepping and clamping controls.
///
/// The lower scale limit equals `step`, so a wheel notch can never zoom to a
/// zero-sized view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub step: f64,
    pub max_scale: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            step: 0.02,
            max_scale: 2.0,
        }
    }
}

impl ZoomLimits {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom step must be finite and > 0".to_owned(),
            ));
        }
        if !self.max_scale.is_finite() || self.max_scale < self.step {
            return Err(ChartError::InvalidData(
                "zoom max scale must be finite and >= zoom step".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn min_scale(self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn clamp(self, scale: f64) -> f64 {
        scale.clamp(self.min_scale(), self.max_scale)
    }
}

/// Pan/zoom state applied on top of the raw data bounds.
///
/// `offset` is a data-space translation; `scale` shrinks (`< 1`) or grows
/// (`> 1`) the visible data rectangle around its own center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub offset: Point,
    pub scale: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewportState {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            offset: Point::new(0.0, 0.0),
            scale: 1.0,
        }
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::identity()
    }

    /// Viewport-applied bounds: translate by `offset`, then scale each edge
    /// toward the translated center by `scale²`.
    #[must_use]
    pub fn apply(self, raw: Bounds) -> Bounds {
        raw.translate(self.offset)
            .scale_about_center(self.scale * self.scale)
    }

    /// Moves the offset so data under the pointer follows it.
    ///
    /// `anchor` is the data point grabbed at drag start and `current` the data
    /// point now under the pointer (both read through the same bounds).
    pub fn drag(&mut self, anchor: Point, current: Point) -> ChartResult<()> {
        let delta = current.subtract(anchor);
        if !delta.is_finite() {
            return Err(ChartError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        self.offset = self.offset.subtract(delta);
        Ok(())
    }

    /// Adds a data-space translation to the offset.
    pub fn pan_by(&mut self, delta: Point) -> ChartResult<()> {
        if !delta.is_finite() {
            return Err(ChartError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        self.offset = self.offset.add(delta);
        Ok(())
    }

    /// Applies one wheel notch: `scale += sign(delta_y) * step`, clamped.
    ///
    /// Returns `false` when the scale did not change (zero delta or already
    /// at a limit).
    pub fn zoom_wheel(&mut self, delta_y: f64, limits: ZoomLimits) -> bool {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return false;
        }
        self.zoom_steps(delta_y.signum(), limits)
    }

    /// Applies `steps` zoom steps (fractional and negative allowed), clamped.
    pub fn zoom_steps(&mut self, steps: f64, limits: ZoomLimits) -> bool {
        if !steps.is_finite() {
            return false;
        }
        let next = limits.clamp(self.scale + steps * limits.step);
        let changed = next != self.scale;
        self.scale = next;
        changed
    }

    pub fn reset(&mut self) {
        *self = Self::identity();
    }
}
