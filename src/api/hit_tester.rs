use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{KEY_POINTS_PER_CANDLE, OhlcRecord, Point, nearest_index, project_candles};
use crate::extensions::{OverlayDisplay, Tooltip};
use crate::render::Renderer;

use super::ChartEngine;
use super::axis_label_format::{format_price_label, format_time_label};

/// Candle whose key point lies within the hit radius of a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleHit {
    /// Index in the full series.
    pub record_index: usize,
    pub record: OhlcRecord,
    /// Pixel position of the matched open/high/low/close point.
    pub key_point: Point,
    pub distance_px: f64,
}

impl<R: Renderer, O: OverlayDisplay> ChartEngine<R, O> {
    /// Finds the candle key point nearest to `pixel` under the current
    /// pan/zoom.
    ///
    /// Candidates are flattened as open, high, low, close per visible candle;
    /// ties resolve to the earliest candidate. A candidate only counts when
    /// it is strictly closer than [`Self::hit_radius_px`].
    #[must_use]
    pub fn hit_test(&self, pixel: Point) -> Option<CandleHit> {
        if !pixel.is_finite() {
            return None;
        }
        let visible = self.core.series.visible();
        let transform = self.data_transform(true).ok()?;
        let candidates: Vec<Point> = project_candles(visible, transform)
            .into_iter()
            .flat_map(|geometry| geometry.key_points())
            .collect();

        let index = nearest_index(pixel, &candidates)?;
        let key_point = candidates[index];
        let distance_px = pixel.distance(key_point);
        if distance_px >= self.hit_radius_px() {
            return None;
        }

        let local = index / KEY_POINTS_PER_CANDLE;
        Some(CandleHit {
            record_index: self.visible_offset() + local,
            record: visible[local],
            key_point,
            distance_px,
        })
    }

    /// Tooltip currently shown, if any.
    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.core.tooltip.as_ref()
    }

    /// Shows or hides the tooltip for the pointer at `pixel`.
    pub(super) fn update_tooltip(&mut self, pixel: Point) {
        match self.hit_test(pixel) {
            Some(hit) => {
                let tooltip = self.tooltip_for(hit, pixel);
                trace!(record_index = hit.record_index, "show tooltip");
                self.overlay.show_tooltip(&tooltip);
                self.core.tooltip = Some(tooltip);
            }
            None => self.hide_tooltip(),
        }
    }

    /// Hides the tooltip; the overlay is only told when one is shown.
    pub(super) fn hide_tooltip(&mut self) {
        if self.core.tooltip.take().is_some() {
            trace!("hide tooltip");
            self.overlay.hide_tooltip();
        }
    }

    fn tooltip_for(&self, hit: CandleHit, pixel: Point) -> Tooltip {
        let style = &self.core.config.style;
        let precision = style.price_precision;
        let record = hit.record;
        Tooltip {
            record_index: hit.record_index,
            record,
            anchor: pixel.add(self.core.config.tooltip_offset_px),
            lines: vec![
                format_time_label(record.time, &style.time_label_format),
                format!("Open: {}", format_price_label(record.open, precision)),
                format!("High: {}", format_price_label(record.high, precision)),
                format!("Low: {}", format_price_label(record.low, precision)),
                format!("Close: {}", format_price_label(record.close, precision)),
            ],
        }
    }
}
