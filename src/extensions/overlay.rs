use serde::{Deserialize, Serialize};

use crate::core::{OhlcRecord, Point};

/// Tooltip describing the candle nearest to the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    /// Index of the candle in the full series.
    pub record_index: usize,
    pub record: OhlcRecord,
    /// Surface-relative pixel position the host should anchor the tooltip at.
    pub anchor: Point,
    /// Pre-formatted lines: date, then open, high, low and close.
    pub lines: Vec<String>,
}

/// Host-owned UI capability used to show and hide the tooltip.
///
/// The engine calls `show_tooltip` on every hit (replacing content) and
/// `hide_tooltip` only when a tooltip is currently shown.
pub trait OverlayDisplay {
    fn show_tooltip(&mut self, tooltip: &Tooltip);
    fn hide_tooltip(&mut self);
}

/// Overlay for hosts without tooltip UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOverlay;

impl OverlayDisplay for NullOverlay {
    fn show_tooltip(&mut self, _tooltip: &Tooltip) {}

    fn hide_tooltip(&mut self) {}
}
