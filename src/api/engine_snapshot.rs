use serde::{Deserialize, Serialize};

use crate::core::{
    CandleGeometry, DataRange, LineSegment, MovingAverageSetting, Viewport, ViewportState,
};
use crate::extensions::Tooltip;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub viewport_state: ViewportState,
    pub data_range: Option<DataRange>,
    pub record_count: usize,
    pub visible_record_count: usize,
    pub lines: Vec<LineSegment>,
    pub moving_average: MovingAverageSetting,
    pub tooltip_enabled: bool,
    pub tooltip: Option<Tooltip>,
    /// Pixel geometry of the visible candles under the current pan/zoom.
    pub candle_geometry: Vec<CandleGeometry>,
}
