use serde::{Deserialize, Serialize};

use crate::core::{DataBoundsTuning, DataRange, Point, Viewport, ZoomLimits};
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    /// Uniform gap between the surface edge and the plot area. Also sizes the
    /// tooltip hit radius (`margin_px / 10 / scale`).
    #[serde(default = "default_margin_px")]
    pub margin_px: f64,
    #[serde(default)]
    pub zoom: ZoomLimits,
    #[serde(default)]
    pub bounds_tuning: DataBoundsTuning,
    #[serde(default = "default_tooltip_enabled")]
    pub tooltip_enabled: bool,
    /// Tooltip anchor offset from the pointer, in pixels.
    #[serde(default = "default_tooltip_offset_px")]
    pub tooltip_offset_px: Point,
    /// Initial candle window; `None` shows the whole series.
    #[serde(default)]
    pub data_range: Option<DataRange>,
    #[serde(default)]
    pub style: RenderStyle,
}

impl ChartEngineConfig {
    /// Creates a config with default margins, zoom limits and style.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margin_px: default_margin_px(),
            zoom: ZoomLimits::default(),
            bounds_tuning: DataBoundsTuning::default(),
            tooltip_enabled: default_tooltip_enabled(),
            tooltip_offset_px: default_tooltip_offset_px(),
            data_range: None,
            style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_margin_px(mut self, margin_px: f64) -> Self {
        self.margin_px = margin_px;
        self
    }

    #[must_use]
    pub fn with_zoom_limits(mut self, zoom: ZoomLimits) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_bounds_tuning(mut self, tuning: DataBoundsTuning) -> Self {
        self.bounds_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_tooltip_enabled(mut self, enabled: bool) -> Self {
        self.tooltip_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_data_range(mut self, range: DataRange) -> Self {
        self.data_range = Some(range);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }
}

fn default_margin_px() -> f64 {
    50.0
}

fn default_tooltip_enabled() -> bool {
    true
}

fn default_tooltip_offset_px() -> Point {
    Point::new(12.0, 12.0)
}
