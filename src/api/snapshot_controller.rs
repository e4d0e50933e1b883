use crate::core::project_candles;
use crate::error::{ChartError, ChartResult};
use crate::extensions::OverlayDisplay;
use crate::render::Renderer;

use super::{ChartEngine, EngineSnapshot};

impl<R: Renderer, O: OverlayDisplay> ChartEngine<R, O> {
    /// Builds a deterministic snapshot useful for regression tests.
    pub fn snapshot(&self) -> ChartResult<EngineSnapshot> {
        let visible = self.core.series.visible();
        let candle_geometry = if visible.is_empty() {
            Vec::new()
        } else {
            project_candles(visible, self.data_transform(true)?)
        };

        Ok(EngineSnapshot {
            viewport: self.core.config.viewport,
            viewport_state: self.core.viewport_state,
            data_range: self.core.series.range(),
            record_count: self.core.series.len(),
            visible_record_count: visible.len(),
            lines: self.core.annotations.lines().to_vec(),
            moving_average: self.core.annotations.moving_average(),
            tooltip_enabled: self.core.tooltip_enabled,
            tooltip: self.core.tooltip.clone(),
            candle_geometry,
        })
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
