use tracing::debug;

use crate::core::{Bounds, DataRange, OhlcRecord, RawOhlcRecord, SeriesStore};
use crate::error::ChartResult;
use crate::extensions::OverlayDisplay;
use crate::render::Renderer;

use super::ChartEngine;
use super::validation::validate_data_range;

impl<R: Renderer, O: OverlayDisplay> ChartEngine<R, O> {
    /// Replaces the series and redraws.
    ///
    /// Times are normalized once; a record with an unparsable time or a
    /// non-finite value rejects the whole batch and leaves the series as it
    /// was. A series that cannot be drawn is rejected the same way.
    pub fn set_data(&mut self, records: Vec<RawOhlcRecord>) -> ChartResult<()> {
        let records = SeriesStore::normalize_batch(&records)?;
        debug!(count = records.len(), "set data");
        let previous = self.core.series.clone();
        self.core.series.replace(records);
        if let Some(range) = self.core.series.range() {
            if range.start >= self.core.series.len() {
                debug!(start = range.start, "data range past end of new series; cleared");
                self.core.series.set_range(None);
            }
        }
        self.redraw_or_restore(|core| core.series = previous)?;
        self.hide_tooltip();
        Ok(())
    }

    /// Appends records (re-sorting if they arrive out of order) and redraws.
    ///
    /// A re-sort shifts record indices, so a shown tooltip is hidden.
    pub fn add_data(&mut self, records: Vec<RawOhlcRecord>) -> ChartResult<()> {
        let records = SeriesStore::normalize_batch(&records)?;
        let appended = records.len();
        let previous = self.core.series.clone();
        let resorted = self.core.series.append(records);
        debug!(appended, count = self.core.series.len(), resorted, "add data");
        self.redraw_or_restore(|core| core.series = previous)?;
        if resorted {
            self.hide_tooltip();
        }
        Ok(())
    }

    /// Parses a JSON array of records and replaces the series with it.
    pub fn set_data_from_json(&mut self, input: &str) -> ChartResult<()> {
        let records = RawOhlcRecord::list_from_json_str(input)?;
        self.set_data(records)
    }

    /// Full series in time order.
    #[must_use]
    pub fn records(&self) -> &[OhlcRecord] {
        self.core.series.records()
    }

    /// Records inside the active data range.
    #[must_use]
    pub fn visible_records(&self) -> &[OhlcRecord] {
        self.core.series.visible()
    }

    /// Restricts the chart to `amount` candles starting at index `start`.
    pub fn set_data_range(&mut self, start: usize, amount: usize) -> ChartResult<()> {
        let range = validate_data_range(DataRange::new(start, amount))?;
        debug!(start, amount, "set data range");
        let previous = self.core.series.range();
        self.core.series.set_range(Some(range));
        self.redraw_or_restore(|core| core.series.set_range(previous))?;
        self.hide_tooltip();
        Ok(())
    }

    pub fn clear_data_range(&mut self) -> ChartResult<()> {
        let previous = self.core.series.range();
        self.core.series.set_range(None);
        self.redraw_or_restore(|core| core.series.set_range(previous))?;
        self.hide_tooltip();
        Ok(())
    }

    #[must_use]
    pub fn data_range(&self) -> Option<DataRange> {
        self.core.series.range()
    }

    /// Bounds of the visible records, raw or with pan/zoom applied.
    ///
    /// Fails with `ChartError::EmptySeries` when nothing is visible.
    pub fn data_bounds(&self, apply_viewport: bool) -> ChartResult<Bounds> {
        let viewport_state = apply_viewport.then_some(self.core.viewport_state);
        self.core
            .series
            .bounds(self.core.config.bounds_tuning, viewport_state)
    }

    /// Index of the first visible record within the full series.
    pub(super) fn visible_offset(&self) -> usize {
        self.core
            .series
            .range()
            .map_or(0, |range| range.clamped(self.core.series.len()).start)
    }
}
