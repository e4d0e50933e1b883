use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::geometry::Bounds;
use crate::core::types::RawOhlcRecord;
use crate::core::windowing::{DataRange, records_in_range};
use crate::core::{OhlcRecord, ViewportState};
use crate::error::{ChartError, ChartResult};

/// Fraction of a flat axis' magnitude used when it exceeds the fallback span.
const RELATIVE_FLAT_SPAN: f64 = 1e-9;

/// Fallback spans used when the series has no extent on an axis.
///
/// Large magnitudes widen by `RELATIVE_FLAT_SPAN * |value|` instead, so the
/// widened extent survives float rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataBoundsTuning {
    /// Time span (seconds) used when all records share one timestamp.
    pub min_time_span: f64,
    /// Price span used when every high and low are equal.
    pub min_price_span: f64,
}

impl Default for DataBoundsTuning {
    fn default() -> Self {
        Self {
            min_time_span: 86_400.0,
            min_price_span: 1.0,
        }
    }
}

impl DataBoundsTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.min_time_span.is_finite() || self.min_time_span <= 0.0 {
            return Err(ChartError::InvalidData(
                "min time span must be finite and > 0".to_owned(),
            ));
        }
        if !self.min_price_span.is_finite() || self.min_price_span <= 0.0 {
            return Err(ChartError::InvalidData(
                "min price span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Ordered OHLC series plus the optional index window being displayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesStore {
    records: Vec<OhlcRecord>,
    range: Option<DataRange>,
}

impl SeriesStore {
    /// Normalizes a batch; the whole batch fails on the first bad record.
    pub fn normalize_batch(raw: &[RawOhlcRecord]) -> ChartResult<Vec<OhlcRecord>> {
        let records = raw
            .iter()
            .map(RawOhlcRecord::normalize)
            .collect::<ChartResult<Vec<_>>>()?;
        let malformed = records.iter().filter(|r| r.is_malformed()).count();
        if malformed > 0 {
            warn!(malformed, "ingesting ohlc records with inverted wick/body");
        }
        Ok(records)
    }

    pub fn replace(&mut self, mut records: Vec<OhlcRecord>) {
        sort_by_time(&mut records);
        self.records = records;
    }

    /// Appends records and returns whether the series had to be re-sorted.
    pub fn append(&mut self, records: Vec<OhlcRecord>) -> bool {
        let last_time = self.records.last().map(|r| r.time);
        let out_of_order = match (last_time, records.first()) {
            (Some(last), Some(first)) => first.time < last,
            _ => false,
        } || records.windows(2).any(|w| w[1].time < w[0].time);
        self.records.extend(records);
        if out_of_order {
            warn!(
                count = self.records.len(),
                "appended records out of time order; re-sorting series"
            );
            sort_by_time(&mut self.records);
        }
        out_of_order
    }

    #[must_use]
    pub fn records(&self) -> &[OhlcRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn range(&self) -> Option<DataRange> {
        self.range
    }

    pub fn set_range(&mut self, range: Option<DataRange>) {
        self.range = range;
    }

    /// Records currently displayed (the active window or the full series).
    #[must_use]
    pub fn visible(&self) -> &[OhlcRecord] {
        records_in_range(&self.records, self.range)
    }

    /// Raw extremes of the visible records, widened on zero-extent axes.
    ///
    /// Extents that overflow `f64` fail with `ChartError::InvalidData`.
    pub fn raw_bounds(&self, tuning: DataBoundsTuning) -> ChartResult<Bounds> {
        let visible = self.visible();
        if visible.is_empty() {
            return Err(ChartError::EmptySeries);
        }

        let mut left = f64::INFINITY;
        let mut right = f64::NEG_INFINITY;
        let mut top = f64::NEG_INFINITY;
        let mut bottom = f64::INFINITY;
        for record in visible {
            left = left.min(record.time);
            right = right.max(record.time);
            top = top.max(record.high);
            bottom = bottom.min(record.low);
        }

        if left == right {
            (left, right) = widen_flat(left, tuning.min_time_span);
        }
        if top == bottom {
            (bottom, top) = widen_flat(bottom, tuning.min_price_span);
        }
        let finite_extent = (right - left).is_finite() && (top - bottom).is_finite();
        if !(finite_extent && left < right && bottom < top) {
            return Err(ChartError::InvalidData(
                "data bounds must have a finite, non-zero extent".to_owned(),
            ));
        }
        Ok(Bounds::new(left, right, top, bottom))
    }

    /// Raw bounds, or viewport-applied bounds when `viewport` is given.
    pub fn bounds(
        &self,
        tuning: DataBoundsTuning,
        viewport: Option<ViewportState>,
    ) -> ChartResult<Bounds> {
        let raw = self.raw_bounds(tuning)?;
        Ok(viewport.map_or(raw, |state| state.apply(raw)))
    }
}

fn widen_flat(value: f64, min_span: f64) -> (f64, f64) {
    let half = min_span.max(value.abs() * RELATIVE_FLAT_SPAN) / 2.0;
    (value - half, value + half)
}

fn sort_by_time(records: &mut [OhlcRecord]) {
    records.sort_by(|a, b| a.time.total_cmp(&b.time));
}
