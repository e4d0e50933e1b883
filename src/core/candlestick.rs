use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::geometry::Point;
use crate::core::transform::CoordinateTransform;
use crate::error::{ChartError, ChartResult};

/// Number of key points each candle contributes to hit testing.
pub const KEY_POINTS_PER_CANDLE: usize = 4;

/// Canonical OHLC candle with its time normalized to UNIX seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcRecord {
    pub time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcRecord {
    /// Builds a record from raw floating values.
    ///
    /// Only finiteness is enforced. A record violating
    /// `low <= min(open, close) <= max(open, close) <= high` is accepted and
    /// rendered as-is; see [`OhlcRecord::is_malformed`].
    pub fn new(time: f64, open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        if !time.is_finite()
            || !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
        {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        Ok(Self {
            time,
            open,
            high,
            low,
            close,
        })
    }

    /// `true` when close is greater than or equal to open.
    #[must_use]
    pub fn is_up(self) -> bool {
        self.close >= self.open
    }

    #[must_use]
    pub fn is_malformed(self) -> bool {
        let body_low = self.open.min(self.close);
        let body_high = self.open.max(self.close);
        self.low > body_low || body_high > self.high
    }

    /// Data-space key points in hit-test order: open, high, low, close.
    #[must_use]
    pub fn key_points(self) -> [Point; KEY_POINTS_PER_CANDLE] {
        [
            Point::new(self.time, self.open),
            Point::new(self.time, self.high),
            Point::new(self.time, self.low),
            Point::new(self.time, self.close),
        ]
    }
}

/// Pixel-space geometry of one candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub open: Point,
    pub high: Point,
    pub low: Point,
    pub close: Point,
    pub is_up: bool,
}

impl CandleGeometry {
    #[must_use]
    pub fn key_points(self) -> [Point; KEY_POINTS_PER_CANDLE] {
        [self.open, self.high, self.low, self.close]
    }
}

#[must_use]
pub fn project_candle(record: OhlcRecord, transform: CoordinateTransform) -> CandleGeometry {
    let [open, high, low, close] = record.key_points().map(|p| transform.data_to_pixel(p));
    CandleGeometry {
        open,
        high,
        low,
        close,
        is_up: record.is_up(),
    }
}

/// Projects candles into pixel geometry, preserving input order.
#[must_use]
pub fn project_candles(
    records: &[OhlcRecord],
    transform: CoordinateTransform,
) -> Vec<CandleGeometry> {
    #[cfg(feature = "parallel-projection")]
    {
        records
            .par_iter()
            .map(|record| project_candle(*record, transform))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        records
            .iter()
            .map(|record| project_candle(*record, transform))
            .collect()
    }
}
