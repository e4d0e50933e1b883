use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::candlestick::OhlcRecord;
use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64, parse_time_text};
use crate::error::{ChartError, ChartResult};

/// Pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Time as delivered by the host, before normalization.
///
/// Deserializes untagged: JSON numbers are UNIX seconds, RFC 3339 strings
/// become instants and any other string is kept as text for
/// [`parse_time_text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTime {
    Seconds(f64),
    Instant(DateTime<Utc>),
    Text(String),
}

impl RawTime {
    /// Normalizes to UNIX seconds.
    pub fn to_unix_seconds(&self) -> ChartResult<f64> {
        match self {
            Self::Seconds(seconds) => Ok(*seconds),
            Self::Instant(time) => Ok(datetime_to_unix_seconds(*time)),
            Self::Text(text) => parse_time_text(text),
        }
    }
}

impl From<f64> for RawTime {
    fn from(seconds: f64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<DateTime<Utc>> for RawTime {
    fn from(time: DateTime<Utc>) -> Self {
        Self::Instant(time)
    }
}

impl From<&str> for RawTime {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for RawTime {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Ingestion-side OHLC record with a not-yet-normalized time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOhlcRecord {
    pub time: RawTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl RawOhlcRecord {
    #[must_use]
    pub fn new(time: impl Into<RawTime>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time: time.into(),
            open,
            high,
            low,
            close,
        }
    }

    /// Builds a raw record from decimal prices.
    pub fn from_decimal(
        time: impl Into<RawTime>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Ok(Self::new(
            time,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        ))
    }

    /// Parses a JSON array of records.
    pub fn list_from_json_str(input: &str) -> ChartResult<Vec<Self>> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse record json: {e}"))
        })
    }

    /// Normalizes the time and validates that every value is finite.
    pub fn normalize(&self) -> ChartResult<OhlcRecord> {
        OhlcRecord::new(
            self.time.to_unix_seconds()?,
            self.open,
            self.high,
            self.low,
            self.close,
        )
    }
}

impl From<OhlcRecord> for RawOhlcRecord {
    fn from(record: OhlcRecord) -> Self {
        Self::new(
            record.time,
            record.open,
            record.high,
            record.low,
            record.close,
        )
    }
}
