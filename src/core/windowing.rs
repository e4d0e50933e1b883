use serde::{Deserialize, Serialize};

use crate::core::OhlcRecord;

/// Index window `[start, start + amount)` over the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRange {
    pub start: usize,
    pub amount: usize,
}

impl DataRange {
    #[must_use]
    pub const fn new(start: usize, amount: usize) -> Self {
        Self { start, amount }
    }

    /// Half-open index range clamped to a series of `len` records.
    #[must_use]
    pub fn clamped(self, len: usize) -> std::ops::Range<usize> {
        let start = self.start.min(len);
        let end = self.start.saturating_add(self.amount).min(len);
        start..end
    }
}

/// Records inside an optional index window; `None` selects the whole series.
#[must_use]
pub fn records_in_range(records: &[OhlcRecord], range: Option<DataRange>) -> &[OhlcRecord] {
    match range {
        Some(range) => &records[range.clamped(records.len())],
        None => records,
    }
}

#[cfg(test)]
mod tests {
    use super::{DataRange, records_in_range};
    use crate::core::OhlcRecord;

    fn series(len: usize) -> Vec<OhlcRecord> {
        (0..len)
            .map(|i| {
                let t = i as f64;
                OhlcRecord::new(t, t, t + 1.0, t - 1.0, t).expect("finite")
            })
            .collect()
    }

    #[test]
    fn window_is_clamped_to_series_length() {
        let records = series(5);
        assert_eq!(records_in_range(&records, Some(DataRange::new(3, 10))).len(), 2);
        assert!(records_in_range(&records, Some(DataRange::new(9, 2))).is_empty());
        assert_eq!(records_in_range(&records, None).len(), 5);
    }

    #[test]
    fn window_start_overflow_saturates() {
        let range = DataRange::new(usize::MAX, usize::MAX);
        assert_eq!(range.clamped(4), 4..4);
    }
}
