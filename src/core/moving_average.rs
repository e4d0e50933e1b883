use crate::core::OhlcRecord;
use crate::core::geometry::Point;

/// Block moving average over consecutive, non-overlapping chunks.
///
/// Each chunk of `window` records (the last one may be shorter) yields one
/// data-space point: the chunk's first time and its mean close. This is not a
/// sliding average. A zero window yields no points.
#[must_use]
pub fn block_moving_average(records: &[OhlcRecord], window: usize) -> Vec<Point> {
    if window == 0 {
        return Vec::new();
    }

    records
        .chunks(window)
        .map(|chunk| {
            let sum: f64 = chunk.iter().map(|r| r.close).sum();
            Point::new(chunk[0].time, sum / chunk.len() as f64)
        })
        .collect()
}
