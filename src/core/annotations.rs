use serde::{Deserialize, Serialize};

use crate::core::geometry::Point;
use crate::error::{ChartError, ChartResult};

/// A user-drawn straight line in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Selects which stored lines `remove_line` drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineSelector {
    Index(usize),
    All,
}

impl LineSelector {
    /// Maps a host integer: `-1` selects all lines, `>= 0` one index.
    pub fn from_raw(raw: i64) -> ChartResult<Self> {
        match raw {
            -1 => Ok(Self::All),
            index if index >= 0 => usize::try_from(index)
                .map(Self::Index)
                .map_err(|_| ChartError::InvalidData(format!("line index {index} too large"))),
            other => Err(ChartError::InvalidData(format!(
                "line selector must be -1 or >= 0, got {other}"
            ))),
        }
    }
}

/// Moving-average overlay setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovingAverageSetting {
    #[default]
    Disabled,
    /// Block size in candles, always `>= 1`.
    Window(usize),
}

impl MovingAverageSetting {
    pub fn window(size: usize) -> ChartResult<Self> {
        if size == 0 {
            return Err(ChartError::InvalidMovingAverageWindow(0));
        }
        Ok(Self::Window(size))
    }

    /// Maps a host integer: `-1` disables, `>= 1` sets the window.
    pub fn from_raw(raw: i64) -> ChartResult<Self> {
        match raw {
            -1 => Ok(Self::Disabled),
            size if size >= 1 => usize::try_from(size)
                .map(Self::Window)
                .map_err(|_| ChartError::InvalidMovingAverageWindow(size)),
            other => Err(ChartError::InvalidMovingAverageWindow(other)),
        }
    }

    /// Inverse of [`MovingAverageSetting::from_raw`].
    #[must_use]
    pub fn to_raw(self) -> i64 {
        match self {
            Self::Disabled => -1,
            Self::Window(size) => i64::try_from(size).unwrap_or(i64::MAX),
        }
    }

    #[must_use]
    pub fn window_size(self) -> Option<usize> {
        match self {
            Self::Disabled => None,
            Self::Window(size) => Some(size),
        }
    }
}

/// Persisted annotation lines and the single indicator setting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationStore {
    lines: Vec<LineSegment>,
    moving_average: MovingAverageSetting,
}

impl AnnotationStore {
    pub fn add_line(&mut self, line: LineSegment) -> ChartResult<()> {
        if !line.start.is_finite() || !line.end.is_finite() {
            return Err(ChartError::InvalidData(
                "line endpoints must be finite".to_owned(),
            ));
        }
        self.lines.push(line);
        Ok(())
    }

    /// Removes the selected lines and returns how many were dropped.
    ///
    /// An out-of-range index fails without touching the store.
    pub fn remove_line(&mut self, selector: LineSelector) -> ChartResult<usize> {
        match selector {
            LineSelector::All => {
                let removed = self.lines.len();
                self.lines.clear();
                Ok(removed)
            }
            LineSelector::Index(index) if index < self.lines.len() => {
                self.lines.remove(index);
                Ok(1)
            }
            LineSelector::Index(index) => Err(ChartError::InvalidLineIndex {
                index,
                len: self.lines.len(),
            }),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    pub fn set_moving_average(&mut self, setting: MovingAverageSetting) -> ChartResult<()> {
        if setting == MovingAverageSetting::Window(0) {
            return Err(ChartError::InvalidMovingAverageWindow(0));
        }
        self.moving_average = setting;
        Ok(())
    }

    #[must_use]
    pub fn moving_average(&self) -> MovingAverageSetting {
        self.moving_average
    }
}

#[cfg(test)]
mod tests {
    use super::{AnnotationStore, LineSegment, LineSelector, MovingAverageSetting};
    use crate::core::Point;

    #[test]
    fn raw_sentinels_map_to_typed_settings() {
        assert_eq!(LineSelector::from_raw(-1).expect("all"), LineSelector::All);
        assert_eq!(LineSelector::from_raw(2).expect("index"), LineSelector::Index(2));
        assert!(LineSelector::from_raw(-2).is_err());

        assert_eq!(
            MovingAverageSetting::from_raw(-1).expect("disabled"),
            MovingAverageSetting::Disabled
        );
        assert_eq!(
            MovingAverageSetting::from_raw(3).expect("window"),
            MovingAverageSetting::Window(3)
        );
        assert!(MovingAverageSetting::from_raw(0).is_err());
        assert_eq!(MovingAverageSetting::Window(3).to_raw(), 3);
    }

    #[test]
    fn removing_a_missing_index_leaves_lines_intact() {
        let mut store = AnnotationStore::default();
        let line = LineSegment::new(Point::new(0.0, 1.0), Point::new(2.0, 3.0));
        store.add_line(line).expect("add");

        assert!(store.remove_line(LineSelector::Index(4)).is_err());
        assert_eq!(store.lines(), &[line]);
        assert_eq!(store.remove_line(LineSelector::Index(0)).expect("remove"), 1);
        assert!(store.lines().is_empty());
    }

    #[test]
    fn zero_window_is_rejected() {
        let mut store = AnnotationStore::default();
        assert!(
            store
                .set_moving_average(MovingAverageSetting::Window(0))
                .is_err()
        );
        assert_eq!(store.moving_average(), MovingAverageSetting::Disabled);
    }
}
