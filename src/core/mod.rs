pub mod annotations;
pub mod candlestick;
pub mod geometry;
pub mod moving_average;
pub mod primitives;
pub mod series;
pub mod transform;
pub mod types;
pub mod viewport;
pub mod windowing;

pub use annotations::{AnnotationStore, LineSegment, LineSelector, MovingAverageSetting};
pub use candlestick::{
    CandleGeometry, KEY_POINTS_PER_CANDLE, OhlcRecord, project_candle, project_candles,
};
pub use geometry::{Bounds, Point, inv_lerp, lerp, nearest_index, remap, remap_point};
pub use moving_average::block_moving_average;
pub use primitives::{
    datetime_to_unix_seconds, decimal_to_f64, parse_time_text, unix_seconds_to_datetime,
};
pub use series::{DataBoundsTuning, SeriesStore};
pub use transform::{CoordinateTransform, plot_pixel_bounds};
pub use types::{RawOhlcRecord, RawTime, Viewport};
pub use viewport::{ViewportState, ZoomLimits};
pub use windowing::{DataRange, records_in_range};
