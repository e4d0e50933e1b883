use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid time value: `{0}`")]
    InvalidTime(String),

    #[error("series is empty")]
    EmptySeries,

    #[error("line index {index} out of range for {len} stored lines")]
    InvalidLineIndex { index: usize, len: usize },

    #[error("invalid moving average window: {0}")]
    InvalidMovingAverageWindow(i64),

    #[error("render backend failure: {0}")]
    Backend(String),
}
