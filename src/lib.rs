//! candle-chart: interactive OHLC candlestick chart engine.
//!
//! The engine owns an ordered candle series, pan/zoom state, line
//! annotations and a block moving-average overlay. Every mutation produces a
//! backend-agnostic [`render::RenderFrame`] that is handed to a host-provided
//! [`render::Renderer`]; tooltips go through an
//! [`extensions::OverlayDisplay`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
