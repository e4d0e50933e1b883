mod annotation_controller;
mod axis_label_format;
mod axis_render_frame_builder;
mod candlestick_render_frame_builder;
mod data_controller;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod hit_tester;
mod interaction_controller;
mod json_contract;
mod overlay_render_frame_builder;
mod render_frame_builder;
mod render_style;
mod snapshot_controller;
mod validation;
mod viewport_controller;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use hit_tester::CandleHit;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use render_style::{AxisTitles, RenderStyle};
