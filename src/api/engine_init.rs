use tracing::debug;

use crate::core::{AnnotationStore, SeriesStore, ViewportState};
use crate::error::ChartResult;
use crate::extensions::{NullOverlay, OverlayDisplay};
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::validation::validate_config;
use super::{ChartEngine, ChartEngineConfig, engine_core::EngineCore};

impl<R: Renderer> ChartEngine<R, NullOverlay> {
    /// Creates an engine without tooltip UI.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        Self::with_overlay(renderer, NullOverlay, config)
    }
}

impl<R: Renderer, O: OverlayDisplay> ChartEngine<R, O> {
    /// Creates a fully initialized engine with a host overlay for tooltips.
    ///
    /// The surface is cleared once so the host starts from a known state.
    pub fn with_overlay(renderer: R, overlay: O, config: ChartEngineConfig) -> ChartResult<Self> {
        validate_config(&config)?;

        let mut series = SeriesStore::default();
        series.set_range(config.data_range);
        let tooltip_enabled = config.tooltip_enabled;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            margin_px = config.margin_px,
            "chart engine init"
        );

        let mut engine = Self {
            renderer,
            overlay,
            core: EngineCore {
                config,
                series,
                viewport_state: ViewportState::identity(),
                annotations: AnnotationStore::default(),
                interaction: InteractionState::default(),
                tooltip_enabled,
                tooltip: None,
            },
        };
        engine.redraw()?;
        Ok(engine)
    }
}
