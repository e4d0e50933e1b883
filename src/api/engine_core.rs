use crate::core::{AnnotationStore, SeriesStore, ViewportState};
use crate::extensions::Tooltip;
use crate::interaction::InteractionState;

use super::ChartEngineConfig;

/// Internal engine state used by the public facade (`ChartEngine`).
pub(super) struct EngineCore {
    pub(super) config: ChartEngineConfig,
    pub(super) series: SeriesStore,
    pub(super) viewport_state: ViewportState,
    pub(super) annotations: AnnotationStore,
    pub(super) interaction: InteractionState,
    pub(super) tooltip_enabled: bool,
    /// Tooltip currently shown through the overlay, if any.
    pub(super) tooltip: Option<Tooltip>,
}
