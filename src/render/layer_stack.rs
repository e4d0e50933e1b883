use serde::{Deserialize, Serialize};

/// Draw layers of one chart frame, in back-to-front order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Candles,
    MovingAverage,
    Annotations,
    Axes,
}

impl CanvasLayerKind {
    /// Canonical back-to-front order. Axes come last so labels stay legible
    /// over overlays.
    pub const CANONICAL_ORDER: [Self; 4] = [
        Self::Candles,
        Self::MovingAverage,
        Self::Annotations,
        Self::Axes,
    ];
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn axes_are_drawn_last() {
        assert_eq!(
            CanvasLayerKind::CANONICAL_ORDER.last(),
            Some(&CanvasLayerKind::Axes)
        );
        assert_eq!(CanvasLayerKind::CANONICAL_ORDER[0], CanvasLayerKind::Candles);
    }
}
