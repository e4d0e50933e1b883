use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{LineSegment, Point};

/// Host-owned gesture mode passed into every pointer handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Pointer-down grabs the chart for panning.
    #[default]
    Pan,
    /// Pointer-down places line annotation endpoints.
    DrawLine,
}

/// Coordinate space requested from `ChartEngine::mouse_position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionSpace {
    /// Surface-relative pixels.
    Pixel,
    /// Data space under the current pan/zoom.
    Data,
    /// Data space ignoring pan/zoom.
    RawData,
}

/// Raw pointer event in device pixels.
///
/// `origin_*` is the surface's top-left corner in the same device space, so
/// the surface-relative position is `client - origin`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    #[must_use]
    pub const fn with_origin(mut self, origin_x: f64, origin_y: f64) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    /// Surface-relative pixel position.
    #[must_use]
    pub fn surface_position(self) -> Point {
        Point::new(self.client_x - self.origin_x, self.client_y - self.origin_y)
    }
}

/// Raw wheel event; only the sign of `delta_y` matters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelEvent {
    pub pointer: PointerEvent,
    pub delta_y: f64,
}

impl WheelEvent {
    #[must_use]
    pub const fn new(pointer: PointerEvent, delta_y: f64) -> Self {
        Self { pointer, delta_y }
    }
}

/// Transient pan drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragState {
    pub dragging: bool,
    /// Data-space point grabbed at drag start.
    pub anchor: Point,
}

/// Up to two clicked data points waiting to become a line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineDraft {
    points: SmallVec<[Point; 2]>,
}

impl LineDraft {
    /// Buffers a clicked point and returns the completed segment on the
    /// second click. A completed draft is cleared, so the next click starts
    /// a new line.
    pub fn push(&mut self, point: Point) -> Option<LineSegment> {
        self.points.push(point);
        if let &[start, end] = self.points.as_slice() {
            self.points.clear();
            return Some(LineSegment::new(start, end));
        }
        None
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Per-engine pointer state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    drag: DragState,
    draft: LineDraft,
    cursor: Option<Point>,
}

impl InteractionState {
    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    #[must_use]
    pub fn draft(&self) -> &LineDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut LineDraft {
        &mut self.draft
    }

    /// Last surface-relative pointer position, `None` once the pointer left.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn on_pointer_move(&mut self, pixel: Point) {
        self.cursor = Some(pixel);
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.on_pan_end();
    }

    pub fn on_pan_start(&mut self, anchor: Point) {
        self.drag = DragState {
            dragging: true,
            anchor,
        };
    }

    pub fn set_anchor(&mut self, anchor: Point) {
        self.drag.anchor = anchor;
    }

    pub fn on_pan_end(&mut self) {
        self.drag = DragState::default();
    }
}
