//! Pure 2D math shared by data space and pixel space.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Ordered pair used for both data-space and pixel-space coordinates.
///
/// The coordinate space is implied by context; converting between spaces
/// always goes through [`crate::core::CoordinateTransform`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned rectangle described by its four edges.
///
/// For data bounds `top` holds the largest price and `bottom` the smallest;
/// for pixel bounds `top` is the smaller pixel row. Remapping `top → top` and
/// `bottom → bottom` therefore inverts the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Shifts all four edges by `offset`.
    #[must_use]
    pub fn translate(self, offset: Point) -> Self {
        Self::new(
            self.left + offset.x,
            self.right + offset.x,
            self.top + offset.y,
            self.bottom + offset.y,
        )
    }

    /// Moves every edge toward (`factor < 1`) or away from (`factor > 1`)
    /// the bounds' own center.
    #[must_use]
    pub fn scale_about_center(self, factor: f64) -> Self {
        let center = self.center();
        Self::new(
            lerp(center.x, self.left, factor),
            lerp(center.x, self.right, factor),
            lerp(center.y, self.top, factor),
            lerp(center.y, self.bottom, factor),
        )
    }

    /// `true` when either axis has zero extent, which would make remapping
    /// divide by zero.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.left == self.right || self.top == self.bottom
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite()
    }
}

#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolation factor of `v` between `a` and `b`.
///
/// Not guarded: `a == b` yields NaN or infinity.
#[must_use]
pub fn inv_lerp(a: f64, b: f64, v: f64) -> f64 {
    (v - a) / (b - a)
}

#[must_use]
pub fn remap(old_a: f64, old_b: f64, new_a: f64, new_b: f64, v: f64) -> f64 {
    lerp(new_a, new_b, inv_lerp(old_a, old_b, v))
}

/// Remaps a point between two rectangles, each axis independently.
#[must_use]
pub fn remap_point(from: Bounds, to: Bounds, point: Point) -> Point {
    Point::new(
        remap(from.left, from.right, to.left, to.right, point.x),
        remap(from.top, from.bottom, to.top, to.bottom, point.y),
    )
}

/// Index of the point closest to `location`; ties resolve to the earliest.
#[must_use]
pub fn nearest_index(location: Point, points: &[Point]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by_key(|(_, point)| OrderedFloat(location.distance(**point)))
        .map(|(index, _)| index)
}
