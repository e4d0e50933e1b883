use crate::core::geometry::{Bounds, Point, remap_point};
use crate::error::{ChartError, ChartResult};

/// Pairs a data-space rectangle with a pixel-space rectangle.
///
/// Each axis is remapped independently (no aspect-ratio preservation).
/// Construction through [`CoordinateTransform::new`] rejects degenerate or
/// non-finite bounds; [`CoordinateTransform::new_unchecked`] leaves that to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    data: Bounds,
    pixel: Bounds,
}

impl CoordinateTransform {
    pub fn new(data: Bounds, pixel: Bounds) -> ChartResult<Self> {
        for (name, bounds) in [("data", data), ("pixel", pixel)] {
            if !bounds.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "{name} bounds must be finite"
                )));
            }
            if bounds.is_degenerate() {
                return Err(ChartError::InvalidData(format!(
                    "{name} bounds must have non-zero width and height"
                )));
            }
        }
        Ok(Self { data, pixel })
    }

    #[must_use]
    pub const fn new_unchecked(data: Bounds, pixel: Bounds) -> Self {
        Self { data, pixel }
    }

    #[must_use]
    pub fn data_bounds(self) -> Bounds {
        self.data
    }

    #[must_use]
    pub fn pixel_bounds(self) -> Bounds {
        self.pixel
    }

    #[must_use]
    pub fn data_to_pixel(self, point: Point) -> Point {
        remap_point(self.data, self.pixel, point)
    }

    #[must_use]
    pub fn pixel_to_data(self, point: Point) -> Point {
        remap_point(self.pixel, self.data, point)
    }

    /// Same transform with the two rectangles swapped.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            data: self.pixel,
            pixel: self.data,
        }
    }
}

/// Pixel rectangle of the plot area inside a surface with uniform margins.
#[must_use]
pub fn plot_pixel_bounds(width: u32, height: u32, margin_px: f64) -> Bounds {
    Bounds::new(
        margin_px,
        f64::from(width) - margin_px,
        margin_px,
        f64::from(height) - margin_px,
    )
}

#[cfg(test)]
mod tests {
    use super::{CoordinateTransform, plot_pixel_bounds};
    use crate::core::{Bounds, Point};

    #[test]
    fn higher_price_maps_to_smaller_pixel_y() {
        let transform = CoordinateTransform::new(
            Bounds::new(0.0, 10.0, 110.0, 10.0),
            plot_pixel_bounds(800, 600, 20.0),
        )
        .expect("valid transform");

        let top = transform.data_to_pixel(Point::new(0.0, 110.0));
        let bottom = transform.data_to_pixel(Point::new(10.0, 10.0));
        assert_eq!(top, Point::new(20.0, 20.0));
        assert_eq!(bottom, Point::new(780.0, 580.0));
    }

    #[test]
    fn degenerate_data_bounds_are_rejected() {
        let result = CoordinateTransform::new(
            Bounds::new(5.0, 5.0, 1.0, 0.0),
            plot_pixel_bounds(800, 600, 20.0),
        );
        assert!(result.is_err());
    }
}
