//! Data-to-pixel coordinate mapping.

use crate::geometry::Bounds;

/// Linear scale mapping a data-coordinate domain onto a pixel range.
///
/// The range may be inverted (pixel y grows downward while data y grows
/// upward), which is how the vertical axis is mapped.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// A degenerate domain (equal endpoints) maps every value to the
    /// middle of the range rather than dividing by zero; callers that
    /// autoscale from [`Bounds::padded`] never produce one.
    #[must_use]
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        }
    }

    /// Scale for the x axis of a bounds box.
    #[must_use]
    pub fn from_bounds_x(bounds: &Bounds, range: (f32, f32)) -> Self {
        Self::new((bounds.min_x, bounds.max_x), range)
    }

    /// Scale for the y axis of a bounds box.
    #[must_use]
    pub fn from_bounds_y(bounds: &Bounds, range: (f32, f32)) -> Self {
        Self::new((bounds.min_y, bounds.max_y), range)
    }

    /// Transform a domain value to a range value.
    #[must_use]
    pub fn scale(&self, value: f32) -> f32 {
        let extent = self.domain_max - self.domain_min;
        if extent.abs() < f32::EPSILON {
            return (self.range_min + self.range_max) / 2.0;
        }
        let t = (value - self.domain_min) / extent;
        self.range_min + t * (self.range_max - self.range_min)
    }

    /// Invert the scale (range value back to domain value).
    #[must_use]
    pub fn invert(&self, value: f32) -> f32 {
        let extent = self.range_max - self.range_min;
        if extent.abs() < f32::EPSILON {
            return (self.domain_min + self.domain_max) / 2.0;
        }
        let t = (value - self.range_min) / extent;
        self.domain_min + t * (self.domain_max - self.domain_min)
    }

    /// The domain extent.
    #[must_use]
    pub fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    /// The range extent.
    #[must_use]
    pub fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0));
        assert_relative_eq!(scale.scale(0.0), 0.0);
        assert_relative_eq!(scale.scale(50.0), 0.5);
        assert_relative_eq!(scale.scale(100.0), 1.0);
    }

    #[test]
    fn test_inverted_range() {
        // Pixel y grows downward
        let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0));
        assert_relative_eq!(scale.scale(0.0), 100.0);
        assert_relative_eq!(scale.scale(10.0), 0.0);
    }

    #[test]
    fn test_invert_round_trip() {
        let scale = LinearScale::new((-5.0, 5.0), (0.0, 640.0));
        let px = scale.scale(2.5);
        assert_relative_eq!(scale.invert(px), 2.5, epsilon = 1e-4);
    }

    #[test]
    fn test_degenerate_domain_maps_to_range_center() {
        let scale = LinearScale::new((4.0, 4.0), (0.0, 100.0));
        assert_relative_eq!(scale.scale(4.0), 50.0);
        assert_relative_eq!(scale.scale(123.0), 50.0);
    }

    #[test]
    fn test_from_bounds() {
        let mut bounds = Bounds::EMPTY;
        bounds.expand(crate::geometry::Point::new(0.0, -1.0));
        bounds.expand(crate::geometry::Point::new(10.0, 1.0));

        let x = LinearScale::from_bounds_x(&bounds, (0.0, 100.0));
        let y = LinearScale::from_bounds_y(&bounds, (100.0, 0.0));
        assert_relative_eq!(x.scale(5.0), 50.0);
        assert_relative_eq!(y.scale(0.0), 50.0);
        assert_eq!(x.domain(), (0.0, 10.0));
        assert_eq!(y.range(), (100.0, 0.0));
    }
}
