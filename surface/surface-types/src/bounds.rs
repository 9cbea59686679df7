//! 2D axis-aligned bounding box.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D axis-aligned bounding box.
///
/// Used for the local-frame bounding rectangle of a table footprint,
/// which the placement sampler walks with a regular grid.
///
/// # Example
///
/// ```
/// use surface_types::{Aabb2, Point2};
///
/// let aabb = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 1.0));
/// assert!((aabb.width() - 2.0).abs() < 1e-12);
/// assert!(aabb.contains(&Point2::new(1.0, 0.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb2 {
    /// Minimum corner (smallest x, y values).
    pub min: Point2<f64>,
    /// Maximum corner (largest x, y values).
    pub max: Point2<f64>,
}

impl Aabb2 {
    /// Create a new box from minimum and maximum corners.
    ///
    /// The corners are automatically corrected if min > max for an axis.
    #[must_use]
    pub fn new(min: Point2<f64>, max: Point2<f64>) -> Self {
        Self {
            min: Point2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Point2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Create an empty (inverted) box, useful as a fold seed.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point2::new is not const in nalgebra
    pub fn empty() -> Self {
        Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create a box covering an iterator of points.
    ///
    /// Returns an empty box if the iterator is empty.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point2<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Grow the box to include a point.
    pub fn expand_to_include(&mut self, point: &Point2<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Check if the box is empty (min > max on an axis).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Extent along X.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Check if a point lies within the closed box.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}
