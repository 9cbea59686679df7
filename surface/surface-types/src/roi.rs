//! 3D region-of-interest box.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned 3D box used to filter tables by location.
///
/// Containment is **closed**: points on the boundary are inside. Unlike a
/// bounding box built from data, an ROI is caller input, so the corners
/// are *not* auto-corrected; an inverted box fails [`Roi::is_valid`] and
/// is rejected by queries as an invalid request.
///
/// # Example
///
/// ```
/// use surface_types::Roi;
/// use nalgebra::Point3;
///
/// let roi = Roi::from_extents(-1.0, -1.0, 0.0, 1.0, 1.0, 2.0);
/// assert!(roi.is_valid());
/// assert!(roi.contains(&Point3::new(0.0, 0.0, 1.0)));
/// assert!(roi.contains(&Point3::new(1.0, 1.0, 2.0))); // closed boundary
/// assert!(!roi.contains(&Point3::new(0.0, 0.0, 2.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Roi {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl Roi {
    /// Create an ROI from corner points, as given.
    #[inline]
    #[must_use]
    pub const fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Create an ROI from the six box extents.
    #[inline]
    #[must_use]
    pub fn from_extents(
        min_x: f64,
        min_y: f64,
        min_z: f64,
        max_x: f64,
        max_y: f64,
        max_z: f64,
    ) -> Self {
        Self {
            min: Point3::new(min_x, min_y, min_z),
            max: Point3::new(max_x, max_y, max_z),
        }
    }

    /// Check that min ≤ max on every axis.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Check if a point lies within the closed box.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_roi_is_invalid() {
        let roi = Roi::from_extents(1.0, 0.0, 0.0, -1.0, 1.0, 1.0);
        assert!(!roi.is_valid());
    }

    #[test]
    fn closed_containment() {
        let roi = Roi::from_extents(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        assert!(roi.contains(&Point3::new(0.0, 0.0, 0.0)));
        assert!(roi.contains(&Point3::new(1.0, 1.0, 1.0)));
        assert!(!roi.contains(&Point3::new(1.0 + 1e-9, 0.5, 0.5)));
    }

    #[test]
    fn degenerate_plane_roi_is_valid() {
        // Zero thickness on Z is still a legal query box.
        let roi = Roi::from_extents(0.0, 0.0, 1.0, 2.0, 2.0, 1.0);
        assert!(roi.is_valid());
        assert!(roi.contains(&Point3::new(1.0, 1.0, 1.0)));
    }
}
