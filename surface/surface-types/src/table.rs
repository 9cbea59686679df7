//! Named support surface.

use nalgebra::{Isometry3, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::footprint::Footprint;

/// A detected planar support surface ("table").
///
/// The footprint polygon lives in the table's local XY plane; `pose` maps
/// the local frame into world coordinates. The identifier is unique within
/// a table set.
///
/// # Example
///
/// ```
/// use surface_types::{Footprint, Table};
/// use nalgebra::{Isometry3, Translation3, UnitQuaternion};
///
/// let footprint = Footprint::from_coords(&[
///     [-0.5, -0.5],
///     [0.5, -0.5],
///     [0.5, 0.5],
///     [-0.5, 0.5],
/// ]).unwrap();
///
/// let pose = Isometry3::from_parts(
///     Translation3::new(1.0, 2.0, 0.7),
///     UnitQuaternion::identity(),
/// );
/// let table = Table::new("desk", pose, footprint);
///
/// let centroid = table.world_centroid();
/// assert!((centroid.x - 1.0).abs() < 1e-12);
/// assert!((centroid.z - 0.7).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    /// Unique identifier within a table set.
    pub id: String,
    /// Rigid-body pose placing the local frame in world space.
    pub pose: Isometry3<f64>,
    /// Footprint polygon in the local XY plane.
    pub footprint: Footprint,
}

impl Table {
    /// Create a new table.
    #[must_use]
    pub fn new(id: impl Into<String>, pose: Isometry3<f64>, footprint: Footprint) -> Self {
        Self {
            id: id.into(),
            pose,
            footprint,
        }
    }

    /// The footprint centroid expressed in world coordinates.
    ///
    /// This is the representative point used by region-of-interest queries.
    #[must_use]
    pub fn world_centroid(&self) -> Point3<f64> {
        let local = self.footprint.centroid();
        self.pose.transform_point(&Point3::new(local.x, local.y, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Translation3, UnitQuaternion};

    #[test]
    fn world_centroid_follows_pose() {
        let footprint =
            Footprint::from_coords(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]).unwrap();
        let pose = Isometry3::from_parts(
            Translation3::new(10.0, 0.0, 1.0),
            UnitQuaternion::identity(),
        );
        let table = Table::new("t", pose, footprint);

        let c = table.world_centroid();
        assert!((c.x - 11.0).abs() < 1e-12);
        assert!((c.y - 1.0).abs() < 1e-12);
        assert!((c.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotated_centroid() {
        let footprint =
            Footprint::from_coords(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]).unwrap();
        // Quarter turn about Z: local (1, 1) maps to world (-1, 1).
        let pose = Isometry3::from_parts(
            Translation3::identity(),
            UnitQuaternion::from_euler_angles(0.0, 0.0, std::f64::consts::FRAC_PI_2),
        );
        let table = Table::new("t", pose, footprint);

        let c = table.world_centroid();
        assert!((c.x - (-1.0)).abs() < 1e-12);
        assert!((c.y - 1.0).abs() < 1e-12);
    }
}
