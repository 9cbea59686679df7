//! Bounding-extent query for objects being placed.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::solid::SolidMesh;

/// Axis-aligned bounding extents of an object's shape.
///
/// The placement sampler derives its default constraints from these when
/// the caller does not supply them explicitly: the minimum distance from
/// the table edge from the planar extents, the height above the table from
/// the vertical extent.
pub trait ObjectExtents {
    /// Full axis-aligned extents (width, depth, height) of the shape.
    fn extents(&self) -> Vector3<f64>;
}

/// A box-shaped object described by its full extents.
///
/// The simplest [`ObjectExtents`] carrier, for callers that already know
/// the bounding dimensions of the object to be placed.
///
/// # Example
///
/// ```
/// use surface_types::{BoxExtents, ObjectExtents};
///
/// let can = BoxExtents::new(0.07, 0.07, 0.12);
/// assert!((can.extents().z - 0.12).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxExtents {
    size: Vector3<f64>,
}

impl BoxExtents {
    /// Create extents from the three box dimensions.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            size: Vector3::new(x, y, z),
        }
    }
}

impl ObjectExtents for BoxExtents {
    #[inline]
    fn extents(&self) -> Vector3<f64> {
        self.size
    }
}

impl ObjectExtents for SolidMesh {
    /// Extents of the mesh bounding box; zero for an empty mesh.
    fn extents(&self) -> Vector3<f64> {
        self.bounding_corners()
            .map_or_else(Vector3::zeros, |(min, max)| max - min)
    }
}
