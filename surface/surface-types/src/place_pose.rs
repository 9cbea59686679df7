//! Candidate placement pose.

use nalgebra::{Isometry3, Point3, UnitQuaternion};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A candidate resting pose for an object, tagged with the frame it is
/// expressed in.
///
/// The placement sampler emits these in world coordinates: the table's
/// world pose composed with a local XY offset and a height above the
/// surface, carrying the caller-supplied orientation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacePose {
    /// Name of the frame the pose is expressed in.
    pub frame: String,
    /// Position and orientation in `frame`.
    pub pose: Isometry3<f64>,
}

impl PlacePose {
    /// Create a new place pose.
    #[must_use]
    pub fn new(frame: impl Into<String>, pose: Isometry3<f64>) -> Self {
        Self {
            frame: frame.into(),
            pose,
        }
    }

    /// The position component.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Point3<f64> {
        Point3::from(self.pose.translation.vector)
    }

    /// The orientation component.
    #[inline]
    #[must_use]
    pub fn orientation(&self) -> UnitQuaternion<f64> {
        self.pose.rotation
    }
}
