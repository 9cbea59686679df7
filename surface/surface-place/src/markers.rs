//! Visualization markers for sampled placement poses.

use surface_types::PlacePose;

/// Marker scale used for place locations, in meters.
const PLACE_MARKER_SCALE: f64 = 0.02;

/// Marker color used for place locations (RGBA).
const PLACE_MARKER_COLOR: [f32; 4] = [0.0, 0.2, 1.0, 1.0];

/// Geometric primitive of a visualization marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    /// A sphere centered on the marker pose.
    Sphere,
}

/// A single visualization marker, ready for an external visualization sink.
///
/// Shape, color, and scale follow a fixed convention; they are not
/// user-configurable here.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceMarker {
    /// The pose the marker visualizes.
    pub pose: PlacePose,
    /// Marker primitive.
    pub shape: MarkerShape,
    /// Uniform scale, in meters.
    pub scale: f64,
    /// RGBA color, each channel in [0, 1].
    pub color: [f32; 4],
}

/// Map each sampled pose to one visualization marker.
///
/// # Example
///
/// ```
/// use nalgebra::Isometry3;
/// use surface_types::PlacePose;
/// use surface_place::{MarkerShape, place_location_markers};
///
/// let poses = vec![PlacePose::new("world", Isometry3::identity())];
/// let markers = place_location_markers(&poses);
///
/// assert_eq!(markers.len(), 1);
/// assert_eq!(markers[0].shape, MarkerShape::Sphere);
/// ```
#[must_use]
pub fn place_location_markers(poses: &[PlacePose]) -> Vec<PlaceMarker> {
    poses
        .iter()
        .map(|pose| PlaceMarker {
            pose: pose.clone(),
            shape: MarkerShape::Sphere,
            scale: PLACE_MARKER_SCALE,
            color: PLACE_MARKER_COLOR,
        })
        .collect()
}
