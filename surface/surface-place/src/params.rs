//! Sampling parameters and default resolution.

use nalgebra::UnitQuaternion;
use surface_types::ObjectExtents;

/// Default vertical step between stacked height layers, in meters.
pub const DEFAULT_DELTA_HEIGHT: f64 = 0.01;

/// Default number of stacked height layers.
pub const DEFAULT_NUM_HEIGHTS: u32 = 2;

/// Default minimum distance from the table edge, in meters.
pub const DEFAULT_MIN_DISTANCE_FROM_EDGE: f64 = 0.10;

/// Fully resolved parameters for placement sampling.
///
/// The sampler consumes only this struct; the object-driven and explicit
/// call shapes are thin constructors that resolve their defaults here,
/// so there is exactly one sampling routine.
///
/// # Example
///
/// ```
/// use surface_types::BoxExtents;
/// use surface_place::PlaceParams;
///
/// // Explicit margins
/// let explicit = PlaceParams::new(0.05, 0.02).with_min_distance_from_edge(0.15);
/// assert!((explicit.min_distance_from_edge - 0.15).abs() < 1e-12);
///
/// // Margins derived from an object's bounding extents
/// let derived = PlaceParams::for_object(&BoxExtents::new(0.06, 0.08, 0.20), 0.05);
/// assert!((derived.min_distance_from_edge - 0.04).abs() < 1e-12);
/// assert!((derived.height_above_table - 0.10).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceParams {
    /// Grid step in both X and Y, in meters.
    pub resolution: f64,

    /// Height of the first pose layer above the table surface, in meters.
    pub height_above_table: f64,

    /// Vertical step between consecutive height layers, in meters.
    pub delta_height: f64,

    /// Number of stacked height layers per accepted grid point.
    pub num_heights: u32,

    /// Minimum allowed distance from a candidate point to the nearest
    /// footprint edge, in meters.
    pub min_distance_from_edge: f64,

    /// Orientation carried by every emitted pose.
    pub orientation: UnitQuaternion<f64>,

    /// Frame name stamped on emitted poses.
    pub frame: String,
}

impl PlaceParams {
    /// Create parameters with explicit resolution and placement height;
    /// everything else takes the documented defaults.
    #[must_use]
    pub fn new(resolution: f64, height_above_table: f64) -> Self {
        Self {
            resolution,
            height_above_table,
            delta_height: DEFAULT_DELTA_HEIGHT,
            num_heights: DEFAULT_NUM_HEIGHTS,
            min_distance_from_edge: DEFAULT_MIN_DISTANCE_FROM_EDGE,
            orientation: UnitQuaternion::identity(),
            frame: String::from("world"),
        }
    }

    /// Create parameters with the edge margin and height derived from an
    /// object's bounding extents.
    ///
    /// The heuristic mirrors placing the object flat on the surface: the
    /// edge margin is half the largest planar extent (the object must not
    /// overhang), the height is half the vertical extent (the pose is the
    /// object center).
    #[must_use]
    pub fn for_object(shape: &impl ObjectExtents, resolution: f64) -> Self {
        let extents = shape.extents();
        Self {
            min_distance_from_edge: 0.5 * extents.x.max(extents.y),
            height_above_table: 0.5 * extents.z,
            ..Self::new(resolution, 0.0)
        }
    }

    /// Set the vertical step between height layers.
    #[must_use]
    pub const fn with_delta_height(mut self, delta_height: f64) -> Self {
        self.delta_height = delta_height;
        self
    }

    /// Set the number of stacked height layers.
    #[must_use]
    pub const fn with_num_heights(mut self, num_heights: u32) -> Self {
        self.num_heights = num_heights;
        self
    }

    /// Set the minimum distance from the table edge.
    #[must_use]
    pub const fn with_min_distance_from_edge(mut self, margin: f64) -> Self {
        self.min_distance_from_edge = margin;
        self
    }

    /// Set the orientation carried by emitted poses.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: UnitQuaternion<f64>) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the frame name stamped on emitted poses.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frame = frame.into();
        self
    }
}
