//! Winding normalization for footprint polygons.

use surface_types::Footprint;
use tracing::debug;

use crate::error::{GeometryError, GeometryResult};

/// Polygons whose signed area is within this epsilon of zero are degenerate.
pub const AREA_EPSILON: f64 = 1e-10;

/// Return a copy of the footprint with counter-clockwise winding, so the
/// surface normal points along local +Z.
///
/// The winding is determined from the shoelace signed area; clockwise
/// input is reversed, counter-clockwise input is returned as-is. The
/// operation is idempotent.
///
/// # Errors
///
/// Returns [`GeometryError::DegeneratePolygon`] when the signed area is
/// within [`AREA_EPSILON`] of zero (collinear or zero-extent input).
///
/// # Example
///
/// ```
/// use surface_types::Footprint;
/// use surface_geometry::orient;
///
/// // Clockwise square
/// let cw = Footprint::from_coords(&[
///     [0.0, 0.0],
///     [0.0, 1.0],
///     [1.0, 1.0],
///     [1.0, 0.0],
/// ]).unwrap();
/// assert!(!cw.is_ccw());
///
/// let ccw = orient(&cw).unwrap();
/// assert!(ccw.is_ccw());
/// ```
pub fn orient(footprint: &Footprint) -> GeometryResult<Footprint> {
    let area = footprint.signed_area();
    if area.abs() <= AREA_EPSILON {
        return Err(GeometryError::DegeneratePolygon { area });
    }

    if area < 0.0 {
        debug!(
            vertices = footprint.vertex_count(),
            "Reversing clockwise footprint"
        );
        Ok(footprint.reversed())
    } else {
        Ok(footprint.clone())
    }
}
