//! Containment and edge-distance tests.

use nalgebra::{Isometry3, Point2, Point3};
use surface_types::{Footprint, Table};

/// Tolerance below which a point counts as lying on a polygon edge.
const ON_EDGE_EPSILON: f64 = 1e-12;

/// Even-odd (ray casting) point-in-polygon test.
///
/// Boundary rule: points on a polygon edge are treated as **outside**.
/// This conservative convention is shared with the placement sampler so
/// that containment and sampling never disagree by an epsilon at the edge.
///
/// # Example
///
/// ```
/// use surface_types::{Footprint, Point2};
/// use surface_geometry::point_in_polygon;
///
/// let square = Footprint::from_coords(&[
///     [0.0, 0.0],
///     [1.0, 0.0],
///     [1.0, 1.0],
///     [0.0, 1.0],
/// ]).unwrap();
///
/// assert!(point_in_polygon(&Point2::new(0.5, 0.5), &square));
/// assert!(!point_in_polygon(&Point2::new(1.5, 0.5), &square));
/// assert!(!point_in_polygon(&Point2::new(0.0, 0.5), &square)); // on edge
/// ```
#[must_use]
pub fn point_in_polygon(point: &Point2<f64>, polygon: &Footprint) -> bool {
    if distance_to_nearest_edge(point, polygon) < ON_EDGE_EPSILON {
        return false;
    }

    let mut inside = false;
    for (p, q) in polygon.edges() {
        let crosses = (p.y > point.y) != (q.y > point.y);
        if crosses {
            let x_at_y = (q.x - p.x).mul_add((point.y - p.y) / (q.y - p.y), p.x);
            if point.x < x_at_y {
                inside = !inside;
            }
        }
    }
    inside
}

/// Minimum Euclidean distance from a point to any polygon edge segment.
///
/// Correct for points both inside and outside the polygon; distances to
/// segment interiors are used, not just vertices.
///
/// # Example
///
/// ```
/// use surface_types::{Footprint, Point2};
/// use surface_geometry::distance_to_nearest_edge;
///
/// let square = Footprint::from_coords(&[
///     [0.0, 0.0],
///     [1.0, 0.0],
///     [1.0, 1.0],
///     [0.0, 1.0],
/// ]).unwrap();
///
/// let d = distance_to_nearest_edge(&Point2::new(0.5, 0.5), &square);
/// assert!((d - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn distance_to_nearest_edge(point: &Point2<f64>, polygon: &Footprint) -> f64 {
    polygon
        .edges()
        .map(|(p, q)| point_segment_distance(point, &p, &q))
        .fold(f64::INFINITY, f64::min)
}

/// Distance from a point to a segment, clamping the projection to the
/// segment interior.
fn point_segment_distance(point: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    let ab = b - a;
    let ap = point - a;

    let len_sq = ab.norm_squared();
    if len_sq < f64::EPSILON {
        return ap.norm();
    }

    let t = (ap.dot(&ab) / len_sq).clamp(0.0, 1.0);
    let closest = *a + ab * t;
    (*point - closest).norm()
}

/// Check whether a world-frame pose rests within a table's contour.
///
/// The pose position is transformed into the table's local frame; the
/// check passes only if the vertical offset above the surface is at least
/// `min_vertical_offset` **and** the XY projection lies inside the
/// footprint at least `min_distance_from_edge` from every edge.
///
/// # Example
///
/// ```
/// use surface_types::{Footprint, Table};
/// use surface_geometry::is_inside_table_contour;
/// use nalgebra::{Isometry3, Translation3, UnitQuaternion};
///
/// let footprint = Footprint::from_coords(&[
///     [-0.5, -0.5],
///     [0.5, -0.5],
///     [0.5, 0.5],
///     [-0.5, 0.5],
/// ]).unwrap();
/// let table = Table::new("t", Isometry3::identity(), footprint);
///
/// let above_center = Isometry3::from_parts(
///     Translation3::new(0.0, 0.0, 0.05),
///     UnitQuaternion::identity(),
/// );
/// assert!(is_inside_table_contour(&above_center, &table, 0.0, 0.0));
/// assert!(!is_inside_table_contour(&above_center, &table, 0.0, 0.1));
/// ```
#[must_use]
pub fn is_inside_table_contour(
    pose: &Isometry3<f64>,
    table: &Table,
    min_distance_from_edge: f64,
    min_vertical_offset: f64,
) -> bool {
    let world_position = Point3::from(pose.translation.vector);
    let local = table.pose.inverse_transform_point(&world_position);

    if local.z < min_vertical_offset {
        return false;
    }

    let xy = Point2::new(local.x, local.y);
    point_in_polygon(&xy, &table.footprint)
        && distance_to_nearest_edge(&xy, &table.footprint) >= min_distance_from_edge
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Translation3, UnitQuaternion};

    fn centered_square() -> Footprint {
        Footprint::from_coords(&[[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]]).unwrap()
    }

    #[test]
    fn inside_and_outside() {
        let square = centered_square();
        assert!(point_in_polygon(&Point2::new(0.0, 0.0), &square));
        assert!(point_in_polygon(&Point2::new(0.49, -0.49), &square));
        assert!(!point_in_polygon(&Point2::new(0.51, 0.0), &square));
        assert!(!point_in_polygon(&Point2::new(-1.0, -1.0), &square));
    }

    #[test]
    fn boundary_is_outside() {
        let square = centered_square();
        assert!(!point_in_polygon(&Point2::new(0.5, 0.0), &square));
        assert!(!point_in_polygon(&Point2::new(-0.5, -0.5), &square)); // vertex
    }

    #[test]
    fn concave_notch_excluded() {
        let l_shape = Footprint::from_coords(&[
            [0.0, 0.0],
            [2.0, 0.0],
            [2.0, 1.0],
            [1.0, 1.0],
            [1.0, 2.0],
            [0.0, 2.0],
        ])
        .unwrap();
        assert!(point_in_polygon(&Point2::new(0.5, 1.5), &l_shape));
        assert!(!point_in_polygon(&Point2::new(1.5, 1.5), &l_shape)); // the notch
    }

    #[test]
    fn edge_distance_center() {
        let square = centered_square();
        let d = distance_to_nearest_edge(&Point2::new(0.0, 0.0), &square);
        assert!((d - 0.5).abs() < 1e-12);
    }

    #[test]
    fn edge_distance_outside() {
        let square = centered_square();
        let d = distance_to_nearest_edge(&Point2::new(1.5, 0.0), &square);
        assert!((d - 1.0).abs() < 1e-12);
    }

    #[test]
    fn edge_distance_near_vertex() {
        let square = centered_square();
        // Diagonal beyond the corner: distance to the vertex, not an edge line.
        let d = distance_to_nearest_edge(&Point2::new(1.0, 1.0), &square);
        assert!((d - (0.5f64 * 0.5 + 0.5 * 0.5).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn contour_edge_margin() {
        let table = Table::new("t", Isometry3::identity(), centered_square());
        let near_edge = Isometry3::from_parts(
            Translation3::new(0.45, 0.0, 0.1),
            UnitQuaternion::identity(),
        );
        assert!(is_inside_table_contour(&near_edge, &table, 0.0, 0.0));
        assert!(!is_inside_table_contour(&near_edge, &table, 0.1, 0.0));
    }

    #[test]
    fn contour_respects_table_pose() {
        let pose = Isometry3::from_parts(
            Translation3::new(5.0, 0.0, 1.0),
            UnitQuaternion::identity(),
        );
        let table = Table::new("t", pose, centered_square());

        let over_table = Isometry3::from_parts(
            Translation3::new(5.0, 0.0, 1.02),
            UnitQuaternion::identity(),
        );
        assert!(is_inside_table_contour(&over_table, &table, 0.0, 0.0));

        let below_surface = Isometry3::from_parts(
            Translation3::new(5.0, 0.0, 0.9),
            UnitQuaternion::identity(),
        );
        assert!(!is_inside_table_contour(&below_surface, &table, 0.0, 0.0));
    }
}
