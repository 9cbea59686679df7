//! Ear-clipping triangulation of footprint polygons.

use nalgebra::Point2;
use surface_types::Footprint;
use tracing::{debug, warn};

/// Triangulate a counter-clockwise footprint by ear clipping.
///
/// Handles non-convex simple polygons; the returned faces index into the
/// footprint's vertex list and keep counter-clockwise winding, so their
/// normals point along local +Z. If clipping stalls on near-degenerate
/// geometry, the remainder is fan-triangulated.
///
/// Callers that cannot guarantee winding should run
/// [`crate::orient`] first.
///
/// # Example
///
/// ```
/// use surface_types::Footprint;
/// use surface_geometry::triangulate;
///
/// let square = Footprint::from_coords(&[
///     [0.0, 0.0],
///     [1.0, 0.0],
///     [1.0, 1.0],
///     [0.0, 1.0],
/// ]).unwrap();
///
/// let faces = triangulate(&square);
/// assert_eq!(faces.len(), 2); // n - 2 triangles for a simple polygon
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)] // footprints are far below u32::MAX vertices
pub fn triangulate(footprint: &Footprint) -> Vec<[u32; 3]> {
    let points = footprint.points();
    let n = points.len();

    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    while remaining.len() > 3 {
        let mut found_ear = false;

        for i in 0..remaining.len() {
            let prev = remaining[(i + remaining.len() - 1) % remaining.len()];
            let curr = remaining[i];
            let next = remaining[(i + 1) % remaining.len()];

            if is_ear(points, &remaining, prev, curr, next) {
                triangles.push([prev as u32, curr as u32, next as u32]);
                remaining.remove(i);
                found_ear = true;
                break;
            }
        }

        if !found_ear {
            warn!(
                remaining = remaining.len(),
                "Ear clipping stalled, falling back to fan triangulation"
            );
            break;
        }
    }

    if remaining.len() == 3 {
        triangles.push([
            remaining[0] as u32,
            remaining[1] as u32,
            remaining[2] as u32,
        ]);
    } else if remaining.len() > 3 {
        // Fan triangulation fallback
        let center = remaining[0];
        for i in 1..remaining.len() - 1 {
            triangles.push([
                center as u32,
                remaining[i] as u32,
                remaining[i + 1] as u32,
            ]);
        }
    }

    debug!(
        vertices = n,
        triangles = triangles.len(),
        "Triangulated footprint"
    );

    triangles
}

/// Check if the vertex at `curr` forms a valid ear of the CCW polygon.
fn is_ear(points: &[Point2<f64>], remaining: &[usize], prev: usize, curr: usize, next: usize) -> bool {
    let a = points[prev];
    let b = points[curr];
    let c = points[next];

    // Convex corner of a CCW polygon: positive cross product.
    let cross = (b.x - a.x).mul_add(c.y - a.y, -((c.x - a.x) * (b.y - a.y)));
    if cross <= 0.0 {
        return false; // Reflex or degenerate
    }

    // No other remaining vertex may lie inside the candidate triangle.
    for &idx in remaining {
        if idx == prev || idx == curr || idx == next {
            continue;
        }
        if point_in_triangle(points[idx], a, b, c) {
            return false;
        }
    }

    true
}

fn point_in_triangle(p: Point2<f64>, a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> bool {
    let sign = |p1: Point2<f64>, p2: Point2<f64>, p3: Point2<f64>| -> f64 {
        (p1.x - p3.x).mul_add(p2.y - p3.y, -((p2.x - p3.x) * (p1.y - p3.y)))
    };

    let d1 = sign(p, a, b);
    let d2 = sign(p, b, c);
    let d3 = sign(p, c, a);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}
