//! Table footprint polygon.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Aabb2;
use crate::error::FootprintError;

/// Two consecutive vertices closer than this are considered coincident.
const MIN_VERTEX_SEPARATION: f64 = 1e-9;

/// A simple closed polygon describing a table's usable top surface.
///
/// The polygon lives in the table's local XY plane; the surface normal is
/// conventionally +Z. Construction enforces the structural invariants:
///
/// - at least 3 vertices,
/// - consecutive vertices (including the closing edge) are distinct,
/// - no two non-adjacent edges intersect (the polygon is simple).
///
/// Winding is **not** normalized here; use `surface-geometry`'s `orient`
/// to obtain a counter-clockwise copy.
///
/// # Example
///
/// ```
/// use surface_types::Footprint;
///
/// let square = Footprint::from_coords(&[
///     [0.0, 0.0],
///     [1.0, 0.0],
///     [1.0, 1.0],
///     [0.0, 1.0],
/// ]).unwrap();
///
/// assert_eq!(square.vertex_count(), 4);
/// assert!(square.is_ccw());
/// assert!((square.signed_area() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Footprint {
    points: Vec<Point2<f64>>,
}

impl Footprint {
    /// Create a footprint from an ordered vertex list.
    ///
    /// # Errors
    ///
    /// Returns a [`FootprintError`] if the polygon has fewer than three
    /// vertices, repeats a vertex on an edge, or self-intersects.
    pub fn new(points: Vec<Point2<f64>>) -> Result<Self, FootprintError> {
        let n = points.len();
        if n < 3 {
            return Err(FootprintError::TooFewVertices { count: n });
        }

        for i in 0..n {
            let next = (i + 1) % n;
            if (points[next] - points[i]).norm() < MIN_VERTEX_SEPARATION {
                return Err(FootprintError::DuplicateVertex { index: i, next });
            }
        }

        if let Some((first, second)) = find_self_intersection(&points) {
            return Err(FootprintError::SelfIntersecting { first, second });
        }

        Ok(Self { points })
    }

    /// Create a footprint from `[x, y]` coordinate pairs.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Footprint::new`].
    pub fn from_coords(coords: &[[f64; 2]]) -> Result<Self, FootprintError> {
        Self::new(coords.iter().map(|c| Point2::new(c[0], c[1])).collect())
    }

    /// The polygon vertices in order.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Number of vertices (equal to the number of edges).
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Iterate over the polygon edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Signed area via the shoelace formula.
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let mut twice_area = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            twice_area += p.x.mul_add(q.y, -(q.x * p.y));
        }
        twice_area / 2.0
    }

    /// Check whether the winding is counter-clockwise.
    #[inline]
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Area centroid of the polygon.
    ///
    /// Falls back to the vertex mean when the enclosed area is numerically
    /// zero (collinear vertices).
    #[must_use]
    pub fn centroid(&self) -> Point2<f64> {
        let n = self.points.len();
        let area = self.signed_area();

        if area.abs() < f64::EPSILON {
            let sum = self
                .points
                .iter()
                .fold(Point2::origin(), |acc: Point2<f64>, p| Point2::new(acc.x + p.x, acc.y + p.y));
            #[allow(clippy::cast_precision_loss)]
            return Point2::new(sum.x / n as f64, sum.y / n as f64);
        }

        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            let cross = p.x.mul_add(q.y, -(q.x * p.y));
            cx += (p.x + q.x) * cross;
            cy += (p.y + q.y) * cross;
        }
        Point2::new(cx / (6.0 * area), cy / (6.0 * area))
    }

    /// The local-frame bounding rectangle of the footprint.
    #[must_use]
    pub fn bounds(&self) -> Aabb2 {
        Aabb2::from_points(self.points.iter())
    }

    /// A copy with reversed vertex order (flipped winding).
    ///
    /// Reversal preserves all structural invariants, so no re-validation
    /// is needed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }
}

/// Find a pair of non-adjacent intersecting edges, if any.
///
/// Returns the edge indices of the first such pair.
fn find_self_intersection(points: &[Point2<f64>]) -> Option<(usize, usize)> {
    let n = points.len();
    for i in 0..n {
        for j in (i + 1)..n {
            // Skip the edge itself and the two edges sharing a vertex with it.
            if j == i || j == (i + 1) % n || (j + 1) % n == i {
                continue;
            }
            let (a, b) = (points[i], points[(i + 1) % n]);
            let (c, d) = (points[j], points[(j + 1) % n]);
            if segments_intersect(a, b, c, d) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Signed parallelogram area of (b - a) x (c - a).
fn orient2d(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    (b.x - a.x).mul_add(c.y - a.y, -((c.x - a.x) * (b.y - a.y)))
}

/// Collinearity cutoff for `orient2d(p, q, r)`.
///
/// The determinant scales with the product of the involved lengths, so an
/// absolute epsilon misclassifies once coordinates exceed unit scale; the
/// cutoff must carry the same scale factor as the determinant itself.
fn collinear_tolerance(p: Point2<f64>, q: Point2<f64>, r: Point2<f64>) -> f64 {
    f64::EPSILON * (q - p).norm() * ((r - p).norm() + (r - q).norm())
}

/// Segment intersection test, including collinear overlap.
fn segments_intersect(
    a: Point2<f64>,
    b: Point2<f64>,
    c: Point2<f64>,
    d: Point2<f64>,
) -> bool {
    let d1 = orient2d(c, d, a);
    let d2 = orient2d(c, d, b);
    let d3 = orient2d(a, b, c);
    let d4 = orient2d(a, b, d);
    let t1 = collinear_tolerance(c, d, a);
    let t2 = collinear_tolerance(c, d, b);
    let t3 = collinear_tolerance(a, b, c);
    let t4 = collinear_tolerance(a, b, d);

    if ((d1 > t1 && d2 < -t2) || (d1 < -t1 && d2 > t2))
        && ((d3 > t3 && d4 < -t4) || (d3 < -t3 && d4 > t4))
    {
        return true;
    }

    // Collinear cases: check 1D overlap of the projections.
    let on_segment = |p: Point2<f64>, q: Point2<f64>, r: Point2<f64>| -> bool {
        r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
    };

    (d1.abs() <= t1 && on_segment(c, d, a))
        || (d2.abs() <= t2 && on_segment(c, d, b))
        || (d3.abs() <= t3 && on_segment(a, b, c))
        || (d4.abs() <= t4 && on_segment(a, b, d))
}
