//! Property-based tests for polygon operations.
//!
//! These tests use proptest to generate random simple polygons and verify
//! the orientation, extrusion, and containment invariants.
//!
//! Run with: cargo test -p surface-geometry -- proptest

use nalgebra::Point2;
use proptest::prelude::*;
use surface_geometry::{
    distance_to_nearest_edge, extrude, orient, point_in_polygon, triangulate,
};
use surface_types::Footprint;

// =============================================================================
// Strategies for generating random simple polygons
// =============================================================================

/// Generate a star-shaped simple polygon: vertices at increasing angles
/// around the origin with varying radii. Star-shaped polygons are always
/// simple, which keeps the generator rejection-free.
fn arb_star_polygon() -> impl Strategy<Value = Footprint> {
    (4usize..12)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(0.2..2.0f64, n),
                prop::collection::vec(0.01..0.9f64, n),
            )
        })
        .prop_map(|(radii, angle_fracs)| {
            let total: f64 = angle_fracs.iter().sum();
            let mut angle = 0.0;
            let mut points = Vec::with_capacity(radii.len());
            for (r, frac) in radii.iter().zip(&angle_fracs) {
                angle += frac / total * std::f64::consts::TAU;
                points.push(Point2::new(r * angle.cos(), r * angle.sin()));
            }
            Footprint::new(points)
        })
        .prop_filter_map("degenerate star polygon", |fp| {
            fp.ok().filter(|fp| fp.signed_area().abs() > 1e-6)
        })
}

proptest! {
    #[test]
    fn orient_is_idempotent(polygon in arb_star_polygon()) {
        let once = orient(&polygon).unwrap();
        let twice = orient(&once).unwrap();
        prop_assert_eq!(once.points(), twice.points());
        prop_assert!(once.signed_area() > 0.0);
        prop_assert!(twice.signed_area() > 0.0);
    }

    #[test]
    fn orient_preserves_area_magnitude(polygon in arb_star_polygon()) {
        let oriented = orient(&polygon).unwrap();
        prop_assert!(
            (oriented.signed_area().abs() - polygon.signed_area().abs()).abs() < 1e-12
        );
    }

    #[test]
    fn triangulation_covers_area(polygon in arb_star_polygon()) {
        let oriented = orient(&polygon).unwrap();
        let faces = triangulate(&oriented);
        prop_assert_eq!(faces.len(), oriented.vertex_count() - 2);

        let points = oriented.points();
        let total: f64 = faces
            .iter()
            .map(|&[a, b, c]| {
                let (a, b, c) = (points[a as usize], points[b as usize], points[c as usize]);
                0.5 * ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y))
            })
            .sum();
        prop_assert!((total - oriented.signed_area()).abs() < 1e-9);
    }

    #[test]
    fn extrusion_has_positive_volume(
        polygon in arb_star_polygon(),
        thickness in 0.01..1.0f64,
    ) {
        let solid = extrude(&polygon, thickness).unwrap();
        let expected = polygon.signed_area().abs() * thickness;
        prop_assert!(solid.signed_volume() > 0.0);
        prop_assert!((solid.signed_volume() - expected).abs() < 1e-9);
    }

    #[test]
    fn centroid_of_star_polygon_is_inside(polygon in arb_star_polygon()) {
        // Star-shaped about the origin: the origin is interior unless it
        // sits numerically on an edge, in which case the boundary rule
        // reports outside and the distance is ~0.
        let origin = Point2::origin();
        let d = distance_to_nearest_edge(&origin, &polygon);
        if d > 1e-9 {
            prop_assert!(point_in_polygon(&origin, &polygon));
        }
    }

    #[test]
    fn interior_points_have_positive_edge_distance(polygon in arb_star_polygon()) {
        // Points slightly pulled toward the origin from each vertex are
        // inside a star-shaped polygon.
        for p in polygon.points() {
            let inner = Point2::new(p.x * 0.5, p.y * 0.5);
            if point_in_polygon(&inner, &polygon) {
                prop_assert!(distance_to_nearest_edge(&inner, &polygon) > 0.0);
            }
        }
    }
}
