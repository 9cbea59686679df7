//! End-to-end pipeline tests across the surface crate ecosystem.
//!
//! These exercise the full flow a perception/planning stack drives: detected
//! tables go into the registry, planning code queries regions, resolves which
//! table an object rests on, samples placement poses, and mirrors the table
//! set into a collision world.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use approx::assert_relative_eq;
use nalgebra::{Isometry3, Translation3, UnitQuaternion};
use surface::prelude::*;

/// 1 m square table centered at (x, y) with its surface at height z.
fn square_table(id: &str, x: f64, y: f64, z: f64) -> Table {
    let footprint =
        Footprint::from_coords(&[[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]])
            .expect("square footprint is simple");
    let pose = Isometry3::from_parts(
        Translation3::new(x, y, z),
        UnitQuaternion::identity(),
    );
    Table::new(id, pose, footprint)
}

fn pose_at(x: f64, y: f64, z: f64) -> Isometry3<f64> {
    Isometry3::from_parts(Translation3::new(x, y, z), UnitQuaternion::identity())
}

/// Collision sink that records the operations applied to it.
#[derive(Default)]
struct RecordingSink {
    upserted: Vec<String>,
    removed: Vec<String>,
}

impl CollisionSink for RecordingSink {
    fn upsert(&mut self, solid: &NamedSolid) {
        self.upserted.push(solid.id.clone());
    }

    fn remove(&mut self, id: &str) {
        self.removed.push(id.to_string());
    }
}

#[test]
fn detect_query_place_publish() {
    let world = SurfaceWorld::new("map");
    world
        .replace_all(vec![
            square_table("desk", 0.0, 0.0, 0.7),
            square_table("side_table", 3.0, 0.0, 0.4),
        ])
        .unwrap();

    // Region query picks out the desk only.
    let roi = Roi::from_extents(-1.0, -1.0, 0.0, 1.0, 1.0, 1.0);
    let nearby = world.tables_in_roi(&roi).unwrap();
    assert_eq!(nearby.len(), 1);
    assert_eq!(nearby[0].id, "desk");

    // Sample placement poses for a small box on the desk.
    let poses = world
        .place_poses_for_object(
            "desk",
            &BoxExtents::new(0.1, 0.1, 0.2),
            UnitQuaternion::identity(),
            0.1,
        )
        .unwrap();
    assert!(!poses.is_empty());
    for pose in &poses {
        assert_eq!(pose.frame, "map");
        // Every pose sits over the table surface, object half-height above.
        assert!(pose.position().z >= 0.7 + 0.1 - 1e-12);
    }

    // A sampled pose resolves back to the desk.
    let resolved = world.find_object_table(&poses[0].pose, 0.01, 0.0);
    assert_eq!(resolved, Some("desk".to_string()));

    // Markers mirror the last sampling run.
    assert_eq!(world.last_place_markers().len(), poses.len());

    // Publish the set into a collision world.
    let mut sink = RecordingSink::default();
    let published = world.publish_collision(&mut sink, 0.05).unwrap();
    assert_eq!(published, 2);
    assert_eq!(sink.upserted, vec!["desk", "side_table"]);
    assert!(sink.removed.is_empty());
}

#[test]
fn vertical_offset_gate() {
    let world = SurfaceWorld::new("map");
    world.replace_all(vec![square_table("desk", 0.0, 0.0, 0.7)]).unwrap();

    // Object hovering 0.05 m above the surface.
    let hovering = pose_at(0.0, 0.0, 0.75);
    assert_eq!(world.find_object_table(&hovering, 0.0, 0.1), None);
    assert_eq!(
        world.find_object_table(&hovering, 0.0, 0.0),
        Some("desk".to_string())
    );
}

#[test]
fn stacked_tables_resolve_to_nearest() {
    let world = SurfaceWorld::new("map");
    world
        .replace_all(vec![
            square_table("shelf_low", 0.0, 0.0, 0.3),
            square_table("shelf_high", 0.0, 0.0, 0.9),
        ])
        .unwrap();

    let on_low = pose_at(0.1, 0.1, 0.35);
    assert_eq!(
        world.find_object_table(&on_low, 0.0, 0.0),
        Some("shelf_low".to_string())
    );

    let on_high = pose_at(0.1, 0.1, 0.95);
    assert_eq!(
        world.find_object_table(&on_high, 0.0, 0.0),
        Some("shelf_high".to_string())
    );
}

#[test]
fn republish_removes_vanished_tables() {
    let world = SurfaceWorld::new("map");
    world
        .replace_all(vec![
            square_table("a", 0.0, 0.0, 0.5),
            square_table("b", 3.0, 0.0, 0.5),
        ])
        .unwrap();

    let mut sink = RecordingSink::default();
    world.publish_collision(&mut sink, 0.05).unwrap();
    assert_eq!(sink.upserted.len(), 2);

    // The next observation only sees table "a".
    world.replace_all(vec![square_table("a", 0.0, 0.0, 0.5)]).unwrap();

    let mut sink = RecordingSink::default();
    let published = world.publish_collision(&mut sink, 0.05).unwrap();
    assert_eq!(published, 1);
    assert_eq!(sink.upserted, vec!["a"]);
    assert_eq!(sink.removed, vec!["b"]);
}

#[test]
fn extruded_solid_matches_footprint() {
    let footprint =
        Footprint::from_coords(&[[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [0.0, 1.0]]).unwrap();
    let solid = extrude(&footprint, 0.04).unwrap();
    // 2 x 1 footprint, 0.04 thick.
    assert_relative_eq!(solid.signed_volume(), 0.08, epsilon = 1e-12);
}

#[test]
fn geometry_layer_agrees_with_registry() {
    let table = square_table("desk", 1.0, 2.0, 0.7);

    // Center of the table, just above the surface.
    let center = pose_at(1.0, 2.0, 0.72);
    assert!(is_inside_table_contour(&center, &table, 0.1, 0.0));

    let world = SurfaceWorld::new("map");
    world.replace_all(vec![table]).unwrap();
    assert_eq!(
        world.find_object_table(&center, 0.1, 0.0),
        Some("desk".to_string())
    );
}
