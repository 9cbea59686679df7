//! Deterministic grid sampling of placement poses.

// Grid index counts are small and fit in f64 exactly
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use nalgebra::{Isometry3, Point2, Point3, Translation3};
use surface_geometry::{distance_to_nearest_edge, point_in_polygon};
use surface_types::{PlacePose, Table};
use tracing::{debug, info};

use crate::error::{PlaceError, PlaceResult};
use crate::params::PlaceParams;

/// Absorbs float rounding when counting grid steps across the bounding box.
const GRID_STEP_EPSILON: f64 = 1e-9;

/// Enumerate candidate placement poses over a table surface.
///
/// Walks a regular grid with step `params.resolution` over the footprint's
/// local bounding rectangle in increasing X then increasing Y order. A grid
/// point is accepted when it lies inside the footprint and at least
/// `params.min_distance_from_edge` from every edge. Each accepted point
/// yields `params.num_heights` poses at heights
/// `height_above_table + k * delta_height`, composed with the table's world
/// pose and carrying `params.orientation`.
///
/// An empty result is a valid outcome: no grid point satisfied the
/// constraints.
///
/// # Errors
///
/// - [`PlaceError::InvalidResolution`] when `resolution <= 0`
/// - [`PlaceError::NoHeights`] when `num_heights == 0`
///
/// # Example
///
/// ```
/// use nalgebra::Isometry3;
/// use surface_types::{Footprint, Table};
/// use surface_place::{PlaceParams, generate_place_poses};
///
/// let footprint = Footprint::from_coords(&[
///     [-0.5, -0.5],
///     [0.5, -0.5],
///     [0.5, 0.5],
///     [-0.5, 0.5],
/// ]).unwrap();
/// let table = Table::new("desk", Isometry3::identity(), footprint);
///
/// // Only the footprint center survives a 0.2 m edge margin on a 0.5 m grid.
/// let params = PlaceParams::new(0.5, 0.01)
///     .with_min_distance_from_edge(0.2)
///     .with_num_heights(1);
/// let poses = generate_place_poses(&table, &params).unwrap();
/// assert_eq!(poses.len(), 1);
/// ```
pub fn generate_place_poses(table: &Table, params: &PlaceParams) -> PlaceResult<Vec<PlacePose>> {
    if params.resolution <= 0.0 {
        return Err(PlaceError::InvalidResolution(params.resolution));
    }
    if params.num_heights == 0 {
        return Err(PlaceError::NoHeights);
    }

    let footprint = &table.footprint;
    let bounds = footprint.bounds();

    let steps_x = (bounds.width() / params.resolution + GRID_STEP_EPSILON).floor() as usize;
    let steps_y = (bounds.height() / params.resolution + GRID_STEP_EPSILON).floor() as usize;

    debug!(
        table = %table.id,
        steps_x = steps_x + 1,
        steps_y = steps_y + 1,
        resolution = params.resolution,
        "Sampling placement grid"
    );

    let mut poses = Vec::new();

    for ix in 0..=steps_x {
        let x = (ix as f64).mul_add(params.resolution, bounds.min.x);
        for iy in 0..=steps_y {
            let y = (iy as f64).mul_add(params.resolution, bounds.min.y);
            let point = Point2::new(x, y);

            if distance_to_nearest_edge(&point, footprint) < params.min_distance_from_edge
                || !point_in_polygon(&point, footprint)
            {
                continue;
            }

            for k in 0..params.num_heights {
                let z = f64::from(k).mul_add(params.delta_height, params.height_above_table);
                let world_position = table.pose.transform_point(&Point3::new(x, y, z));
                let pose = Isometry3::from_parts(
                    Translation3::from(world_position.coords),
                    params.orientation,
                );
                poses.push(PlacePose::new(params.frame.clone(), pose));
            }
        }
    }

    info!(
        table = %table.id,
        poses = poses.len(),
        "Placement sampling complete"
    );

    Ok(poses)
}
