//! Extrusion of footprints into solid collision volumes.

use nalgebra::Point3;
use surface_types::{Footprint, SolidMesh};
use tracing::debug;

use crate::error::{GeometryError, GeometryResult};
use crate::orient::orient;
use crate::triangulate::triangulate;

/// Extrude a footprint into a closed solid mesh of the given thickness.
///
/// The solid consists of the triangulated top face at local Z=0, a bottom
/// face at Z=`-thickness` with reversed winding, and two side triangles per
/// boundary edge. The footprint is orientation-normalized first, so the
/// result is watertight and consistently wound with outward normals
/// regardless of the input winding — required because the mesh becomes a
/// physical collision volume.
///
/// # Errors
///
/// - [`GeometryError::InvalidThickness`] when `thickness <= 0`
/// - [`GeometryError::DegeneratePolygon`] when the footprint has no area
///
/// # Example
///
/// ```
/// use surface_types::Footprint;
/// use surface_geometry::extrude;
///
/// let square = Footprint::from_coords(&[
///     [0.0, 0.0],
///     [1.0, 0.0],
///     [1.0, 1.0],
///     [0.0, 1.0],
/// ]).unwrap();
///
/// let solid = extrude(&square, 0.05).unwrap();
/// assert!((solid.signed_volume() - 0.05).abs() < 1e-10);
/// ```
#[allow(clippy::cast_possible_truncation)] // footprints are far below u32::MAX vertices
pub fn extrude(footprint: &Footprint, thickness: f64) -> GeometryResult<SolidMesh> {
    if thickness <= 0.0 {
        return Err(GeometryError::InvalidThickness(thickness));
    }

    let oriented = orient(footprint)?;
    let points = oriented.points();
    let n = points.len();
    let offset = n as u32;

    let top_faces = triangulate(&oriented);

    let mut mesh = SolidMesh::with_capacity(2 * n, 2 * top_faces.len() + 2 * n);

    // Top ring at Z=0, bottom ring at Z=-thickness, same vertex order.
    for p in points {
        mesh.positions.push(Point3::new(p.x, p.y, 0.0));
    }
    for p in points {
        mesh.positions.push(Point3::new(p.x, p.y, -thickness));
    }

    // Top face keeps CCW winding (+Z outward); bottom face is reversed.
    for &[a, b, c] in &top_faces {
        mesh.faces.push([a, b, c]);
        mesh.faces.push([a + offset, c + offset, b + offset]);
    }

    // Side wall: two triangles per boundary edge, wound outward.
    for i in 0..offset {
        let j = (i + 1) % offset;
        mesh.faces.push([i, i + offset, j + offset]);
        mesh.faces.push([i, j + offset, j]);
    }

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        thickness,
        "Extruded footprint into solid"
    );

    Ok(mesh)
}
