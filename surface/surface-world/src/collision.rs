//! Collision-volume materialization.

use nalgebra::Isometry3;
use surface_types::SolidMesh;

/// A named solid collision volume with its world pose.
///
/// Produced by extruding a table footprint; the mesh lives in the table's
/// local frame, the pose places it in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSolid {
    /// Identifier of the table the solid was built from.
    pub id: String,
    /// World pose of the solid.
    pub pose: Isometry3<f64>,
    /// Watertight collision mesh in the local frame.
    pub mesh: SolidMesh,
}

/// Sink for collision volumes maintained by an external collision world.
///
/// The registry diffs its table set against what it previously published:
/// present tables are upserted, vanished tables are removed. Implementors
/// are typically adapters onto a planning-scene service.
pub trait CollisionSink {
    /// Add or update a named solid.
    fn upsert(&mut self, solid: &NamedSolid);

    /// Remove a previously published solid by name.
    fn remove(&mut self, id: &str);
}
