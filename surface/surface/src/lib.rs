//! Tabletop support-surface toolkit.
//!
//! This umbrella crate re-exports all surface-* crates, providing a unified
//! API for working with detected planar support surfaces: footprint
//! validation, polygon orientation and extrusion, containment tests, grid
//! placement sampling, and a concurrent table registry.
//!
//! # Quick Start
//!
//! ```
//! use surface::prelude::*;
//! use nalgebra::Isometry3;
//!
//! // Register a detected table.
//! let world = SurfaceWorld::new("world");
//! let footprint = Footprint::from_coords(&[
//!     [-0.5, -0.5],
//!     [0.5, -0.5],
//!     [0.5, 0.5],
//!     [-0.5, 0.5],
//! ]).unwrap();
//! world
//!     .replace_all(vec![Table::new("desk", Isometry3::identity(), footprint)])
//!     .unwrap();
//!
//! // Sample poses for placing an object on it.
//! let params = PlaceParams::new(0.1, 0.02);
//! let poses = world.place_poses_on("desk", &params).unwrap();
//! assert!(!poses.is_empty());
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `Footprint`, `Table`, `SolidMesh`,
//!   `PlacePose`, `Roi`
//! - [`geometry`] - Polygon orientation, triangulation, extrusion, and
//!   containment tests
//! - [`place`] - Deterministic grid sampling of placement poses
//! - [`world`] - The concurrent [`SurfaceWorld`](world::SurfaceWorld)
//!   registry with spatial queries and collision export

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `Footprint`, `Table`, `SolidMesh`, `PlacePose`, `Roi`.
pub use surface_types as types;

/// Polygon orientation, triangulation, extrusion, and containment tests.
pub use surface_geometry as geometry;

/// Deterministic grid sampling of placement poses.
pub use surface_place as place;

/// Concurrent table registry with spatial queries and collision export.
pub use surface_world as world;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for support-surface processing.
///
/// # Usage
///
/// ```
/// use surface::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use surface_types::{
        BoxExtents, Footprint, ObjectExtents, PlacePose, Roi, SolidMesh, Table,
    };

    // Geometry
    pub use surface_geometry::{extrude, is_inside_table_contour, orient, point_in_polygon};

    // Placement
    pub use surface_place::{PlaceParams, generate_place_poses};

    // Registry (main use case)
    pub use surface_world::{CollisionSink, NamedSolid, SurfaceWorld};
}

// =============================================================================
// Tests
// =============================================================================
