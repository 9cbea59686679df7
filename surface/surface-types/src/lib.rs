//! Core types for tabletop support-surface planning.
//!
//! This crate provides the foundational types shared by the surface-* crates:
//!
//! - [`Footprint`] - A simple closed polygon describing a table's top surface
//! - [`Table`] - A named support surface with a world pose and a footprint
//! - [`SolidMesh`] - A closed triangle mesh used as a collision proxy
//! - [`PlacePose`] - A candidate placement pose tagged with its frame
//! - [`Roi`] - An axis-aligned 3D region-of-interest box
//! - [`ObjectExtents`] - Bounding-extent query for objects being placed
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//! Downstream crates (surface-place, surface-world) assume meters.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**. A table's footprint lives in
//! its local XY plane with the surface normal along +Z; the table's pose
//! maps that local frame into world coordinates.
//!
//! Solid-mesh face winding is **counter-clockwise (CCW) when viewed from
//! outside**. Normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use surface_types::{Footprint, Table};
//! use nalgebra::Isometry3;
//!
//! let footprint = Footprint::from_coords(&[
//!     [-0.5, -0.5],
//!     [0.5, -0.5],
//!     [0.5, 0.5],
//!     [-0.5, 0.5],
//! ]).unwrap();
//!
//! let table = Table::new("kitchen_table", Isometry3::identity(), footprint);
//! assert_eq!(table.id, "kitchen_table");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod error;
mod extents;
mod footprint;
mod place_pose;
mod roi;
mod solid;
mod table;

// Re-export core types
pub use bounds::Aabb2;
pub use error::FootprintError;
pub use extents::{BoxExtents, ObjectExtents};
pub use footprint::Footprint;
pub use place_pose::PlacePose;
pub use roi::Roi;
pub use solid::SolidMesh;
pub use table::Table;

// Re-export nalgebra types for convenience
pub use nalgebra::{Isometry3, Point2, Point3, UnitQuaternion, Vector2, Vector3};
