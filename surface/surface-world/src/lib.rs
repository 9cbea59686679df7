//! Concurrent registry of detected planar support surfaces.
//!
//! A perception pipeline periodically replaces the full set of detected
//! tables; planning code concurrently asks spatial questions about it.
//! [`SurfaceWorld`] mediates between the two with atomic snapshot
//! semantics: every query runs against a consistent table set, and a
//! replacement never tears a query in half.
//!
//! # Features
//!
//! - **Atomic replacement**: [`SurfaceWorld::replace_all`] swaps the whole
//!   set; concurrent readers keep their snapshot
//! - **Spatial queries**: region-of-interest filtering and reverse lookup
//!   of the table a pose rests on
//! - **Placement**: grid sampling of candidate place poses, explicit or
//!   derived from an object's bounding extents
//! - **Collision export**: extrude every table into a watertight solid and
//!   diff the result into an external collision world
//!
//! # Example
//!
//! ```
//! use nalgebra::Isometry3;
//! use surface_types::{Footprint, Table};
//! use surface_place::PlaceParams;
//! use surface_world::SurfaceWorld;
//!
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
//! let poses = world
//!     .place_poses_on("desk", &PlaceParams::new(0.1, 0.02))
//!     .unwrap();
//! assert!(!poses.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod collision;
mod error;
mod world;

pub use collision::{CollisionSink, NamedSolid};
pub use error::{WorldError, WorldResult};
pub use world::{SurfaceWorld, TableCallback};
