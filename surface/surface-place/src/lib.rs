//! Placement pose sampling over support surfaces.
//!
//! This crate enumerates candidate resting poses for objects on a table:
//! a deterministic grid walk over the footprint's bounding rectangle,
//! filtered by containment and edge margin, stacked over multiple heights.
//!
//! # Features
//!
//! - **Grid sampling**: deterministic enumeration at a caller resolution
//! - **Default resolution**: edge margin and height derived from an
//!   object's bounding extents when not supplied explicitly
//! - **Markers**: fixed-convention visualization markers for sampled poses
//!
//! # Determinism
//!
//! Sampling walks the grid in increasing X then increasing Y order and
//! never randomizes: identical inputs produce byte-identical pose
//! sequences, which test fixtures rely on.
//!
//! # Example
//!
//! ```
//! use nalgebra::Isometry3;
//! use surface_types::{Footprint, Table};
//! use surface_place::{PlaceParams, generate_place_poses};
//!
//! let footprint = Footprint::from_coords(&[
//!     [-0.5, -0.5],
//!     [0.5, -0.5],
//!     [0.5, 0.5],
//!     [-0.5, 0.5],
//! ]).unwrap();
//! let table = Table::new("desk", Isometry3::identity(), footprint);
//!
//! let params = PlaceParams::new(0.1, 0.03);
//! let poses = generate_place_poses(&table, &params).unwrap();
//! assert!(!poses.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod markers;
mod params;
mod sampler;

pub use error::{PlaceError, PlaceResult};
pub use markers::{MarkerShape, PlaceMarker, place_location_markers};
pub use params::PlaceParams;
pub use sampler::generate_place_poses;
