//! Geometric core for tabletop placement: polygon orientation, extrusion
//! into solid collision volumes, and containment tests.
//!
//! # Features
//!
//! - **Orientation**: normalize a footprint's winding to counter-clockwise
//! - **Extrusion**: turn a footprint into a watertight solid mesh
//! - **Containment**: point-in-polygon and distance-to-edge tests, plus the
//!   table-contour check used by placement filtering and reverse lookup
//!
//! # Boundary Convention
//!
//! Points exactly on a polygon edge are treated as **outside** throughout
//! this crate. This is the conservative choice for placement safety margins
//! and is applied consistently by both the containment tests and the
//! placement sampler built on top of them.
//!
//! # Example
//!
//! ```
//! use surface_types::Footprint;
//! use surface_geometry::{extrude, orient};
//!
//! let footprint = Footprint::from_coords(&[
//!     [0.0, 0.0],
//!     [1.0, 0.0],
//!     [1.0, 1.0],
//!     [0.0, 1.0],
//! ]).unwrap();
//!
//! let oriented = orient(&footprint).unwrap();
//! assert!(oriented.is_ccw());
//!
//! let solid = extrude(&footprint, 0.02).unwrap();
//! assert!(solid.signed_volume() > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod contain;
mod error;
mod extrude;
mod orient;
mod triangulate;

pub use contain::{distance_to_nearest_edge, is_inside_table_contour, point_in_polygon};
pub use error::{GeometryError, GeometryResult};
pub use extrude::extrude;
pub use orient::{AREA_EPSILON, orient};
pub use triangulate::triangulate;
