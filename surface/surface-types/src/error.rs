//! Error types for footprint construction.

use thiserror::Error;

/// Errors that can occur while constructing a [`crate::Footprint`].
#[derive(Debug, Error)]
pub enum FootprintError {
    /// Fewer than three vertices were supplied.
    #[error("Footprint needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// Two consecutive vertices coincide.
    #[error("Consecutive footprint vertices {index} and {next} coincide")]
    DuplicateVertex {
        /// Index of the first vertex of the degenerate edge.
        index: usize,
        /// Index of the second vertex of the degenerate edge.
        next: usize,
    },

    /// Two non-adjacent edges intersect, so the polygon is not simple.
    #[error("Footprint edges {first} and {second} intersect")]
    SelfIntersecting {
        /// Index of the first intersecting edge.
        first: usize,
        /// Index of the second intersecting edge.
        second: usize,
    },
}
