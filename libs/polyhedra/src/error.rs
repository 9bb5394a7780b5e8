//! # Error Types
//!
//! Error types for polyhedron construction. All errors are explicit and
//! provide clear debugging information.
//!
//! ## Error Policy
//!
//! - A malformed vertex set fails at construction, never later
//! - A partially reconstructed polyhedron is never handed out
//! - Errors include context (vertex indices, counts) for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building a polyhedron.
///
/// ## Example
///
/// ```rust
/// use polyhedra::{GeometryError, Polyhedron, Vec3};
///
/// let points = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
/// match Polyhedron::equilateral(points) {
///     Err(GeometryError::TooFewVertices { found, .. }) => assert_eq!(found, 3),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Fewer vertices than the smallest closed polyhedron needs.
    #[error("polyhedron needs at least {required} vertices, found {found}")]
    TooFewVertices {
        /// Minimum vertex count
        required: usize,
        /// Vertex count supplied
        found: usize,
    },

    /// The minimum pairwise distance is zero or not finite.
    ///
    /// Raised for duplicate vertices and NaN/infinite coordinates.
    #[error("degenerate vertex set: minimum pairwise distance is {distance}")]
    DegenerateVertices {
        /// The offending minimum distance
        distance: f64,
    },

    /// A vertex has fewer edges than a closed convex polyhedron allows.
    ///
    /// This is how a non-equilateral vertex set usually shows up.
    #[error("vertex {vertex} has {edges} edges of the common length, at least {required} required")]
    IncompleteEdges {
        /// Index of the vertex
        vertex: usize,
        /// Number of edges found at it
        edges: usize,
        /// Minimum degree
        required: usize,
    },

    /// The edge graph falls apart into more than one component.
    #[error("edge graph is disconnected: {reached} of {total} vertices reachable from vertex 0")]
    Disconnected {
        /// Vertices reachable from vertex 0
        reached: usize,
        /// Total vertices
        total: usize,
    },

    /// The face walk arrived somewhere it cannot continue from.
    #[error("face walk broke at vertex {vertex}: {message}")]
    BrokenFaceWalk {
        /// Vertex where the walk stopped
        vertex: usize,
        /// What went wrong
        message: String,
    },

    /// The recovered faces do not close into a convex polyhedron.
    #[error("vertex set is not a convex equilateral polyhedron: {0}")]
    NotConvex(String),

    /// An explicitly supplied face is malformed.
    #[error("face {face} is invalid: {message}")]
    InvalidFace {
        /// Index of the face
        face: usize,
        /// What is wrong with it
        message: String,
    },

    /// A requested radius is not a positive finite number, or the
    /// polyhedron has no extent to scale.
    #[error("invalid radius: {0}")]
    InvalidRadius(f64),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for geometry construction.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================
