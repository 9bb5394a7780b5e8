//! # Face Reconstruction
//!
//! Recovers the oriented faces of a convex equilateral polyhedron from its
//! vertex coordinates alone. The edge length is not given; it is found.
//!
//! ## Algorithm
//!
//! 1. **Edge length**: the minimum pairwise vertex distance. In an
//!    equilateral solid no two vertices are closer than an edge.
//! 2. **Edges**: at each vertex, every other vertex whose distance is within
//!    the relative tolerance of the edge length is a neighbor.
//! 3. **Angular order**: each edge's displacement is projected onto the
//!    plane perpendicular to the vertex's radial direction and measured as a
//!    signed angle from the first edge found. Sorted ascending, the edges
//!    run clockwise as seen from outside the solid.
//! 4. **Face walk**: starting along any untraversed directed edge, at each
//!    vertex leave by the edge that follows, in that order, the one just
//!    arrived on. This turns left every time, circling one face
//!    counter-clockwise as seen from outside, until the walk is back at its
//!    start. Every directed edge is walked exactly once, so every edge
//!    borders exactly two faces.
//!
//! ## Example
//!
//! ```rust
//! use polyhedra::{FaceReconstructor, Vec3};
//!
//! let octahedron = vec![
//!     Vec3::X, -Vec3::X, Vec3::Y, -Vec3::Y, Vec3::Z, -Vec3::Z,
//! ];
//! let faces = FaceReconstructor::default()
//!     .reconstruct(&octahedron, Vec3::ZERO)
//!     .unwrap();
//! assert_eq!(faces.len(), 8);
//! assert!(faces.iter().all(|f| f.len() == 3));
//! ```

mod graph;

use config::constants::{EDGE_LENGTH_TOLERANCE, MIN_POLYHEDRON_VERTICES};
use log::debug;

use crate::core::vec3::{magnitude, subtract, Vec3};
use crate::error::{GeometryError, GeometryResult};
use crate::polyhedron::topology;

use graph::AdjacencyTable;

// =============================================================================
// RECONSTRUCTOR
// =============================================================================

/// Derives face cycles from the vertices of a convex equilateral polyhedron.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceReconstructor {
    tolerance: f64,
}

impl Default for FaceReconstructor {
    fn default() -> Self {
        Self {
            tolerance: EDGE_LENGTH_TOLERANCE,
        }
    }
}

impl FaceReconstructor {
    /// Creates a reconstructor with the default 1% edge tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reconstructor with a custom relative edge tolerance.
    ///
    /// Tighten it for vertex generators that are more precise than 1%.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// The relative edge tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Recovers the oriented face cycles of the solid with the given
    /// vertices and center.
    ///
    /// Fails instead of returning a partial face set when the vertices are
    /// too few, degenerate, not equilateral, or do not form one connected,
    /// closed convex surface.
    pub fn reconstruct(&self, vertices: &[Vec3], center: Vec3) -> GeometryResult<Vec<Vec<usize>>> {
        if vertices.len() < MIN_POLYHEDRON_VERTICES {
            return Err(GeometryError::TooFewVertices {
                required: MIN_POLYHEDRON_VERTICES,
                found: vertices.len(),
            });
        }
        let edge_length = discover_edge_length(vertices)?;
        let graph = AdjacencyTable::build(vertices, center, edge_length, self.tolerance)?;
        graph.check_connected()?;
        let faces = graph.walk_faces()?;

        topology::check_faces(&faces, vertices.len())?;
        topology::check_closed(&faces, vertices.len())?;

        debug!(
            "reconstructed {} faces from {} vertices, edge length {:.6}",
            faces.len(),
            vertices.len(),
            edge_length
        );
        Ok(faces)
    }
}

// =============================================================================
// EDGE LENGTH
// =============================================================================

/// The common edge length of an equilateral vertex set: the minimum
/// distance over all vertex pairs.
///
/// Fails when that distance is zero (duplicate vertices) or not finite.
///
/// # Examples
/// ```
/// use polyhedra::reconstruct::discover_edge_length;
/// use polyhedra::Vec3;
///
/// let square = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y];
/// assert_eq!(discover_edge_length(&square).unwrap(), 1.0);
/// ```
pub fn discover_edge_length(vertices: &[Vec3]) -> GeometryResult<f64> {
    let mut edge_length = f64::INFINITY;
    for (i, &u) in vertices.iter().enumerate() {
        for &v in &vertices[i + 1..] {
            let distance = magnitude(subtract(u, v));
            if !distance.is_finite() {
                return Err(GeometryError::DegenerateVertices { distance });
            }
            edge_length = edge_length.min(distance);
        }
    }
    if !(edge_length.is_finite() && edge_length > 0.0) {
        return Err(GeometryError::DegenerateVertices {
            distance: edge_length,
        });
    }
    Ok(edge_length)
}
