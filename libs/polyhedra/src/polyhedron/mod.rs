//! # Polyhedron Module
//!
//! A polyhedron is a set of vertices plus a set of oriented faces.
//!
//! ## Structure
//!
//! - Vertices are an ordered `Vec<Vec3>`; an index is a vertex's identity
//!   for the whole lifetime of the polyhedron.
//! - Each face is a cycle of vertex indices. Consecutive indices (and the
//!   last/first pair) are edges, and the cycle runs counter-clockwise when
//!   viewed from outside, so the right-hand-rule normal points outward.
//! - Faces are installed once, at construction. Scaling, translating and
//!   rotating move vertices and the center; they never touch the faces.
//!
//! ## Example
//!
//! ```rust
//! use polyhedra::{Polyhedron, Vec3};
//! use polyhedra::core::vec3::rotation_z;
//!
//! let mut tetra = Polyhedron::equilateral(vec![
//!     Vec3::new(1.0, 1.0, 1.0),
//!     Vec3::new(1.0, -1.0, -1.0),
//!     Vec3::new(-1.0, 1.0, -1.0),
//!     Vec3::new(-1.0, -1.0, 1.0),
//! ]).unwrap();
//!
//! tetra.translate(Vec3::new(5.0, 0.0, 0.0));
//! tetra.rotate(rotation_z(0.5));
//! assert_eq!(tetra.position(), Vec3::new(5.0, 0.0, 0.0));
//! assert_eq!(tetra.face_count(), 4);
//! ```

pub mod topology;

use std::fmt;

use crate::core::vec3::{add, cross, magnitude, matrix_vector, scale, subtract, Mat3, Vec3};
use crate::error::{GeometryError, GeometryResult};
use crate::reconstruct::FaceReconstructor;

// =============================================================================
// POLYHEDRON STRUCT
// =============================================================================

/// Vertices and oriented faces of a polyhedron, movable as a rigid solid.
///
/// See the [module documentation](self) for the face orientation rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    vertices: Vec<Vec3>,
    faces: Vec<Vec<usize>>,
    center: Vec3,
}

impl Polyhedron {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Creates a polyhedron centered on the origin from explicit faces.
    ///
    /// Every face must have at least 3 indices, all of them valid, and the
    /// faces must close up (each edge shared by exactly two faces).
    ///
    /// ## Example
    ///
    /// ```rust
    /// use polyhedra::{Polyhedron, Vec3};
    ///
    /// let points = vec![
    ///     Vec3::new(1.0, 1.0, 1.0),
    ///     Vec3::new(1.0, -1.0, -1.0),
    ///     Vec3::new(-1.0, 1.0, -1.0),
    ///     Vec3::new(-1.0, -1.0, 1.0),
    /// ];
    /// let faces = vec![vec![0, 2, 3], vec![0, 3, 1], vec![0, 1, 2], vec![1, 3, 2]];
    /// let tetra = Polyhedron::with_faces(points, faces).unwrap();
    /// assert_eq!(tetra.edge_count(), 6);
    /// ```
    pub fn with_faces(vertices: Vec<Vec3>, faces: Vec<Vec<usize>>) -> GeometryResult<Self> {
        topology::check_faces(&faces, vertices.len())?;
        topology::check_closed(&faces, vertices.len())?;
        Ok(Self {
            vertices,
            faces,
            center: Vec3::ZERO,
        })
    }

    /// Creates a polyhedron centered on the origin from the vertices of a
    /// convex equilateral solid, recovering its faces with the default
    /// [`FaceReconstructor`].
    pub fn equilateral(vertices: Vec<Vec3>) -> GeometryResult<Self> {
        Self::equilateral_with(vertices, &FaceReconstructor::default())
    }

    /// Like [`Polyhedron::equilateral`], with a caller-configured reconstructor.
    pub fn equilateral_with(
        vertices: Vec<Vec3>,
        reconstructor: &FaceReconstructor,
    ) -> GeometryResult<Self> {
        let center = Vec3::ZERO;
        let faces = reconstructor.reconstruct(&vertices, center)?;
        Ok(Self {
            vertices,
            faces,
            center,
        })
    }

    // =========================================================================
    // RIGID MOTIONS
    // =========================================================================

    /// Multiplies the displacement of every vertex from the center by `factor`.
    ///
    /// The center does not move.
    pub fn scale(&mut self, factor: f64) {
        let center = self.center;
        for v in &mut self.vertices {
            *v = add(center, scale(factor, subtract(*v, center)));
        }
    }

    /// Scales the polyhedron so its circumsphere radius becomes `radius`.
    ///
    /// Fails for a non-positive or non-finite `radius`, and for a polyhedron
    /// whose current radius is zero.
    pub fn set_radius(&mut self, radius: f64) -> GeometryResult<()> {
        let current = self.radius();
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::InvalidRadius(radius));
        }
        if !(current.is_finite() && current > 0.0) {
            return Err(GeometryError::InvalidRadius(current));
        }
        self.scale(radius / current);
        Ok(())
    }

    /// Moves the center and every vertex by `displacement`.
    pub fn translate(&mut self, displacement: Vec3) {
        self.center = add(self.center, displacement);
        for v in &mut self.vertices {
            *v = add(*v, displacement);
        }
    }

    /// Rotates every vertex about the polyhedron's own center.
    pub fn rotate(&mut self, rotation: Mat3) {
        let center = self.center;
        for v in &mut self.vertices {
            *v = add(matrix_vector(rotation, subtract(*v, center)), center);
        }
    }

    /// Turns the polyhedron inside out by reversing every face cycle.
    ///
    /// Afterwards every normal points inward, e.g. the walls of a box face
    /// the volume they enclose.
    pub fn turn_inside_out(&mut self) {
        for face in &mut self.faces {
            face.reverse();
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Circumsphere radius, measured as the distance from the center to
    /// vertex 0.
    ///
    /// Exact for the solids built here, whose vertices are all equidistant
    /// from the center.
    pub fn radius(&self) -> f64 {
        self.vertices
            .first()
            .map_or(0.0, |v| magnitude(subtract(*v, self.center)))
    }

    /// The center of the polyhedron.
    pub fn position(&self) -> Vec3 {
        self.center
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// All vertices, in index order.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// The vertex at `index`.
    pub fn vertex(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index).copied()
    }

    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// All face cycles. Their order carries no meaning.
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Vertex indices of the face at `index`.
    pub fn face_indices(&self, index: usize) -> Option<&[usize]> {
        self.faces.get(index).map(Vec::as_slice)
    }

    /// Vertex coordinates of the face at `index`, in cycle order.
    pub fn face(&self, index: usize) -> Option<Vec<Vec3>> {
        self.face_indices(index)
            .map(|face| face.iter().map(|&i| self.vertices[i]).collect())
    }

    /// Right-hand-rule normal `(p1 - p0) × (p2 - p1)` of the face at `index`.
    ///
    /// Not normalized; its length is proportional to the face's size.
    pub fn face_normal(&self, index: usize) -> Option<Vec3> {
        let face = self.face_indices(index)?;
        let [p0, p1, p2] = [face[0], face[1], face[2]].map(|i| self.vertices[i]);
        Some(cross(subtract(p1, p0), subtract(p2, p1)))
    }
}

// =============================================================================
// DISPLAY
// =============================================================================

/// One `x y z` line per face vertex, with a blank line after each face.
impl fmt::Display for Polyhedron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in &self.faces {
            for &i in face {
                let v = self.vertices[i];
                writeln!(f, "{} {} {}", v.x, v.y, v.z)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
