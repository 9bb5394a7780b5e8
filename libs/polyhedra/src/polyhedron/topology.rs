//! Edge bookkeeping derived from face cycles.
//!
//! A closed, consistently oriented polyhedron uses every directed edge
//! `(a, b)` in exactly one face and its reverse `(b, a)` in exactly one
//! other face, so each undirected edge is walked exactly twice. Together
//! with Euler's formula `V - E + F = 2` this is what [`check_closed`]
//! verifies before faces are installed.

use std::collections::{BTreeSet, HashMap};

use crate::error::{GeometryError, GeometryResult};

use super::Polyhedron;

/// Consecutive index pairs of a face cycle, including last → first.
pub(crate) fn face_edges(face: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    face.iter()
        .zip(face.iter().cycle().skip(1))
        .map(|(&a, &b)| (a, b))
}

/// Counts how many faces use each directed edge.
pub(crate) fn directed_edge_counts(faces: &[Vec<usize>]) -> HashMap<(usize, usize), usize> {
    let mut counts = HashMap::new();
    for face in faces {
        for edge in face_edges(face) {
            *counts.entry(edge).or_insert(0) += 1;
        }
    }
    counts
}

/// Distinct undirected edges, each stored as `(min, max)`.
pub(crate) fn undirected_edges(faces: &[Vec<usize>]) -> BTreeSet<(usize, usize)> {
    faces
        .iter()
        .flat_map(|face| face_edges(face))
        .map(|(a, b)| (a.min(b), a.max(b)))
        .collect()
}

/// Checks that every face has at least 3 valid indices.
pub(crate) fn check_faces(faces: &[Vec<usize>], vertex_count: usize) -> GeometryResult<()> {
    for (face_idx, face) in faces.iter().enumerate() {
        if face.len() < 3 {
            return Err(GeometryError::InvalidFace {
                face: face_idx,
                message: format!("has {} vertices, at least 3 required", face.len()),
            });
        }
        if let Some(&bad) = face.iter().find(|&&i| i >= vertex_count) {
            return Err(GeometryError::InvalidFace {
                face: face_idx,
                message: format!("references vertex {bad} of {vertex_count}"),
            });
        }
    }
    Ok(())
}

/// Checks that the faces close up into a consistently oriented sphere-like
/// surface: each directed edge once, its reverse once, `V - E + F = 2`.
pub(crate) fn check_closed(faces: &[Vec<usize>], vertex_count: usize) -> GeometryResult<()> {
    let counts = directed_edge_counts(faces);
    for (&(a, b), &count) in &counts {
        if count != 1 {
            return Err(GeometryError::NotConvex(format!(
                "directed edge {a} -> {b} is used by {count} faces"
            )));
        }
        if !counts.contains_key(&(b, a)) {
            return Err(GeometryError::NotConvex(format!(
                "edge {a} -> {b} has no face on its other side"
            )));
        }
    }
    let euler = euler(vertex_count, counts.len() / 2, faces.len());
    if euler != 2 {
        return Err(GeometryError::NotConvex(format!(
            "Euler characteristic is {euler}, expected 2"
        )));
    }
    Ok(())
}

fn euler(vertices: usize, edges: usize, faces: usize) -> i64 {
    vertices as i64 - edges as i64 + faces as i64
}

// =============================================================================
// POLYHEDRON QUERIES
// =============================================================================

impl Polyhedron {
    /// Number of faces each directed edge `(from, to)` appears in.
    ///
    /// For a valid polyhedron every count is 1.
    pub fn directed_edge_counts(&self) -> HashMap<(usize, usize), usize> {
        directed_edge_counts(&self.faces)
    }

    /// Distinct undirected edges as `(min, max)` index pairs.
    pub fn undirected_edges(&self) -> BTreeSet<(usize, usize)> {
        undirected_edges(&self.faces)
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.undirected_edges().len()
    }

    /// `V - E + F`; 2 for every convex polyhedron.
    pub fn euler_characteristic(&self) -> i64 {
        euler(self.vertex_count(), self.edge_count(), self.face_count())
    }

    /// Verifies face indices, edge pairing and Euler's formula.
    pub fn validate(&self) -> GeometryResult<()> {
        check_faces(&self.faces, self.vertices.len())?;
        check_closed(&self.faces, self.vertices.len())
    }
}
