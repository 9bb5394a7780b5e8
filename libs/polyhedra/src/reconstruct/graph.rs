//! Index-addressed edge graph used while recovering faces.
//!
//! `nodes[v].edges` lists the neighbors of vertex `v` sorted by signed angle
//! around the radial direction at `v`, each with a flag recording whether
//! the directed edge `v -> neighbor` has been walked. The table lives only
//! for the duration of one reconstruction.

use std::collections::VecDeque;

use config::constants::{EPSILON, MIN_VERTEX_DEGREE};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::vec3::{cross, dot, magnitude, scale, subtract, unit, Vec3};
use crate::error::{GeometryError, GeometryResult};

/// A directed edge leaving a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Edge {
    /// Vertex at the far end.
    pub to: usize,
    /// Signed angle from the node's reference edge, in `[-π, π]`.
    pub angle: f64,
    /// Set once the edge has been walked.
    pub traversed: bool,
}

/// A vertex and its angularly sorted edges.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    pub index: usize,
    pub edges: Vec<Edge>,
}

impl Node {
    /// Finds the edges at vertex `index` and sorts them by angle.
    fn detect(
        index: usize,
        vertices: &[Vec3],
        center: Vec3,
        edge_length: f64,
        tolerance: f64,
    ) -> GeometryResult<Self> {
        let v = vertices[index];
        let radial = unit(subtract(v, center));
        if !radial.is_finite() {
            return Err(GeometryError::NotConvex(format!(
                "vertex {index} coincides with the center"
            )));
        }

        let mut reference: Option<Vec3> = None;
        let mut edges = Vec::new();
        for (other, &w) in vertices.iter().enumerate() {
            if other == index {
                continue;
            }
            let displacement = subtract(w, v);
            let distance = magnitude(displacement);
            if (1.0 - distance / edge_length).abs() >= tolerance {
                continue;
            }
            // Drop the radial component; what is left points along the
            // surface, away from v.
            let tangent = subtract(displacement, scale(dot(displacement, radial), radial));
            if magnitude(tangent) < EPSILON * edge_length {
                return Err(GeometryError::NotConvex(format!(
                    "edge {index} -> {other} runs along the radial direction"
                )));
            }
            let direction = unit(tangent);
            let angle = match reference {
                None => {
                    reference = Some(direction);
                    0.0
                }
                Some(reference) => {
                    let angle = dot(direction, reference).clamp(-1.0, 1.0).acos();
                    if dot(direction, cross(reference, radial)) < 0.0 {
                        -angle
                    } else {
                        angle
                    }
                }
            };
            edges.push(Edge {
                to: other,
                angle,
                traversed: false,
            });
        }
        edges.sort_by(|a, b| a.angle.total_cmp(&b.angle));
        Ok(Self { index, edges })
    }

    /// Marks and follows the first untraversed edge, if any.
    fn take_untraversed(&mut self) -> Option<usize> {
        let edge = self.edges.iter_mut().find(|e| !e.traversed)?;
        edge.traversed = true;
        Some(edge.to)
    }

    /// Having arrived from `last`, marks and follows the edge after the one
    /// leading back to `last` in cyclic angular order.
    fn follow_after(&mut self, last: usize) -> GeometryResult<usize> {
        let arrived = self
            .edges
            .iter()
            .position(|e| e.to == last)
            .ok_or_else(|| GeometryError::BrokenFaceWalk {
                vertex: self.index,
                message: format!("no edge leads back to vertex {last}"),
            })?;
        let outgoing = (arrived + 1) % self.edges.len();
        let edge = &mut self.edges[outgoing];
        if edge.traversed {
            return Err(GeometryError::BrokenFaceWalk {
                vertex: self.index,
                message: format!("edge to vertex {} walked twice", edge.to),
            });
        }
        edge.traversed = true;
        Ok(edge.to)
    }
}

/// Vertex index → angularly sorted edges.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AdjacencyTable {
    nodes: Vec<Node>,
}

impl AdjacencyTable {
    /// Detects and sorts the edges at every vertex.
    ///
    /// Fails if any vertex ends up with fewer than three edges.
    pub fn build(
        vertices: &[Vec3],
        center: Vec3,
        edge_length: f64,
        tolerance: f64,
    ) -> GeometryResult<Self> {
        #[cfg(feature = "parallel")]
        let nodes = (0..vertices.len())
            .into_par_iter()
            .map(|i| Node::detect(i, vertices, center, edge_length, tolerance))
            .collect::<GeometryResult<Vec<_>>>()?;

        #[cfg(not(feature = "parallel"))]
        let nodes = (0..vertices.len())
            .map(|i| Node::detect(i, vertices, center, edge_length, tolerance))
            .collect::<GeometryResult<Vec<_>>>()?;

        if let Some(node) = nodes.iter().find(|n| n.edges.len() < MIN_VERTEX_DEGREE) {
            return Err(GeometryError::IncompleteEdges {
                vertex: node.index,
                edges: node.edges.len(),
                required: MIN_VERTEX_DEGREE,
            });
        }
        Ok(Self { nodes })
    }

    /// Sorted neighbor indices of vertex `v`.
    #[cfg(test)]
    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        self.nodes[v].edges.iter().map(|e| e.to).collect()
    }

    /// Fails unless every vertex is reachable from vertex 0.
    pub fn check_connected(&self) -> GeometryResult<()> {
        let total = self.nodes.len();
        let mut seen = vec![false; total];
        let mut queue = VecDeque::from([0]);
        seen[0] = true;
        let mut reached = 1;
        while let Some(v) = queue.pop_front() {
            for edge in &self.nodes[v].edges {
                if !seen[edge.to] {
                    seen[edge.to] = true;
                    reached += 1;
                    queue.push_back(edge.to);
                }
            }
        }
        if reached != total {
            return Err(GeometryError::Disconnected { reached, total });
        }
        Ok(())
    }

    /// Walks every face, consuming the table.
    pub fn walk_faces(mut self) -> GeometryResult<Vec<Vec<usize>>> {
        let mut faces = Vec::new();
        for start in 0..self.nodes.len() {
            while let Some(mut next) = self.nodes[start].take_untraversed() {
                let mut face = vec![start];
                let mut last = start;
                while next != start {
                    face.push(next);
                    let current = next;
                    next = self.nodes[current].follow_after(last)?;
                    last = current;
                }
                faces.push(face);
            }
        }
        Ok(faces)
    }
}
