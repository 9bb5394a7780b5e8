//! # Rigid Body
//!
//! A polyhedron that moves: every step it turns by a fixed rotation about
//! its own center, drifts by a fixed velocity, and bounces off the walls of
//! an axis-aligned box `[-limit, limit]`. Two bodies bounce off each other
//! as equal-mass spheres.
//!
//! ## Collision radius
//!
//! Two convex solids touch at a center distance somewhere between their
//! inradii and circumradii. Bodies use a shrunken sphere of radius
//! `R·(√n - 1)/√n` for `n` vertices: a tetrahedron's is half its
//! circumradius, a snub dodecahedron's nearly all of it.
//!
//! ## Example
//!
//! ```rust
//! use collidoscope::RigidBody;
//! use polyhedra::{SolidKind, Vec3};
//!
//! let mut body = RigidBody::new(SolidKind::Cube.build().unwrap());
//! body.set_velocity(Vec3::new(0.5, 0.0, 0.0), Vec3::splat(10.0));
//! body.step();
//! assert_eq!(body.position(), Vec3::new(0.5, 0.0, 0.0));
//! ```

use std::cmp::Ordering;

use log::trace;
use polyhedra::core::vec3::{add, dot, magnitude, scale, subtract};
use polyhedra::{Mat3, Polyhedron, Vec3};

// =============================================================================
// RIGID BODY
// =============================================================================

/// A polyhedron with a per-step spin and velocity, confined to a box.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    polyhedron: Polyhedron,
    /// Rotation applied about the center every step.
    rotation: Option<Mat3>,
    /// Displacement per step.
    velocity: Vec3,
    /// Positive corner of the box; `None` until a velocity is set.
    limit: Option<Vec3>,
}

impl RigidBody {
    /// Wraps a polyhedron in a body that neither spins nor moves.
    pub fn new(polyhedron: Polyhedron) -> Self {
        Self {
            polyhedron,
            rotation: None,
            velocity: Vec3::ZERO,
            limit: None,
        }
    }

    /// Sets the rotation performed about the center on every step.
    pub fn set_rotation(&mut self, rotation: Mat3) {
        self.rotation = Some(rotation);
    }

    /// Sets the displacement per step and the box the body bounces in.
    ///
    /// `limit` is the positive corner of the box; the walls sit at
    /// `±limit` on each axis.
    pub fn set_velocity(&mut self, velocity: Vec3, limit: Vec3) {
        self.velocity = velocity;
        self.limit = Some(limit);
    }

    /// Moves the body one step: rotate, translate, then bounce off the
    /// walls.
    ///
    /// Translation and wall reflection only happen once a velocity has
    /// been set.
    pub fn step(&mut self) {
        if let Some(rotation) = self.rotation {
            self.polyhedron.rotate(rotation);
        }
        if self.limit.is_some() {
            self.polyhedron.translate(self.velocity);
            self.trap();
        }
    }

    /// Reflects the velocity off any wall the body has crossed.
    ///
    /// For each axis the vertices are scanned in index order. At the first
    /// vertex beyond `+limit` (or below `-limit`) the velocity component
    /// on that axis is negated if it still points outward, and the scan of
    /// that axis ends.
    pub fn trap(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        for axis in 0..3 {
            let max = limit[axis];
            for vertex in self.polyhedron.vertices() {
                if vertex[axis] > max {
                    if self.velocity[axis] > 0.0 {
                        self.velocity[axis] = -self.velocity[axis];
                    }
                    break;
                } else if vertex[axis] < -max {
                    if self.velocity[axis] < 0.0 {
                        self.velocity[axis] = -self.velocity[axis];
                    }
                    break;
                }
            }
        }
    }

    /// Radius of the sphere used for body-body collisions.
    pub fn collision_radius(&self) -> f64 {
        let root_n = (self.polyhedron.vertex_count() as f64).sqrt();
        self.polyhedron.radius() * (root_n - 1.0) / root_n
    }

    /// Bounces two bodies off each other if they overlap and are closing.
    ///
    /// The velocity components along the line of centers are exchanged,
    /// the perpendicular components are kept: an elastic collision of
    /// equal masses. Returns whether the bodies bounced.
    pub fn collide(&mut self, other: &mut RigidBody) -> bool {
        let displacement = subtract(other.position(), self.position());
        let distance = magnitude(displacement);
        if distance >= self.collision_radius() + other.collision_radius() {
            return false;
        }
        let closing = subtract(other.velocity, self.velocity);
        if dot(closing, displacement) >= 0.0 {
            return false;
        }

        let direction = scale(1.0 / distance, displacement);
        let along = scale(dot(direction, self.velocity), direction);
        let other_along = scale(dot(direction, other.velocity), direction);
        self.velocity = add(subtract(self.velocity, along), other_along);
        other.velocity = add(subtract(other.velocity, other_along), along);

        trace!(
            "collision at distance {:.3}: exchanged {:.3} and {:.3}",
            distance,
            magnitude(along),
            magnitude(other_along)
        );
        true
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The moving polyhedron.
    pub fn polyhedron(&self) -> &Polyhedron {
        &self.polyhedron
    }

    /// Center of the body.
    pub fn position(&self) -> Vec3 {
        self.polyhedron.position()
    }

    /// Displacement per step.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Rotation per step, if the body spins.
    pub fn rotation(&self) -> Option<Mat3> {
        self.rotation
    }

    /// Positive corner of the box, once a velocity is set.
    pub fn limit(&self) -> Option<Vec3> {
        self.limit
    }

    /// Orders bodies far to near for an observer at large z.
    pub fn depth_order(&self, other: &RigidBody) -> Ordering {
        self.position().z.total_cmp(&other.position().z)
    }
}

#[cfg(test)]
mod tests;
