//! # Simulation
//!
//! An ordered list of bodies advanced one tick at a time.
//!
//! A tick has two phases:
//!
//! 1. **Step**: every body rotates, translates and bounces off the walls.
//!    Each body only touches its own state, so with the `parallel` feature
//!    the bodies step on the rayon pool.
//! 2. **Collide**: every unordered pair `(i, j)` with `i < j` is resolved
//!    once, sequentially and in index order. A body can take part in
//!    several collisions per tick, and later pairs see the velocities left
//!    by earlier ones.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use log::trace;

use crate::body::RigidBody;

/// Bodies moving together in one box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Simulation {
    bodies: Vec<RigidBody>,
    tick: u64,
}

impl Simulation {
    /// Creates an empty simulation at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a body; its index is the current body count.
    pub fn add_body(&mut self, body: RigidBody) {
        self.bodies.push(body);
    }

    /// Bodies in insertion order.
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True when there are no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of ticks advanced so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Steps every body, then resolves every pair of bodies once.
    ///
    /// Returns the number of pairs that bounced.
    pub fn advance_one_tick(&mut self) -> usize {
        #[cfg(feature = "parallel")]
        self.bodies.par_iter_mut().for_each(RigidBody::step);

        #[cfg(not(feature = "parallel"))]
        self.bodies.iter_mut().for_each(RigidBody::step);

        let mut collisions = 0;
        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let body = &mut head[i];
            for (offset, other) in tail.iter_mut().enumerate() {
                if body.collide(other) {
                    trace!("tick {}: bodies {} and {} bounced", self.tick, i, i + 1 + offset);
                    collisions += 1;
                }
            }
        }

        self.tick += 1;
        collisions
    }

    /// Bodies sorted far to near (ascending center z), the order a painter
    /// draws them in.
    pub fn back_to_front(&self) -> Vec<&RigidBody> {
        let mut sorted: Vec<&RigidBody> = self.bodies.iter().collect();
        sorted.sort_by(|a, b| a.depth_order(b));
        sorted
    }
}
