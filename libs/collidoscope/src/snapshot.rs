//! Plain-data view of one frame, for renderers outside the crate.
//!
//! Bodies appear back to front, so drawing them in order paints nearer
//! solids over farther ones. Coordinates serialize as `[x, y, z]` arrays.

use polyhedra::Vec3;
use serde::{Deserialize, Serialize};

use crate::body::RigidBody;
use crate::scene::Scene;

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Ticks advanced before this frame.
    pub tick: u64,
    /// Positive corner of the box.
    pub extent: Vec3,
    /// Bodies, farthest first.
    pub bodies: Vec<BodySnapshot>,
}

/// One body's drawable geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    /// Center of the body.
    pub position: Vec3,
    /// Face polygons, vertices counter-clockwise as seen from outside.
    pub faces: Vec<Vec<Vec3>>,
    /// Unnormalized outward normal of each face.
    pub normals: Vec<Vec3>,
}

impl FrameSnapshot {
    /// Captures the current state of `scene`.
    pub fn capture(scene: &Scene) -> Self {
        let simulation = scene.simulation();
        Self {
            tick: simulation.tick(),
            extent: scene.enclosure().extent(),
            bodies: simulation
                .back_to_front()
                .into_iter()
                .map(BodySnapshot::from)
                .collect(),
        }
    }
}

impl From<&RigidBody> for BodySnapshot {
    fn from(body: &RigidBody) -> Self {
        let polyhedron = body.polyhedron();
        let count = polyhedron.face_count();
        Self {
            position: body.position(),
            faces: (0..count).filter_map(|i| polyhedron.face(i)).collect(),
            normals: (0..count).filter_map(|i| polyhedron.face_normal(i)).collect(),
        }
    }
}
