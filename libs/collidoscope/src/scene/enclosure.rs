//! The box the bodies bounce around in.

use polyhedra::{Polyhedron, Vec3};

use crate::error::{SceneError, SceneResult};

/// Corner order: the `+z` square counter-clockwise from `(+,+,+)`, then the
/// `-z` square below it.
const CORNER_SIGNS: [[f64; 3]; 8] = [
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
];

/// Outward-facing walls over [`CORNER_SIGNS`].
const WALLS: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [7, 6, 5, 4],
    [0, 4, 5, 1],
    [1, 5, 6, 2],
    [2, 6, 7, 3],
    [3, 7, 4, 0],
];

/// An origin-centered cuboid whose walls face inward.
#[derive(Debug, Clone, PartialEq)]
pub struct Enclosure {
    cuboid: Polyhedron,
}

impl Enclosure {
    /// Creates a `width × height × depth` box centered on the origin.
    ///
    /// Fails unless every dimension is positive and finite.
    pub fn new(width: f64, height: f64, depth: f64) -> SceneResult<Self> {
        let size = Vec3::new(width, height, depth);
        if !(size.is_finite() && size.min_element() > 0.0) {
            return Err(SceneError::InvalidBox(format!(
                "dimensions must be positive, got {width} x {height} x {depth}"
            )));
        }
        let half = size / 2.0;
        let vertices = CORNER_SIGNS
            .iter()
            .map(|&signs| Vec3::from_array(signs) * half)
            .collect();
        let faces = WALLS.iter().map(|wall| wall.to_vec()).collect();
        let mut cuboid = Polyhedron::with_faces(vertices, faces)?;
        cuboid.turn_inside_out();
        Ok(Self { cuboid })
    }

    /// The corner with all positive components: the half extents.
    pub fn extent(&self) -> Vec3 {
        self.cuboid.vertex(0).unwrap_or(Vec3::ZERO)
    }

    /// The walls as a polyhedron, normals pointing into the box.
    pub fn walls(&self) -> &Polyhedron {
        &self.cuboid
    }

    /// True when `point` is strictly inside the box.
    pub fn contains(&self, point: Vec3) -> bool {
        point.abs().cmplt(self.extent()).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyhedra::core::vec3::dot;

    #[test]
    fn extent_is_half_the_size() {
        let enclosure = Enclosure::new(640.0, 480.0, 240.0).unwrap();
        assert_eq!(enclosure.extent(), Vec3::new(320.0, 240.0, 120.0));
    }

    #[test]
    fn walls_face_inward() {
        let enclosure = Enclosure::new(4.0, 6.0, 8.0).unwrap();
        let walls = enclosure.walls();
        assert_eq!(walls.face_count(), 6);
        for i in 0..walls.face_count() {
            let face = walls.face(i).unwrap();
            let normal = walls.face_normal(i).unwrap();
            assert!(dot(normal, face[0]) < 0.0, "wall {i} faces outward");
        }
        assert!(walls.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_boxes() {
        assert!(matches!(
            Enclosure::new(0.0, 1.0, 1.0),
            Err(SceneError::InvalidBox(_))
        ));
        assert!(Enclosure::new(1.0, -1.0, 1.0).is_err());
        assert!(Enclosure::new(1.0, 1.0, f64::NAN).is_err());
        assert!(Enclosure::new(f64::INFINITY, 1.0, 1.0).is_err());
    }

    #[test]
    fn contains_is_strict() {
        let enclosure = Enclosure::new(2.0, 2.0, 2.0).unwrap();
        assert!(enclosure.contains(Vec3::new(0.5, -0.5, 0.9)));
        assert!(!enclosure.contains(Vec3::new(1.0, 0.0, 0.0)));
        assert!(!enclosure.contains(Vec3::new(0.0, 0.0, -1.5)));
    }
}
