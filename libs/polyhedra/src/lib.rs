//! Geometry core of the collidoscope engine.
//!
//! This crate recovers the oriented polygonal faces of a convex equilateral
//! polyhedron from its vertex coordinates alone, and provides the rigid
//! motions (scale, translate, rotate about the own center) the kinematics
//! layer applies every frame.
//!
//! ## Example
//!
//! ```rust
//! use polyhedra::{SolidKind, Vec3};
//!
//! let mut cube = SolidKind::Cube.build().unwrap();
//! assert_eq!(cube.face_count(), 6);
//!
//! cube.set_radius(2.0).unwrap();
//! cube.translate(Vec3::new(1.0, 0.0, 0.0));
//! assert!((cube.radius() - 2.0).abs() < 1e-9);
//! ```

pub mod core;
pub mod error;
pub mod polyhedron;
pub mod reconstruct;
pub mod solids;

pub use crate::core::vec3::{Mat3, Vec3};
pub use error::{GeometryError, GeometryResult};
pub use polyhedron::Polyhedron;
pub use reconstruct::FaceReconstructor;
pub use solids::SolidKind;
