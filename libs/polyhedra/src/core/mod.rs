//! Core value types shared by the geometry modules.
//!
//! Includes the vector and matrix aliases (`Vec3`, `Mat3`) and the pure
//! functions operating on them.

pub mod vec3;
