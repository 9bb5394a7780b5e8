//! Thin wrapper around `glam::DVec3` / `glam::DMat3` shared across modules.
//!
//! Every function here is pure: operands are `Copy` values and a new value
//! is returned. Matrices act on column vectors (`m * v`), and the rotation
//! constructors are active right-hand-rule rotations, i.e. applying one to
//! a vector rotates the vector within a fixed coordinate frame.

pub use glam::DMat3 as Mat3;
pub use glam::DVec3 as Vec3;

// =============================================================================
// VECTOR OPERATIONS
// =============================================================================

/// Adds two vectors.
pub fn add(u: Vec3, v: Vec3) -> Vec3 {
    u + v
}

/// Subtracts `v` from `u`.
///
/// # Examples
/// ```
/// use polyhedra::core::vec3::{subtract, Vec3};
/// assert_eq!(subtract(Vec3::new(3.0, 2.0, 1.0), Vec3::ONE), Vec3::new(2.0, 1.0, 0.0));
/// ```
pub fn subtract(u: Vec3, v: Vec3) -> Vec3 {
    u - v
}

/// Multiplies a vector by a scalar.
pub fn scale(s: f64, v: Vec3) -> Vec3 {
    v * s
}

/// Dot product.
pub fn dot(u: Vec3, v: Vec3) -> f64 {
    u.dot(v)
}

/// Cross product, `u × v`.
///
/// # Examples
/// ```
/// use polyhedra::core::vec3::{cross, Vec3};
/// assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
/// ```
pub fn cross(u: Vec3, v: Vec3) -> Vec3 {
    u.cross(v)
}

/// Euclidean length.
pub fn magnitude(v: Vec3) -> f64 {
    v.length()
}

/// The vector scaled to unit length.
///
/// A zero vector yields non-finite components; callers rule that out.
pub fn unit(v: Vec3) -> Vec3 {
    v / v.length()
}

/// Angle between two vectors in radians, in `[0, π]`.
///
/// The cosine is clamped so rounding can never push it outside the domain
/// of `acos`.
pub fn angle(u: Vec3, v: Vec3) -> f64 {
    (dot(u, v) / magnitude(u) / magnitude(v))
        .clamp(-1.0, 1.0)
        .acos()
}

// =============================================================================
// MATRIX OPERATIONS
// =============================================================================

/// Applies a matrix to a vector.
pub fn matrix_vector(a: Mat3, v: Vec3) -> Vec3 {
    a * v
}

/// Matrix product `b · a` (apply `a` first, then `b`).
pub fn matrix_matrix(b: Mat3, a: Mat3) -> Mat3 {
    b * a
}

/// Transposed matrix. For a rotation this is its inverse.
pub fn transpose(a: Mat3) -> Mat3 {
    a.transpose()
}

// =============================================================================
// ROTATION GENERATORS
// =============================================================================

/// Rotation by `theta` around the x axis.
///
/// ```text
/// | 1    0     0   |
/// | 0   cos  -sin  |
/// | 0   sin   cos  |
/// ```
pub fn rotation_x(theta: f64) -> Mat3 {
    Mat3::from_rotation_x(theta)
}

/// Rotation by `theta` around the y axis.
///
/// ```text
/// |  cos  0   sin |
/// |   0   1    0  |
/// | -sin  0   cos |
/// ```
pub fn rotation_y(theta: f64) -> Mat3 {
    Mat3::from_rotation_y(theta)
}

/// Rotation by `theta` around the z axis.
///
/// # Examples
/// ```
/// use polyhedra::core::vec3::{matrix_vector, rotation_z, Vec3};
/// let v = matrix_vector(rotation_z(std::f64::consts::FRAC_PI_2), Vec3::X);
/// assert!((v - Vec3::Y).length() < 1e-12);
/// ```
pub fn rotation_z(theta: f64) -> Mat3 {
    Mat3::from_rotation_z(theta)
}

/// Rotation by `rho` around the direction with spherical angles
/// `(phi, theta)`.
///
/// `d = Ry(-theta) · Rz(phi)` carries that direction onto the x axis, so
/// the result is `dᵀ · Rx(rho) · d`.
pub fn rotation_about(phi: f64, theta: f64, rho: f64) -> Mat3 {
    let d = matrix_matrix(rotation_y(-theta), rotation_z(phi));
    matrix_matrix(transpose(d), matrix_matrix(rotation_x(rho), d))
}
