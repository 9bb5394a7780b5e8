//! Tests for rigid-body stepping, wall reflection and collisions.

use super::*;
use approx::assert_abs_diff_eq;
use polyhedra::core::vec3::{rotation_z, transpose};
use polyhedra::SolidKind;

fn cube_body() -> RigidBody {
    RigidBody::new(SolidKind::Cube.build().unwrap())
}

/// A cube whose collision radius is exactly 1: `R·(√8 - 1)/√8 = 1`.
fn unit_collision_cube(center: Vec3, velocity: Vec3) -> RigidBody {
    let mut polyhedron = SolidKind::Cube.build().unwrap();
    let root8 = 8f64.sqrt();
    polyhedron.set_radius(root8 / (root8 - 1.0)).unwrap();
    polyhedron.translate(center);
    let mut body = RigidBody::new(polyhedron);
    body.set_velocity(velocity, Vec3::splat(100.0));
    body
}

fn assert_vec_eq(actual: Vec3, expected: Vec3) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-12);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-12);
    assert_abs_diff_eq!(actual.z, expected.z, epsilon = 1e-12);
}

// =============================================================================
// STEPPING
// =============================================================================

#[test]
fn new_body_stays_put() {
    let mut body = cube_body();
    let before = body.clone();
    body.step();
    assert_eq!(body, before);
    assert_eq!(body.velocity(), Vec3::ZERO);
    assert_eq!(body.limit(), None);
    assert_eq!(body.rotation(), None);
}

#[test]
fn step_rotates_about_center() {
    let mut body = cube_body();
    body.set_velocity(Vec3::new(0.25, 0.0, 0.0), Vec3::splat(50.0));
    body.set_rotation(rotation_z(0.3));
    body.step();
    assert_vec_eq(body.position(), Vec3::new(0.25, 0.0, 0.0));
    assert_abs_diff_eq!(body.polyhedron().radius(), 3f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn rotation_and_inverse_cancel_over_steps() {
    let mut body = cube_body();
    let original = body.clone();
    let spin = rotation_z(0.7);
    body.set_rotation(spin);
    body.step();
    body.set_rotation(transpose(spin));
    body.step();
    for (a, e) in body
        .polyhedron()
        .vertices()
        .iter()
        .zip(original.polyhedron().vertices())
    {
        assert_vec_eq(*a, *e);
    }
}

#[test]
fn step_translates_by_velocity() {
    let mut body = cube_body();
    let v = Vec3::new(0.1, -0.2, 0.3);
    body.set_velocity(v, Vec3::splat(100.0));
    for _ in 0..10 {
        body.step();
    }
    assert_vec_eq(body.position(), v * 10.0);
    assert_eq!(body.velocity(), v);
}

// =============================================================================
// WALL REFLECTION
// =============================================================================

#[test]
fn crossing_x_wall_reverses_x_only() {
    let mut body = cube_body();
    // Cube vertices reach ±1; the wall is at x = 2.
    body.set_velocity(Vec3::new(0.6, 0.0, 0.0), Vec3::new(2.0, 10.0, 10.0));
    body.step();
    assert_eq!(body.velocity(), Vec3::new(0.6, 0.0, 0.0));
    body.step();
    // Center at 1.2, far vertices at 2.2 > 2.
    assert_eq!(body.velocity(), Vec3::new(-0.6, 0.0, 0.0));
}

#[test]
fn trap_leaves_other_components_alone() {
    let mut body = cube_body();
    body.set_velocity(Vec3::new(0.75, 0.25, -0.125), Vec3::new(1.5, 10.0, 10.0));
    body.step();
    assert_eq!(body.velocity(), Vec3::new(-0.75, 0.25, -0.125));
}

#[test]
fn trap_does_not_reflect_inward_motion() {
    let mut polyhedron = SolidKind::Cube.build().unwrap();
    polyhedron.translate(Vec3::new(1.5, 0.0, 0.0));
    let mut body = RigidBody::new(polyhedron);
    body.set_velocity(Vec3::new(-0.1, 0.0, 0.0), Vec3::splat(2.0));
    body.trap();
    assert_eq!(body.velocity(), Vec3::new(-0.1, 0.0, 0.0));
}

#[test]
fn trap_reflects_off_negative_wall() {
    let mut polyhedron = SolidKind::Cube.build().unwrap();
    polyhedron.translate(Vec3::new(0.0, 0.0, -1.5));
    let mut body = RigidBody::new(polyhedron);
    body.set_velocity(Vec3::new(0.0, 0.0, -0.1), Vec3::splat(2.0));
    body.trap();
    assert_eq!(body.velocity(), Vec3::new(0.0, 0.0, 0.1));
}

#[test]
fn trap_reflects_every_crossed_axis() {
    let mut polyhedron = SolidKind::Cube.build().unwrap();
    polyhedron.translate(Vec3::new(1.5, -1.5, 1.5));
    let mut body = RigidBody::new(polyhedron);
    body.set_velocity(Vec3::new(1.0, -1.0, 1.0), Vec3::splat(2.0));
    body.trap();
    assert_eq!(body.velocity(), Vec3::new(-1.0, 1.0, -1.0));
}

/// Scanning stops at the first offending vertex on an axis, so a vertex
/// over the upper wall hides a later one under the lower wall.
#[test]
fn trap_stops_at_first_offending_vertex() {
    let mut body = cube_body();
    // Vertex 0 is (1, 1, 1), over the x wall; (-1, ..) vertices are under.
    body.set_velocity(Vec3::new(-0.1, 0.0, 0.0), Vec3::new(0.5, 10.0, 10.0));
    body.trap();
    assert_eq!(body.velocity(), Vec3::new(-0.1, 0.0, 0.0));
}

#[test]
fn trap_without_limit_is_a_no_op() {
    let mut body = cube_body();
    body.trap();
    assert_eq!(body.velocity(), Vec3::ZERO);
}

// =============================================================================
// COLLISIONS
// =============================================================================

#[test]
fn collision_radius_shrinks_circumradius() {
    let tetra = RigidBody::new(SolidKind::Tetrahedron.build().unwrap());
    assert_abs_diff_eq!(
        tetra.collision_radius(),
        tetra.polyhedron().radius() / 2.0,
        epsilon = 1e-12
    );
    let body = unit_collision_cube(Vec3::ZERO, Vec3::ZERO);
    assert_abs_diff_eq!(body.collision_radius(), 1.0, epsilon = 1e-12);
}

#[test]
fn head_on_collision_reverses_velocities() {
    let mut a = unit_collision_cube(Vec3::new(-0.5, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    let mut b = unit_collision_cube(Vec3::new(0.5, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
    assert!(a.collide(&mut b));
    assert_vec_eq(a.velocity(), Vec3::new(-1.0, 0.0, 0.0));
    assert_vec_eq(b.velocity(), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn separating_bodies_do_not_bounce() {
    let mut a = unit_collision_cube(Vec3::new(-0.5, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
    let mut b = unit_collision_cube(Vec3::new(0.5, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    assert!(!a.collide(&mut b));
    assert_eq!(a.velocity(), Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(b.velocity(), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn distant_bodies_do_not_bounce() {
    let mut a = unit_collision_cube(Vec3::new(-1.5, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    let mut b = unit_collision_cube(Vec3::new(1.5, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
    assert!(!a.collide(&mut b));
    assert_eq!(a.velocity(), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn glancing_collision_keeps_perpendicular_components() {
    let mut a = unit_collision_cube(Vec3::new(-0.5, 0.0, 0.0), Vec3::new(1.0, 0.5, 0.0));
    let mut b = unit_collision_cube(Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 0.0, -0.25));
    assert!(a.collide(&mut b));
    assert_vec_eq(a.velocity(), Vec3::new(0.0, 0.5, 0.0));
    assert_vec_eq(b.velocity(), Vec3::new(1.0, 0.0, -0.25));
}

#[test]
fn collision_conserves_momentum_and_energy() {
    let mut a = unit_collision_cube(Vec3::new(-0.3, 0.2, 0.1), Vec3::new(0.7, -0.1, 0.4));
    let mut b = unit_collision_cube(Vec3::new(0.4, -0.1, 0.3), Vec3::new(-0.2, 0.3, -0.5));
    let momentum = a.velocity() + b.velocity();
    let energy = a.velocity().length_squared() + b.velocity().length_squared();
    assert!(a.collide(&mut b));
    assert_vec_eq(a.velocity() + b.velocity(), momentum);
    assert_abs_diff_eq!(
        a.velocity().length_squared() + b.velocity().length_squared(),
        energy,
        epsilon = 1e-12
    );
}

#[test]
fn depth_order_sorts_far_to_near() {
    let near = unit_collision_cube(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    let far = unit_collision_cube(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO);
    assert_eq!(far.depth_order(&near), Ordering::Less);
    assert_eq!(near.depth_order(&far), Ordering::Greater);
    assert_eq!(near.depth_order(&near), Ordering::Equal);
}
