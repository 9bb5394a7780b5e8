//! Coordinate permutations and sign combinations of 3D points.
//!
//! Vertex sets of the Platonic and Archimedean solids are orbits of a few
//! seed points under these operations. "Even"/"odd" refer to the parity of
//! a permutation, or to the number of plus signs in a sign combination.
//! The sign helpers other than [`all_pluses`] assume no zero components.

use crate::core::vec3::Vec3;

/// The golden ratio, `(1 + √5) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// The cyclic (even) permutations of the components.
pub fn even_permutations(v: Vec3) -> Vec<Vec3> {
    vec![
        Vec3::new(v.x, v.y, v.z),
        Vec3::new(v.z, v.x, v.y),
        Vec3::new(v.y, v.z, v.x),
    ]
}

/// The transposition (odd) permutations of the components.
pub fn odd_permutations(v: Vec3) -> Vec<Vec3> {
    vec![
        Vec3::new(v.x, v.z, v.y),
        Vec3::new(v.z, v.y, v.x),
        Vec3::new(v.y, v.x, v.z),
    ]
}

/// All six permutations, even ones first.
pub fn all_permutations(v: Vec3) -> Vec<Vec3> {
    let mut all = even_permutations(v);
    all.extend(odd_permutations(v));
    all
}

/// Sign combinations with an even number of plus signs.
pub fn even_pluses(v: Vec3) -> Vec<Vec3> {
    vec![
        Vec3::new(v.x, v.y, -v.z),
        Vec3::new(v.x, -v.y, v.z),
        Vec3::new(-v.x, v.y, v.z),
        Vec3::new(-v.x, -v.y, -v.z),
    ]
}

/// Sign combinations with an odd number of plus signs.
pub fn odd_pluses(v: Vec3) -> Vec<Vec3> {
    vec![
        Vec3::new(v.x, v.y, v.z),
        Vec3::new(v.x, -v.y, -v.z),
        Vec3::new(-v.x, v.y, -v.z),
        Vec3::new(-v.x, -v.y, v.z),
    ]
}

/// Every sign combination. A zero component is not duplicated, so a point
/// with `k` zero components yields `2^(3-k)` points.
///
/// # Examples
/// ```
/// use polyhedra::solids::permutations::all_pluses;
/// use polyhedra::Vec3;
///
/// assert_eq!(all_pluses(Vec3::ONE).len(), 8);
/// assert_eq!(all_pluses(Vec3::new(1.0, 1.0, 0.0)).len(), 4);
/// assert_eq!(all_pluses(Vec3::ZERO).len(), 1);
/// ```
pub fn all_pluses(v: Vec3) -> Vec<Vec3> {
    let signs = |c: f64| if c == 0.0 { vec![c] } else { vec![c, -c] };
    let mut points = Vec::with_capacity(8);
    for x in signs(v.x) {
        for y in signs(v.y) {
            for z in signs(v.z) {
                points.push(Vec3::new(x, y, z));
            }
        }
    }
    points
}

/// Applies `permute` to every seed, then `signs` to every permuted point.
pub fn orbit(
    seeds: &[Vec3],
    permute: fn(Vec3) -> Vec<Vec3>,
    signs: fn(Vec3) -> Vec<Vec3>,
) -> Vec<Vec3> {
    seeds
        .iter()
        .flat_map(|&seed| permute(seed))
        .flat_map(signs)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phi_is_golden() {
        assert!((PHI * PHI - PHI - 1.0).abs() < 1e-15);
    }

    #[test]
    fn permutations_cover_all_orders() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let all = all_permutations(v);
        assert_eq!(all.len(), 6);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(even_permutations(v)[1], Vec3::new(3.0, 1.0, 2.0));
        assert_eq!(odd_permutations(v)[0], Vec3::new(1.0, 3.0, 2.0));
    }

    /// Even and odd plus counts split the 8 sign combinations in half.
    #[test]
    fn even_and_odd_pluses_partition_signs() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let mut both = even_pluses(v);
        both.extend(odd_pluses(v));
        let mut all = all_pluses(v);
        let key = |p: &Vec3| (p.x as i64, p.y as i64, p.z as i64);
        both.sort_by_key(key);
        all.sort_by_key(key);
        assert_eq!(both, all);
    }

    #[test]
    fn odd_pluses_keep_identity_first() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(odd_pluses(v)[0], v);
        assert!(even_pluses(v).iter().all(|p| p.x * p.y * p.z < 0.0));
    }

    #[test]
    fn orbit_composes_permutations_and_signs() {
        let points = orbit(&[Vec3::new(0.0, 1.0, 2.0)], all_permutations, all_pluses);
        assert_eq!(points.len(), 24);
    }
}
