//! # Solids
//!
//! Vertex generators for the Platonic and Archimedean solids, and a
//! registry from solid tag to generator.
//!
//! A generator is a pure function producing origin-centered vertices;
//! [`SolidKind::build`] hands them to the face reconstructor.
//!
//! ```text
//!                                  faces with n sides   n sides
//!                         vertices   3  4  5  6  8 10  at vertex
//!                               --  -- -- -- -- -- --  ---------
//! Tetrahedron                    4   4                 3,3,3
//! Cube                           8      6              4,4,4
//! Octahedron                     6   8                 3,3,3,3
//! Dodecahedron                  20        12           5,5,5
//! Icosahedron                   12  20                 3,3,3,3,3
//! TruncatedTetrahedron          12   4        4        3,6,6
//! TruncatedCube                 24   8           6     3,8,8
//! TruncatedOctahedron           24      6     8        4,6,6
//! TruncatedDodecahedron         60  20             12  3,10,10
//! TruncatedIcosahedron          60        12 20        5,6,6
//! Cuboctahedron                 12   8  6              3,4,3,4
//! Icosidodecahedron             30  20    12           3,5,3,5
//! TruncatedCuboctahedron        48     12    8   6     4,6,8
//! TruncatedIcosidodecahedron   120     30    20    12  4,6,10
//! Rhombicuboctahedron           24   8 18              3,4,4,4
//! Rhombicosidodecahedron        60  20 30 12           3,4,5,4
//! SnubCube                      24  32  6              3,3,3,3,4
//! SnubDodecahedron              60  80    12           3,3,3,3,5
//! ```

pub mod permutations;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::vec3::Vec3;
use crate::error::GeometryResult;
use crate::polyhedron::Polyhedron;

use permutations::{
    all_permutations, all_pluses, even_permutations, even_pluses, odd_permutations, odd_pluses,
    orbit, PHI,
};

/// Returned when a tag names no known solid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown solid '{0}'")]
pub struct UnknownSolid(pub String);

/// The convex equilateral solids this crate can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SolidKind {
    Tetrahedron,
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
    TruncatedTetrahedron,
    TruncatedCube,
    TruncatedOctahedron,
    TruncatedDodecahedron,
    TruncatedIcosahedron,
    Cuboctahedron,
    Icosidodecahedron,
    TruncatedCuboctahedron,
    TruncatedIcosidodecahedron,
    Rhombicuboctahedron,
    Rhombicosidodecahedron,
    SnubCube,
    SnubDodecahedron,
}

impl SolidKind {
    /// The five Platonic solids.
    pub const PLATONIC: [SolidKind; 5] = [
        SolidKind::Tetrahedron,
        SolidKind::Cube,
        SolidKind::Octahedron,
        SolidKind::Dodecahedron,
        SolidKind::Icosahedron,
    ];

    /// The thirteen Archimedean solids.
    pub const ARCHIMEDEAN: [SolidKind; 13] = [
        SolidKind::TruncatedTetrahedron,
        SolidKind::TruncatedCube,
        SolidKind::TruncatedOctahedron,
        SolidKind::TruncatedDodecahedron,
        SolidKind::TruncatedIcosahedron,
        SolidKind::Cuboctahedron,
        SolidKind::TruncatedCuboctahedron,
        SolidKind::Rhombicuboctahedron,
        SolidKind::Icosidodecahedron,
        SolidKind::TruncatedIcosidodecahedron,
        SolidKind::Rhombicosidodecahedron,
        SolidKind::SnubCube,
        SolidKind::SnubDodecahedron,
    ];

    /// Every solid, Platonic first.
    pub fn all() -> impl Iterator<Item = SolidKind> {
        Self::PLATONIC.into_iter().chain(Self::ARCHIMEDEAN)
    }

    /// Kebab-case tag, e.g. `"truncated-icosahedron"`.
    pub fn name(self) -> &'static str {
        match self {
            SolidKind::Tetrahedron => "tetrahedron",
            SolidKind::Cube => "cube",
            SolidKind::Octahedron => "octahedron",
            SolidKind::Dodecahedron => "dodecahedron",
            SolidKind::Icosahedron => "icosahedron",
            SolidKind::TruncatedTetrahedron => "truncated-tetrahedron",
            SolidKind::TruncatedCube => "truncated-cube",
            SolidKind::TruncatedOctahedron => "truncated-octahedron",
            SolidKind::TruncatedDodecahedron => "truncated-dodecahedron",
            SolidKind::TruncatedIcosahedron => "truncated-icosahedron",
            SolidKind::Cuboctahedron => "cuboctahedron",
            SolidKind::Icosidodecahedron => "icosidodecahedron",
            SolidKind::TruncatedCuboctahedron => "truncated-cuboctahedron",
            SolidKind::TruncatedIcosidodecahedron => "truncated-icosidodecahedron",
            SolidKind::Rhombicuboctahedron => "rhombicuboctahedron",
            SolidKind::Rhombicosidodecahedron => "rhombicosidodecahedron",
            SolidKind::SnubCube => "snub-cube",
            SolidKind::SnubDodecahedron => "snub-dodecahedron",
        }
    }

    /// Origin-centered vertices of the solid.
    pub fn vertices(self) -> Vec<Vec3> {
        let v = Vec3::new;
        match self {
            SolidKind::Tetrahedron => odd_pluses(Vec3::ONE),
            SolidKind::Cube => all_pluses(Vec3::ONE),
            SolidKind::Octahedron => orbit(&[Vec3::X], even_permutations, all_pluses),
            SolidKind::Dodecahedron => {
                let mut points = orbit(&[v(0.0, 1.0 / PHI, PHI)], even_permutations, all_pluses);
                points.extend(all_pluses(Vec3::ONE));
                points
            }
            SolidKind::Icosahedron => orbit(&[v(0.0, 1.0, PHI)], even_permutations, all_pluses),
            SolidKind::TruncatedTetrahedron => {
                orbit(&[v(3.0, 1.0, 1.0)], even_permutations, odd_pluses)
            }
            SolidKind::TruncatedCube => orbit(
                &[v(2f64.sqrt() - 1.0, 1.0, 1.0)],
                even_permutations,
                all_pluses,
            ),
            SolidKind::TruncatedOctahedron => {
                orbit(&[v(0.0, 1.0, 2.0)], all_permutations, all_pluses)
            }
            SolidKind::TruncatedDodecahedron => orbit(
                &[
                    v(0.0, 1.0 / PHI, 2.0 + PHI),
                    v(1.0 / PHI, PHI, 2.0 * PHI),
                    v(PHI, 2.0, PHI * PHI),
                ],
                even_permutations,
                all_pluses,
            ),
            SolidKind::TruncatedIcosahedron => orbit(
                &[
                    v(0.0, 1.0, 3.0 * PHI),
                    v(2.0, 1.0 + 2.0 * PHI, PHI),
                    v(1.0, 2.0 + PHI, 2.0 * PHI),
                ],
                even_permutations,
                all_pluses,
            ),
            SolidKind::Cuboctahedron => orbit(&[v(1.0, 1.0, 0.0)], even_permutations, all_pluses),
            SolidKind::Icosidodecahedron => orbit(
                &[v(0.0, 0.0, PHI), v(0.5, PHI / 2.0, (1.0 + PHI) / 2.0)],
                even_permutations,
                all_pluses,
            ),
            SolidKind::TruncatedCuboctahedron => {
                let root2 = 2f64.sqrt();
                orbit(
                    &[v(1.0, 1.0 + root2, 1.0 + 2.0 * root2)],
                    all_permutations,
                    all_pluses,
                )
            }
            SolidKind::TruncatedIcosidodecahedron => orbit(
                &[
                    v(1.0 / PHI, 1.0 / PHI, 3.0 + PHI),
                    v(2.0 / PHI, PHI, 1.0 + 2.0 * PHI),
                    v(1.0 / PHI, PHI * PHI, -1.0 + 3.0 * PHI),
                    v(-1.0 + 2.0 * PHI, 2.0, 2.0 + PHI),
                    v(PHI, 3.0, 2.0 * PHI),
                ],
                even_permutations,
                all_pluses,
            ),
            SolidKind::Rhombicuboctahedron => orbit(
                &[v(1.0 + 2f64.sqrt(), 1.0, 1.0)],
                even_permutations,
                all_pluses,
            ),
            SolidKind::Rhombicosidodecahedron => {
                let phi2 = PHI * PHI;
                orbit(
                    &[
                        v(phi2 * PHI, 1.0, 1.0),
                        v(phi2, PHI, 2.0 * PHI),
                        v(2.0 + PHI, 0.0, phi2),
                    ],
                    even_permutations,
                    all_pluses,
                )
            }
            SolidKind::SnubCube => snub_cube(),
            SolidKind::SnubDodecahedron => snub_dodecahedron(),
        }
    }

    /// Generates the vertices and recovers the faces.
    pub fn build(self) -> GeometryResult<Polyhedron> {
        Polyhedron::equilateral(self.vertices())
    }
}

/// Chiral: one handedness of sign choices per permutation parity.
fn snub_cube() -> Vec<Vec3> {
    // Reciprocal of the tribonacci constant.
    let eta = ((17.0 + 297f64.sqrt()).cbrt() - (-17.0 + 297f64.sqrt()).cbrt() - 1.0) / 3.0;
    let seed = Vec3::new(1.0, eta, 1.0 / eta);
    let mut points = orbit(&[seed], even_permutations, even_pluses);
    points.extend(orbit(&[seed], odd_permutations, odd_pluses));
    points
}

fn snub_dodecahedron() -> Vec<Vec3> {
    let p = PHI;
    let t = (p - 5.0 / 27.0).sqrt() / 2.0;
    let eta = (p / 2.0 + t).cbrt() + (p / 2.0 - t).cbrt();
    let a = eta - 1.0 / eta;
    let b = eta * p + p * p + p / eta;
    orbit(
        &[
            Vec3::new(2.0 * a, 2.0, 2.0 * b),
            Vec3::new(a + b / p + p, -a * p + b + 1.0 / p, a / p + b * p - 1.0),
            Vec3::new(-a / p + b * p + 1.0, -a + b / p - p, a * p + b - 1.0 / p),
            Vec3::new(-a / p + b * p - 1.0, a - b / p - p, a * p + b + 1.0 / p),
            Vec3::new(a + b / p - p, a * p - b + 1.0 / p, a / p + b * p + 1.0),
        ],
        even_permutations,
        even_pluses,
    )
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the tag in any case, with `-`, `_`, spaces or no separators:
/// `"snub-cube"`, `"snub_cube"`, `"SnubCube"`.
impl FromStr for SolidKind {
    type Err = UnknownSolid;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squash = |name: &str| -> String {
            name.chars()
                .filter(|c| !matches!(c, '-' | '_' | ' '))
                .flat_map(char::to_lowercase)
                .collect()
        };
        let wanted = squash(s);
        SolidKind::all()
            .find(|kind| squash(kind.name()) == wanted)
            .ok_or_else(|| UnknownSolid(s.to_string()))
    }
}
