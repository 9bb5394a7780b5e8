//! # Configuration Constants
//!
//! Centralized constants for the collidoscope engine.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Reconstruction**: Face recovery from bare vertex sets
//! - **Animation**: Frame cadence and spin rates
//! - **Scene**: Box proportions and gas population sizes

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// RECONSTRUCTION CONSTANTS
// =============================================================================

/// Relative tolerance for recognizing an edge.
///
/// Two vertices of an equilateral polyhedron are joined by an edge when
/// `|1 - distance / edge_length| < EDGE_LENGTH_TOLERANCE`. Vertex
/// generators are expected to carry far less than 1% numerical noise.
///
/// # Example
///
/// ```rust
/// use config::constants::EDGE_LENGTH_TOLERANCE;
///
/// let is_edge = |distance: f64, edge: f64| (1.0 - distance / edge).abs() < EDGE_LENGTH_TOLERANCE;
/// assert!(is_edge(1.005, 1.0));
/// assert!(!is_edge(1.02, 1.0));
/// ```
pub const EDGE_LENGTH_TOLERANCE: f64 = 1e-2;

/// Fewest vertices a closed polyhedron can have (the tetrahedron).
pub const MIN_POLYHEDRON_VERTICES: usize = 4;

/// Fewest edges that meet at a vertex of a closed convex polyhedron.
pub const MIN_VERTEX_DEGREE: usize = 3;

// =============================================================================
// ANIMATION CONSTANTS
// =============================================================================

/// Frame period used before a scene chooses its own cadence, in milliseconds.
pub const DEFAULT_FRAME_PERIOD_MS: u64 = 100;

/// Frame period of the collidoscope scenes, in milliseconds.
///
/// `round(1000 / 24)`, about 24 frames per second.
///
/// # Example
///
/// ```rust
/// use config::constants::FRAME_PERIOD_MS;
///
/// assert_eq!(FRAME_PERIOD_MS, (1000.0_f64 / 24.0).round() as u64);
/// ```
pub const FRAME_PERIOD_MS: u64 = 42;

/// Divisor of π bounding the spin angle per step.
///
/// A body's spin per step is uniform in `±(period_ms / 100) * π / SPIN_DIVISOR`.
pub const SPIN_DIVISOR: f64 = 15.0;

// =============================================================================
// SCENE CONSTANTS
// =============================================================================

/// Share of the box volume taken up by all bodies of a gas preset together.
///
/// Each of `N` bodies gets the volume of a sphere of `VOLUME_FRACTION / N`
/// times the box volume.
pub const VOLUME_FRACTION: f64 = 0.1;

/// Number of bodies in the Platonic gas (one per Platonic solid).
pub const PLATONIC_BODY_COUNT: usize = 5;

/// Number of bodies in the Archimedean gas.
pub const ARCHIMEDEAN_BODY_COUNT: usize = 13;

/// Pixels trimmed from the view size to get the box size.
pub const BOX_MARGIN: f64 = 3.0;

/// Default view width when no surface supplies one.
pub const DEFAULT_VIEW_WIDTH: f64 = 640.0;

/// Default view height when no surface supplies one.
pub const DEFAULT_VIEW_HEIGHT: f64 = 480.0;

/// Seed used by scenes that do not ask for a specific one.
pub const DEFAULT_SEED: u64 = 0x00C0_111D;
