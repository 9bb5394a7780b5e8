//! # Error Types
//!
//! Scene setup is the only fallible stage of a simulation. Once a scene is
//! built, stepping, reflecting and colliding are total.

use polyhedra::solids::UnknownSolid;
use polyhedra::GeometryError;
use thiserror::Error;

/// Errors raised while building a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// A solid could not be built or resized.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A body is too large to be placed inside the box.
    #[error("body of radius {radius} does not fit: box extent on axis {axis} is {limit}")]
    DoesNotFit {
        /// Radius of the body
        radius: f64,
        /// Half extent of the box on the offending axis
        limit: f64,
        /// Axis index (0 = x, 1 = y, 2 = z)
        axis: usize,
    },

    /// The box dimensions are not positive and finite.
    #[error("invalid box: {0}")]
    InvalidBox(String),

    /// A solid tag did not name any known solid.
    #[error(transparent)]
    UnknownSolid(#[from] UnknownSolid),
}

/// Result type for scene setup.
pub type SceneResult<T> = Result<T, SceneError>;
