//! # Config Crate
//!
//! Centralized configuration constants for the collidoscope engine.
//! All magic numbers and tunable parameters are defined here so the
//! geometry core and the kinematics layer agree on tolerances, frame
//! cadence and scene proportions.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EDGE_LENGTH_TOLERANCE, FRAME_PERIOD_MS};
//!
//! // Two vertices are joined by an edge when their distance is within
//! // 1% of the common edge length.
//! let edge_length = 2.0;
//! let distance: f64 = 2.01;
//! assert!((1.0 - distance / edge_length).abs() < EDGE_LENGTH_TOLERANCE);
//!
//! // Roughly 24 frames per second.
//! assert_eq!(1000 / FRAME_PERIOD_MS, 23);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Usable from every crate in the workspace
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
