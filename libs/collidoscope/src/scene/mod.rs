//! # Scene
//!
//! A scene is an [`Enclosure`] plus the [`Simulation`] of the bodies inside
//! it. Scenes are put together by a [`SceneBuilder`], which scatters bodies
//! at random positions with random spins, and once every body is placed
//! hands each a random velocity scaled to the box and the body count.
//!
//! Randomness comes from a seeded [`StdRng`], so a seed reproduces a scene
//! exactly.
//!
//! ## Example
//!
//! ```rust
//! use collidoscope::{GasPreset, Scene, SceneConfig};
//!
//! let mut scene = Scene::gas(GasPreset::Platonic, &SceneConfig::default()).unwrap();
//! assert_eq!(scene.simulation().len(), 5);
//! scene.advance_one_tick();
//! assert_eq!(scene.simulation().tick(), 1);
//! ```

pub mod enclosure;

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::time::Duration;

use config::constants::{
    ARCHIMEDEAN_BODY_COUNT, BOX_MARGIN, DEFAULT_SEED, DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH,
    FRAME_PERIOD_MS, PLATONIC_BODY_COUNT, SPIN_DIVISOR, VOLUME_FRACTION,
};
use log::{debug, info};
use polyhedra::core::vec3::{magnitude, rotation_about};
use polyhedra::{Polyhedron, SolidKind, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::body::RigidBody;
use crate::error::{SceneError, SceneResult};
use crate::simulation::Simulation;
use crate::snapshot::FrameSnapshot;

pub use enclosure::Enclosure;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// View size, cadence and seed of a scene.
///
/// The box is the view trimmed by [`BOX_MARGIN`], as deep as it is wide or
/// high, whichever is less.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Width of the view the box is fitted to.
    pub view_width: f64,
    /// Height of the view the box is fitted to.
    pub view_height: f64,
    /// Time between ticks, in milliseconds. Also scales spin and speed.
    pub frame_period_ms: u64,
    /// Seed of the placement RNG.
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            view_width: DEFAULT_VIEW_WIDTH,
            view_height: DEFAULT_VIEW_HEIGHT,
            frame_period_ms: FRAME_PERIOD_MS,
            seed: DEFAULT_SEED,
        }
    }
}

impl SceneConfig {
    /// `(width, height, depth)` of the box.
    pub fn box_dimensions(&self) -> (f64, f64, f64) {
        let width = self.view_width - BOX_MARGIN;
        let height = self.view_height - BOX_MARGIN;
        (width, height, width.min(height))
    }

    /// Time between ticks.
    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(self.frame_period_ms)
    }
}

// =============================================================================
// PRESETS
// =============================================================================

/// The two gases: one body per Platonic solid, or one per Archimedean
/// solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GasPreset {
    /// The 5 Platonic solids.
    Platonic,
    /// The 13 Archimedean solids.
    Archimedean,
}

impl GasPreset {
    /// Solids in the gas, in placement order.
    pub fn solids(self) -> &'static [SolidKind] {
        match self {
            GasPreset::Platonic => &SolidKind::PLATONIC,
            GasPreset::Archimedean => &SolidKind::ARCHIMEDEAN,
        }
    }

    /// Number of bodies in the gas.
    pub fn body_count(self) -> usize {
        match self {
            GasPreset::Platonic => PLATONIC_BODY_COUNT,
            GasPreset::Archimedean => ARCHIMEDEAN_BODY_COUNT,
        }
    }

    /// Common body radius for a box with positive corner `limit`.
    ///
    /// Each body gets a sphere of `VOLUME_FRACTION / N` of the box volume,
    /// so the Archimedean gas fills the box about as much as the Platonic.
    pub fn radius(self, limit: Vec3) -> f64 {
        let volume = VOLUME_FRACTION / self.body_count() as f64 * (2.0 * limit).element_product();
        (3.0 / (4.0 * PI) * volume).cbrt()
    }

    /// Lower-case name of the gas.
    pub fn name(self) -> &'static str {
        match self {
            GasPreset::Platonic => "platonic",
            GasPreset::Archimedean => "archimedean",
        }
    }
}

impl fmt::Display for GasPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Places bodies in a box one at a time, then sets them all moving.
#[derive(Debug)]
pub struct SceneBuilder {
    enclosure: Enclosure,
    frame_period_ms: u64,
    rng: StdRng,
    bodies: Vec<RigidBody>,
}

impl SceneBuilder {
    /// Starts a scene with an empty box sized from `config`.
    pub fn new(config: &SceneConfig) -> SceneResult<Self> {
        let (width, height, depth) = config.box_dimensions();
        let enclosure = Enclosure::new(width, height, depth)?;
        debug!(
            "box {width} x {height} x {depth}, period {} ms, seed {}",
            config.frame_period_ms, config.seed
        );
        Ok(Self {
            enclosure,
            frame_period_ms: config.frame_period_ms,
            rng: StdRng::seed_from_u64(config.seed),
            bodies: Vec::new(),
        })
    }

    /// Positive corner of the box.
    pub fn limit(&self) -> Vec3 {
        self.enclosure.extent()
    }

    /// Number of bodies placed so far.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Resizes an origin-centered polyhedron to `radius`, moves it to a
    /// random spot where it lies wholly inside the box, and gives it a
    /// random spin.
    pub fn add_polyhedron(&mut self, mut polyhedron: Polyhedron, radius: f64) -> SceneResult<&mut Self> {
        polyhedron.set_radius(radius)?;
        let limit = self.limit();
        let mut offset = Vec3::ZERO;
        for axis in 0..3 {
            let room = limit[axis] - radius;
            if room < 0.0 {
                return Err(SceneError::DoesNotFit {
                    radius,
                    limit: limit[axis],
                    axis,
                });
            }
            offset[axis] = self.rng.random_range(-room..=room);
        }
        polyhedron.translate(offset);

        let max_spin = self.frame_period_ms as f64 / 100.0 * PI / SPIN_DIVISOR;
        let spin = rotation_about(
            self.rng.random_range(-PI..=PI),
            self.rng.random_range(-FRAC_PI_2..=FRAC_PI_2),
            self.rng.random_range(-max_spin..=max_spin),
        );

        let mut body = RigidBody::new(polyhedron);
        body.set_rotation(spin);
        debug!(
            "placed body {} ({} vertices) at {:.1}",
            self.bodies.len(),
            body.polyhedron().vertex_count(),
            offset
        );
        self.bodies.push(body);
        Ok(self)
    }

    /// Builds `kind` and places it like [`SceneBuilder::add_polyhedron`].
    pub fn add_solid(&mut self, kind: SolidKind, radius: f64) -> SceneResult<&mut Self> {
        self.add_polyhedron(kind.build()?, radius)
    }

    /// Largest speed handed out by [`SceneBuilder::build`] for the bodies
    /// placed so far: `(period / 1 s) · |limit| / √(2N)`.
    pub fn max_speed(&self) -> f64 {
        if self.bodies.is_empty() {
            return 0.0;
        }
        let period_s = self.frame_period_ms as f64 / 1000.0;
        period_s * magnitude(self.limit()) / (2.0 * self.bodies.len() as f64).sqrt()
    }

    /// Gives every body a random velocity and the box limit, and returns
    /// the finished scene.
    ///
    /// Velocity components are uniform in `±max_speed / √3`, so no speed
    /// exceeds [`SceneBuilder::max_speed`].
    pub fn build(mut self) -> Scene {
        let limit = self.limit();
        let bound = self.max_speed() / 3f64.sqrt();
        let mut simulation = Simulation::new();
        for mut body in self.bodies.drain(..) {
            let velocity = Vec3::new(
                self.rng.random_range(-bound..=bound),
                self.rng.random_range(-bound..=bound),
                self.rng.random_range(-bound..=bound),
            );
            body.set_velocity(velocity, limit);
            simulation.add_body(body);
        }
        info!(
            "scene ready: {} bodies in a {:.0} box",
            simulation.len(),
            2.0 * limit
        );
        Scene {
            enclosure: self.enclosure,
            simulation,
            frame_period: Duration::from_millis(self.frame_period_ms),
        }
    }
}

// =============================================================================
// SCENE
// =============================================================================

/// An enclosure and the simulation running inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    enclosure: Enclosure,
    simulation: Simulation,
    frame_period: Duration,
}

impl Scene {
    /// Starts a [`SceneBuilder`] for `config`.
    pub fn builder(config: &SceneConfig) -> SceneResult<SceneBuilder> {
        SceneBuilder::new(config)
    }

    /// Builds a gas preset: every solid of the preset at the preset's
    /// common radius.
    pub fn gas(preset: GasPreset, config: &SceneConfig) -> SceneResult<Self> {
        let mut builder = SceneBuilder::new(config)?;
        let radius = preset.radius(builder.limit());
        info!("{preset} gas: {} bodies of radius {radius:.2}", preset.body_count());
        for &kind in preset.solids() {
            builder.add_solid(kind, radius)?;
        }
        Ok(builder.build())
    }

    /// The box.
    pub fn enclosure(&self) -> &Enclosure {
        &self.enclosure
    }

    /// The bodies and their tick count.
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Time between ticks.
    pub fn frame_period(&self) -> Duration {
        self.frame_period
    }

    /// Advances the simulation one tick; returns the number of bounces.
    pub fn advance_one_tick(&mut self) -> usize {
        self.simulation.advance_one_tick()
    }

    /// What a renderer needs to draw the current frame.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests;
