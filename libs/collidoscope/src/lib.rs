//! Kinematics of the collidoscope: convex solids spinning, drifting and
//! bouncing inside a box.
//!
//! ## Modules
//!
//! - [`body`]: a polyhedron with spin and velocity, wall reflection and
//!   pairwise collision
//! - [`simulation`]: the ordered body list and the tick
//! - [`scene`]: the box, random placement, and the Platonic and
//!   Archimedean gases
//! - [`snapshot`]: serializable per-frame geometry for renderers
//! - [`animator`]: the fixed-cadence render-then-advance loop
//!
//! ## Example
//!
//! ```rust
//! use collidoscope::{GasPreset, Scene, SceneConfig};
//!
//! let config = SceneConfig { seed: 7, ..SceneConfig::default() };
//! let mut scene = Scene::gas(GasPreset::Archimedean, &config).unwrap();
//! for _ in 0..24 {
//!     scene.advance_one_tick();
//! }
//! let frame = scene.snapshot();
//! assert_eq!(frame.tick, 24);
//! assert_eq!(frame.bodies.len(), 13);
//! ```

pub mod animator;
pub mod body;
pub mod error;
pub mod scene;
pub mod simulation;
pub mod snapshot;

pub use animator::{AnimationStats, Animator, Renderer};
pub use body::RigidBody;
pub use error::{SceneError, SceneResult};
pub use scene::{Enclosure, GasPreset, Scene, SceneBuilder, SceneConfig};
pub use simulation::Simulation;
pub use snapshot::{BodySnapshot, FrameSnapshot};
