//! # Animator
//!
//! The frame loop: draw, advance one tick, wait out the rest of the frame
//! period. Drawing happens before advancing, so the first frame shows the
//! scene as built.
//!
//! The loop stops after a frame budget, or as soon as the renderer returns
//! [`ControlFlow::Break`]. Any `FnMut(&Scene) -> ControlFlow<()>` is a
//! [`Renderer`].
//!
//! ## Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use collidoscope::{Animator, GasPreset, Scene, SceneConfig};
//!
//! let mut scene = Scene::gas(GasPreset::Platonic, &SceneConfig::default()).unwrap();
//! let mut drawn = 0;
//! let stats = Animator::new(scene.frame_period())
//!     .realtime(false)
//!     .frame_budget(10)
//!     .run(&mut scene, &mut |_: &Scene| {
//!         drawn += 1;
//!         ControlFlow::Continue(())
//!     });
//! assert_eq!(stats.frames, 10);
//! assert_eq!(drawn, 10);
//! assert_eq!(scene.simulation().tick(), 10);
//! ```

use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};

use config::constants::DEFAULT_FRAME_PERIOD_MS;
use log::{debug, trace};

use crate::scene::Scene;

/// Draws a frame. Returning [`ControlFlow::Break`] stops the animation.
pub trait Renderer {
    /// Draws `scene` as it is before the next tick.
    fn render(&mut self, scene: &Scene) -> ControlFlow<()>;
}

impl<F> Renderer for F
where
    F: FnMut(&Scene) -> ControlFlow<()>,
{
    fn render(&mut self, scene: &Scene) -> ControlFlow<()> {
        self(scene)
    }
}

/// Totals of one [`Animator::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationStats {
    /// Frames drawn.
    pub frames: u64,
    /// Ticks advanced.
    pub ticks: u64,
    /// Body-body bounces over all ticks.
    pub collisions: u64,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

/// Fixed-cadence render-then-advance loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animator {
    period: Duration,
    realtime: bool,
    frame_budget: Option<u64>,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_FRAME_PERIOD_MS))
    }
}

impl Animator {
    /// A real-time animator with no frame budget.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            realtime: true,
            frame_budget: None,
        }
    }

    /// Whether to sleep out the rest of each frame period.
    pub fn realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    /// Stops after `frames` frames.
    pub fn frame_budget(mut self, frames: u64) -> Self {
        self.frame_budget = Some(frames);
        self
    }

    /// Target time between frames.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Runs frames until the budget is spent or the renderer breaks.
    ///
    /// A frame whose render breaks is counted but not advanced.
    pub fn run<R: Renderer + ?Sized>(&self, scene: &mut Scene, renderer: &mut R) -> AnimationStats {
        let started = Instant::now();
        let mut stats = AnimationStats::default();
        while self.frame_budget.map_or(true, |budget| stats.frames < budget) {
            let frame_started = Instant::now();
            stats.frames += 1;
            if renderer.render(scene).is_break() {
                debug!("renderer stopped the animation at frame {}", stats.frames);
                break;
            }
            stats.collisions += scene.advance_one_tick() as u64;
            stats.ticks += 1;

            if self.realtime {
                let spent = frame_started.elapsed();
                match self.period.checked_sub(spent) {
                    Some(rest) => thread::sleep(rest),
                    None => trace!("frame {} overran by {:?}", stats.frames, spent - self.period),
                }
            }
        }
        stats.elapsed = started.elapsed();
        debug!(
            "animation done: {} frames, {} bounces in {:?}",
            stats.frames, stats.collisions, stats.elapsed
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{GasPreset, SceneConfig};

    fn scene() -> Scene {
        Scene::gas(GasPreset::Platonic, &SceneConfig::default()).unwrap()
    }

    #[test]
    fn budget_bounds_frames_and_ticks() {
        let mut scene = scene();
        let mut renderer = |_: &Scene| ControlFlow::Continue(());
        let stats = Animator::new(Duration::ZERO)
            .realtime(false)
            .frame_budget(25)
            .run(&mut scene, &mut renderer);
        assert_eq!(stats.frames, 25);
        assert_eq!(stats.ticks, 25);
        assert_eq!(scene.simulation().tick(), 25);
    }

    #[test]
    fn renders_before_advancing() {
        let mut scene = scene();
        let mut seen = Vec::new();
        let mut renderer = |scene: &Scene| {
            seen.push(scene.simulation().tick());
            ControlFlow::Continue(())
        };
        Animator::new(Duration::ZERO)
            .realtime(false)
            .frame_budget(3)
            .run(&mut scene, &mut renderer);
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn renderer_can_stop_the_loop() {
        let mut scene = scene();
        let mut renderer = |scene: &Scene| {
            if scene.simulation().tick() == 4 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        };
        let stats = Animator::new(Duration::ZERO)
            .realtime(false)
            .run(&mut scene, &mut renderer);
        assert_eq!(stats.frames, 5);
        assert_eq!(stats.ticks, 4);
        assert_eq!(scene.simulation().tick(), 4);
    }

    #[test]
    fn realtime_run_keeps_cadence() {
        let mut scene = scene();
        let mut renderer = |_: &Scene| ControlFlow::Continue(());
        let period = Duration::from_millis(5);
        let stats = Animator::new(period)
            .frame_budget(4)
            .run(&mut scene, &mut renderer);
        assert!(stats.elapsed >= period * 4);
    }

    #[test]
    fn default_period() {
        let animator = Animator::default();
        assert_eq!(animator.period(), Duration::from_millis(DEFAULT_FRAME_PERIOD_MS));
    }

    struct Counter(u32);

    impl Renderer for Counter {
        fn render(&mut self, _: &Scene) -> ControlFlow<()> {
            self.0 += 1;
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn trait_objects_render() {
        let mut scene = scene();
        let mut counter = Counter(0);
        let renderer: &mut dyn Renderer = &mut counter;
        Animator::new(Duration::ZERO)
            .realtime(false)
            .frame_budget(2)
            .run(&mut scene, renderer);
        assert_eq!(counter.0, 2);
    }
}
