//! Headless collidoscope driver.
//!
//! Builds a gas, runs the frame loop, and logs a one-line summary per frame
//! to stderr. With `--dump`, every frame is also printed to stdout as one
//! JSON line.
//!
//! Usage:
//!   collidoscope                          Platonic gas, 240 frames, as fast as possible
//!   collidoscope --preset archimedean     The 13 Archimedean solids
//!   collidoscope --realtime --frames 480  Sleep to the 42 ms cadence
//!   collidoscope --dump > frames.jsonl    Stream snapshots for a renderer

use std::io::{self, Write};
use std::ops::ControlFlow;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use collidoscope::{Animator, GasPreset, Scene, SceneConfig};
use config::constants::{DEFAULT_SEED, DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH, FRAME_PERIOD_MS};
use log::{info, Level, LevelFilter, Log, Metadata, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    Platonic,
    Archimedean,
}

impl From<Preset> for GasPreset {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Platonic => GasPreset::Platonic,
            Preset::Archimedean => GasPreset::Archimedean,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "collidoscope")]
#[command(about = "Platonic and Archimedean solids bouncing around in a box")]
struct Args {
    /// Which gas to simulate
    #[arg(long, value_enum, default_value_t = Preset::Platonic)]
    preset: Preset,

    /// Number of frames to run
    #[arg(short = 'n', long, default_value_t = 240)]
    frames: u64,

    /// Seed for body placement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// View width the box is fitted to
    #[arg(long, default_value_t = DEFAULT_VIEW_WIDTH)]
    width: f64,

    /// View height the box is fitted to
    #[arg(long, default_value_t = DEFAULT_VIEW_HEIGHT)]
    height: f64,

    /// Frame period in milliseconds
    #[arg(long, default_value_t = FRAME_PERIOD_MS)]
    period_ms: u64,

    /// Sleep out each frame period instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Print every frame snapshot to stdout as a JSON line
    #[arg(long)]
    dump: bool,
}

/// Writes `LEVEL target: message` lines to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARN ",
                Level::Info => "INFO ",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };
            eprintln!("{level} {}: {}", record.target(), record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logger(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level);

    let config = SceneConfig {
        view_width: args.width,
        view_height: args.height,
        frame_period_ms: args.period_ms,
        seed: args.seed,
    };
    let mut scene = match Scene::gas(args.preset.into(), &config) {
        Ok(scene) => scene,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut write_error = None;
    let mut renderer = |scene: &Scene| {
        let frame = scene.snapshot();
        let nearest = frame.bodies.last().map(|b| b.position.z).unwrap_or_default();
        info!(
            "frame {:>5}: {} bodies, nearest z {:>8.2}",
            frame.tick,
            frame.bodies.len(),
            nearest
        );
        if args.dump {
            let written = serde_json::to_writer(&mut out, &frame)
                .map_err(io::Error::from)
                .and_then(|()| writeln!(out));
            if let Err(err) = written {
                write_error = Some(err);
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    };

    let stats = Animator::new(scene.frame_period())
        .realtime(args.realtime)
        .frame_budget(args.frames)
        .run(&mut scene, &mut renderer);

    info!(
        "{} frames, {} bounces, {:.2?} elapsed",
        stats.frames, stats.collisions, stats.elapsed
    );
    if let Some(err) = write_error {
        eprintln!("error: writing snapshot: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
