//! Terminal demo driver for the mayhem dispatcher
//!
//! Wires the dispatcher to the system clock, a seeded RNG, a logging
//! stub executor, and a text-mode HUD, then polls it frame by frame the
//! way the in-game hook would. Useful for watching the scheduling
//! behavior without a game attached.
//!
//! Run with: cargo run -p mayhem-cli -- --time-scale 20 --run-secs 30

use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mayhem_core::catalog::{EffectCatalog, EffectId};
use mayhem_core::config::{self, ModConfig};
use mayhem_core::dispatch::EffectDispatcher;
use mayhem_core::game::{EffectExecutor, GameClock, GameRng, SystemClock};
use mayhem_core::hud::HudRenderer;
use mayhem_types::formatting::format_duration;

/// Character width of the text progress meter
const METER_CHARS: usize = 40;

/// Character width of a countdown sub-bar
const SUB_BAR_CHARS: usize = 10;

/// Normalized width of the HUD countdown sub-bar (see mayhem-core's hud
/// geometry); used to recover the fill fraction from the rect width
const SUB_BAR_WIDTH: f32 = 0.05;

#[derive(Parser)]
#[command(version, about = "chaos effect dispatcher demo")]
struct Cli {
    /// Mod config TOML (defaults when absent)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog TOML (builtin catalog when absent)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Wall-clock seconds to run before tearing down
    #[arg(long, default_value_t = 180)]
    run_secs: u64,

    /// Game-clock speed multiplier, for quick demos
    #[arg(long, default_value_t = 1)]
    time_scale: u32,

    /// Override the configured RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Game clock running `scale` times faster than wall time
struct ScaledClock {
    inner: SystemClock,
    scale: u64,
}

impl GameClock for ScaledClock {
    fn now_millis(&self) -> u64 {
        self.inner.now_millis() * self.scale
    }
}

/// Stub executor that logs transitions instead of touching a game
struct LogExecutor {
    catalog: EffectCatalog,
}

impl EffectExecutor for LogExecutor {
    fn start(&mut self, id: EffectId) {
        let descriptor = self.catalog.descriptor(id);
        info!(effect = %descriptor.name, category = ?descriptor.category, "start");
    }

    fn stop(&mut self, id: EffectId) {
        info!(effect = %self.catalog.descriptor(id).name, "stop");
    }

    fn advance_all(&mut self) {}
}

/// Text renderer: collects one frame of draw calls, prints on `present`
#[derive(Default)]
struct TerminalHud {
    meter: f32,
    rows: Vec<(String, Option<f32>)>,
}

impl TerminalHud {
    fn begin_frame(&mut self) {
        self.meter = 0.0;
        self.rows.clear();
    }

    fn present(&self) {
        let filled = (self.meter.clamp(0.0, 1.0) * METER_CHARS as f32) as usize;
        println!(
            "[{}{}] next effect",
            "#".repeat(filled),
            "-".repeat(METER_CHARS - filled)
        );

        for (name, bar) in &self.rows {
            match bar {
                Some(fraction) => {
                    let ticks = (fraction.clamp(0.0, 1.0) * SUB_BAR_CHARS as f32).round() as usize;
                    println!(
                        "{name:>38}  [{}{}]",
                        "=".repeat(ticks),
                        " ".repeat(SUB_BAR_CHARS - ticks)
                    );
                }
                None => println!("{name:>38}"),
            }
        }
        println!();
    }
}

impl HudRenderer for TerminalHud {
    fn draw_filled_rect(&mut self, _x: f32, _y: f32, w: f32, h: f32, color: [u8; 4]) {
        if color[3] != 255 {
            // Background tracks carry half alpha; only fills matter here
            return;
        }
        if h > 0.04 {
            self.meter = w;
        } else if let Some(row) = self.rows.last_mut() {
            row.1 = Some(w / SUB_BAR_WIDTH);
        }
    }

    fn draw_right_justified_label(&mut self, text: &str, _x: f32, _y: f32) {
        self.rows.push((text.to_string(), None));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // Explicit path, else the user config dir; a missing file is defaults
    let config_path = cli
        .config
        .clone()
        .or_else(|| config::default_config_dir().map(|dir| dir.join("mod.toml")));
    let config = match &config_path {
        Some(path) => ModConfig::load(path)?,
        None => ModConfig::default(),
    };

    let catalog = match &cli.catalog {
        Some(path) => EffectCatalog::load(path, config.default_timed_duration_secs)?,
        None => EffectCatalog::builtin(config.default_timed_duration_secs),
    };

    let rng = match cli.seed.or(config.seed) {
        Some(seed) => GameRng::seeded(seed),
        None => GameRng::from_entropy(),
    };

    let clock = ScaledClock {
        inner: SystemClock::new(),
        scale: cli.time_scale.max(1) as u64,
    };

    let executor = LogExecutor {
        catalog: catalog.clone(),
    };

    let mut dispatcher = EffectDispatcher::new(
        catalog,
        Box::new(executor),
        Box::new(clock),
        Box::new(rng),
        config.spawn_window_millis(),
    );

    let mut hud = TerminalHud::default();
    let frame = Duration::from_millis(33);
    let started = Instant::now();
    let mut frames: u64 = 0;

    info!(
        run_secs = cli.run_secs,
        time_scale = cli.time_scale,
        spawn_window_secs = config.spawn_window_secs,
        "dispatcher running"
    );

    while started.elapsed() < Duration::from_secs(cli.run_secs) {
        dispatcher.advance_timer();
        dispatcher.advance_effects();

        frames += 1;
        if frames % 30 == 0 {
            hud.begin_frame();
            dispatcher.draw(&mut hud);
            hud.present();
        }

        thread::sleep(frame);
    }

    // Teardown stops every still-active effect
    drop(dispatcher);

    info!(
        elapsed = %format_duration(started.elapsed().as_secs()),
        "demo finished"
    );
    Ok(())
}
