// main.rs - Hexagonal life sandbox stepped by row coroutines

use clap::Parser;
use eframe::egui;
use egui::Color32;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use hexsim::{coro, Config, Sandbox, Session, SimError, Tick};

mod hex;
mod ui;

use hex::Layout;

#[derive(Parser)]
#[command(name = "hexsim_coro")]
#[command(version)]
#[command(about = "Hexagonal cellular automaton sandbox")]
struct Cli {
    /// Configuration file (YAML); defaults apply when it does not exist
    #[arg(short, long, default_value = "hexsim.yaml")]
    config: PathBuf,

    /// Write the effective configuration to the config path and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = if cli.config.exists() {
        log::info!("loading config from {}", cli.config.display());
        Config::load(&cli.config)?
    } else {
        log::info!("{} not found, using defaults", cli.config.display());
        Config::default()
    };

    if cli.write_config {
        config.save(&cli.config)?;
        log::info!("config written to {}", cli.config.display());
        return Ok(());
    }

    let app = HexLife::new(&config)?;
    let [w, h] = app.window_size();
    log::info!(
        "grid {}x{}, {} ms per generation",
        config.grid.rows,
        config.grid.cols,
        config.simulation.update_interval_ms
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([w.min(1600.0), h.min(1000.0)]),
        ..Default::default()
    };

    eframe::run_native(
        "Hexagonal Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}

pub struct HexLife {
    pub session: Session,
    pub layout: Layout,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub thumbnail_size: f32,
    pub panel_width: f32,
    pub selected_pattern: usize,
    pub random_seed: u64,

    runtime: tokio::runtime::Runtime,
}

impl HexLife {
    pub fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        config.validate()?;
        let runtime = tokio::runtime::Runtime::new()?;
        let session = Session::from_config(config)?;
        let [lr, lg, lb] = config.display.live_color;
        let [dr, dg, db] = config.display.dead_color;

        Ok(Self {
            layout: Layout::new(config.display.cell_size, config.grid.rows, config.grid.cols),
            session,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(config.simulation.update_interval_ms),
            live_color: Color32::from_rgb(lr, lg, lb),
            dead_color: Color32::from_rgb(dr, dg, db),
            thumbnail_size: config.display.thumbnail_size,
            panel_width: config.display.panel_width,
            selected_pattern: 0,
            random_seed: 0,
            runtime,
        })
    }

    fn window_size(&self) -> [f32; 2] {
        let extent = self.layout.extent();
        [extent.x + self.panel_width + 40.0, extent.y + 120.0]
    }

    /// Advances one generation, every row running as its own coroutine.
    pub fn update_generation(&mut self) -> Result<Tick, SimError> {
        let snapshot = Arc::new(self.session.grid().clone());
        let next = self.runtime.block_on(coro::step_rows(snapshot))?;
        self.session.update_generation(next)
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let alive = self.session.toggle(row as isize, col as isize);
        log::debug!("cell ({row}, {col}) -> {}", if alive { "alive" } else { "dead" });
    }

    pub fn apply_random_pattern(&mut self) {
        self.random_seed = self.random_seed.wrapping_add(1);
        self.session.randomize(self.random_seed ^ self.session.generation());
    }
}
