// session.rs - Sandbox state owned by the caller instead of globals

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::config::Config;
use crate::error::{GridError, SimError};
use crate::grid::Grid;
use crate::patterns::{self, Pattern};
use crate::simulator;
use crate::stats;

/// Outcome of committing a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Advanced,
    /// The new generation matches one still in the recent history.
    Cycle,
}

/// Interface the presentation layer drives the sandbox through.
pub trait Sandbox {
    /// Installs the next generation, however it was computed.
    fn update_generation(&mut self, next: Grid) -> Result<Tick, SimError>;
    fn hash_grid(&self) -> u64;
    fn check_for_cycle(&mut self) -> bool;
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self, pattern: &Pattern);
}

/// Live grid plus everything the side panel needs to describe it.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    initial: Grid,
    generation: u64,
    running: bool,
    first_edit: Option<(usize, usize)>,
    last_edit: Option<(usize, usize)>,
    grid_history: VecDeque<u64>,
    cycle_window: usize,
    stop_on_cycle: bool,
}

impl Session {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let grid = Grid::new(rows, cols)?;
        Ok(Self {
            initial: grid.clone(),
            grid,
            generation: 0,
            running: false,
            first_edit: None,
            last_edit: None,
            grid_history: VecDeque::new(),
            cycle_window: 10,
            stop_on_cycle: true,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, GridError> {
        let mut session = Self::new(config.grid.rows, config.grid.cols)?;
        session.cycle_window = config.simulation.cycle_window.max(1);
        session.stop_on_cycle = config.simulation.stop_on_cycle;
        Ok(session)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Grid as it was right after the most recent edit.
    pub fn initial(&self) -> &Grid {
        &self.initial
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            log::info!("simulation started at generation {}", self.generation);
        }
        self.running = true;
    }

    pub fn pause(&mut self) {
        if self.running {
            log::info!("simulation paused at generation {}", self.generation);
        }
        self.running = false;
    }

    pub fn set_running(&mut self, running: bool) {
        if running { self.start() } else { self.pause() }
    }

    /// Live cells in the initial snapshot.
    pub fn live_cells(&self) -> usize {
        self.initial.live_count()
    }

    pub fn population(&self) -> stats::Population {
        stats::population(&self.grid)
    }

    /// Sub-window of the initial snapshot around the edited region.
    pub fn start_pattern(&self) -> Option<Grid> {
        let (first, last) = self.first_edit.zip(self.last_edit)?;
        stats::start_pattern(&self.initial, first, last)
    }

    pub fn first_edit(&self) -> Option<(usize, usize)> {
        self.first_edit
    }

    pub fn last_edit(&self) -> Option<(usize, usize)> {
        self.last_edit
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, i: isize, j: isize) -> bool {
        let alive = self.grid.toggle(i, j);
        self.record_edit(i, j);
        alive
    }

    pub fn set_cell(&mut self, i: isize, j: isize, alive: bool) {
        self.grid.set(i, j, alive);
        self.record_edit(i, j);
    }

    fn record_edit(&mut self, i: isize, j: isize) {
        let cell = self.grid.wrap(i, j);
        log::debug!("edit at {:?}, generation {}", cell, self.generation);
        self.first_edit.get_or_insert(cell);
        self.last_edit = Some(cell);
        self.take_snapshot();
    }

    fn take_snapshot(&mut self) {
        self.initial = self.grid.clone();
        self.grid_history.clear();
    }

    /// Steps the live grid once on the calling thread.
    pub fn tick(&mut self) -> Tick {
        let next = simulator::step(&self.grid);
        self.replace_generation(next)
    }

    /// Installs a generation computed elsewhere, e.g. by the row coroutines.
    pub fn commit(&mut self, next: Grid) -> Result<Tick, SimError> {
        if next.dimensions() != self.grid.dimensions() {
            return Err(SimError::DimensionMismatch {
                expected: self.grid.dimensions(),
                found: next.dimensions(),
            });
        }
        Ok(self.replace_generation(next))
    }

    fn replace_generation(&mut self, next: Grid) -> Tick {
        self.grid = next;
        self.generation += 1;

        if !self.check_for_cycle() {
            return Tick::Advanced;
        }
        log::info!(
            "generation {} repeats a recent state ({} live cells)",
            self.generation,
            self.grid.live_count()
        );
        if self.stop_on_cycle {
            self.pause();
        }
        Tick::Cycle
    }

    pub fn clear(&mut self) {
        self.running = false;
        self.grid.clear();
        self.generation = 0;
        self.first_edit = None;
        self.last_edit = None;
        self.take_snapshot();
        log::debug!("grid cleared");
    }

    /// Replaces the grid with `pattern` stamped at the center.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.running = false;
        patterns::apply_pattern(&mut self.grid, pattern);
        self.generation = 0;

        let (ci, cj) = patterns::center(&self.grid);
        let region = pattern.bounds().map(|((r0, c0), (r1, c1))| {
            (self.grid.wrap(ci + r0, cj + c0), self.grid.wrap(ci + r1, cj + c1))
        });
        self.first_edit = region.map(|(first, _)| first);
        self.last_edit = region.map(|(_, last)| last);
        self.take_snapshot();
        log::debug!("pattern '{}' applied", pattern.name);
    }

    pub fn randomize(&mut self, seed: u64) {
        self.running = false;
        patterns::apply_random_pattern(&mut self.grid, seed);
        self.generation = 0;
        self.first_edit = None;
        self.last_edit = None;
        self.take_snapshot();
        log::debug!("random fill with seed {seed}: {} live cells", self.grid.live_count());
    }
}

impl Sandbox for Session {
    fn update_generation(&mut self, next: Grid) -> Result<Tick, SimError> {
        self.commit(next)
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.grid.hash(&mut hasher);
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        if self.grid_history.contains(&current_hash) { return true; }
        if self.grid_history.len() == self.cycle_window {
            self.grid_history.pop_front();
        }
        self.grid_history.push_back(current_hash);
        false
    }

    fn clear_grid(&mut self) {
        self.clear();
    }

    fn apply_selected_pattern(&mut self, pattern: &Pattern) {
        self.apply_pattern(pattern);
    }
}
