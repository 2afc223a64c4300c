// --- File: simulation.rs ---
use crate::config::SimulationConfig;
use crate::constants::{COLS, ROWS};
use crate::grid::Grid;
use crate::input::{self, Command};
use crate::patterns;
use crate::scheduler::Ticker;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use winit::dpi::{PhysicalPosition, PhysicalSize};

pub type SimRng = StdRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

/// Owns the grid and the run loop state.
///
/// `ticker` exists exactly while the state is [`RunState::Running`], so
/// stopping cancels any pending tick.
pub struct SimulationState {
    grid: Grid,
    run_state: RunState,
    ticker: Option<Ticker>,
    generations_per_second: u32,
    generation: u64,
    rng: SimRng,
    config: SimulationConfig,
    needs_redraw: bool,
}

impl SimulationState {
    /// A stopped simulation with an empty grid and a render pending.
    pub fn new(config: SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SimRng::seed_from_u64(seed),
            None => SimRng::from_entropy(),
        };
        Self {
            grid: Grid::new(),
            run_state: RunState::Stopped,
            ticker: None,
            generations_per_second: config.clamp_speed(config.generations_per_second),
            generation: 0,
            rng,
            config,
            needs_redraw: true,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn generations_per_second(&self) -> u32 {
        self.generations_per_second
    }

    /// When the next tick is due, if the loop is running.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.as_ref().map(Ticker::deadline)
    }

    /// Returns whether a render was requested since the last call, and resets it.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.run_state = RunState::Running;
        self.ticker = Some(Ticker::new(self.generations_per_second, now));
        log::info!("Running at {} gen/s", self.generations_per_second);
        true
    }

    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.run_state = RunState::Stopped;
        self.ticker = None;
        log::info!("Stopped at generation {}", self.generation);
        true
    }

    pub fn toggle_running(&mut self, now: Instant) {
        if self.is_running() {
            self.stop();
        } else {
            self.start(now);
        }
    }

    fn advance_generation(&mut self) {
        self.grid.step();
        self.generation += 1;
        self.needs_redraw = true;
    }

    /// Single step. Only allowed while stopped.
    pub fn step(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.advance_generation();
        true
    }

    /// Runs the scheduled tick if it is due. Returns whether a step ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.ticker.as_mut().is_some_and(|ticker| ticker.poll(now));
        if due {
            self.advance_generation();
        }
        due
    }

    /// Sets the speed, clamped to the configured range. A running loop is
    /// rescheduled at the new rate.
    pub fn set_speed(&mut self, generations_per_second: u32, now: Instant) {
        let speed = self.config.clamp_speed(generations_per_second);
        if speed == self.generations_per_second {
            return;
        }
        self.generations_per_second = speed;
        log::debug!("Speed set to {speed} gen/s");
        if self.ticker.is_some() {
            self.ticker = Some(Ticker::new(speed, now));
        }
        self.needs_redraw = true;
    }

    pub fn adjust_speed(&mut self, increase: bool, now: Instant) {
        let step = self.config.speed_step;
        let speed = if increase {
            self.generations_per_second.saturating_add(step)
        } else {
            self.generations_per_second.saturating_sub(step)
        };
        self.set_speed(speed, now);
    }

    fn reset(&mut self) {
        self.stop();
        self.generation = 0;
        self.needs_redraw = true;
    }

    pub fn clear(&mut self) {
        self.reset();
        self.grid.clear();
    }

    pub fn randomize(&mut self) {
        self.reset();
        self.grid.randomize(&mut self.rng, self.config.fill_probability);
        log::debug!("Randomized grid: {} live cells", self.grid.live_count());
    }

    /// Stops the loop and loads the named pattern. Unknown names and `"none"`
    /// change nothing, not even the run state.
    pub fn apply_pattern(&mut self, name: &str) -> bool {
        if patterns::find(name).is_none() {
            log::debug!("No pattern named {name:?}");
            return false;
        }
        self.reset();
        self.grid.apply_pattern(name)
    }

    pub fn toggle_cell(&mut self, row: i32, col: i32) -> bool {
        let toggled = self.grid.toggle_cell(row, col);
        if toggled {
            self.needs_redraw = true;
        }
        toggled
    }

    /// Toggles the cell under a primary click at `position` on a surface of `surface` size.
    pub fn click(&mut self, position: PhysicalPosition<f64>, surface: PhysicalSize<u32>) -> bool {
        match input::cell_at(position, surface) {
            Some((row, col)) => self.toggle_cell(row, col),
            None => false,
        }
    }

    pub fn apply(&mut self, command: Command, now: Instant) {
        match command {
            Command::ToggleRunning => self.toggle_running(now),
            Command::Step => {
                self.step();
            }
            Command::Clear => self.clear(),
            Command::Randomize => self.randomize(),
            Command::ApplyPattern(name) => {
                self.apply_pattern(name);
            }
            Command::SpeedUp => self.adjust_speed(true, now),
            Command::SpeedDown => self.adjust_speed(false, now),
        }
    }

    /// Summary for the window title.
    pub fn status_line(&self) -> String {
        let state = match self.run_state {
            RunState::Running => "",
            RunState::Stopped => " [STOPPED]",
        };
        format!(
            "{ROWS}x{COLS} - Gen: {} - Alive: {} - Speed: {} gen/s{}",
            self.generation,
            self.grid.live_count(),
            self.generations_per_second,
            state
        )
    }
}
