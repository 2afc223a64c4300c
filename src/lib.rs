//! Conway's Game of Life on a bounded 200x200 grid, drawn as raster graphics.

pub mod config;
pub mod constants;
pub mod frame;
pub mod grid;
pub mod input;
pub mod patterns;
pub mod renderer;
pub mod scheduler;
pub mod simulation;

pub use config::SimulationConfig;
pub use frame::Frame;
pub use grid::Grid;
pub use renderer::{Renderer, RendererError};
pub use simulation::{RunState, SimulationState};
