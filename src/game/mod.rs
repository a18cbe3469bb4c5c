//! Core game logic for Snake on a wrapping grid
//!
//! Nothing in here touches the terminal; the controller drives it one tick
//! at a time and the renderer reads the resulting state.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use food::Food;
pub use grid::{Cell, Grid};
pub use snake::{MoveOutcome, Snake};
pub use state::GameState;
