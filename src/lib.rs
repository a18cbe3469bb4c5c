//! Torus Snake - the classic Snake game on a wrapping grid, in the terminal
//!
//! This library provides:
//! - Core game logic: grid geometry, snake, food and the tick rules (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - In-memory session stats (metrics module)
//! - The fixed-rate game loop tying them together (controller module)

pub mod controller;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
