//! Core game logic module for Snake
//!
//! This module contains all the game logic without any terminal I/O. Drawing
//! goes through the [`Canvas`] trait so the whole tick pipeline can run
//! headless.

pub mod apple;
pub mod config;
pub mod direction;
pub mod draw;
pub mod engine;
pub mod grid;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use apple::Apple;
pub use config::{BoundaryPolicy, GameConfig, ResetDirection};
pub use direction::Direction;
pub use draw::{Canvas, Renderable, Rgb};
pub use engine::{GameEngine, GameState, ResetCause, StepResult};
pub use grid::Position;
pub use session::{InputEvent, Session, TickOutcome};
pub use snake::Snake;
