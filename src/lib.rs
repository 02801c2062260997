//! Grid Snake - the classic Snake game in the terminal
//!
//! This library provides:
//! - Core game logic, renderable through any [`game::Canvas`] (game module)
//! - Keyboard input translation (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive terminal loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
