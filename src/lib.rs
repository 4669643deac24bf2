//! Tile Snake - the classic Snake game on a walled, wrapping tile grid
//!
//! This library provides:
//! - Core game logic (game module)
//! - Terminal input mapping (input module)
//! - Scene drawing and the ratatui front end (render module)
//! - Session statistics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
