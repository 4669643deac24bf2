//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end and the tests drive it through [`GameEngine::update`].

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Intent};
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, StepInfo, TickInput, TickReport};
pub use food::SowOutcome;
pub use state::{CollisionType, GameState, Phase, Position, Snake};
