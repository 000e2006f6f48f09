//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Transitions take a snapshot and hand back a new one; `GameStore` holds the current one.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::GameConfig;
pub use engine::{place_food, GameEngine, StepInfo, StepResult};
pub use state::{CollisionType, GameState, Position, Snake};
pub use store::GameStore;
