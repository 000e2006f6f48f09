//! Snake Arcade - single-screen Snake for the terminal
//!
//! This library provides:
//! - Core game logic and the state store (game module)
//! - Keyboard, swipe and button input normalization (input module)
//! - The movement timer (tick module)
//! - TUI rendering (render module) and the interactive loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod tick;
