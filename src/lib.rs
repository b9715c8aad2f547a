//! Pursuit-evasion on an 8x8 grid: one evader races for a goal while two
//! pursuers, each running as its own task, try to land on it first.

pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{Game, GameOutcome, GameReport, GameStats};
