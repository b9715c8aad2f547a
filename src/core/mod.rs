pub mod board;
pub mod setup;
pub mod types;

pub use board::{Board, BoardSnapshot, Positions};
pub use setup::random_board;
pub use types::{Position, Role, TerminationResult, GRID_SIZE};
