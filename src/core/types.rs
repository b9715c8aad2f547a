use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤面の一辺のマス数
pub const GRID_SIZE: i32 = 8;

/// Which actor a board write belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Evader,
    Pursuer1, // aggressive
    Pursuer2, // interceptor
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Evader, Role::Pursuer1, Role::Pursuer2];

    /// The pursuer that is not `self`. The evader has no partner.
    pub fn partner(self) -> Option<Role> {
        match self {
            Role::Evader => None,
            Role::Pursuer1 => Some(Role::Pursuer2),
            Role::Pursuer2 => Some(Role::Pursuer1),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Role::Evader => "evader",
            Role::Pursuer1 => "pursuer-1",
            Role::Pursuer2 => "pursuer-2",
        };
        f.write_str(name)
    }
}

/// How a game ended before the turn cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationResult {
    EvaderEscaped,
    EvaderCaught,
}

/// 盤面座標 (0-indexed)
///
/// Signed so that neighbour offsets can step off the board and be rejected by
/// [`Position::is_within`] instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Position::new(self.x + dx, self.y + dy)
    }

    pub fn is_within(self, grid_size: i32) -> bool {
        self.x >= 0 && self.x < grid_size && self.y >= 0 && self.y < grid_size
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
