use super::types::{Position, Role, TerminationResult, GRID_SIZE};
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Point-in-time positions of the three actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Positions {
    pub evader: Position,
    pub pursuer1: Position,
    pub pursuer2: Position,
}

impl Positions {
    pub fn get(&self, role: Role) -> Position {
        match role {
            Role::Evader => self.evader,
            Role::Pursuer1 => self.pursuer1,
            Role::Pursuer2 => self.pursuer2,
        }
    }

    fn slot_mut(&mut self, role: Role) -> &mut Position {
        match role {
            Role::Evader => &mut self.evader,
            Role::Pursuer1 => &mut self.pursuer1,
            Role::Pursuer2 => &mut self.pursuer2,
        }
    }
}

/// Read-only copy of the whole board, handed to strategies and to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub grid_size: i32,
    pub positions: Positions,
    pub goals: [Position; 2],
}

impl BoardSnapshot {
    pub fn position(&self, role: Role) -> Position {
        self.positions.get(role)
    }

    pub fn evader_escaped(&self) -> bool {
        self.goals.contains(&self.positions.evader)
    }

    pub fn evader_caught(&self) -> bool {
        let p = &self.positions;
        p.evader == p.pursuer1 || p.evader == p.pursuer2
    }
}

/// 盤面 (共有状態)
///
/// Goals and grid size are fixed at construction and live outside the lock.
/// Actor positions are only reachable through the accessors below, each of
/// which holds the lock for a single copy or assignment.
#[derive(Debug)]
pub struct Board {
    grid_size: i32,
    goals: [Position; 2],
    actors: RwLock<Positions>,
}

impl Board {
    /// Builds a board from explicit placements, checking every setup invariant.
    pub fn with_positions(positions: Positions, goals: [Position; 2]) -> Result<Self> {
        let placed = [
            ("evader", positions.evader),
            ("pursuer-1", positions.pursuer1),
            ("pursuer-2", positions.pursuer2),
            ("goal-1", goals[0]),
            ("goal-2", goals[1]),
        ];

        for (i, &(name, pos)) in placed.iter().enumerate() {
            if !pos.is_within(GRID_SIZE) {
                return Err(GameError::OutOfBounds {
                    role: name.to_string(),
                    pos,
                });
            }
            if placed[..i].iter().any(|&(_, other)| other == pos) {
                if goals.contains(&positions.evader) && pos == positions.evader {
                    return Err(GameError::EvaderOnGoal(pos));
                }
                return Err(GameError::OverlappingSetup(pos));
            }
        }

        Ok(Board {
            grid_size: GRID_SIZE,
            goals,
            actors: RwLock::new(positions),
        })
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    pub fn goals(&self) -> [Position; 2] {
        self.goals
    }

    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.is_within(self.grid_size)
    }

    /// Consistent view of the three actor positions.
    pub fn read(&self) -> Positions {
        *self.read_lock()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            grid_size: self.grid_size,
            positions: self.read(),
            goals: self.goals,
        }
    }

    /// Moves `role` to `target` if it lies on the board. Returns `false` and
    /// leaves the board untouched otherwise.
    pub fn try_move(&self, role: Role, target: Position) -> bool {
        if !self.is_valid_position(target) {
            return false;
        }
        *self.write_lock().slot_mut(role) = target;
        true
    }

    pub fn try_move_evader(&self, target: Position) -> bool {
        self.try_move(Role::Evader, target)
    }

    pub fn try_move_pursuer1(&self, target: Position) -> bool {
        self.try_move(Role::Pursuer1, target)
    }

    pub fn try_move_pursuer2(&self, target: Position) -> bool {
        self.try_move(Role::Pursuer2, target)
    }

    pub fn has_evader_escaped(&self) -> bool {
        self.goals.contains(&self.read_lock().evader)
    }

    pub fn has_evader_been_caught(&self) -> bool {
        let p = self.read_lock();
        p.evader == p.pursuer1 || p.evader == p.pursuer2
    }

    /// Both predicates against one read. Escape is checked before capture.
    pub fn termination(&self) -> Option<TerminationResult> {
        let snapshot = self.snapshot();
        if snapshot.evader_escaped() {
            Some(TerminationResult::EvaderEscaped)
        } else if snapshot.evader_caught() {
            Some(TerminationResult::EvaderCaught)
        } else {
            None
        }
    }

    // Critical sections never leave a half-written Position behind, so a
    // poisoned lock still guards valid data.
    fn read_lock(&self) -> RwLockReadGuard<'_, Positions> {
        self.actors.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, Positions> {
        self.actors.write().unwrap_or_else(PoisonError::into_inner)
    }
}
