use super::{GameOutcome, GameReport};
use crate::core::Position;
use crate::logic::manhattan_distance;
use serde::{Deserialize, Serialize};
use std::fmt;

/// End-of-game summary: outcome, turn count, final cells and how far the
/// evader ended up from each goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    pub outcome: GameOutcome,
    pub turns: u32,
    pub seed: u64,
    pub evader: Position,
    pub pursuer1: Position,
    pub pursuer2: Position,
    pub goal_distances: [f64; 2],
}

impl GameStats {
    pub fn from_report(report: &GameReport) -> Self {
        let board = &report.final_board;
        let p = board.positions;
        GameStats {
            outcome: report.outcome,
            turns: report.turns,
            seed: report.seed,
            evader: p.evader,
            pursuer1: p.pursuer1,
            pursuer2: p.pursuer2,
            goal_distances: [
                manhattan_distance(p.evader, board.goals[0]),
                manhattan_distance(p.evader, board.goals[1]),
            ],
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            GameOutcome::EvaderEscaped => "The evader escaped through a goal!",
            GameOutcome::EvaderCaught => "The evader was caught. Pursuers win.",
            GameOutcome::TimedOut => "Time is up! The evader survived but did not escape.",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for GameStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.outcome)?;
        writeln!(f)?;
        writeln!(f, "GAME STATS (seed {})", self.seed)?;
        writeln!(f, "Turns played: {}", self.turns)?;
        writeln!(f, "Evader final position: {}", self.evader)?;
        writeln!(f, "Pursuer 1 final position: {}", self.pursuer1)?;
        writeln!(f, "Pursuer 2 final position: {}", self.pursuer2)?;
        writeln!(f, "Distance to goal 1: {:.1}", self.goal_distances[0])?;
        write!(f, "Distance to goal 2: {:.1}", self.goal_distances[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardSnapshot, Positions, GRID_SIZE};

    #[test]
    fn test_stats_from_report() {
        let report = GameReport {
            outcome: GameOutcome::TimedOut,
            turns: 50,
            seed: 11,
            final_board: BoardSnapshot {
                grid_size: GRID_SIZE,
                positions: Positions {
                    evader: Position::new(2, 3),
                    pursuer1: Position::new(4, 4),
                    pursuer2: Position::new(5, 5),
                },
                goals: [Position::new(7, 7), Position::new(0, 0)],
            },
        };

        let stats = GameStats::from_report(&report);
        assert_eq!(stats.goal_distances, [9.0, 5.0]);
        assert_eq!(stats.turns, 50);

        let text = stats.to_string();
        assert!(text.contains("Turns played: 50"));
        assert!(text.contains("Distance to goal 2: 5.0"));
    }
}
