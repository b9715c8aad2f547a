use super::config::EvaderWeights;
use crate::core::{BoardSnapshot, Position, Role};
use crate::logic::{argmax, legal_moves, manhattan_distance, nearer_goal};
use crate::player::Strategy;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// 逃走側: 近い方のゴールへ向かいつつ追跡者を避ける
pub struct EvaderAI {
    pub name: String,
    pub weights: EvaderWeights,
    rng: ChaCha8Rng,
}

impl EvaderAI {
    pub fn new(name: &str, weights: EvaderWeights, rng: ChaCha8Rng) -> Self {
        Self {
            name: name.to_string(),
            weights,
            rng,
        }
    }

    pub fn target_goal(snapshot: &BoardSnapshot) -> Position {
        nearer_goal(snapshot.positions.evader, snapshot.goals)
    }

    /// Deterministic part of the move score (everything except the noise term).
    pub fn base_score(&self, mv: Position, target: Position, pursuers: [Position; 2]) -> f64 {
        let w = &self.weights;
        let mut score = w.goal_weight / (manhattan_distance(mv, target) + 1.0);

        for pursuer in pursuers {
            let dist = manhattan_distance(mv, pursuer);
            if dist < w.threat_radius {
                score -= w.threat_weight / (dist + w.threat_epsilon);
            }
        }

        score
    }
}

impl Strategy for EvaderAI {
    fn choose_move(&mut self, snapshot: &BoardSnapshot) -> Position {
        let current = snapshot.positions.evader;
        let target = Self::target_goal(snapshot);
        let pursuers = [snapshot.positions.pursuer1, snapshot.positions.pursuer2];

        let moves = legal_moves(current, snapshot.grid_size);
        let mut scores = Vec::with_capacity(moves.len());
        for &mv in &moves {
            let noise = self.rng.gen::<f64>() * self.weights.jitter;
            scores.push(self.base_score(mv, target, pursuers) + noise);
        }

        argmax(&scores).map_or(current, |i| moves[i])
    }

    fn role(&self) -> Role {
        Role::Evader
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Positions, GRID_SIZE};
    use rand::SeedableRng;

    fn corner_scenario() -> BoardSnapshot {
        BoardSnapshot {
            grid_size: GRID_SIZE,
            positions: Positions {
                evader: Position::new(0, 0),
                pursuer1: Position::new(4, 4),
                pursuer2: Position::new(5, 5),
            },
            goals: [Position::new(7, 7), Position::new(7, 0)],
        }
    }

    fn evader(seed: u64) -> EvaderAI {
        EvaderAI::new(
            "Evader",
            EvaderWeights::default(),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    #[test]
    fn test_targets_strictly_nearer_goal() {
        assert_eq!(
            EvaderAI::target_goal(&corner_scenario()),
            Position::new(7, 0)
        );
    }

    #[test]
    fn test_first_move_from_corner_advances() {
        let snap = corner_scenario();
        for seed in 0..50 {
            let mv = evader(seed).choose_move(&snap);
            assert!(mv.x > 0 || mv.y > 0, "seed {} stayed at {}", seed, mv);
            assert!(legal_moves(snap.positions.evader, GRID_SIZE).contains(&mv));
        }
    }

    #[test]
    fn test_threat_penalty_only_inside_radius() {
        let ai = evader(0);
        let target = Position::new(7, 0);
        let far = [Position::new(6, 6), Position::new(7, 7)];
        let near = [Position::new(2, 1), Position::new(7, 7)];

        let mv = Position::new(1, 0);
        let clean = ai.base_score(mv, target, far);
        assert!((clean - 100.0 / 7.0).abs() < 1e-9);

        // (1,0) は (2,1) から距離 2 -> ペナルティなし
        assert_eq!(ai.base_score(mv, target, near), clean);

        // (1,1) は距離 1 -> 50 / 1.1 の減点
        let adjacent = Position::new(1, 1);
        let expected = 100.0 / 8.0 - 50.0 / 1.1;
        assert!((ai.base_score(adjacent, target, near) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_avoids_stepping_onto_pursuer() {
        // Evader next to goal but a pursuer sits on the direct step.
        let snap = BoardSnapshot {
            grid_size: GRID_SIZE,
            positions: Positions {
                evader: Position::new(3, 3),
                pursuer1: Position::new(4, 3),
                pursuer2: Position::new(0, 7),
            },
            goals: [Position::new(6, 3), Position::new(0, 0)],
        };
        for seed in 0..20 {
            let mv = evader(seed).choose_move(&snap);
            assert_ne!(mv, Position::new(4, 3));
        }
    }

    #[test]
    fn test_no_legal_moves_stays() {
        let snap = BoardSnapshot {
            grid_size: 1,
            positions: Positions {
                evader: Position::new(0, 0),
                pursuer1: Position::new(0, 0),
                pursuer2: Position::new(0, 0),
            },
            goals: [Position::new(0, 0), Position::new(0, 0)],
        };
        assert_eq!(evader(1).choose_move(&snap), Position::new(0, 0));
    }

    #[test]
    fn test_same_seed_same_choice() {
        let snap = corner_scenario();
        assert_eq!(evader(42).choose_move(&snap), evader(42).choose_move(&snap));
    }
}
