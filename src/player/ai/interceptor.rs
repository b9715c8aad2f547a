use super::config::InterceptorWeights;
use crate::core::{BoardSnapshot, Position, Role};
use crate::logic::{argmax, legal_moves, manhattan_distance, nearer_goal};
use crate::player::relay::RelayReceiver;
use crate::player::Strategy;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// 追跡者2: 逃走側とゴールの間に割り込む
pub struct InterceptorAI {
    pub name: String,
    pub weights: InterceptorWeights,
    relay: RelayReceiver,
    rng: ChaCha8Rng,
}

impl InterceptorAI {
    pub fn new(
        name: &str,
        weights: InterceptorWeights,
        relay: RelayReceiver,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            name: name.to_string(),
            weights,
            relay,
            rng,
        }
    }

    /// Relayed evader position if one is waiting, otherwise the live one.
    pub fn estimate_evader(&mut self, snapshot: &BoardSnapshot) -> Position {
        self.relay.poll().unwrap_or(snapshot.positions.evader)
    }

    /// Score without the noise term.
    pub fn base_score(&self, mv: Position, evader: Position, goal: Position) -> f64 {
        let w = &self.weights;
        let to_evader = manhattan_distance(mv, evader);
        let mut score = w.proximity_weight / (to_evader + 1.0);

        let to_goal = manhattan_distance(mv, goal);
        if to_evader + to_goal <= manhattan_distance(evader, goal) + w.path_slack {
            score += w.on_path_bonus;
        }

        score
    }
}

impl Strategy for InterceptorAI {
    fn choose_move(&mut self, snapshot: &BoardSnapshot) -> Position {
        let current = snapshot.positions.pursuer2;
        let partner = snapshot.positions.pursuer1;
        let estimate = self.estimate_evader(snapshot);
        let goal = nearer_goal(estimate, snapshot.goals);

        let moves: Vec<Position> = legal_moves(current, snapshot.grid_size)
            .into_iter()
            .filter(|&mv| mv != partner)
            .collect();

        let mut scores = Vec::with_capacity(moves.len());
        for &mv in &moves {
            let noise = self.rng.gen::<f64>() * self.weights.jitter;
            scores.push(self.base_score(mv, estimate, goal) + noise);
        }

        argmax(&scores).map_or(current, |i| moves[i])
    }

    fn role(&self) -> Role {
        Role::Pursuer2
    }

    fn name(&self) -> &str {
        &self.name
    }
}
