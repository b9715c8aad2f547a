use crate::core::{BoardSnapshot, Position, Role};
use crate::logic::{legal_moves, manhattan_distance};
use crate::player::relay::RelaySender;
use crate::player::Strategy;

/// 追跡者1: 逃走側へ最短で詰める。見た位置を追跡者2へ流す。
pub struct AggressiveAI {
    pub name: String,
    relay: RelaySender,
}

impl AggressiveAI {
    pub fn new(name: &str, relay: RelaySender) -> Self {
        Self {
            name: name.to_string(),
            relay,
        }
    }
}

/// The candidate nearest to `target`, skipping `blocked`. Earlier candidates
/// win ties.
pub fn closest_excluding(
    candidates: &[Position],
    blocked: Position,
    target: Position,
) -> Option<Position> {
    let mut best: Option<(Position, f64)> = None;
    for &mv in candidates.iter().filter(|&&mv| mv != blocked) {
        let dist = manhattan_distance(mv, target);
        match best {
            Some((_, d)) if dist >= d => {}
            _ => best = Some((mv, dist)),
        }
    }
    best.map(|(mv, _)| mv)
}

impl Strategy for AggressiveAI {
    fn choose_move(&mut self, snapshot: &BoardSnapshot) -> Position {
        let p = snapshot.positions;
        self.relay.offer(p.evader);

        let moves = legal_moves(p.pursuer1, snapshot.grid_size);
        closest_excluding(&moves, p.pursuer2, p.evader).unwrap_or(p.pursuer1)
    }

    fn role(&self) -> Role {
        Role::Pursuer1
    }

    fn name(&self) -> &str {
        &self.name
    }
}
