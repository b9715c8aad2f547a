use crate::core::Position;

/// 8方向の移動量。直交4方向 (上, 下, 左, 右) の後に斜め4方向。
///
/// Greedy strategies break ties by this order, so it must not change.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// マンハッタン距離
pub fn manhattan_distance(a: Position, b: Position) -> f64 {
    f64::from((a.x - b.x).abs()) + f64::from((a.y - b.y).abs())
}

/// King-move neighbours of `from` that lie on a `grid_size` board, in
/// [`DIRECTIONS`] order.
pub fn legal_moves(from: Position, grid_size: i32) -> Vec<Position> {
    DIRECTIONS
        .iter()
        .map(|&(dx, dy)| from.offset(dx, dy))
        .filter(|pos| pos.is_within(grid_size))
        .collect()
}

/// The goal closer to `from`; the first goal wins a tie.
pub fn nearer_goal(from: Position, goals: [Position; 2]) -> Position {
    if manhattan_distance(from, goals[1]) < manhattan_distance(from, goals[0]) {
        goals[1]
    } else {
        goals[0]
    }
}

/// Index of the highest score, earliest index on ties. `None` for no scores.
pub fn argmax(scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &s) in scores.iter().enumerate() {
        match best {
            Some((_, b)) if s <= b => {}
            _ => best = Some((i, s)),
        }
    }
    best.map(|(i, _)| i)
}
