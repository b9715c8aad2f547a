use super::board::{Board, Positions};
use super::types::{Position, GRID_SIZE};
use crate::error::Result;
use rand::Rng;
use std::collections::HashSet;

/// 初期配置をランダムに生成する
///
/// Draws five pairwise-distinct cells: evader, pursuer 1, pursuer 2, goal 1,
/// goal 2. Distinctness already keeps the evader off both goals.
pub fn random_board<R: Rng>(rng: &mut R) -> Result<Board> {
    let mut used = HashSet::new();
    let mut next = || loop {
        let pos = Position::new(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
        if used.insert(pos) {
            return pos;
        }
    };

    let positions = Positions {
        evader: next(),
        pursuer1: next(),
        pursuer2: next(),
    };
    let goals = [next(), next()];

    Board::with_positions(positions, goals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Role;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_boards_are_distinct_and_in_bounds() {
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let board = random_board(&mut rng).unwrap();
            let snap = board.snapshot();

            let mut all: Vec<Position> = Role::ALL.iter().map(|&r| snap.position(r)).collect();
            all.extend(snap.goals);
            assert!(all.iter().all(|p| p.is_within(GRID_SIZE)));

            let unique: HashSet<_> = all.iter().collect();
            assert_eq!(unique.len(), 5, "seed {} produced overlapping cells", seed);
            assert!(!snap.goals.contains(&snap.positions.evader));
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = random_board(&mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let b = random_board(&mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
