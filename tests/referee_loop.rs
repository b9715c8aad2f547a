//! End-to-end runs of the referee loop.
//!
//! Actor commits race against the referee's inspection, so these tests check
//! invariants and bounded termination rather than exact trajectories.

use grid_pursuit::core::{Board, BoardSnapshot, Position, Positions, Role, GRID_SIZE};
use grid_pursuit::{Game, GameConfig, GameOutcome, GameStats};

fn fast_config(max_turns: u32) -> GameConfig {
    GameConfig {
        max_turns,
        settle_ms: 10,
        turn_pause_ms: 0,
        ..GameConfig::default()
    }
}

fn assert_in_bounds(snapshot: &BoardSnapshot) {
    for role in Role::ALL {
        let pos = snapshot.position(role);
        assert!(pos.is_within(GRID_SIZE), "{} left the board at {}", role, pos);
    }
    for goal in snapshot.goals {
        assert!(goal.is_within(GRID_SIZE));
    }
}

#[tokio::test]
async fn seeded_games_stay_in_bounds_and_end_within_cap() {
    for seed in [1u64, 7, 42, 1234, 99_999] {
        let game = Game::new(fast_config(50), seed).unwrap();
        let goals = game.board().goals();

        let mut snapshots = Vec::new();
        let report = game
            .play(|turn, snapshot| snapshots.push((turn, *snapshot)))
            .await
            .unwrap();

        assert!(report.turns >= 1 && report.turns <= 50);
        assert_eq!(snapshots.len() as u32, report.turns);
        for (i, (turn, snapshot)) in snapshots.iter().enumerate() {
            assert_eq!(*turn, i as u32 + 1);
            assert_eq!(snapshot.goals, goals, "goals moved on turn {}", turn);
            assert_in_bounds(snapshot);
        }
        assert_in_bounds(&report.final_board);

        // An escaped evader stops moving, so the final board still shows it.
        if report.outcome == GameOutcome::EvaderEscaped {
            assert!(report.final_board.evader_escaped());
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn multi_thread_runtime_also_terminates() {
    // Actors now genuinely run in parallel with the referee.
    for seed in [5u64, 6] {
        let report = Game::new(fast_config(30), seed)
            .unwrap()
            .play(|_, snapshot| assert_in_bounds(snapshot))
            .await
            .unwrap();

        assert!(matches!(
            report.outcome,
            GameOutcome::EvaderEscaped | GameOutcome::EvaderCaught | GameOutcome::TimedOut
        ));
        assert!(report.turns <= 30);
    }
}

#[tokio::test]
async fn stats_sink_reports_final_board() {
    let board = Board::with_positions(
        Positions {
            evader: Position::new(0, 0),
            pursuer1: Position::new(7, 7),
            pursuer2: Position::new(7, 6),
        },
        [Position::new(7, 0), Position::new(0, 7)],
    )
    .unwrap();

    let report = Game::with_board(board, fast_config(2), 8)
        .play(|_, _| {})
        .await
        .unwrap();

    // Two turns cannot cover seven cells.
    assert_eq!(report.outcome, GameOutcome::TimedOut);

    let stats = GameStats::from_report(&report);
    assert_eq!(stats.turns, 2);
    assert_eq!(stats.evader, report.final_board.positions.evader);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["outcome"], "TimedOut");
    assert_eq!(json["turns"], 2);
}
