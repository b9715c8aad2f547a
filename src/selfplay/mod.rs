//! Batch of headless games over consecutive seeds.

use crate::config::GameConfig;
use crate::error::Result;
use crate::game::{Game, GameOutcome, GameStats};
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameResult {
    pub seed: u64,
    pub outcome: GameOutcome,
    pub turns: u32,
    pub time_ms: u128,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub escapes: usize,
    pub captures: usize,
    pub timeouts: usize,
    pub avg_turns: f64,
    pub avg_time_ms: f64,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.outcome {
            GameOutcome::EvaderEscaped => self.escapes += 1,
            GameOutcome::EvaderCaught => self.captures += 1,
            GameOutcome::TimedOut => self.timeouts += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_turns: u64 = self.games.iter().map(|g| u64::from(g.turns)).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_turns = total_turns as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }

    fn percent(&self, count: usize) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            count as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl std::fmt::Display for SelfPlayStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "--- Self-Play Statistics ---")?;
        writeln!(f, "Games: {}", self.total_games)?;
        writeln!(f, "Escapes: {} ({:.1}%)", self.escapes, self.percent(self.escapes))?;
        writeln!(f, "Captures: {} ({:.1}%)", self.captures, self.percent(self.captures))?;
        writeln!(f, "Timeouts: {} ({:.1}%)", self.timeouts, self.percent(self.timeouts))?;
        writeln!(f, "Avg Turns: {:.1}", self.avg_turns)?;
        write!(f, "Avg Time: {:.1}ms", self.avg_time_ms)
    }
}

/// Plays `num_games` games with seeds `base_seed, base_seed + 1, ...`.
/// The inter-turn pause is skipped; the settle interval is kept since it is
/// what gives the actors time to move.
pub async fn run_selfplay(
    config: &GameConfig,
    base_seed: u64,
    num_games: usize,
) -> Result<SelfPlayStats> {
    let mut stats = SelfPlayStats::new();
    let config = GameConfig {
        turn_pause_ms: 0,
        ..config.clone()
    };

    for i in 0..num_games {
        let seed = base_seed.wrapping_add(i as u64);
        let start_time = Instant::now();

        let report = Game::new(config.clone(), seed)?.play(|_, _| {}).await?;
        tracing::debug!(stats = ?GameStats::from_report(&report), "self-play game finished");

        stats.add_result(GameResult {
            seed,
            outcome: report.outcome,
            turns: report.turns,
            time_ms: start_time.elapsed().as_millis(),
        });
        tracing::info!(
            game = i + 1,
            of = num_games,
            outcome = ?report.outcome,
            turns = report.turns,
            "self-play progress"
        );
    }

    Ok(stats)
}
