//! Referee loop.
//!
//! Every turn the referee drops one signal into each actor's mailbox without
//! waiting for them, sleeps for the settle interval, shows the board, and then
//! polls the termination channel. Actors that finish late land their move
//! after the inspection for that turn; that interleaving is part of the game.

pub mod stats;

use crate::config::GameConfig;
use crate::core::{random_board, Board, BoardSnapshot, Role, TerminationResult};
use crate::error::{GameError, Result};
use crate::player::{
    relay, run_actor, AggressiveAI, EvaderAI, InterceptorAI, Strategy, Termination, TurnSignal,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::oneshot::error::TryRecvError;
use tokio::task::JoinHandle;

pub use stats::GameStats;

/// Mailbox capacity per actor: one slot per actor in the game.
pub const SIGNAL_CAPACITY: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    EvaderEscaped,
    EvaderCaught,
    TimedOut,
}

impl From<TerminationResult> for GameOutcome {
    fn from(result: TerminationResult) -> Self {
        match result {
            TerminationResult::EvaderEscaped => GameOutcome::EvaderEscaped,
            TerminationResult::EvaderCaught => GameOutcome::EvaderCaught,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    pub outcome: GameOutcome,
    pub turns: u32,
    pub seed: u64,
    pub final_board: BoardSnapshot,
}

pub struct Game {
    board: Arc<Board>,
    config: GameConfig,
    seed: u64,
}

/// Per-actor RNG streams are split off the game seed so that the board and
/// each strategy draw independently.
fn actor_rng(seed: u64, role: Role) -> ChaCha8Rng {
    let stream = match role {
        Role::Evader => 1,
        Role::Pursuer1 => 2,
        Role::Pursuer2 => 3,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

impl Game {
    /// Random placement drawn from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let board = random_board(&mut ChaCha8Rng::seed_from_u64(seed))?;
        Ok(Self::with_board(board, config, seed))
    }

    pub fn with_board(board: Board, config: GameConfig, seed: u64) -> Self {
        Game {
            board: Arc::new(board),
            config,
            seed,
        }
    }

    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs the game to a result or the turn cap. `on_turn` sees the board
    /// once per turn, after the settle interval.
    pub async fn play<F>(self, mut on_turn: F) -> Result<GameReport>
    where
        F: FnMut(u32, &BoardSnapshot),
    {
        let Game { board, config, seed } = self;
        config.validate()?;

        let (termination, mut result_rx) = Termination::new();
        let (relay_tx, relay_rx) = relay();
        let weights = &config.strategy;

        tracing::info!(seed, start = ?board.snapshot(), "game starting");

        let mut mailboxes = Vec::with_capacity(3);
        let mut handles = Vec::with_capacity(3);
        spawn_actor(
            EvaderAI::new(
                "Evader",
                weights.evader.clone(),
                actor_rng(seed, Role::Evader),
            ),
            &board,
            &termination,
            &mut mailboxes,
            &mut handles,
        );
        spawn_actor(
            AggressiveAI::new("Agent 1", relay_tx),
            &board,
            &termination,
            &mut mailboxes,
            &mut handles,
        );
        spawn_actor(
            InterceptorAI::new(
                "Agent 2",
                weights.interceptor.clone(),
                relay_rx,
                actor_rng(seed, Role::Pursuer2),
            ),
            &board,
            &termination,
            &mut mailboxes,
            &mut handles,
        );
        drop(termination);

        let mut turns = 0;
        let mut result = None;
        while turns < config.max_turns {
            turns += 1;
            tracing::debug!(turn = turns, "signalling actors");

            for (role, tx) in &mailboxes {
                signal(*role, tx);
            }

            tokio::time::sleep(config.settle()).await;
            on_turn(turns, &board.snapshot());

            match result_rx.try_recv() {
                Ok(r) => {
                    result = Some(r);
                    break;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => {}
            }

            if !config.turn_pause().is_zero() {
                tokio::time::sleep(config.turn_pause()).await;
            }
        }

        // Closing the mailboxes ends every actor loop that is still waiting.
        drop(mailboxes);
        for (role, handle) in handles {
            handle
                .await
                .map_err(|source| GameError::ActorFailed { role, source })?;
        }

        let outcome = result.map_or(GameOutcome::TimedOut, GameOutcome::from);
        let report = GameReport {
            outcome,
            turns,
            seed,
            final_board: board.snapshot(),
        };
        tracing::info!(?outcome, turns, "game over");
        Ok(report)
    }
}

fn spawn_actor<S: Strategy + 'static>(
    strategy: S,
    board: &Arc<Board>,
    termination: &Termination,
    mailboxes: &mut Vec<(Role, mpsc::Sender<TurnSignal>)>,
    handles: &mut Vec<(Role, JoinHandle<u32>)>,
) {
    let role = strategy.role();
    let (tx, rx) = mpsc::channel(SIGNAL_CAPACITY);
    let handle = tokio::spawn(run_actor(
        strategy,
        Arc::clone(board),
        rx,
        termination.clone(),
    ));
    mailboxes.push((role, tx));
    handles.push((role, handle));
}

/// Fire-and-forget: never waits for room in the mailbox.
fn signal(role: Role, tx: &mpsc::Sender<TurnSignal>) {
    match tx.try_send(()) {
        Ok(()) => {}
        Err(TrySendError::Full(())) => {
            tracing::warn!(%role, "turn mailbox full, signal dropped");
        }
        Err(TrySendError::Closed(())) => {
            tracing::trace!(%role, "actor already stopped");
        }
    }
}
