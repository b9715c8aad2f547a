//! Actor task loop shared by the evader and both pursuers.
//!
//! Each actor waits on its own turn mailbox, reads a snapshot, decides, and
//! commits through the board. After its own move it checks whether the game
//! is over; the first actor to see that raises the result, and every actor
//! that sees it stops.

use crate::core::{Board, TerminationResult};
use crate::player::Strategy;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

/// ターン開始の合図 (中身なし)
pub type TurnSignal = ();

/// Write side of the one-shot termination channel, shared by all actors.
#[derive(Debug, Clone)]
pub struct Termination {
    slot: Arc<Mutex<Option<oneshot::Sender<TerminationResult>>>>,
}

impl Termination {
    pub fn new() -> (Self, oneshot::Receiver<TerminationResult>) {
        let (tx, rx) = oneshot::channel();
        let termination = Termination {
            slot: Arc::new(Mutex::new(Some(tx))),
        };
        (termination, rx)
    }

    /// Sends `result` if nobody has raised one yet. Returns whether this call
    /// was the one that raised it.
    pub fn raise(&self, result: TerminationResult) -> bool {
        let sender = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match sender {
            // receiver may already be gone once the referee has stopped
            Some(tx) => tx.send(result).is_ok(),
            None => false,
        }
    }
}

/// Runs one actor until it observes the end of the game or its mailbox is
/// closed. Returns the number of turn signals it acted on.
pub async fn run_actor<S: Strategy>(
    mut strategy: S,
    board: Arc<Board>,
    mut signals: mpsc::Receiver<TurnSignal>,
    termination: Termination,
) -> u32 {
    let role = strategy.role();
    let mut turns = 0;

    while signals.recv().await.is_some() {
        turns += 1;

        let snapshot = board.snapshot();
        let current = snapshot.position(role);
        let target = strategy.choose_move(&snapshot);

        if target == current {
            tracing::trace!(%role, at = %current, "staying in place");
        } else if board.try_move(role, target) {
            tracing::debug!(%role, from = %current, to = %target, "move committed");
        } else {
            tracing::debug!(%role, to = %target, "move rejected");
        }

        if let Some(result) = board.termination() {
            if termination.raise(result) {
                tracing::info!(%role, ?result, turns, "termination raised");
            }
            break;
        }
    }

    tracing::debug!(name = strategy.name(), turns, "actor stopped");
    turns
}
