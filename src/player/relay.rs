//! Single-slot, lossy relay between the two pursuers.
//!
//! The aggressive pursuer offers the evader position it saw; the interceptor
//! takes it if one is waiting. Neither side ever blocks: a full slot drops the
//! new message, an empty slot yields `None`.

use crate::core::Position;
use tokio::sync::mpsc::{self, error::TrySendError};

pub fn relay() -> (RelaySender, RelayReceiver) {
    let (tx, rx) = mpsc::channel(1);
    (RelaySender { tx }, RelayReceiver { rx })
}

#[derive(Debug, Clone)]
pub struct RelaySender {
    tx: mpsc::Sender<Position>,
}

impl RelaySender {
    /// Returns whether the message was accepted.
    pub fn offer(&self, pos: Position) -> bool {
        match self.tx.try_send(pos) {
            Ok(()) => true,
            Err(TrySendError::Full(dropped)) => {
                tracing::trace!(%dropped, "relay slot occupied, dropping estimate");
                false
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }
}

#[derive(Debug)]
pub struct RelayReceiver {
    rx: mpsc::Receiver<Position>,
}

impl RelayReceiver {
    pub fn poll(&mut self) -> Option<Position> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_yields_none() {
        let (_tx, mut rx) = relay();
        assert_eq!(rx.poll(), None);
    }

    #[test]
    fn test_full_slot_drops_newer_message() {
        let (tx, mut rx) = relay();
        assert!(tx.offer(Position::new(1, 1)));
        assert!(!tx.offer(Position::new(2, 2)));

        assert_eq!(rx.poll(), Some(Position::new(1, 1)));
        assert_eq!(rx.poll(), None);

        // slot is free again
        assert!(tx.offer(Position::new(3, 3)));
        assert_eq!(rx.poll(), Some(Position::new(3, 3)));
    }

    #[test]
    fn test_offer_after_receiver_dropped() {
        let (tx, rx) = relay();
        drop(rx);
        assert!(!tx.offer(Position::new(0, 0)));
    }
}
