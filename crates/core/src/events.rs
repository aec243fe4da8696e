//! Event notification - synchronous fan-out to attached listeners.
//!
//! The engine pushes a [`GameEvent`] into every attached channel on the
//! calling thread, before the mutating call returns. Listeners that have
//! dropped their receiver are silently skipped; there is no unsubscribe.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::game_state::MoveOutcome;

/// A state change worth telling the presentation layer about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh board was dealt
    NewGame { stones_per_pit: u8 },
    /// A move resolved successfully
    Moved(MoveOutcome),
    /// The last move was reverted
    Undone { remaining: u8 },
}

/// Registry of listener channels
#[derive(Debug, Default)]
pub struct Listeners {
    senders: Vec<Sender<GameEvent>>,
}

impl Listeners {
    /// Register an existing channel's sending half
    pub fn attach(&mut self, sender: Sender<GameEvent>) {
        self.senders.push(sender);
    }

    /// Create, register, and hand back a fresh channel
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (tx, rx) = channel();
        self.attach(tx);
        rx
    }

    /// Deliver `event` to every listener, ignoring the disconnected ones
    pub fn notify(&self, event: GameEvent) {
        for tx in &self.senders {
            let _ = tx.send(event);
        }
    }

    /// Number of attached listeners
    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}
