//! Game state module - turn resolution and the bounded undo window
//!
//! This module ties the board mechanics together into the playable engine:
//! pick validation, sowing, capture, free turns, end-of-game settlement,
//! and a single-snapshot undo capped at three uses per turn window.
//!
//! All operations run synchronously on the calling thread; attached
//! listeners are notified before the mutating call returns.

use arrayvec::ArrayVec;
use thiserror::Error;

use tui_mancala_types::{
    Player, Winner, DEFAULT_STONES_PER_PIT, MAX_UNDOS_PER_TURN, NUM_SLOTS, PITS_PER_SIDE,
};

use crate::board::Board;
use crate::events::{GameEvent, Listeners};

/// Why a pick was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("slot {0} is out of range")]
    OutOfRange(usize),

    #[error("slot {0} is a store, not a pit")]
    StoreSlot(usize),

    #[error("pit {0} belongs to the other player")]
    WrongSide(usize),

    #[error("pit {0} is empty")]
    EmptyPit(usize),
}

/// What a resolved move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Who moved
    pub player: Player,
    /// The emptied pit
    pub pit: usize,
    /// Slot that received the last stone
    pub landing: usize,
    /// Stones taken from the pit
    pub sown: u16,
    /// Stones claimed by the capture rule (0 if it did not fire)
    pub captured: u16,
    /// The mover keeps the turn (last stone landed in their own store)
    pub free_turn: bool,
}

/// State saved immediately before a move, restored by undo
///
/// `Board` is `Copy`, so the snapshot can never alias the live board.
#[derive(Debug, Clone, Copy)]
struct Saved {
    board: Board,
    active: Player,
    undo_count: u8,
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    board: Board,
    active: Player,
    saved: Option<Saved>,
    undo_count: u8,
    listeners: Listeners,
}

impl GameState {
    /// Create a game with the default pit fill, Player A to move
    pub fn new() -> Self {
        Self {
            board: Board::new(DEFAULT_STONES_PER_PIT),
            active: Player::A,
            saved: None,
            undo_count: 0,
            listeners: Listeners::default(),
        }
    }

    /// Create a game from an arbitrary position
    ///
    /// The undo window starts empty, as if the position had just been dealt.
    pub fn from_position(board: Board, active: Player) -> Self {
        Self {
            board,
            active,
            saved: None,
            undo_count: 0,
            listeners: Listeners::default(),
        }
    }

    /// Deal a fresh board with `stones_per_pit` in every pit
    ///
    /// Player A moves first; the undo snapshot and counter are cleared.
    /// The engine accepts any fill here; restricting the choice to 3 or 4
    /// is the setup screen's job, not the engine's.
    pub fn new_game(&mut self, stones_per_pit: u8) {
        self.board = Board::new(stones_per_pit);
        self.active = Player::A;
        self.saved = None;
        self.undo_count = 0;
        self.listeners.notify(GameEvent::NewGame { stones_per_pit });
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Undo uses so far in the current turn window
    pub fn undo_count(&self) -> u8 {
        self.undo_count
    }

    /// Register a listener channel
    pub fn attach(&mut self, sender: std::sync::mpsc::Sender<GameEvent>) {
        self.listeners.attach(sender);
    }

    /// Create, register, and hand back a fresh listener channel
    pub fn subscribe(&mut self) -> std::sync::mpsc::Receiver<GameEvent> {
        self.listeners.subscribe()
    }

    /// Check whether the active player may pick slot `index`
    ///
    /// Legal picks are the active player's own non-empty pits; stores and
    /// out-of-range indices are never legal.
    pub fn is_legal_pick(&self, index: usize) -> bool {
        self.active.owns_pit(index) && self.board.stones(index) > 0
    }

    /// All currently legal picks for the active player
    pub fn legal_picks(&self) -> ArrayVec<usize, PITS_PER_SIDE> {
        self.active
            .pits()
            .filter(|&i| self.board.stones(i) > 0)
            .collect()
    }

    /// Resolve a move from pit `index`
    ///
    /// Validates the pick itself rather than trusting the caller, then
    /// snapshots the position, sows, applies the capture rule, and either
    /// keeps the turn (last stone in the mover's store) or hands it over
    /// and resets the undo counter. Listeners are notified on success.
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if index >= NUM_SLOTS {
            return Err(MoveError::OutOfRange(index));
        }
        if Board::is_store(index) {
            return Err(MoveError::StoreSlot(index));
        }
        if !self.active.owns_pit(index) {
            return Err(MoveError::WrongSide(index));
        }
        if self.board.stones(index) == 0 {
            return Err(MoveError::EmptyPit(index));
        }

        self.saved = Some(Saved {
            board: self.board,
            active: self.active,
            undo_count: self.undo_count,
        });

        let mover = self.active;
        let sow = self.board.sow(index, mover);
        let captured = self.board.try_capture(sow.landing, mover);
        let free_turn = sow.landing == mover.store();

        if !free_turn {
            self.active = mover.other();
            self.undo_count = 0;
        }

        let outcome = MoveOutcome {
            player: mover,
            pit: index,
            landing: sow.landing,
            sown: sow.sown,
            captured,
            free_turn,
        };
        self.listeners.notify(GameEvent::Moved(outcome));
        Ok(outcome)
    }

    /// Pure end-of-game predicate: either side's six pits are all empty
    ///
    /// Does not sweep; call [`GameState::finish`] once to settle.
    pub fn is_game_over(&self) -> bool {
        self.board.side_empty(Player::A) || self.board.side_empty(Player::B)
    }

    /// One-time settlement: sweep remaining pit stones into their owner's
    /// store and compare the totals
    ///
    /// Intended to be called exactly once, after [`GameState::is_game_over`]
    /// turns true; the caller stops issuing moves afterwards.
    pub fn finish(&mut self) -> Winner {
        self.board.sweep();

        let a = self.board.store(Player::A);
        let b = self.board.store(Player::B);
        if a > b {
            Winner::PlayerA
        } else if b > a {
            Winner::PlayerB
        } else {
            Winner::Draw
        }
    }

    /// Revert the last applied move
    ///
    /// Succeeds only if a snapshot exists, the current board differs from
    /// it, and fewer than three undos were used in this turn window. On
    /// success the board, turn, and counter are restored from the snapshot,
    /// the counter is bumped (capped), and listeners are notified. Any
    /// failure is a silent `false`: no mutation, no notification.
    pub fn undo(&mut self) -> bool {
        let Some(saved) = self.saved else {
            return false;
        };
        if self.board == saved.board {
            return false;
        }
        if self.undo_count >= MAX_UNDOS_PER_TURN {
            return false;
        }

        self.board = saved.board;
        self.active = saved.active;
        self.undo_count = (saved.undo_count + 1).min(MAX_UNDOS_PER_TURN);

        self.listeners.notify(GameEvent::Undone {
            remaining: MAX_UNDOS_PER_TURN - self.undo_count,
        });
        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
