//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the complete rules engine for the 6-pit Kalah
//! variant of Mancala. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: The same move sequence always produces the same board
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: The 14-slot board with the sowing walk and settlement sweep
//! - [`game_state`]: Turn resolution, capture, free turns, and the bounded undo
//! - [`events`]: Synchronous change notification for attached listeners
//!
//! # Game Rules
//!
//! - **Sowing**: A picked pit is emptied and its stones are dropped one per
//!   slot counter-clockwise, skipping the opponent's store
//! - **Capture**: A last stone landing in an empty own-side pit claims the
//!   opposite pit's stones plus itself into the mover's store
//! - **Free turn**: A last stone landing in the mover's own store keeps the turn
//! - **Undo**: One snapshot deep, at most 3 uses per turn window
//! - **Game end**: Either side's six pits empty; remaining stones are swept
//!   into their owner's store by the one-time settlement
//!
//! # Example
//!
//! ```
//! use tui_mancala_core::GameState;
//!
//! let mut game = GameState::new();
//! game.new_game(4);
//!
//! // Player A empties pit 2: the last stone lands exactly in A's store,
//! // so A keeps the turn.
//! let outcome = game.apply_move(2).unwrap();
//! assert!(outcome.free_turn);
//! assert_eq!(game.active_player(), tui_mancala_core::types::Player::A);
//! ```

pub mod board;
pub mod events;
pub mod game_state;

pub use tui_mancala_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use events::{GameEvent, Listeners};
pub use game_state::{GameState, MoveError, MoveOutcome};
