//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] values plus the
//! two screen-specific queries the runner needs (setup-screen pit fill and
//! the quit chord).

pub mod map;

pub use tui_mancala_types as types;

pub use map::{handle_key_event, handle_setup_key, should_quit};
