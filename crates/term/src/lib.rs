//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! The board view paints into an off-screen canvas that a terminal backend
//! flushes in one pass; no widget or layout framework is involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Make the board view pure so its output can be asserted in tests
//! - Keep the look of the board swappable behind [`style::BoardStyle`]

pub mod board_view;
pub mod canvas;
pub mod renderer;
pub mod style;

pub use tui_mancala_core as core;
pub use tui_mancala_types as types;

pub use board_view::{Banner, BoardView, Hud, Viewport};
pub use canvas::{Canvas, Cell, Rgb, TextStyle};
pub use renderer::TerminalRenderer;
pub use style::{default_styles, BoardStyle, ClassicStyle, OceanStyle};
