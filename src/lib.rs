//! TUI Mancala (workspace facade crate).
//!
//! This package keeps the `tui_mancala::{core,input,term,types}` public API
//! stable while the implementation lives in dedicated crates under `crates/`.

pub use tui_mancala_core as core;
pub use tui_mancala_input as input;
pub use tui_mancala_term as term;
pub use tui_mancala_types as types;
