//! BoardView: maps `core::GameState` onto the terminal canvas.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn in the physical arrangement: Player B's pits along
//! the top row counted right-to-left, Player A's pits along the bottom
//! counted left-to-right, with B's store on the left end and A's store on
//! the right end. Sowing therefore reads counter-clockwise on screen.

use crate::canvas::Canvas;
use crate::core::GameState;
use crate::style::BoardStyle;
use tui_mancala_types::{Player, Winner, MAX_UNDOS_PER_TURN, PITS_PER_SIDE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What the banner line under the board shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// Whose turn it is, plus the undo and fill readouts
    Turn,
    /// The new-game prompt
    Setup,
    /// The settled result
    Winner(Winner),
}

/// Presentation state that lives outside the engine.
#[derive(Debug, Clone, Copy)]
pub struct Hud<'a> {
    pub banner: Banner,
    /// One-line narration of the latest event or rejection
    pub message: &'a str,
    /// Pit fill chosen on the setup screen
    pub stones_per_pit: u8,
    /// Slot that received the last sown stone, highlighted on the board
    pub last_landing: Option<usize>,
}

/// Character cell geometry of the board drawing.
const PIT_CELL_W: u16 = 4;
const PIT_GAP: u16 = 2;
const STORE_CELL_W: u16 = 5;
const INNER_W: u16 = 2 * STORE_CELL_W
    + 2 * PIT_GAP
    + PITS_PER_SIDE as u16 * PIT_CELL_W
    + (PITS_PER_SIDE as u16 - 1) * PIT_GAP;
const FRAME_W: u16 = INNER_W + 2;
const FRAME_H: u16 = 7;
/// Frame plus a blank line and the three HUD lines.
const TOTAL_H: u16 = FRAME_H + 4;

/// A lightweight terminal renderer for the Mancala board.
#[derive(Debug, Default)]
pub struct BoardView;

impl BoardView {
    /// Render the current game state into a canvas.
    pub fn render(
        &self,
        state: &GameState,
        hud: &Hud,
        style: &dyn BoardStyle,
        viewport: Viewport,
    ) -> Canvas {
        let mut canvas = Canvas::new(viewport.width, viewport.height);
        canvas.wipe(style.background());

        let fx = viewport.width.saturating_sub(FRAME_W) / 2;
        let fy = viewport.height.saturating_sub(TOTAL_H) / 2;

        canvas.outline(fx, fy, FRAME_W, FRAME_H, style.frame());
        self.draw_labels(&mut canvas, fx, fy, style);
        self.draw_slots(&mut canvas, state, hud, fx, fy, style);
        self.draw_hud(&mut canvas, state, hud, fx, fy, style);

        canvas
    }

    /// Column of the pit at visual position `j` (0..5, left to right).
    fn pit_x(fx: u16, j: u16) -> u16 {
        fx + 1 + STORE_CELL_W + PIT_GAP + j * (PIT_CELL_W + PIT_GAP)
    }

    fn draw_labels(&self, canvas: &mut Canvas, fx: u16, fy: u16, style: &dyn BoardStyle) {
        let label = style.label();

        for j in 0..PITS_PER_SIDE as u16 {
            let x = Self::pit_x(fx, j);
            // Top row runs B6..B1, bottom row A1..A6.
            let top = format!("B{}", PITS_PER_SIDE as u16 - j);
            let bottom = format!("A{}", j + 1);
            canvas.write_centered(x, PIT_CELL_W, fy + 1, &top, label);
            canvas.write_centered(x, PIT_CELL_W, fy + 5, &bottom, label);
        }

        // Store letters sit over the left bin and under the right bin.
        canvas.write_centered(fx + 1, STORE_CELL_W, fy + 1, "B", label);
        canvas.write_centered(fx + 1 + INNER_W - STORE_CELL_W, STORE_CELL_W, fy + 5, "A", label);
    }

    fn draw_slots(
        &self,
        canvas: &mut Canvas,
        state: &GameState,
        hud: &Hud,
        fx: u16,
        fy: u16,
        style: &dyn BoardStyle,
    ) {
        let board = state.board();

        for j in 0..PITS_PER_SIDE {
            let x = Self::pit_x(fx, j as u16);

            let top_index = Player::B.pits().end - 1 - j;
            self.draw_pit(canvas, x, fy + 2, board.stones(top_index), top_index, hud, style);

            let bottom_index = j;
            self.draw_pit(canvas, x, fy + 4, board.stones(bottom_index), bottom_index, hud, style);
        }

        let left_x = fx + 1;
        let right_x = fx + 1 + INNER_W - STORE_CELL_W;
        self.draw_store(canvas, left_x, fy + 3, board.store(Player::B), Player::B, hud, style);
        self.draw_store(canvas, right_x, fy + 3, board.store(Player::A), Player::A, hud, style);
    }

    fn draw_pit(
        &self,
        canvas: &mut Canvas,
        x: u16,
        y: u16,
        count: u16,
        index: usize,
        hud: &Hud,
        style: &dyn BoardStyle,
    ) {
        let highlight = hud.last_landing == Some(index);
        let bracket = if highlight { style.accent() } else { style.pit() };
        let digits = if highlight { style.accent() } else { style.stones() };
        let (open, close) = style.pit_brackets();

        let text = format!("{:>2}", count);
        canvas.paint(x, y, open, bracket);
        canvas.write(x + 1, y, &text, digits);
        canvas.paint(x + 1 + text.chars().count() as u16, y, close, bracket);
    }

    fn draw_store(
        &self,
        canvas: &mut Canvas,
        x: u16,
        y: u16,
        count: u16,
        owner: Player,
        hud: &Hud,
        style: &dyn BoardStyle,
    ) {
        let highlight = hud.last_landing == Some(owner.store());
        let bracket = if highlight { style.accent() } else { style.store() };
        let digits = if highlight { style.accent() } else { style.stones() };
        let (open, close) = style.store_brackets();

        let text = format!("{:>3}", count);
        canvas.paint(x, y, open, bracket);
        canvas.write(x + 1, y, &text, digits);
        canvas.paint(x + 1 + text.chars().count() as u16, y, close, bracket);
    }

    fn draw_hud(
        &self,
        canvas: &mut Canvas,
        state: &GameState,
        hud: &Hud,
        fx: u16,
        fy: u16,
        style: &dyn BoardStyle,
    ) {
        let banner_y = fy + FRAME_H + 1;

        match hud.banner {
            Banner::Turn => {
                let turn = format!("▶ {} to move", state.active_player().name());
                canvas.write(fx, banner_y, &turn, style.accent());

                let readout = format!(
                    "undo {}/{}   stones/pit {}",
                    state.undo_count(),
                    MAX_UNDOS_PER_TURN,
                    hud.stones_per_pit
                );
                let x = fx + FRAME_W.saturating_sub(readout.chars().count() as u16);
                canvas.write(x, banner_y, &readout, style.label());
            }
            Banner::Setup => {
                canvas.write_centered(
                    fx,
                    FRAME_W,
                    banner_y,
                    "NEW GAME - stones per pit? press 3 or 4",
                    style.accent(),
                );
            }
            Banner::Winner(winner) => {
                let text = format!("{} - press n for a new game", winner.describe());
                canvas.write_centered(fx, FRAME_W, banner_y, &text, style.accent());
            }
        }

        canvas.write(fx, banner_y + 1, hud.message, style.stones());
        canvas.write(
            fx,
            banner_y + 2,
            "[1-6] pick pit  [u] undo  [n] new game  [s] style  [q] quit",
            style.label(),
        );
    }
}
