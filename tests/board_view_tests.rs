//! Board view tests - rendered output checked as plain text

use tui_mancala::core::{Board, GameState};
use tui_mancala::term::{Banner, BoardView, Canvas, Hud, OceanStyle, Viewport};
use tui_mancala::types::{Player, Winner, NUM_SLOTS};

fn find_line(canvas: &Canvas, needle: &str) -> Option<String> {
    (0..canvas.rows())
        .map(|y| canvas.line(y))
        .find(|line| line.contains(needle))
}

fn hud() -> Hud<'static> {
    Hud {
        banner: Banner::Turn,
        message: "",
        stones_per_pit: 3,
        last_landing: None,
    }
}

#[test]
fn test_fresh_board_renders_counts_and_stores() {
    let mut game = GameState::new();
    game.new_game(3);

    let canvas = BoardView::default().render(&game, &hud(), &OceanStyle, Viewport::new(80, 24));

    // Ocean style draws pits as <..> and stores as {..}.
    let pits = find_line(&canvas, "< 3>").expect("pit row");
    assert_eq!(pits.matches("< 3>").count(), 6);
    let stores = find_line(&canvas, "{  0}").expect("store row");
    assert_eq!(stores.matches("{  0}").count(), 2);
}

#[test]
fn test_position_renders_individual_counts() {
    let mut slots = [0u16; NUM_SLOTS];
    slots[0] = 12;
    slots[9] = 5;
    slots[6] = 21;
    let game = GameState::from_position(Board::from_slots(slots), Player::B);

    let canvas = BoardView::default().render(&game, &hud(), &OceanStyle, Viewport::new(80, 24));

    assert!(find_line(&canvas, "<12>").is_some(), "A1 shows 12");
    assert!(find_line(&canvas, "< 5>").is_some(), "B3 shows 5");
    assert!(find_line(&canvas, "{ 21}").is_some(), "A's store shows 21");
    assert!(find_line(&canvas, "Player B to move").is_some());
}

#[test]
fn test_winner_banner_renders() {
    let mut game = GameState::new();
    game.new_game(3);
    let winner = Hud {
        banner: Banner::Winner(Winner::Draw),
        ..hud()
    };

    let canvas = BoardView::default().render(&game, &winner, &OceanStyle, Viewport::new(80, 24));

    assert!(find_line(&canvas, "draw - press n for a new game").is_some());
}

#[test]
fn test_help_line_renders() {
    let mut game = GameState::new();
    game.new_game(3);

    let canvas = BoardView::default().render(&game, &hud(), &OceanStyle, Viewport::new(80, 24));

    let help = find_line(&canvas, "[1-6] pick pit").expect("help row");
    assert!(help.contains("[q] quit"));
}
