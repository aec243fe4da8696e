//! Terminal Mancala runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a canvas-based renderer. The loop is
//! fully event-driven: the game is turn-based, so there are no timers and
//! nothing to animate between key presses.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_mancala::core::{GameEvent, GameState};
use tui_mancala::input::{handle_key_event, handle_setup_key, should_quit};
use tui_mancala::term::{default_styles, Banner, BoardView, Hud, TerminalRenderer, Viewport};
use tui_mancala::types::{GameAction, Winner, DEFAULT_STONES_PER_PIT};

/// Which layer of the UI currently owns the keyboard.
#[derive(Debug, Clone, Copy)]
enum Screen {
    Setup,
    Playing,
    Finished(Winner),
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new();
    let events = game.subscribe();

    let view = BoardView::default();
    let styles = default_styles();
    let mut style_index = 0;

    let mut screen = Screen::Setup;
    let mut stones_per_pit = DEFAULT_STONES_PER_PIT;
    let mut message = String::new();
    let mut last_landing = None;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = Hud {
            banner: match screen {
                Screen::Setup => Banner::Setup,
                Screen::Playing => Banner::Turn,
                Screen::Finished(winner) => Banner::Winner(winner),
            },
            message: &message,
            stones_per_pit,
            last_landing,
        };
        let frame = view.render(&game, &hud, styles[style_index].as_ref(), Viewport::new(w, h));
        term.draw(&frame)?;

        // Input. Blocking read: nothing changes without a key press.
        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        if should_quit(key) {
            return Ok(());
        }

        match screen {
            Screen::Setup => {
                if let Some(stones) = handle_setup_key(key) {
                    stones_per_pit = stones;
                    last_landing = None;
                    game.new_game(stones);
                    screen = Screen::Playing;
                }
            }
            Screen::Playing => match handle_key_event(key) {
                Some(GameAction::SelectPit(n)) => {
                    let index = game.active_player().pit(n);
                    match game.apply_move(index) {
                        Ok(outcome) => {
                            last_landing = Some(outcome.landing);
                            if game.is_game_over() {
                                screen = Screen::Finished(game.finish());
                            }
                        }
                        Err(err) => message = err.to_string(),
                    }
                }
                Some(GameAction::Undo) => {
                    if game.undo() {
                        last_landing = None;
                    } else {
                        message =
                            "Cannot undo now (max 3 per turn, and not twice in a row).".to_string();
                    }
                }
                Some(GameAction::NewGame) => {
                    screen = Screen::Setup;
                    message.clear();
                }
                Some(GameAction::CycleStyle) => {
                    style_index = (style_index + 1) % styles.len();
                }
                None => {}
            },
            Screen::Finished(_) => match handle_key_event(key) {
                Some(GameAction::NewGame) => {
                    screen = Screen::Setup;
                    message.clear();
                    last_landing = None;
                }
                Some(GameAction::CycleStyle) => {
                    style_index = (style_index + 1) % styles.len();
                }
                _ => {}
            },
        }

        // Narrate engine events on the message line.
        while let Ok(event) = events.try_recv() {
            message = describe_event(&event);
        }
    }
}

fn describe_event(event: &GameEvent) -> String {
    match event {
        GameEvent::NewGame { stones_per_pit } => {
            format!("New game: {} stones per pit. Player A starts.", stones_per_pit)
        }
        GameEvent::Moved(outcome) if outcome.captured > 0 => format!(
            "{} captured {} stones.",
            outcome.player.name(),
            outcome.captured
        ),
        GameEvent::Moved(outcome) if outcome.free_turn => {
            format!("{} goes again.", outcome.player.name())
        }
        GameEvent::Moved(outcome) => {
            format!("{} sowed {} stones.", outcome.player.name(), outcome.sown)
        }
        GameEvent::Undone { remaining } => {
            format!("Move undone ({} undo(s) left this turn).", remaining)
        }
    }
}
