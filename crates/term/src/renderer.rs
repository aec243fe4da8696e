//! TerminalRenderer: flushes the board canvas to a real terminal.
//!
//! Every frame is a full overwrite of the viewport. Redraws here happen per
//! key press rather than per animation tick, so there is nothing to gain
//! from diffing against the previous frame; the only optimization kept is
//! coalescing runs of identically-styled cells into one style change.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::canvas::{Canvas, Rgb, TextStyle};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Write every cell of `canvas` to the terminal.
    pub fn draw(&mut self, canvas: &Canvas) -> Result<()> {
        let mut active: Option<TextStyle> = None;

        for y in 0..canvas.rows() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..canvas.cols() {
                let cell = canvas.cell(x, y).unwrap_or_default();
                if active != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    active = Some(cell.style);
                }
                self.stdout.queue(Print(cell.glyph))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: TextStyle) -> Result<()> {
        // Reset first: SGR 0 would also wipe colors queued before it.
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout
            .queue(SetForegroundColor(term_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(term_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn term_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}
