//! Crossterm-backed [`DisplaySurface`].
//!
//! The screen is drawn on stderr so stdout only ever carries the final result. That is also
//! why the cursor is tracked here instead of asked for: crossterm sends its position query
//! to stdout.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};
use std::io::{self, Stderr, Write};

use crate::collector::{DisplaySurface, Key};

/// Raw mode plus the alternate screen, held for as long as this value lives.
///
/// Dropping it restores the terminal, so every way out of the collection loop (errors and
/// panics included) leaves the shell usable.
pub struct TerminalSurface {
    out: Stderr,
    cursor: (u16, u16),
}

impl TerminalSurface {
    pub fn acquire() -> io::Result<TerminalSurface> {
        // Logs share stderr with the screen, so none until it's released.
        debug!("Acquiring terminal");
        terminal::enable_raw_mode()?;

        // From here on Drop undoes raw mode, even if the next step fails.
        let mut surface = TerminalSurface {
            out: io::stderr(),
            cursor: (0, 0),
        };
        execute!(surface.out, terminal::EnterAlternateScreen, cursor::MoveTo(0, 0), cursor::Show)?;

        Ok(surface)
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        // Nothing useful to do with a failure while tearing down.
        let _ = execute!(self.out, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        debug!("Terminal released");
    }
}

fn translate(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let key = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Abort,
        KeyCode::Esc => Key::Abort,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    };

    Some(key)
}

impl DisplaySurface for TerminalSurface {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))
    }

    fn write_at(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(col, row), Print(text))?;
        self.cursor = (row, col.saturating_add(text.chars().count() as u16));

        Ok(())
    }

    fn cursor_position(&mut self) -> io::Result<(u16, u16)> {
        Ok(self.cursor)
    }

    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(col, row))?;
        self.cursor = (row, col);

        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key_event) = event::read()? {
                if let Some(key) = translate(key_event) {
                    return Ok(key);
                }
            }
        }
    }
}
