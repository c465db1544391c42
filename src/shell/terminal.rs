//! Terminal I/O seam.
//!
//! The session only needs to read keys and place characters at screen
//! positions. [`Terminal`] is that interface; [`CrosstermTerminal`] is the
//! raw-mode implementation used by the binary.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

/// Keys the shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character, including space
    Char(char),
    /// Request completion
    Tab,
    /// Submit the line
    Enter,
    /// Erase the previous character
    Backspace,
    /// Ctrl-C
    Interrupt,
    /// Ctrl-D
    Eof,
}

/// Cell-addressed terminal used by the shell session.
pub trait Terminal {
    /// Blocks until the next key the shell understands.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Draws `ch` at (`row`, `col`).
    fn put_char(&mut self, row: u16, col: u16, ch: char) -> io::Result<()>;

    /// Blanks the cell at (`row`, `col`).
    fn clear_cell(&mut self, row: u16, col: u16) -> io::Result<()>;

    /// Moves the visible cursor.
    fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()>;

    /// Pushes pending output to the screen.
    fn flush(&mut self) -> io::Result<()>;
}

/// Raw-mode terminal on the alternate screen.
///
/// The terminal is restored when the value is dropped.
#[derive(Debug)]
pub struct CrosstermTerminal {
    out: Stdout,
}

impl CrosstermTerminal {
    /// Switches the terminal into raw mode on a cleared alternate screen.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Clear(ClearType::All), MoveTo(0, 0)) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out })
    }

    fn translate(event: KeyEvent) -> Option<Key> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Tab => Some(Key::Tab),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Char('c') if ctrl => Some(Key::Interrupt),
            KeyCode::Char('d') if ctrl => Some(Key::Eof),
            KeyCode::Char(c) if !ctrl => Some(Key::Char(c)),
            _ => None,
        }
    }
}

impl Terminal for CrosstermTerminal {
    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key_event) = event::read()? {
                if let Some(key) = Self::translate(key_event) {
                    return Ok(key);
                }
            }
        }
    }

    fn put_char(&mut self, row: u16, col: u16, ch: char) -> io::Result<()> {
        queue!(self.out, MoveTo(col, row), Print(ch))
    }

    fn clear_cell(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(col, row), Print(' '))
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(col, row))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
