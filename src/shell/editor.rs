//! Input line editing.

use super::terminal::Key;

/// What the session should do after a key was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Echo the character that was appended to the line
    Insert(char),
    /// Erase the last echoed character
    Erase,
    /// Show completions for the current line
    Complete(String),
    /// Run the submitted, trimmed line
    Submit(String),
    /// Leave the shell
    Quit,
    /// Nothing to do
    None,
}

/// The line being typed at the prompt.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    buffer: String,
}

impl LineEditor {
    /// Creates an editor with an empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current, unsubmitted line.
    pub fn line(&self) -> &str {
        &self.buffer
    }

    /// Applies `key` to the line.
    pub fn handle(&mut self, key: Key) -> EditorAction {
        match key {
            Key::Char(c) => {
                self.buffer.push(c);
                EditorAction::Insert(c)
            }
            Key::Backspace => match self.buffer.pop() {
                Some(_) => EditorAction::Erase,
                None => EditorAction::None,
            },
            Key::Tab => EditorAction::Complete(self.buffer.clone()),
            Key::Enter => {
                let line = self.buffer.trim().to_string();
                self.buffer.clear();
                EditorAction::Submit(line)
            }
            Key::Interrupt | Key::Eof => EditorAction::Quit,
        }
    }
}
