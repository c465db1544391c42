//! Screen cursor bookkeeping.

/// A position on the screen plus whether it sits on a command line.
///
/// Cursors on a command line must never erase into the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based screen row
    pub row: u16,

    /// Zero-based screen column
    pub col: u16,

    /// Whether the cursor is on a line that starts with the prompt
    pub command_line: bool,
}

impl Cursor {
    /// A cursor at the top-left corner of a command line.
    pub fn command_line() -> Self {
        Self {
            command_line: true,
            ..Self::default()
        }
    }

    /// Moves to the first column of the next row.
    pub fn new_line(&mut self) {
        self.col = 0;
        self.row = self.row.saturating_add(1);
    }

    /// Moves one column right.
    pub fn right(&mut self) {
        self.col = self.col.saturating_add(1);
    }

    /// Moves one column left, stopping at the first column.
    pub fn left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    /// Whether the cell left of the cursor may be erased.
    ///
    /// `prompt_width` columns at the start of a command line are protected.
    pub fn can_erase(&self, prompt_width: u16) -> bool {
        let floor = if self.command_line { prompt_width } else { 0 };
        self.col > floor
    }
}
