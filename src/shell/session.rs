//! The interactive session loop.
//!
//! A [`Shell`] owns the screen cursor and the line being typed. It reads keys
//! from a [`Terminal`], completes against a borrowed [`CompletionTable`],
//! runs built-ins itself and hands everything else to a [`CommandRunner`].
//!
//! Suggestions are drawn on the row below the command line and wiped as soon
//! as the next key arrives.

use tracing::{debug, info};

use super::builtins::{Builtin, BuiltinOutcome};
use super::cursor::Cursor;
use super::editor::{EditorAction, LineEditor};
use super::executor::CommandRunner;
use super::terminal::{Key, Terminal};
use crate::completion::CompletionTable;
use crate::config::completion::CompletionConfig;
use crate::config::shell::ShellConfig;
use crate::error::GoshResult;

/// Whether the session keeps going after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Wait for the next key
    Continue,
    /// Leave the session
    Exit,
}

/// An interactive shell session.
#[derive(Debug)]
pub struct Shell<'a, T, R> {
    terminal: T,
    runner: R,
    completions: &'a CompletionTable,
    shell_config: ShellConfig,
    sort_suggestions: bool,
    editor: LineEditor,
    cursor: Cursor,
    /// End of the suggestion row currently on screen
    suggestion_end: Option<Cursor>,
    prompt_width: u16,
}

impl<'a, T, R> Shell<'a, T, R>
where
    T: Terminal,
    R: CommandRunner,
{
    /// Creates a session drawing on `terminal`.
    pub fn new(
        terminal: T,
        runner: R,
        completions: &'a CompletionTable,
        shell_config: ShellConfig,
        completion_config: &CompletionConfig,
    ) -> Self {
        let prompt_width = u16::try_from(shell_config.prompt.chars().count()).unwrap_or(u16::MAX);
        Self {
            terminal,
            runner,
            completions,
            shell_config,
            sort_suggestions: completion_config.sort_suggestions,
            editor: LineEditor::new(),
            cursor: Cursor::command_line(),
            suggestion_end: None,
            prompt_width,
        }
    }

    /// Runs until `bye`, Ctrl-C or Ctrl-D.
    pub fn run(&mut self) -> GoshResult<()> {
        info!("Session started");
        self.print_prompt()?;
        self.sync_cursor()?;

        loop {
            let key = self.terminal.read_key()?;
            if self.handle_key(key)? == Flow::Exit {
                break;
            }
        }

        info!("Session ended");
        Ok(())
    }

    /// Applies a single key and redraws.
    pub fn handle_key(&mut self, key: Key) -> GoshResult<Flow> {
        self.clear_suggestions()?;

        let flow = match self.editor.handle(key) {
            EditorAction::Insert(c) => {
                self.cursor.command_line = true;
                self.print(c.encode_utf8(&mut [0; 4]))?;
                Flow::Continue
            }
            EditorAction::Erase => {
                self.erase_previous()?;
                Flow::Continue
            }
            EditorAction::Complete(line) => {
                self.show_suggestions(&line)?;
                Flow::Continue
            }
            EditorAction::Submit(line) => self.submit(&line)?,
            EditorAction::Quit => Flow::Exit,
            EditorAction::None => Flow::Continue,
        };

        self.sync_cursor()?;
        Ok(flow)
    }

    /// The terminal the session draws on.
    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// The current screen cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn show_suggestions(&mut self, line: &str) -> GoshResult<()> {
        let mut suggestions = self.completions.complete(line);
        if self.sort_suggestions {
            suggestions.sort();
        }
        debug!(line, count = suggestions.len(), "Completion requested");

        let command_cursor = self.cursor;
        self.cursor.new_line();
        self.cursor.command_line = false;

        let separator = self.shell_config.suggestion_separator.clone();
        for suggestion in &suggestions {
            self.print(suggestion)?;
            self.print(&separator)?;
        }

        self.suggestion_end = Some(self.cursor);
        self.cursor = command_cursor;
        Ok(())
    }

    fn clear_suggestions(&mut self) -> GoshResult<()> {
        if let Some(mut end) = self.suggestion_end.take() {
            while end.col > 0 {
                end.left();
                self.terminal.clear_cell(end.row, end.col)?;
            }
        }
        Ok(())
    }

    fn submit(&mut self, line: &str) -> GoshResult<Flow> {
        let mut tokens = line.split_whitespace();
        if let Some(program) = tokens.next() {
            let args: Vec<String> = tokens.map(str::to_string).collect();

            match program.parse::<Builtin>() {
                Ok(builtin) => {
                    debug!(?builtin, "Running builtin");
                    self.cursor.new_line();
                    match builtin.execute() {
                        BuiltinOutcome::Exit => return Ok(Flow::Exit),
                        BuiltinOutcome::Print(text) => self.print(&text)?,
                    }
                }
                Err(()) => self.run_external(program, &args)?,
            }
        }

        self.cursor.new_line();
        self.print_prompt()?;
        Ok(Flow::Continue)
    }

    fn run_external(&mut self, program: &str, args: &[String]) -> GoshResult<()> {
        self.cursor.command_line = false;
        match self.runner.run(program, args) {
            Ok(result) => {
                debug!(program, success = result.success, "Command finished");
                let text = String::from_utf8_lossy(&result.output);
                let text = text.trim_end_matches('\n');
                if !text.is_empty() {
                    self.cursor.new_line();
                    self.print(text)?;
                }
            }
            Err(e) => {
                debug!(program, error = %e, "Failed to start command");
                self.cursor.new_line();
                self.print(&format!("gosh: command not found: {program}"))?;
            }
        }
        Ok(())
    }

    fn print_prompt(&mut self) -> GoshResult<()> {
        self.cursor.command_line = true;
        let prompt = self.shell_config.prompt.clone();
        self.print(&prompt)
    }

    fn erase_previous(&mut self) -> GoshResult<()> {
        if self.cursor.can_erase(self.prompt_width) {
            self.cursor.left();
            self.terminal.clear_cell(self.cursor.row, self.cursor.col)?;
        }
        Ok(())
    }

    /// Draws `text` from the cursor, following embedded newlines.
    fn print(&mut self, text: &str) -> GoshResult<()> {
        for c in text.chars() {
            match c {
                '\n' => self.cursor.new_line(),
                '\r' => {}
                c => {
                    self.terminal.put_char(self.cursor.row, self.cursor.col, c)?;
                    self.cursor.right();
                }
            }
        }
        Ok(())
    }

    fn sync_cursor(&mut self) -> GoshResult<()> {
        self.terminal.move_cursor(self.cursor.row, self.cursor.col)?;
        self.terminal.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::executor::{CommandOutput, MockCommandRunner};
    use std::collections::{HashMap, VecDeque};
    use std::io;

    /// Screen that records cells instead of drawing them.
    #[derive(Debug, Default)]
    struct FakeTerminal {
        keys: VecDeque<Key>,
        cells: HashMap<(u16, u16), char>,
    }

    impl FakeTerminal {
        fn row(&self, row: u16) -> String {
            let width = self
                .cells
                .keys()
                .filter(|(r, _)| *r == row)
                .map(|(_, c)| c + 1)
                .max()
                .unwrap_or(0);
            (0..width)
                .map(|col| self.cells.get(&(row, col)).copied().unwrap_or(' '))
                .collect::<String>()
                .trim_end()
                .to_string()
        }
    }

    impl Terminal for FakeTerminal {
        fn read_key(&mut self) -> io::Result<Key> {
            Ok(self.keys.pop_front().unwrap_or(Key::Eof))
        }

        fn put_char(&mut self, row: u16, col: u16, ch: char) -> io::Result<()> {
            self.cells.insert((row, col), ch);
            Ok(())
        }

        fn clear_cell(&mut self, row: u16, col: u16) -> io::Result<()> {
            self.cells.remove(&(row, col));
            Ok(())
        }

        fn move_cursor(&mut self, _row: u16, _col: u16) -> io::Result<()> {
            Ok(())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn table() -> CompletionTable {
        [("ls", vec!["-l", "-la", "-a"])].into_iter().collect()
    }

    fn sorted_config() -> CompletionConfig {
        CompletionConfig {
            sort_suggestions: true,
            ..CompletionConfig::default()
        }
    }

    fn type_line<T: Terminal, R: CommandRunner>(shell: &mut Shell<'_, T, R>, text: &str) {
        for c in text.chars() {
            shell.handle_key(Key::Char(c)).unwrap();
        }
    }

    #[test]
    fn test_external_command_output_is_printed() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|program, args| program == "echo" && args.len() == 1 && args[0] == "hi")
            .times(1)
            .returning(|_, _| {
                Ok(CommandOutput {
                    output: b"hi\n".to_vec(),
                    success: true,
                })
            });
        let table = table();
        let mut shell = Shell::new(
            FakeTerminal::default(),
            runner,
            &table,
            ShellConfig::default(),
            &sorted_config(),
        );

        shell.print_prompt().unwrap();
        type_line(&mut shell, "echo hi");
        assert_eq!(shell.handle_key(Key::Enter).unwrap(), Flow::Continue);

        assert_eq!(shell.terminal().row(0), "??echo hi");
        assert_eq!(shell.terminal().row(1), "hi");
        assert_eq!(shell.terminal().row(2), "??");
    }

    #[test]
    fn test_unstartable_command_reports_not_found() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(|_, _| Err(io::Error::new(io::ErrorKind::NotFound, "missing")));
        let table = table();
        let mut shell = Shell::new(
            FakeTerminal::default(),
            runner,
            &table,
            ShellConfig::default(),
            &sorted_config(),
        );

        shell.print_prompt().unwrap();
        type_line(&mut shell, "nope");
        shell.handle_key(Key::Enter).unwrap();

        assert_eq!(shell.terminal().row(1), "gosh: command not found: nope");
    }

    #[test]
    fn test_bye_does_not_run_anything() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(0);
        let table = table();
        let mut shell = Shell::new(
            FakeTerminal::default(),
            runner,
            &table,
            ShellConfig::default(),
            &sorted_config(),
        );

        type_line(&mut shell, "bye");

        assert_eq!(shell.handle_key(Key::Enter).unwrap(), Flow::Exit);
    }

    #[test]
    fn test_tab_draws_and_clears_suggestions() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(0);
        let table = table();
        let mut shell = Shell::new(
            FakeTerminal::default(),
            runner,
            &table,
            ShellConfig::default(),
            &sorted_config(),
        );

        shell.print_prompt().unwrap();
        type_line(&mut shell, "ls -l");
        let before = shell.cursor();
        shell.handle_key(Key::Tab).unwrap();

        assert_eq!(shell.terminal().row(1), "-l -la");
        assert_eq!(shell.cursor(), before);

        shell.handle_key(Key::Char('a')).unwrap();
        assert_eq!(shell.terminal().row(1), "");
        assert_eq!(shell.terminal().row(0), "??ls -la");
    }

    #[test]
    fn test_backspace_stops_at_prompt() {
        let runner = MockCommandRunner::new();
        let table = table();
        let mut shell = Shell::new(
            FakeTerminal::default(),
            runner,
            &table,
            ShellConfig::default(),
            &sorted_config(),
        );

        shell.print_prompt().unwrap();
        type_line(&mut shell, "l");
        shell.handle_key(Key::Backspace).unwrap();
        shell.handle_key(Key::Backspace).unwrap();

        assert_eq!(shell.terminal().row(0), "??");
        assert_eq!(shell.cursor().col, 2);
    }
}
