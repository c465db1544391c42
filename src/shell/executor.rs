//! External command execution.

use std::io;
use std::process::{Command, Stdio};

/// Captured output of an external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output followed by standard error
    pub output: Vec<u8>,

    /// Whether the process exited successfully
    pub success: bool,
}

/// Runs external programs on behalf of the shell.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Runs `program` with `args` to completion.
    ///
    /// An `Err` means the program could not be started at all.
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Runs programs as child processes of the shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        Ok(CommandOutput {
            output: combined,
            success: output.status.success(),
        })
    }
}
