//! Commands the shell handles itself.

use std::str::FromStr;

/// Name used when the current user cannot be determined.
const UNKNOWN_USER: &str = "stranger";

/// A built-in command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Leave the shell
    Bye,
    /// Greet the current user
    Ciao,
}

/// Result of running a built-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltinOutcome {
    /// End the session
    Exit,
    /// Print text and continue
    Print(String),
}

impl Builtin {
    /// Runs the built-in.
    pub fn execute(self) -> BuiltinOutcome {
        match self {
            Builtin::Bye => BuiltinOutcome::Exit,
            Builtin::Ciao => BuiltinOutcome::Print(greeting(&current_username())),
        }
    }
}

impl FromStr for Builtin {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "bye" => Ok(Builtin::Bye),
            "ciao" => Ok(Builtin::Ciao),
            _ => Err(()),
        }
    }
}

/// The `ciao` greeting for `user`.
pub fn greeting(user: &str) -> String {
    format!("ciao {user}")
}

fn current_username() -> String {
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}
