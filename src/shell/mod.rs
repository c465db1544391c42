//! Interactive shell around the completion engine.
//!
//! The pieces are deliberately small: [`Cursor`] tracks screen positions,
//! [`LineEditor`] turns keys into actions, [`Builtin`] covers the commands
//! the shell answers itself, [`CommandRunner`] starts everything else and
//! [`Terminal`] is the only thing that touches the real screen.

pub mod builtins;
pub mod cursor;
pub mod editor;
pub mod executor;
pub mod session;
pub mod terminal;

pub use builtins::{Builtin, BuiltinOutcome};
pub use cursor::Cursor;
pub use editor::{EditorAction, LineEditor};
pub use executor::{CommandOutput, CommandRunner, SystemCommandRunner};
pub use session::{Flow, Shell};
pub use terminal::{CrosstermTerminal, Key, Terminal};
