use dsa_recursion::RecursionError;
use thiserror::Error;

/// Failure of a `dsa` command, reported on stderr with exit status 1.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing argument: `{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid number `{input}`: {reason}")]
    InvalidNumber { input: String, reason: String },

    #[error(transparent)]
    Recursion(#[from] RecursionError),
}

impl CommandError {
    /// Whether the usage text should follow the error message.
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            CommandError::UnknownCommand(_) | CommandError::MissingArgument { .. }
        )
    }
}
