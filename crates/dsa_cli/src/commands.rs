//! The `dsa` subcommands.

use crate::{CommandError, Invocation};
use dsa_recursion::{checked_fibonacci, is_valid_palindrome, reverse_sequence};

/// One parsed subcommand with its operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Fibonacci(i64),
    Palindrome(String),
    Reverse(Vec<String>),
    Help,
    Version,
}

impl Command {
    /// Resolve the command word and operands of `invocation`.
    ///
    /// A missing command word means `help`.
    pub fn from_invocation(invocation: &Invocation) -> Result<Self, CommandError> {
        let operands = &invocation.operands;
        match invocation.command.as_deref() {
            None | Some("help" | "--help" | "-h") => Ok(Command::Help),
            Some("version" | "--version") => Ok(Command::Version),
            Some("fib" | "fibonacci") => {
                let Some(raw) = operands.first() else {
                    return Err(CommandError::MissingArgument {
                        command: "fib",
                        expected: "an index <n>",
                    });
                };
                let n = raw
                    .parse::<i64>()
                    .map_err(|err| CommandError::InvalidNumber {
                        input: raw.clone(),
                        reason: err.to_string(),
                    })?;
                Ok(Command::Fibonacci(n))
            }
            Some("palindrome") => {
                let Some(text) = operands.first() else {
                    return Err(CommandError::MissingArgument {
                        command: "palindrome",
                        expected: "a <text> to check",
                    });
                };
                Ok(Command::Palindrome(text.clone()))
            }
            Some("reverse") => Ok(Command::Reverse(operands.clone())),
            Some(other) => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    /// Run the command and return what it prints on stdout.
    pub fn run(self) -> Result<String, CommandError> {
        tracing::debug!(command = ?self, "running");
        match self {
            Command::Fibonacci(n) => Ok(checked_fibonacci(n)?.to_string()),
            Command::Palindrome(text) => Ok(is_valid_palindrome(&text).to_string()),
            Command::Reverse(mut items) => Ok(reverse_sequence(&mut items).join(" ")),
            Command::Help => Ok(usage()),
            Command::Version => Ok(format!("dsa {}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

/// Usage text for `dsa help`.
pub fn usage() -> String {
    [
        "Recursion exercises",
        "",
        "Usage: dsa <command> [options]",
        "",
        "Commands:",
        "  fib <n>              Print the n-th Fibonacci number (0 <= n <= 93)",
        "  palindrome <text>    Print whether <text> reads the same both ways",
        "  reverse <items...>   Print the items in reverse order",
        "  help                 Show this help message",
        "  version              Show version information",
        "",
        "Options:",
        "  --verbose, -v        Log at debug level (RUST_LOG takes precedence)",
        "",
        "Examples:",
        "  dsa fib 6                  # 8",
        "  dsa palindrome 1221        # true",
        "  dsa reverse a b c          # c b a",
    ]
    .join("\n")
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
