//! Invocation parsing.
//!
//! Global flags may appear anywhere on the command line. Everything else is
//! positional: the first word names the command, the rest are its operands.
//! Operands that merely start with `-` (such as `-3`) are kept, so a negative
//! index reaches the command and is rejected there with a proper error.

/// Settings shared by every command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log at `debug` level when `RUST_LOG` is not set.
    pub verbose: bool,
}

/// A parsed command line, minus the program name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    pub config: CliConfig,
    pub command: Option<String>,
    pub operands: Vec<String>,
}

impl Invocation {
    /// Parse the arguments following the program name.
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut invocation = Invocation::default();
        for arg in args {
            if arg == "--verbose" || arg == "-v" {
                invocation.config.verbose = true;
            } else if invocation.command.is_none() {
                invocation.command = Some(arg);
            } else {
                invocation.operands.push(arg);
            }
        }
        invocation
    }
}
