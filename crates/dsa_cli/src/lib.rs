//! Command-line driver for the recursion exercises.
//!
//! Parses the `dsa` invocation, sets up logging, and runs one exercise per
//! call, returning its printable result. The binary in `main.rs` is a thin
//! shell over [`Invocation::parse`], [`init_tracing`] and [`Command::run`].

pub mod commands;
pub mod config;
mod error;
mod logging;

pub use commands::{usage, Command};
pub use config::{CliConfig, Invocation};
pub use error::CommandError;
pub use logging::init_tracing;
