//! Command-line interface.

pub mod args;
pub mod commands;

pub use args::{BuildArgs, Cli, Commands, ServeArgs, StatusArgs, StatusFormat};
pub use commands::dispatcher::{Command, CommandDispatcher, CommandResult};
