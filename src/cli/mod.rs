//! CLI module for reportd
//!
//! Provides the command-line interface:
//! - serve: load the schema, build the server, enter the serving loop
//! - seed: one-time database creation and sample data insertion

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
