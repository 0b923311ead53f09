//! CLI module for todosvc
//!
//! Provides the command-line interface:
//! - serve: load the store and run the HTTP server
//! - check: load the store, report the record count, exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
