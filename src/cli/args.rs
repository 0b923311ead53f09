//! CLI argument definitions using clap
//!
//! Commands:
//! - todosvc serve [--config <path>]
//! - todosvc check [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// todosvc - a read-only HTTP API over a fixed collection of todo records
#[derive(Parser, Debug)]
#[command(name = "todosvc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the todo HTTP server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Load the todo data file, report its record count, and exit
    Check {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
