//! CLI command implementations
//!
//! Boot sequence for `serve`: resolve configuration, load the record
//! store (fatal if the data file is missing or malformed), then hand the
//! immutable store to the HTTP server. `check` stops after the load and
//! reports the record count.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::{log_event_with_fields, Event};
use crate::store::TodoStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(config.as_deref()),
        Command::Check { config } => check(config.as_deref()),
    }
}

/// Start the todo HTTP server.
pub fn serve(config_path: Option<&Path>) -> CliResult<()> {
    log_event_with_fields(Event::BootStart, &[]);

    let config = load_config(config_path)?;
    log_event_with_fields(Event::ConfigLoaded, &[("data_file", &config.data_file)]);

    let store = boot_store(&config)?;

    let addr = config.socket_addr();
    let server = HttpServer::with_config(config, Arc::new(store));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_error(format!("failed to create tokio runtime: {}", e)))?;

    log_event_with_fields(Event::ServeStart, &[("addr", &addr)]);

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::server_error(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Load the data file and report its record count.
pub fn check(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = boot_store(&config)?;

    println!(
        "{}",
        json!({
            "data_file": config.data_file,
            "todos": store.len(),
        })
    );

    Ok(())
}

/// Resolve configuration: defaults when no path was given, otherwise the
/// parsed and validated file.
fn load_config(path: Option<&Path>) -> CliResult<ServerConfig> {
    let config = match path {
        None => ServerConfig::default(),
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::config_error(format!("failed to read config: {}", e)))?;

            serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("invalid config JSON: {}", e)))?
        }
    };

    validate(&config)?;

    Ok(config)
}

/// Validate configuration
fn validate(config: &ServerConfig) -> CliResult<()> {
    if config.data_file.is_empty() {
        return Err(CliError::config_error("data_file must not be empty"));
    }
    if config.host.is_empty() {
        return Err(CliError::config_error("host must not be empty"));
    }
    Ok(())
}

/// Load the record store, logging the outcome either way.
fn boot_store(config: &ServerConfig) -> CliResult<TodoStore> {
    let store = TodoStore::load(config.data_path()).map_err(|e| {
        log_event_with_fields(Event::BootFailed, &[("error", &e.to_string())]);
        CliError::from(e)
    })?;

    let count = store.len().to_string();
    log_event_with_fields(Event::DataLoaded, &[("todos", &count)]);

    Ok(store)
}
