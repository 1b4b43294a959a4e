//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::{init_logging, LogConfig};
use crate::store::{BookmarkStore, MemoryBookmarkStore, SqliteBookmarkStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve {
            config,
            port,
            memory,
        } => serve(&config, port, memory),
    }
}

/// Create the SQLite database and bookmarks table
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = ServerConfig::load(config_path)?;
    if config.in_memory() {
        return Err(CliError::config_error(
            "database_path is \":memory:\"; nothing to initialize",
        ));
    }

    SqliteBookmarkStore::open(&config.database_path)?;
    println!("Initialized bookmark database at {}", config.database_path);
    Ok(())
}

/// Open the configured store
pub fn open_store(config: &ServerConfig, memory: bool) -> CliResult<Arc<dyn BookmarkStore>> {
    if memory {
        return Ok(Arc::new(MemoryBookmarkStore::new()));
    }
    let store = if config.in_memory() {
        SqliteBookmarkStore::open_in_memory()?
    } else {
        SqliteBookmarkStore::open(&config.database_path)?
    };
    Ok(Arc::new(store))
}

/// Start the HTTP server
///
/// 1. Load configuration and apply overrides
/// 2. Install logging
/// 3. Open the store
/// 4. Serve until the process is stopped
pub fn serve(config_path: &Path, port: Option<u16>, memory: bool) -> CliResult<()> {
    let mut config = ServerConfig::load(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    init_logging(&LogConfig {
        level: config.log_level.clone(),
        json: config.log_json,
    });

    let store = open_store(&config, memory)?;
    let database = if memory { "memory" } else { config.database_path.as_str() };
    tracing::info!(database, "bookmark store opened");

    let server = HttpServer::new(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}
