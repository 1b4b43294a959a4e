//! CLI module for bookmarkd
//!
//! Provides command-line interface for:
//! - init: Create the database file and table
//! - serve: Run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, open_store, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
