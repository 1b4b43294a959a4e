//! CLI argument definitions using clap
//!
//! Commands:
//! - bookmarkd init --config <path>
//! - bookmarkd serve --config <path> [--port <port>] [--memory]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bookmarkd - HTTP service for managing bookmarks
#[derive(Parser, Debug)]
#[command(name = "bookmarkd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database file and bookmarks table
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./bookmarkd.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./bookmarkd.json")]
        config: PathBuf,

        /// Port to listen on, overriding the config file
        #[arg(long)]
        port: Option<u16>,

        /// Keep bookmarks in memory instead of SQLite
        #[arg(long)]
        memory: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["bookmarkd", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, port, memory } => {
                assert_eq!(config, PathBuf::from("./bookmarkd.json"));
                assert_eq!(port, None);
                assert!(!memory);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_serve_overrides() {
        let cli =
            Cli::try_parse_from(["bookmarkd", "serve", "--port", "9000", "--memory"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Serve {
                port: Some(9000),
                memory: true,
                ..
            }
        ));
    }
}
