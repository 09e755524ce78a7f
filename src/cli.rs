//! CLI definitions for Jobwatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Jobwatch CLI.
#[derive(Parser)]
#[command(name = "jobwatch")]
#[command(about = "File-sensing and filtering job dashboard backend")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true, env = "JOBWATCH_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the server in foreground (default)
    Run {
        /// Override `server.host`
        #[arg(long)]
        host: Option<String>,

        /// Override `server.port`
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate the configuration, then exit
    Check,
}
