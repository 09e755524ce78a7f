//! Jobwatch - job dashboard backend
//!
//! Main entry point for the Jobwatch CLI and server.

mod cli;
mod server;

use clap::Parser;

use jobwatch_config::ConfigLoader;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load_or_default(&cli.config)?;

    match cli.command {
        Some(Commands::Check) => server::check_config(&cli.config, &config),
        None => {
            server::init_tracing(&config.logging)?;
            server::run_server(config).await
        }
        Some(Commands::Run { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::init_tracing(&config.logging)?;
            server::run_server(config).await
        }
    }
}
