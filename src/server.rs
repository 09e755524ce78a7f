//! Server initialization and startup logic for Jobwatch.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobwatch_api::{AppState, InterfaceConfig, InterfaceServer};
use jobwatch_config::{Config, ConfigValidator, LoggingConfig};

/// Initialize tracing with console and file output.
///
/// Log files are written to `~/.jobwatch/logs/` (or `logging.dir`) with daily rotation.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = logging.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("jobwatch")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard flushes the file writer on drop and must outlive the program.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

/// Run the server in foreground.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Jobwatch v{}", env!("CARGO_PKG_VERSION"));

    let warnings = ConfigValidator::validate(&config).into_result()?;
    for warning in &warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    let state = Arc::new(AppState::from_config(&config)?);
    let server = InterfaceServer::new(InterfaceConfig::from(&config.server), state);

    info!("API server: http://{}", server.addr());
    server.run().await?;

    info!("Jobwatch stopped");
    Ok(())
}

/// Validate the configuration and print the findings.
pub(crate) fn check_config(path: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config);

    println!("Config: {}", path.display());
    for error in &result.errors {
        println!("  error   {}: {}", error.path, error.message);
    }
    for warning in &result.warnings {
        println!("  warning {}: {}", warning.path, warning.message);
    }

    if result.is_valid() {
        println!(
            "OK ({} accounts, {} SSO tokens, {} jobs)",
            config.identities.len(),
            config.sso_tokens.len(),
            config.jobs.file_sensing.len() + config.jobs.filtering.len()
        );
    }

    result.into_result()?;
    Ok(())
}
