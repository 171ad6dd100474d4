//! PageLens - rendered page simplifier
//!
//! Main entry point for the PageLens CLI.

mod cli;
mod cmd_simplify;
mod cmd_validate;

use clap::Parser;
use tracing::{debug, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pagelens_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};

use crate::cli::{Cli, Commands};
use crate::cmd_simplify::handle_simplify;
use crate::cmd_validate::handle_validate;

/// Initialize tracing with stderr output and optional daily log files.
///
/// `RUST_LOG` overrides the configured level. stdout is left to command
/// output.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level)?,
    };

    let file_layer = match &logging.directory {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("pagelens")
                .filename_suffix("log")
                .max_log_files(30)
                .build(log_dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Flushes pending lines when dropped at exit.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(file_layer)
        .init();

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config: Config = ConfigLoader::load_or_default(cli.config.as_deref())?;
    init_tracing(&config.logging)?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Simplify(args) => {
            let result = ConfigValidator::validate(&config)?;
            for warning in &result.warnings {
                warn!(path = %warning.path, "{}", warning.message);
            }
            if !result.is_valid() {
                return Err("invalid configuration, run `pagelens validate` for details".into());
            }
            handle_simplify(args, &config)
        }
        Commands::Validate => handle_validate(&config),
    }
}
