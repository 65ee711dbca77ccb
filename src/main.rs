//! diploma-teams binary entrypoint kept minimal. Command handling lives in `args`.

mod args;

use std::fmt;
use std::process::ExitCode;
use std::sync::{Arc, OnceLock};

use clap::Parser;
use diploma_teams::config;
use diploma_teams::sources::HttpBackend;

struct DiplomaTimer;

impl tracing_subscriber::fmt::time::FormatTime for DiplomaTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&diploma_teams::util::log_timestamp())
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing, writing to `<config_dir>/logs/diploma-teams.log`.
///
/// Inputs:
/// - `level`: Fallback filter when `RUST_LOG` is unset
///
/// Details:
/// - Falls back to a stderr logger when the log file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = config::logs_dir();
    log_path.push("diploma-teams.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(DiplomaTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger so commands still run
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(DiplomaTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    let mut settings = config::settings();
    args::apply_cli_overrides(&args, &mut settings);
    tracing::info!(api_url = %settings.api_url, role = ?settings.user_role, "diploma-teams starting");

    let backend = match HttpBackend::from_settings(&settings) {
        Ok(b) => Arc::new(b),
        Err(e) => {
            tracing::error!(error = %e, "backend setup failed");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(base = %backend.base_url(), "topics backend ready");
    let user = settings.current_user();
    match args::process_command(&args.command, &backend, &user, settings.criteria()).await {
        Ok(output) => {
            println!("{output}");
            tracing::info!("command finished");
            ExitCode::SUCCESS
        }
        Err(message) => {
            tracing::error!(error = %message, "command failed");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
